// WASM bindings for mailcheck email typo detection.
//
// Provides a `WasmMailcheck` class exported via wasm-bindgen that wraps the
// `Mailcheck` handle. Return values are serialized to JavaScript objects
// with serde-wasm-bindgen; "no suggestion" is `null`.
//
// Usage from JavaScript:
//
//   const checker = new WasmMailcheck();
//   checker.suggest("user@gnail.con");
//     // => { address: "user", domain: "gmail.com", full: "user@gmail.com" }
//   checker.suggest("user@gmail.com");  // => null
//   checker.check("user@gnail.con");
//     // => { valid: true, suggestion: { ... } }
//   checker.setThreshold(2);

use serde::Serialize;
use wasm_bindgen::prelude::*;

use mailcheck::{Mailcheck, MailcheckError, MailcheckOptions, Suggestion};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a suggestion.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSuggestion {
    address: String,
    domain: String,
    full: String,
}

impl From<Suggestion> for JsSuggestion {
    fn from(suggestion: Suggestion) -> Self {
        JsSuggestion {
            address: suggestion.address,
            domain: suggestion.domain,
            full: suggestion.full,
        }
    }
}

/// Serializable representation of a check result.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCheckResult {
    valid: bool,
    suggestion: Option<JsSuggestion>,
}

fn mailcheck_error_to_js(e: MailcheckError) -> JsError {
    JsError::new(&e.to_string())
}

fn serialize_error_to_js(e: serde_wasm_bindgen::Error) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmMailcheck
// ============================================================================

/// Email typo checker for WebAssembly.
///
/// Detects likely misspellings of well-known mail domains and proposes a
/// corrected address, with a simple format validity check alongside.
#[wasm_bindgen]
pub struct WasmMailcheck {
    handle: Mailcheck,
}

#[wasm_bindgen]
impl WasmMailcheck {
    /// Create a checker.
    ///
    /// - `domains`: replacement domain list (optional; defaults used if absent)
    /// - `top_level_domains`: replacement TLD list (optional)
    ///
    /// List order is significant: at equal distance the earlier entry wins.
    #[wasm_bindgen(constructor)]
    pub fn new(
        domains: Option<Vec<String>>,
        top_level_domains: Option<Vec<String>>,
    ) -> Result<WasmMailcheck, JsError> {
        let mut options = MailcheckOptions::default();
        if let Some(domains) = domains {
            options.domains = domains;
        }
        if let Some(top_level_domains) = top_level_domains {
            options.top_level_domains = top_level_domains;
        }
        Mailcheck::with_options(options)
            .map(|handle| WasmMailcheck { handle })
            .map_err(mailcheck_error_to_js)
    }

    /// Create a checker with the default lists extended by caller additions.
    ///
    /// The extras are appended after the defaults, so the defaults keep their
    /// tie-breaking priority.
    #[wasm_bindgen(js_name = "withExtra")]
    pub fn with_extra(
        extra_domains: Vec<String>,
        extra_top_level_domains: Vec<String>,
    ) -> Result<WasmMailcheck, JsError> {
        Mailcheck::with_extra(&extra_domains, &extra_top_level_domains)
            .map(|handle| WasmMailcheck { handle })
            .map_err(mailcheck_error_to_js)
    }

    /// Propose a corrected address for a likely typo.
    ///
    /// Returns `{ address, domain, full }` or `null` when nothing is close
    /// enough (or the input is unparseable).
    pub fn suggest(&self, email: &str) -> Result<JsValue, JsError> {
        match self.handle.suggest(email) {
            Some(suggestion) => serde_wasm_bindgen::to_value(&JsSuggestion::from(suggestion))
                .map_err(serialize_error_to_js),
            None => Ok(JsValue::NULL),
        }
    }

    /// Run the format validity check and the typo check together.
    ///
    /// Returns `{ valid, suggestion }` where `suggestion` may be absent.
    pub fn check(&self, email: &str) -> Result<JsValue, JsError> {
        let result = self.handle.check(email);
        let js_result = JsCheckResult {
            valid: result.valid,
            suggestion: result.suggestion.map(JsSuggestion::from),
        };
        serde_wasm_bindgen::to_value(&js_result).map_err(serialize_error_to_js)
    }

    /// The current distance threshold.
    #[wasm_bindgen(js_name = "getThreshold")]
    pub fn get_threshold(&self) -> usize {
        self.handle.threshold()
    }

    /// Set the maximum distance at which a candidate is still suggested.
    #[wasm_bindgen(js_name = "setThreshold")]
    pub fn set_threshold(&mut self, threshold: usize) {
        self.handle.set_threshold(threshold);
    }
}
