// Mailcheck: top-level handle for typo checking.
//
// Owns the reference lists, the distance threshold, and the compiled format
// validator, and applies the two-pass correction policy: a domain-level pass
// over the full domain first, then (only when that pass found no candidate at
// all) a top-level-domain pass.

use crate::email::split_email;
use crate::suggestion::{CheckResult, Suggestion, closest_match};
use crate::validator::EmailValidator;

// =========================================================================
// Default reference lists
// =========================================================================

/// Well-known mail domains, in tie-breaking order: at equal distance the
/// earlier entry wins.
const DEFAULT_DOMAINS: &[&str] = &[
    "yahoo.com",
    "google.com",
    "hotmail.com",
    "gmail.com",
    "me.com",
    "aol.com",
    "mac.com",
    "live.com",
    "comcast.net",
    "googlemail.com",
    "msn.com",
    "hotmail.co.uk",
    "yahoo.co.uk",
    "facebook.com",
    "verizon.net",
    "sbcglobal.net",
    "att.net",
    "gmx.com",
    "mail.com",
];

/// Common top-level domains, in tie-breaking order.
const DEFAULT_TOP_LEVEL_DOMAINS: &[&str] =
    &["co.uk", "com", "net", "org", "info", "edu", "gov", "mil"];

/// Maximum sift3 distance at which a candidate still qualifies as a
/// suggestion. Calibrated against the sift3 metric, not Levenshtein.
const DEFAULT_THRESHOLD: usize = 3;

// =========================================================================
// Errors and options
// =========================================================================

/// Error type for handle construction failures.
#[derive(Debug, thiserror::Error)]
pub enum MailcheckError {
    /// The email format pattern failed to compile.
    #[error("failed to compile email format pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Configuration for a [`Mailcheck`] handle.
///
/// The defaults reproduce the stock reference lists and threshold; list order
/// is significant (first-seen wins at equal distance).
#[derive(Debug, Clone)]
pub struct MailcheckOptions {
    /// Reference domains matched against the full domain of the input.
    pub domains: Vec<String>,
    /// Reference top-level domains matched against the input's TLD.
    pub top_level_domains: Vec<String>,
    /// Maximum distance at which a candidate is still suggested.
    pub threshold: usize,
}

impl Default for MailcheckOptions {
    fn default() -> Self {
        MailcheckOptions {
            domains: DEFAULT_DOMAINS.iter().map(|s| s.to_string()).collect(),
            top_level_domains: DEFAULT_TOP_LEVEL_DOMAINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

// =========================================================================
// Mailcheck
// =========================================================================

/// Typo checker for email addresses.
///
/// All state is per-instance and immutable during a call, so a handle shares
/// freely across threads. There is no global configuration; the threshold
/// lives on the handle and is adjusted with [`set_threshold`].
///
/// [`set_threshold`]: Mailcheck::set_threshold
#[derive(Debug)]
pub struct Mailcheck {
    domains: Vec<String>,
    top_level_domains: Vec<String>,
    threshold: usize,
    validator: EmailValidator,
}

impl Mailcheck {
    /// Create a handle with the default reference lists and threshold.
    pub fn new() -> Result<Self, MailcheckError> {
        Self::with_options(MailcheckOptions::default())
    }

    /// Create a handle with explicit configuration.
    pub fn with_options(options: MailcheckOptions) -> Result<Self, MailcheckError> {
        Ok(Mailcheck {
            domains: options.domains,
            top_level_domains: options.top_level_domains,
            threshold: options.threshold,
            validator: EmailValidator::new()?,
        })
    }

    /// Create a handle with the default lists extended by caller additions.
    ///
    /// The extras are appended after the defaults, so the defaults keep their
    /// tie-breaking priority.
    pub fn with_extra(
        extra_domains: &[String],
        extra_top_level_domains: &[String],
    ) -> Result<Self, MailcheckError> {
        let mut options = MailcheckOptions::default();
        options.domains.extend(extra_domains.iter().cloned());
        options
            .top_level_domains
            .extend(extra_top_level_domains.iter().cloned());
        Self::with_options(options)
    }

    // ---------------------------------------------------------------------
    // Core operations
    // ---------------------------------------------------------------------

    /// Propose a corrected address for a likely typo, or `None`.
    ///
    /// `None` covers both "nothing close enough" and "unparseable input";
    /// callers that need to distinguish malformed input consult [`check`].
    ///
    /// [`check`]: Mailcheck::check
    pub fn suggest(&self, email: &str) -> Option<Suggestion> {
        let components = split_email(&email.to_lowercase())?;

        if let Some(closest) = closest_match(&components.domain, &self.domains, self.threshold) {
            if closest != components.domain {
                return Some(Suggestion::new(components.address, closest));
            }
            // A domain hit equal to the input ends the search; the
            // top-level-domain pass runs only when no domain qualified.
        } else if let Some(closest_tld) = closest_match(
            &components.top_level_domain,
            &self.top_level_domains,
            self.threshold,
        ) {
            if !components.domain.is_empty() && closest_tld != components.top_level_domain {
                let mut labels: Vec<&str> = components.domain.split('.').collect();
                labels.pop();
                labels.push(closest_tld);
                let domain = labels.join(".");
                return Some(Suggestion::new(components.address, domain));
            }
        }

        None
    }

    /// Run the format validity check and the typo check together.
    ///
    /// Validity is evaluated on the input as given (the pattern accepts both
    /// cases); only the suggestion machinery lower-cases.
    pub fn check(&self, email: &str) -> CheckResult {
        CheckResult {
            valid: self.validator.is_valid(email),
            suggestion: self.suggest(email),
        }
    }

    // ---------------------------------------------------------------------
    // Accessors and option setters
    // ---------------------------------------------------------------------

    /// The current distance threshold.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Set the distance threshold for subsequent calls on this handle.
    pub fn set_threshold(&mut self, threshold: usize) {
        self.threshold = threshold;
    }

    /// The reference domain list.
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// The reference top-level-domain list.
    pub fn top_level_domains(&self) -> &[String] {
        &self.top_level_domains
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|s| s.to_string()).collect()
    }

    fn checker_with(domains: &[&str], tlds: &[&str], threshold: usize) -> Mailcheck {
        Mailcheck::with_options(MailcheckOptions {
            domains: list(domains),
            top_level_domains: list(tlds),
            threshold,
        })
        .expect("handle builds")
    }

    #[test]
    fn suggests_a_close_domain() {
        let checker = Mailcheck::new().expect("handle builds");
        let suggestion = checker.suggest("test@gnail.con").expect("suggestion");
        assert_eq!(suggestion.address, "test");
        assert_eq!(suggestion.domain, "gmail.com");
        assert_eq!(suggestion.full, "test@gmail.com");
    }

    #[test]
    fn exact_domain_match_yields_nothing() {
        let checker = Mailcheck::new().expect("handle builds");
        assert_eq!(checker.suggest("randomuser@gmail.com"), None);
    }

    #[test]
    fn unparseable_input_yields_nothing() {
        let checker = Mailcheck::new().expect("handle builds");
        assert_eq!(checker.suggest(""), None);
        assert_eq!(checker.suggest("test"), None);
        assert_eq!(checker.suggest("test@"), None);
        assert_eq!(checker.suggest("@example.com"), None);
    }

    #[test]
    fn exact_domain_hit_suppresses_the_tld_pass() {
        // "example.con" is in the domain list, so the domain pass hits
        // exactly and ends the search -- even though the TLD pass would have
        // corrected "con" to "com". The else-if structure is load-bearing.
        let checker = checker_with(&["example.con"], &["com"], 3);
        assert_eq!(checker.suggest("test@example.con"), None);
    }

    #[test]
    fn tld_pass_runs_when_no_domain_qualifies() {
        // "foo.con" is far from "example.com" (distance 7), so the domain
        // pass fails and the TLD pass corrects "con" to "com".
        let checker = checker_with(&["example.com"], &["com"], 3);
        let suggestion = checker.suggest("test@foo.con").expect("suggestion");
        assert_eq!(suggestion.domain, "foo.com");
        assert_eq!(suggestion.full, "test@foo.com");
    }

    #[test]
    fn tld_correction_preserves_the_domain_prefix() {
        let checker = Mailcheck::new().expect("handle builds");
        let suggestion = checker
            .suggest("test@randomsmallcompany.cmo")
            .expect("suggestion");
        assert_eq!(suggestion.domain, "randomsmallcompany.com");
    }

    #[test]
    fn input_is_case_folded_before_matching() {
        let checker = Mailcheck::new().expect("handle builds");
        let suggestion = checker.suggest("TEST@GNAIL.con").expect("suggestion");
        assert_eq!(suggestion.address, "test");
        assert_eq!(suggestion.domain, "gmail.com");
    }

    #[test]
    fn threshold_gates_suggestions() {
        let mut checker = Mailcheck::new().expect("handle builds");
        checker.set_threshold(0);
        assert_eq!(checker.suggest("test@gmail.con"), None);
        checker.set_threshold(3);
        assert!(checker.suggest("test@gmail.con").is_some());
    }

    #[test]
    fn with_extra_appends_after_the_defaults() {
        let checker = Mailcheck::with_extra(&list(&["yahoo.com.tw"]), &list(&["com.tw"]))
            .expect("handle builds");
        assert_eq!(checker.domains().last().map(String::as_str), Some("yahoo.com.tw"));
        assert_eq!(
            checker.domains().len(),
            DEFAULT_DOMAINS.len() + 1
        );
        // The extra entry is an exact match, so no suggestion fires.
        assert_eq!(checker.suggest("test@yahoo.com.tw"), None);
    }

    #[test]
    fn check_combines_validity_and_suggestion() {
        let checker = Mailcheck::new().expect("handle builds");

        let result = checker.check("test@gmail.con");
        assert!(result.valid);
        assert_eq!(result.suggestion.expect("suggestion").domain, "gmail.com");

        let result = checker.check("not-an-email");
        assert!(!result.valid);
        assert_eq!(result.suggestion, None);

        let result = checker.check("test@gmail.com");
        assert!(result.valid);
        assert_eq!(result.suggestion, None);
    }

    #[test]
    fn empty_reference_lists_never_suggest() {
        let checker = checker_with(&[], &[], 3);
        assert_eq!(checker.suggest("test@gmail.con"), None);
    }
}
