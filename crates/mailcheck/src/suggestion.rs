// Suggestion value types and nearest-candidate search.

use crate::distance::sift3_distance_chars;

/// A proposed correction for a mistyped email address.
///
/// Emitted complete or not at all: `full` is always `address@domain` with the
/// corrected domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The local part, unchanged from the (lower-cased) input.
    pub address: String,
    /// The corrected domain.
    pub domain: String,
    /// The full corrected address, `address@domain`.
    pub full: String,
}

impl Suggestion {
    /// Build a suggestion from a local part and a corrected domain.
    pub fn new(address: impl Into<String>, domain: impl Into<String>) -> Self {
        let address = address.into();
        let domain = domain.into();
        let full = format!("{address}@{domain}");
        Suggestion {
            address,
            domain,
            full,
        }
    }
}

/// The outcome of a combined format-validity and typo check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Whether the input matched the simple email format pattern.
    pub valid: bool,
    /// A correction proposal, if a reference entry was close enough.
    pub suggestion: Option<Suggestion>,
}

/// Find the candidate closest to `target` under the sift3 metric.
///
/// Candidates are scanned in order. An exact match short-circuits immediately
/// -- an exact match is never corrected away. Otherwise the strict minimum
/// distance is tracked, so the first candidate seen wins ties. The best
/// candidate qualifies only if its distance is at most `threshold`.
pub fn closest_match<'a>(
    target: &str,
    candidates: &'a [String],
    threshold: usize,
) -> Option<&'a str> {
    let target_chars: Vec<char> = target.chars().collect();
    let mut best: Option<(usize, &str)> = None;

    for candidate in candidates {
        if candidate.as_str() == target {
            return Some(candidate.as_str());
        }

        let candidate_chars: Vec<char> = candidate.chars().collect();
        let distance = sift3_distance_chars(&target_chars, &candidate_chars);
        match best {
            Some((min, _)) if distance >= min => {}
            _ => best = Some((distance, candidate.as_str())),
        }
    }

    match best {
        Some((min, candidate)) if min <= threshold => Some(candidate),
        _ => None,
    }
}
