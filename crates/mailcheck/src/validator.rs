// Regex-based email format validity check.

use regex::Regex;

/// Format pattern: local part, `@`, domain, a literal dot, and a 2-20 letter
/// top-level domain. Anchored on both ends -- validity is a full-string
/// match, not a substring search.
///
/// This is a deliberately simple pattern for form validation, not an
/// RFC 5321 grammar.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,20}$";

/// Validity checker for the simple email format pattern.
///
/// Independent of the suggestion engine: validity and correction are
/// orthogonal outcomes, combined only in [`CheckResult`].
///
/// [`CheckResult`]: crate::suggestion::CheckResult
#[derive(Debug)]
pub struct EmailValidator {
    pattern: Regex,
}

impl EmailValidator {
    /// Compile the validator pattern.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(EmailValidator {
            pattern: Regex::new(EMAIL_PATTERN)?,
        })
    }

    /// Check whether the given string matches the email format pattern.
    pub fn is_valid(&self, email: &str) -> bool {
        self.pattern.is_match(email)
    }
}
