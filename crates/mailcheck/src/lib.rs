//! Email typo detection and correction suggestions.
//!
//! Catches likely misspellings of well-known mail domains before form
//! submission ("gnail.con" becomes a suggestion for "gmail.com") and wraps a
//! simple format validity check around the result.
//!
//! # Architecture
//!
//! - [`email`] -- Splitting a raw address into local part, domain, and
//!   top-level domain
//! - [`distance`] -- Bounded approximate string distance (sift3 family)
//! - [`suggestion`] -- Suggestion value types and nearest-candidate search
//! - [`validator`] -- Regex-based format validity check
//! - [`handle`] -- The [`Mailcheck`] handle tying configuration, search
//!   policy, and validation together
//!
//! # Example
//!
//! ```
//! use mailcheck::Mailcheck;
//!
//! let checker = Mailcheck::new().unwrap();
//! let suggestion = checker.suggest("someone@gnail.con").unwrap();
//! assert_eq!(suggestion.domain, "gmail.com");
//! assert_eq!(suggestion.full, "someone@gmail.com");
//! ```

pub mod distance;
pub mod email;
pub mod handle;
pub mod suggestion;
pub mod validator;

// Re-export key types for convenient access.
pub use distance::sift3_distance;
pub use email::{EmailComponents, split_email};
pub use handle::{Mailcheck, MailcheckError, MailcheckOptions};
pub use suggestion::{CheckResult, Suggestion, closest_match};
pub use validator::EmailValidator;
