// Email address splitting into local part, domain, and top-level domain.

/// The parsed components of an email address.
///
/// `address` and `domain` reconstruct the (lower-cased) input as
/// `address@domain`. When the input contained several `@` characters, all but
/// the last are folded back into `address`, so the round trip still holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailComponents {
    /// Local part -- everything before the final `@`.
    pub address: String,
    /// Everything after the final `@`.
    pub domain: String,
    /// The domain with its first dot-separated label removed. A single-label
    /// domain is its own top-level domain.
    pub top_level_domain: String,
}

/// Split a raw email string into its components.
///
/// The caller is expected to have lower-cased the input already; case folding
/// happens once, before splitting.
///
/// Returns `None` for malformed input: fewer than two `@`-separated parts, or
/// any empty part. This is the sole error channel -- no panics.
///
/// The top-level domain here is a structural heuristic (first label dropped,
/// the rest rejoined), not a public-suffix lookup: `mail.yahoo.co.uk` yields
/// `yahoo.co.uk`.
pub fn split_email(email: &str) -> Option<EmailComponents> {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() < 2 {
        return None;
    }
    if parts.iter().any(|part| part.is_empty()) {
        return None;
    }

    let (domain, local_parts) = parts.split_last()?;

    // Splitting a non-empty domain on '.' always yields at least one label.
    let labels: Vec<&str> = domain.split('.').collect();
    let top_level_domain = if labels.len() == 1 {
        labels[0].to_string()
    } else {
        labels[1..].join(".")
    };

    Some(EmailComponents {
        address: local_parts.join("@"),
        domain: (*domain).to_string(),
        top_level_domain,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_a_plain_address() {
        let components = split_email("test@example.com").unwrap();
        assert_eq!(components.address, "test");
        assert_eq!(components.domain, "example.com");
        assert_eq!(components.top_level_domain, "com");
    }

    #[test]
    fn drops_only_the_first_domain_label_for_the_tld() {
        let components = split_email("user@mail.yahoo.co.uk").unwrap();
        assert_eq!(components.domain, "mail.yahoo.co.uk");
        assert_eq!(components.top_level_domain, "yahoo.co.uk");
    }

    #[test]
    fn single_label_domain_is_its_own_tld() {
        let components = split_email("user@localhost").unwrap();
        assert_eq!(components.domain, "localhost");
        assert_eq!(components.top_level_domain, "localhost");
    }

    #[test]
    fn extra_at_signs_fold_into_the_address() {
        let components = split_email("\"quoted\"@still@example.com").unwrap();
        assert_eq!(components.address, "\"quoted\"@still");
        assert_eq!(components.domain, "example.com");
    }

    #[test]
    fn reconstruction_round_trips() {
        for input in ["test@example.com", "a@b@c.org", "x@y.z"] {
            let components = split_email(input).unwrap();
            assert_eq!(
                format!("{}@{}", components.address, components.domain),
                input
            );
        }
    }

    #[test]
    fn rejects_missing_at_sign() {
        assert_eq!(split_email(""), None);
        assert_eq!(split_email("test"), None);
        assert_eq!(split_email("example.com"), None);
    }

    #[test]
    fn rejects_empty_parts() {
        assert_eq!(split_email("test@"), None);
        assert_eq!(split_email("@example.com"), None);
        assert_eq!(split_email("test@@example.com"), None);
        assert_eq!(split_email("@"), None);
    }
}
