use std::sync::LazyLock;

use regex::Regex;

/// Longest address accepted (RFC 5321 forward-path limit).
const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .expect("email regex is valid")
});

/// Returns true if `email` is a well-formed address.
///
/// The local part uses RFC 5322 atom characters, the domain needs at least
/// one dot, and whitespace is never allowed.
///
/// # Examples
///
/// ```
/// use consultants_core::consultant::is_email_valid;
///
/// assert!(is_email_valid("ann@example.com"));
/// assert!(!is_email_valid("ann@localhost"));
/// assert!(!is_email_valid("ann.example.com"));
/// ```
pub fn is_email_valid(email: &str) -> bool {
    if email.len() < 3 || email.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        for email in [
            "a@b.com",
            "john.doe@example.com",
            "first+tag@sub.domain.co.uk",
            "x_y-z@my-company.io",
        ] {
            assert!(is_email_valid(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_rejects_empty_string() {
        assert!(!is_email_valid(""));
    }

    #[test]
    fn test_rejects_missing_at() {
        assert!(!is_email_valid("john.example.com"));
    }

    #[test]
    fn test_rejects_domain_without_dot() {
        assert!(!is_email_valid("john@localhost"));
    }

    #[test]
    fn test_rejects_spaces() {
        assert!(!is_email_valid("john doe@example.com"));
        assert!(!is_email_valid("john@exa mple.com"));
        assert!(!is_email_valid(" john@example.com"));
    }

    #[test]
    fn test_rejects_malformed_domains() {
        assert!(!is_email_valid("john@.com"));
        assert!(!is_email_valid("john@example."));
        assert!(!is_email_valid("john@-example.com"));
        assert!(!is_email_valid("john@@example.com"));
    }

    #[test]
    fn test_rejects_overlong_address() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert!(!is_email_valid(&email));
    }
}
