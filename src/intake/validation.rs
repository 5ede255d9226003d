//! Field checks shared by both submission kinds.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FieldError;

const MAX_EMAIL_LEN: usize = 254;
const MAX_LABEL_LEN: usize = 63;

// Local part and domain labels may carry any letters, marks and digits so
// internationalized addresses pass. The TLD is alphabetic or punycode.
// Label length is checked outside the pattern to keep it small.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[\p{L}\p{M}\p{N}.!#$%&'*+/=?^_`{|}~-]+@",
        r"(?:[\p{L}\p{N}](?:[\p{L}\p{M}\p{N}-]*[\p{L}\p{M}\p{N}])?\.)+",
        r"(?:\p{L}[\p{L}\p{M}]+|xn--[A-Za-z0-9-]*[A-Za-z0-9])$",
    ))
    .expect("email pattern is a valid regex")
});

/// Whether `email` has standard address syntax.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LEN {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if domain.split('.').any(|label| label.chars().count() > MAX_LABEL_LEN) {
        return false;
    }

    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }

    EMAIL_PATTERN.is_match(email)
}

/// Lowercase the domain part; the local part is kept as given.
pub fn normalize_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

pub(crate) fn require_text(
    field: &'static str,
    value: Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            errors.push(FieldError::missing(field));
            None
        }
    }
}

pub(crate) fn require_email(
    field: &'static str,
    value: Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let email = require_text(field, value, errors)?;
    let email = email.trim().to_string();

    if is_valid_email(&email) {
        Some(normalize_email(&email))
    } else {
        errors.push(FieldError::invalid(
            field,
            "value is not a valid email address",
        ));
        None
    }
}

pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for email in [
            "test@example.com",
            "first.last+tag@sub.example.co.uk",
            "o'brien@example.ie",
            "x_y-z@example-domain.io",
            "josé@example.com",
            "user@münchen.de",
            "user@example.xn--p1ai",
            "пользователь@пример.рф",
        ] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            "user name@example.com",
            "user@@example.com",
            ".user@example.com",
            "user..name@example.com",
            "user@-example.com",
            "user@example-.com",
            "josé@example.1a",
        ] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn rejects_overlong_address() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert!(!is_valid_email(&email));
    }

    #[test]
    fn rejects_overlong_domain_label() {
        let email = format!("user@{}.com", "a".repeat(64));
        assert!(!is_valid_email(&email));

        let email = format!("user@{}.com", "a".repeat(63));
        assert!(is_valid_email(&email));
    }

    #[test]
    fn email_is_trimmed_before_checking() {
        let mut errors = Vec::new();
        let email = require_email("email", Some("  a@example.com ".to_string()), &mut errors);

        assert_eq!(email.as_deref(), Some("a@example.com"));
        assert!(errors.is_empty());
    }

    #[test]
    fn domain_is_lowercased_local_part_kept() {
        assert_eq!(normalize_email("Ann.Lee@EXAMPLE.COM"), "Ann.Lee@example.com");
        assert_eq!(normalize_email("user@MÜNCHEN.DE"), "user@münchen.de");

        let mut errors = Vec::new();
        let email = require_email("email", Some("a@EXAMPLE.COM".to_string()), &mut errors);
        assert_eq!(email.as_deref(), Some("a@example.com"));
    }

    #[test]
    fn missing_email_reports_once() {
        let mut errors = Vec::new();
        assert_eq!(require_email("email", None, &mut errors), None);
        assert_eq!(errors, vec![FieldError::missing("email")]);
    }
}
