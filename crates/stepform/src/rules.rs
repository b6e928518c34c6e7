//! Pure field rules.
//!
//! Every rule takes the live value and returns a fresh `Validation`; nothing is
//! cached and nothing touches the view. The messages are part of the contract
//! with existing pages and must stay byte-for-byte identical.

use lazy_static::lazy_static;
use regex::Regex;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be 3 characters or longer";
pub const EMAIL_INVALID: &str = "Enter a valid email address i.e., mail@me.com";
pub const PHONE_NOT_NUMERIC: &str = "Enter numbers only";
pub const PHONE_TOO_SHORT: &str = "Phone number must be 10 digits";
pub const SERVICES_REQUIRED: &str = "Select at least one option";
pub const BUDGET_REQUIRED: &str = "Select a budget";

pub const NAME_MIN_LEN: usize = 3;
pub const PHONE_MIN_LEN: usize = 10;

lazy_static! {
    // local part: dot-separated atoms or a quoted string; domain: one or more
    // `label.` followed by a TLD of at least two characters
    static ref EMAIL_PATTERN: Regex = Regex::new(
        r#"(?i)^(([^<>()\[\]\.,;:\s@"]+(\.[^<>()\[\]\.,;:\s@"]+)*)|(".+"))@(([^<>()\[\]\.,;:\s@"]+\.)+[^<>()\[\]\.,;:\s@"]{2,})$"#
    )
    .expect("email pattern is a valid regex");
    static ref DIGITS_ONLY: Regex = Regex::new(r"^[0-9]*$").expect("digit pattern is a valid regex");
}

/// Outcome of a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub is_valid: bool,
    pub message: Option<&'static str>,
}

impl Validation {
    pub const fn ok() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    pub const fn fail(message: &'static str) -> Self {
        Self {
            is_valid: false,
            message: Some(message),
        }
    }
}

/// Strip surrounding whitespace, byte-order marks included.
pub fn trim_name(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Length in UTF-16 code units, the unit browsers count `maxlength` and
/// `String.length` in. Astral characters such as emoji count twice.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn validate_name(value: &str) -> Validation {
    let trimmed = trim_name(value);
    if trimmed.is_empty() {
        Validation::fail(NAME_REQUIRED)
    } else if utf16_len(trimmed) < NAME_MIN_LEN {
        Validation::fail(NAME_TOO_SHORT)
    } else {
        Validation::ok()
    }
}

pub fn validate_email(value: &str) -> Validation {
    if EMAIL_PATTERN.is_match(value) {
        Validation::ok()
    } else {
        Validation::fail(EMAIL_INVALID)
    }
}

/// Digits first, length second: "12345abcde" reports the digit rule even
/// though it is also ten characters long.
pub fn validate_phone(value: &str) -> Validation {
    if !DIGITS_ONLY.is_match(value) {
        Validation::fail(PHONE_NOT_NUMERIC)
    } else if value.len() < PHONE_MIN_LEN {
        Validation::fail(PHONE_TOO_SHORT)
    } else {
        Validation::ok()
    }
}

pub fn validate_services(checked: &[usize]) -> Validation {
    if checked.is_empty() {
        Validation::fail(SERVICES_REQUIRED)
    } else {
        Validation::ok()
    }
}

pub fn validate_budget(checked: &[usize]) -> Validation {
    if checked.is_empty() {
        Validation::fail(BUDGET_REQUIRED)
    } else {
        Validation::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules() {
        assert_eq!(validate_name(""), Validation::fail(NAME_REQUIRED));
        assert_eq!(validate_name("   \t"), Validation::fail(NAME_REQUIRED));
        assert_eq!(validate_name("A"), Validation::fail(NAME_TOO_SHORT));
        assert_eq!(validate_name("  Al  "), Validation::fail(NAME_TOO_SHORT));
        assert_eq!(validate_name("Ada"), Validation::ok());
        assert_eq!(validate_name(" Ada Lovelace "), Validation::ok());
    }

    #[test]
    fn name_length_counts_utf16_units() {
        assert_eq!(validate_name("Zoë"), Validation::ok());
        assert_eq!(validate_name("😀😀"), Validation::ok());
        assert_eq!(validate_name("😀"), Validation::fail(NAME_TOO_SHORT));
        assert_eq!(validate_name("\u{feff} Al \u{feff}"), Validation::fail(NAME_TOO_SHORT));
        assert_eq!(validate_name("\u{feff}"), Validation::fail(NAME_REQUIRED));
        assert_eq!(trim_name("\u{feff} Ada\n"), "Ada");
        assert_eq!(validate_name("Zö"), Validation::fail(NAME_TOO_SHORT));
    }

    #[test]
    fn email_accepts_common_addresses() {
        for ok in [
            "mail@me.com",
            "first.last@sub.example.org",
            "MAIL@ME.COM",
            "\"odd local\"@example.com",
            "x+tag@example.co",
        ] {
            assert!(validate_email(ok).is_valid, "{ok} should be accepted");
        }
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in [
            "",
            "mail@me",
            "mail.me.com",
            "mail@me.c",
            "mail@@me.com",
            "ma il@me.com",
            ".mail@me.com",
            "mail@me..com",
        ] {
            assert_eq!(
                validate_email(bad),
                Validation::fail(EMAIL_INVALID),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn phone_rules() {
        assert_eq!(validate_phone("12345"), Validation::fail(PHONE_TOO_SHORT));
        assert_eq!(
            validate_phone("12345abcde"),
            Validation::fail(PHONE_NOT_NUMERIC)
        );
        assert_eq!(validate_phone("1234567890"), Validation::ok());
        assert_eq!(validate_phone("123456789012"), Validation::ok());
    }

    #[test]
    fn empty_phone_passes_digit_check_but_fails_length() {
        assert_eq!(validate_phone(""), Validation::fail(PHONE_TOO_SHORT));
    }

    #[test]
    fn group_rules() {
        assert_eq!(validate_services(&[]), Validation::fail(SERVICES_REQUIRED));
        assert_eq!(validate_services(&[0, 2]), Validation::ok());
        assert_eq!(validate_budget(&[]), Validation::fail(BUDGET_REQUIRED));
        assert_eq!(validate_budget(&[1]), Validation::ok());
    }
}
