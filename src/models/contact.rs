// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Validators for the contact form fields.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Local part and domain free of whitespace and `@`, with a dot in the domain.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Minimum length of a trimmed name, in UTF-16 code units.
pub const MIN_NAME_UNITS: usize = 2;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Name is required.")]
    Required,
    #[error("Name is too short.")]
    TooShort,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Email is required.")]
    Required,
    #[error("Invalid email format.")]
    InvalidFormat,
}

/// Strip the whitespace a browser's `String.prototype.trim` strips: Unicode
/// spaces and line terminators plus the byte order mark, but not NEL.
fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}'))
}

/// Validate a name: required, at least [`MIN_NAME_UNITS`] after trimming.
/// Length is measured the way browsers measure it, so an astral character
/// such as an emoji counts twice.
pub fn validate_name(value: &str) -> Option<NameError> {
    let v = trim_input(value);
    if v.is_empty() {
        return Some(NameError::Required);
    }
    if v.encode_utf16().count() < MIN_NAME_UNITS {
        return Some(NameError::TooShort);
    }
    None
}

/// Validate an email address against a deliberately simple shape check.
pub fn validate_email(value: &str) -> Option<EmailError> {
    let v = trim_input(value);
    if v.is_empty() {
        return Some(EmailError::Required);
    }
    if !EMAIL_PATTERN.is_match(v) {
        return Some(EmailError::InvalidFormat);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rules() {
        assert_eq!(validate_name(""), Some(NameError::Required));
        assert_eq!(validate_name("   "), Some(NameError::Required));
        assert_eq!(validate_name("A"), Some(NameError::TooShort));
        assert_eq!(validate_name("  A  "), Some(NameError::TooShort));
        assert_eq!(validate_name("Jo"), None);
        assert_eq!(validate_name("Ana"), None);
    }

    // Length counts UTF-16 units, not bytes.
    #[test]
    fn single_multibyte_character_is_too_short() {
        assert_eq!(validate_name("É"), Some(NameError::TooShort));
        assert_eq!(validate_name("Éa"), None);
    }

    #[test]
    fn astral_character_counts_as_two_units() {
        assert_eq!(validate_name("😀"), None);
        assert_eq!(validate_name(" 😀 "), None);
    }

    #[test]
    fn byte_order_mark_is_trimmed_but_nel_is_kept() {
        assert_eq!(validate_name("\u{FEFF}A"), Some(NameError::TooShort));
        assert_eq!(validate_name("\u{FEFF}\u{FEFF}"), Some(NameError::Required));
        assert_eq!(validate_name("\u{85}A"), None);
        assert_eq!(
            validate_email("\u{FEFF}ana@example.com"),
            None,
            "leading BOM is not part of the address"
        );
    }

    #[test]
    fn email_rules() {
        assert_eq!(validate_email(""), Some(EmailError::Required));
        assert_eq!(validate_email("a@b"), Some(EmailError::InvalidFormat));
        assert_eq!(validate_email("bad"), Some(EmailError::InvalidFormat));
        assert_eq!(validate_email("a@b.com"), None);
        assert_eq!(validate_email("  ana@example.com "), None);
    }

    #[test]
    fn email_rejects_whitespace_and_extra_at() {
        assert_eq!(validate_email("a b@c.com"), Some(EmailError::InvalidFormat));
        assert_eq!(validate_email("a@b@c.com"), Some(EmailError::InvalidFormat));
        assert_eq!(validate_email("@b.com"), Some(EmailError::InvalidFormat));
        assert_eq!(validate_email("a@b."), Some(EmailError::InvalidFormat));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(NameError::Required.to_string(), "Name is required.");
        assert_eq!(NameError::TooShort.to_string(), "Name is too short.");
        assert_eq!(EmailError::Required.to_string(), "Email is required.");
        assert_eq!(EmailError::InvalidFormat.to_string(), "Invalid email format.");
    }
}
