//! Identity validation and masking utilities
//!
//! An identity is the string naming an admin: an email address or an E.164
//! phone number. Validation here is shape-only; whether an identity is
//! actually an admin is an allow-list question, not a format one.

use once_cell::sync::Lazy;
use regex::Regex;

// Deliberately loose; the mailbox decides what it accepts
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

// E.164 format
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").unwrap());

/// Check if a string looks like an email address
pub fn is_valid_email(value: &str) -> bool {
    value.len() <= 254 && EMAIL_REGEX.is_match(value)
}

/// Check if a string is an E.164 phone number
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_REGEX.is_match(value)
}

/// Check if a string is a usable identity (email or E.164 phone)
pub fn is_valid_identity(value: &str) -> bool {
    is_valid_email(value) || is_valid_phone(value)
}

/// Mask an identity for logging (e.g., j***e@example.com, +61****5678)
pub fn mask_identity(identity: &str) -> String {
    if let Some((local, domain)) = identity.split_once('@') {
        let mut chars = local.chars();
        match (chars.next(), local.chars().last()) {
            (Some(first), Some(last)) if local.chars().count() > 2 => {
                format!("{}***{}@{}", first, last, domain)
            }
            _ => format!("***@{}", domain),
        }
    } else if identity.len() >= 7 {
        format!(
            "{}****{}",
            &identity[0..3],
            &identity[identity.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
