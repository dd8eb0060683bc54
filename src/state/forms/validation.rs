//! Field validation for the contact form
//!
//! `validate` is a pure function from a field and its raw value to an
//! optional error message. Values are trimmed for validation only; callers
//! keep whatever the user actually typed.

use super::field::ContactField;

/// Minimum characters for the name field
const NAME_MIN_CHARS: usize = 2;
/// Minimum characters for the message field
const MESSAGE_MIN_CHARS: usize = 10;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters.";
pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Enter a valid email address.";
pub const SUBJECT_REQUIRED: &str = "Please pick a subject.";
pub const MESSAGE_REQUIRED: &str = "Message is required.";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters.";

/// Validate a single field value. `None` means the value is acceptable.
pub fn validate(field: ContactField, raw: &str) -> Option<&'static str> {
    let trimmed = raw.trim();

    match field {
        ContactField::Name => {
            if trimmed.is_empty() {
                Some(NAME_REQUIRED)
            } else if trimmed.chars().count() < NAME_MIN_CHARS {
                Some(NAME_TOO_SHORT)
            } else {
                None
            }
        }
        ContactField::Email => {
            if trimmed.is_empty() {
                Some(EMAIL_REQUIRED)
            } else if !is_valid_email(trimmed) {
                Some(EMAIL_INVALID)
            } else {
                None
            }
        }
        ContactField::Subject => {
            if trimmed.is_empty() {
                Some(SUBJECT_REQUIRED)
            } else {
                None
            }
        }
        ContactField::Message => {
            if trimmed.is_empty() {
                Some(MESSAGE_REQUIRED)
            } else if trimmed.chars().count() < MESSAGE_MIN_CHARS {
                Some(MESSAGE_TOO_SHORT)
            } else {
                None
            }
        }
    }
}

/// `local@domain.tld` shape: no whitespace, exactly one `@`, non-empty local
/// part, and a dot inside the domain with something on both sides.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
