use std::fmt;
use serde::Serialize;

use crate::Contact;

pub const MIN_NAME_LEN: usize = 1;
pub const MAX_NAME_LEN: usize = 100;
pub const MIN_PHONE_LEN: usize = 1;
pub const MAX_PHONE_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    message: String,
}

impl ValidationResult {
    fn new(valid: bool, message: String) -> Self {
        Self { valid, message }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}",
            if self.valid { "PASS" } else { "FAIL" },
            self.message
        )
    }
}

/// Checks a contact's fields against the length bounds. Only the first
/// failing check is reported.
pub fn validate(contact: Option<&Contact>) -> ValidationResult {
    let Some(contact) = contact else {
        return ValidationResult::new(false, "Contact cannot be null".into());
    };

    let name = contact.name().trim();
    if name.is_empty() {
        return ValidationResult::new(false, "Contact name cannot be null or empty".into());
    }
    if !in_bounds(name, MIN_NAME_LEN, MAX_NAME_LEN) {
        return ValidationResult::new(false, format!(
            "Contact name must be between {} and {} characters: {}",
            MIN_NAME_LEN, MAX_NAME_LEN, contact.name()
        ));
    }

    let phone = contact.phone_number().trim();
    if phone.is_empty() {
        return ValidationResult::new(false, "Phone number cannot be null or empty".into());
    }
    if !in_bounds(phone, MIN_PHONE_LEN, MAX_PHONE_LEN) {
        return ValidationResult::new(false, format!(
            "Phone number must be between {} and {} characters: {}",
            MIN_PHONE_LEN, MAX_PHONE_LEN, contact.phone_number()
        ));
    }

    ValidationResult::new(true, "Contact is valid".into())
}

pub fn validate_contact(contact: &Contact) -> ValidationResult {
    validate(Some(contact))
}

/// Raw-string pre-check with the same bounds `validate` applies.
pub fn is_within_bounds(name: &str, phone_number: &str) -> bool {
    in_bounds(name.trim(), MIN_NAME_LEN, MAX_NAME_LEN) &&
        in_bounds(phone_number.trim(), MIN_PHONE_LEN, MAX_PHONE_LEN)
}

fn in_bounds(input: &str, min: usize, max: usize) -> bool {
    let len = input.chars().count();
    len >= min && len <= max
}
