use crate::validator::{
    self,
    validate,
    validate_contact,
    MAX_NAME_LEN,
    MAX_PHONE_LEN,
};
use super::contact;

#[test]
fn test_valid_contact() {
    let result = validate_contact(&contact("Valid User", "555-1234"));
    assert_eq!(result.is_valid(), true);
    assert_eq!(result.message(), "Contact is valid");
    assert_eq!(result.to_string(), "PASS: Contact is valid");
}

#[test]
fn test_missing_contact() {
    let result = validate(None);
    assert_eq!(result.is_valid(), false);
    assert_eq!(result.message(), "Contact cannot be null");
}

#[test]
fn test_name_bounds() {
    assert!(validate_contact(&contact("A", "1")).is_valid());
    assert!(validate_contact(&contact(&"a".repeat(MAX_NAME_LEN), "1")).is_valid());

    let long = "a".repeat(MAX_NAME_LEN + 1);
    let result = validate_contact(&contact(&long, "1"));
    assert_eq!(result.is_valid(), false);
    assert_eq!(
        result.message(),
        format!("Contact name must be between 1 and 100 characters: {}", long)
    );
}

#[test]
fn test_name_bound_counts_chars() {
    // 100 two-byte characters still fit
    let name = "é".repeat(MAX_NAME_LEN);
    assert!(validate_contact(&contact(&name, "1")).is_valid());
}

#[test]
fn test_phone_bounds() {
    assert!(validate_contact(&contact("A", "1")).is_valid());
    assert!(validate_contact(&contact("A", &"1".repeat(MAX_PHONE_LEN))).is_valid());

    let long = "1".repeat(MAX_PHONE_LEN + 1);
    let result = validate_contact(&contact("A", &long));
    assert_eq!(result.is_valid(), false);
    assert_eq!(
        result.message(),
        format!("Phone number must be between 1 and 20 characters: {}", long)
    );
}

#[test]
fn test_name_checked_before_phone() {
    let result = validate_contact(&contact(&"a".repeat(101), &"1".repeat(21)));
    assert!(result.message().starts_with("Contact name must be between"));
}

#[test]
fn test_is_within_bounds() {
    assert_eq!(validator::is_within_bounds("A", "1"), true);
    assert_eq!(validator::is_within_bounds("", "1"), false);
    assert_eq!(validator::is_within_bounds("A", "  "), false);
    assert_eq!(validator::is_within_bounds(&"a".repeat(101), "1"), false);
    assert_eq!(validator::is_within_bounds("A", &"1".repeat(21)), false);
}
