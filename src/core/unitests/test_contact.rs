use std::collections::HashSet;

use crate::{
    Contact,
    Error,
};
use super::contact;

#[test]
fn test_new_trims_fields() {
    let c = contact("  John Doe ", "\t555-0101  ");
    assert_eq!(c.name(), "John Doe");
    assert_eq!(c.phone_number(), "555-0101");
    assert_eq!(c.key(), "john doe");
}

#[test]
fn test_new_rejects_blank_name() {
    for name in ["", "   ", "\t\n"] {
        match Contact::new(name, "555-0101") {
            Err(Error::Argument(msg)) => assert_eq!(msg, "Contact name cannot be null or empty"),
            _ => panic!("blank name must be rejected"),
        }
    }
}

#[test]
fn test_new_rejects_blank_phone() {
    match Contact::new("John", "  ") {
        Err(Error::Argument(msg)) => assert_eq!(msg, "Phone number cannot be null or empty"),
        _ => panic!("blank phone must be rejected"),
    }
}

#[test]
fn test_new_skips_length_bounds() {
    let long = "n".repeat(500);
    let c = contact(&long, &"9".repeat(64));
    assert_eq!(c.name().len(), 500);
    assert_eq!(c.phone_number().len(), 64);
}

#[test]
fn test_equality_ignores_case_and_phone() {
    let a = contact("John", "1");
    let b = contact("JOHN", "2");
    let c = contact("Jane", "1");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.matches_name(" john "));
    assert!(!a.matches_name("johnny"));
}

#[test]
fn test_hash_agrees_with_equality() {
    let mut set = HashSet::new();
    assert!(set.insert(contact("Alice Brown", "555-0104")));
    assert!(!set.insert(contact("alice brown", "555-9999")));
    assert!(!set.insert(contact("ALICE BROWN", "555-0104")));
    assert!(set.insert(contact("Alice Green", "555-0104")));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_display() {
    let c = contact("John Doe", "555-0101");
    assert_eq!(c.to_string(), "Contact{name='John Doe', phoneNumber='555-0101'}");
}

#[test]
fn test_serialize() {
    let c = contact("John Doe", "555-0101");
    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(json, serde_json::json!({
        "name": "John Doe",
        "phoneNumber": "555-0101"
    }));
}
