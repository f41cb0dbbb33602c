use crate::{
    ContactStore,
    Error,
};
use super::contact;

fn store() -> ContactStore {
    ContactStore::new("061-123456").unwrap()
}

#[test]
fn test_new() {
    let s = ContactStore::new("  061-123456 ").unwrap();
    assert_eq!(s.device_id(), "061-123456");
    assert_eq!(s.contact_count(), 0);
    assert!(s.is_empty());
    assert!(matches!(ContactStore::new(" "), Err(Error::Argument(_))));
}

#[test]
fn test_duplicate_rejected_any_case() {
    let mut s = ContactStore::new("X").unwrap();
    assert_eq!(s.add_new_contact(contact("John", "1")), true);
    assert_eq!(s.add_new_contact(contact("john", "2")), false);
    assert_eq!(s.add_new_contact(contact("JOHN", "3")), false);
    assert_eq!(s.contact_count(), 1);

    let found = s.query_contact("JOHN").unwrap();
    assert_eq!(found.name(), "John");
    assert_eq!(found.phone_number(), "1");
}

#[test]
fn test_store_skips_field_validation() {
    let mut s = store();
    let long = "n".repeat(150);
    assert!(s.add_new_contact(contact(&long, "1")));
    assert!(s.contact_exists(&long));
}

#[test]
fn test_update_preserves_position() {
    let mut s = store();
    let john = contact("John Doe", "555-0101");
    s.add_new_contact(contact("Alice", "1"));
    s.add_new_contact(john.clone());
    s.add_new_contact(contact("Bob", "2"));

    assert!(s.update_contact(&john, contact("John Doe", "555-9999")));
    assert_eq!(s.contact_count(), 3);

    let all = s.all_contacts();
    assert_eq!(all[1].name(), "John Doe");
    assert_eq!(all[1].phone_number(), "555-9999");
}

#[test]
fn test_update_missing() {
    let mut s = store();
    s.add_new_contact(contact("Alice", "1"));
    assert!(!s.update_contact(&contact("Ghost", "0"), contact("Ghost", "9")));
    assert_eq!(s.contact_count(), 1);
    assert_eq!(s.query_contact("Alice").unwrap().phone_number(), "1");
}

#[test]
fn test_update_rename() {
    let mut s = store();
    let alice = contact("Alice", "1");
    s.add_new_contact(alice.clone());
    s.add_new_contact(contact("Bob", "2"));

    assert!(s.update_contact(&alice, contact("Alicia", "1")));
    assert!(!s.contact_exists("Alice"));
    assert_eq!(s.all_contacts()[0].name(), "Alicia");

    // a case-only rename of itself is fine
    let alicia = contact("alicia", "1");
    assert!(s.update_contact(&alicia, contact("ALICIA", "3")));
    assert_eq!(s.query_contact("alicia").unwrap().name(), "ALICIA");
}

#[test]
fn test_update_rename_collision_rejected() {
    let mut s = store();
    let alice = contact("Alice", "1");
    s.add_new_contact(alice.clone());
    s.add_new_contact(contact("Bob", "2"));

    assert!(!s.update_contact(&alice, contact("bob", "3")));
    assert_eq!(s.contact_count(), 2);
    assert_eq!(s.query_contact("Alice").unwrap().phone_number(), "1");
    assert_eq!(s.query_contact("Bob").unwrap().phone_number(), "2");
}

#[test]
fn test_remove_then_query() {
    let mut s = store();
    let jane = contact("Jane Smith", "555-0102");
    s.add_new_contact(jane.clone());

    assert!(s.remove_contact(&contact("JANE SMITH", "x")));
    assert!(s.query_contact("Jane Smith").is_none());
    assert!(!s.contact_exists("jane smith"));
    assert!(!s.remove_contact(&jane));
}

#[test]
fn test_add_all_counts_first_occurrences() {
    let mut s = store();
    s.add_new_contact(contact("Existing", "0"));

    let added = s.add_all_contacts(vec![
        contact("Duplicate User", "555-1001"),
        contact("duplicate user", "555-1002"),
        contact("existing", "555-1003"),
        contact("Unique User", "555-1004"),
    ]);
    assert_eq!(added, 2);
    assert_eq!(s.contact_count(), 3);
    assert_eq!(s.query_contact("Duplicate User").unwrap().phone_number(), "555-1001");

    assert_eq!(s.add_all_contacts(Vec::new()), 0);
    assert_eq!(s.add_all_contacts(vec![contact("Unique User", "x")]), 0);
}

#[test]
fn test_all_contacts_is_a_copy() {
    let mut s = store();
    s.add_new_contact(contact("Alice", "1"));

    let mut copy = s.all_contacts();
    copy.clear();
    assert_eq!(s.contact_count(), 1);

    let names = s.iter().map(|v| v.name()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Alice"]);
}

#[test]
fn test_clear() {
    let mut s = store();
    s.add_all_contacts(vec![contact("A", "1"), contact("B", "2")]);
    s.clear_all_contacts();
    assert_eq!(s.contact_count(), 0);
    assert!(s.query_contact("A").is_none());
}

#[test]
fn test_listing_and_display() {
    let mut s = store();
    assert_eq!(s.listing(), "Contact List:\n  No contacts available");

    s.add_new_contact(contact("John Doe", "555-0101"));
    s.add_new_contact(contact("Jane Smith", "555-0102"));
    assert_eq!(
        s.listing(),
        "Contact List:\n1. John Doe -> 555-0101\n2. Jane Smith -> 555-0102"
    );
    assert_eq!(s.to_string(), "ContactStore{device='061-123456', contacts=2}");
}
