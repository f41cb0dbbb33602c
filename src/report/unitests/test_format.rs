use serde_json::json;

use crate::report::format::{render, list_table, Rating};

#[test]
fn test_rating() {
    assert_eq!(Rating::from_millis(0), Rating::Excellent);
    assert_eq!(Rating::from_millis(99), Rating::Excellent);
    assert_eq!(Rating::from_millis(100), Rating::Good);
    assert_eq!(Rating::from_millis(499), Rating::Good);
    assert_eq!(Rating::from_millis(500), Rating::Acceptable);
    assert_eq!(Rating::from_millis(1000), Rating::Slow);
    assert_eq!(Rating::Acceptable.to_string(), "ACCEPTABLE");
}

#[test]
fn test_render_scalar() {
    assert_eq!(render("Dataset Size", &json!("10 contacts")), "Dataset Size: 10 contacts");
    assert_eq!(render("Count", &json!(3)), "Count: 3");
}

#[test]
fn test_render_list() {
    let data = json!([
        { "name": "John Doe", "phoneNumber": "555-0101" },
        { "name": "Jane Smith", "phoneNumber": "555-0102" }
    ]);
    assert_eq!(
        render("Contact Sample", &data),
        "Contact Sample:\nIndex | Value\n------|------\n    0 | name=John Doe, phoneNumber=555-0101\n    1 | name=Jane Smith, phoneNumber=555-0102\n"
    );
}

#[test]
fn test_list_truncated() {
    let items = (0..12).map(|v| json!(v)).collect::<Vec<_>>();
    let table = list_table(&items);
    assert!(table.contains("    9 | 9\n"));
    assert!(!table.contains("   10 | 10"));
    assert!(table.ends_with("... and 2 more items\n"));
    assert_eq!(list_table(&[]), "Empty List");
}

#[test]
fn test_render_map() {
    let data = json!({ "OS": "linux", "User": "tester" });
    assert_eq!(
        render("Environment Details", &data),
        "Environment Details:\nKey | Value\n----|------\nOS | linux\nUser | tester\n"
    );
    assert_eq!(render("Nothing", &json!({})), "Nothing:\nEmpty Map");
}
