use phonebook::sheet;
use crate::fixture_path;

/**
# sheet
 - read_contacts
 */
#[test]
fn test_read_csv_fixture() {
    let contacts = sheet::read_contacts(fixture_path("data/contacts.csv"));
    let pairs = contacts.iter()
        .map(|v| (v.name(), v.phone_number()))
        .collect::<Vec<_>>();

    assert_eq!(pairs, vec![
        ("John Doe", "555-0101"),
        ("Jane Smith", "555-0102"),
        ("Bob Johnson", "555-0103"),
        ("Alice Brown", "555-0104"),
        ("Smith & Sons, Ltd", "555-0105"),
        ("john doe", "555-0199"),
    ]);
}

#[test]
fn test_read_xlsx_fixture() {
    let contacts = sheet::read_contacts(fixture_path("data/contacts.xlsx"));
    let pairs = contacts.iter()
        .map(|v| (v.name(), v.phone_number()))
        .collect::<Vec<_>>();

    assert_eq!(pairs, vec![
        ("John Doe", "555-0101"),
        ("Numeric Phone", "5550102"),
        ("Decimal Phone", "12.5"),
        ("Bool Phone", "true"),
        ("42", "555-0108"),
        ("Jane Smith", "555-0102"),
    ]);
}

#[test]
fn test_read_unreadable() {
    assert!(sheet::read_contacts(fixture_path("data/missing.xlsx")).is_empty());
    assert!(sheet::read_contacts(fixture_path("core/apitests1.conf")).is_empty());
    assert!(sheet::read_contacts("").is_empty());
}
