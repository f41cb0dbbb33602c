use std::fs;
use tempfile::TempDir;

use crate::data::sheet::{read_contacts, try_read_contacts};

#[test]
fn test_read_csv() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("contacts.csv");
    fs::write(&path, "Name,Phone\nJohn Doe,555-0101\n  Jane Smith , 555-0102 \n").unwrap();

    let contacts = read_contacts(&path);
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].name(), "John Doe");
    assert_eq!(contacts[0].phone_number(), "555-0101");
    assert_eq!(contacts[1].name(), "Jane Smith");
    assert_eq!(contacts[1].phone_number(), "555-0102");
}

#[test]
fn test_csv_skips_incomplete_rows() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("contacts.CSV");
    fs::write(&path, concat!(
        "Name,Phone\n",
        "John Doe,555-0101\n",
        ",555-0000\n",
        "No Phone,\n",
        "Only Name\n",
        "   ,   \n",
        "Bob Johnson,555-0103,extra\n",
    )).unwrap();

    let names = read_contacts(&path).iter()
        .map(|v| v.name().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["John Doe", "Bob Johnson"]);
}

#[test]
fn test_csv_header_only() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("contacts.csv");
    fs::write(&path, "Name,Phone\n").unwrap();
    assert!(read_contacts(&path).is_empty());
}

#[test]
fn test_missing_file_is_empty() {
    let tmp = TempDir::new().unwrap();
    assert!(read_contacts(tmp.path().join("missing.csv")).is_empty());
    assert!(read_contacts(tmp.path().join("missing.xlsx")).is_empty());
    assert!(try_read_contacts(&tmp.path().join("missing.xlsx")).is_err());
}

#[test]
fn test_unparsable_file_is_empty() {
    let tmp = TempDir::new().unwrap();

    let bogus = tmp.path().join("contacts.xlsx");
    fs::write(&bogus, "this is not a zip archive").unwrap();
    assert!(read_contacts(&bogus).is_empty());

    let unknown = tmp.path().join("contacts.txt");
    fs::write(&unknown, "Name,Phone\nJohn,1\n").unwrap();
    assert!(read_contacts(&unknown).is_empty());
}

#[test]
fn test_directory_is_empty() {
    let tmp = TempDir::new().unwrap();
    assert!(read_contacts(tmp.path()).is_empty());
}

#[test]
fn test_csv_skips_undecodable_row() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("contacts.csv");
    let mut content = b"Name,Phone\nJohn Doe,555-0101\nBad ".to_vec();
    content.push(0xff);
    content.extend_from_slice(b" Name,555-0102\nJane Smith,555-0103\n");
    fs::write(&path, content).unwrap();

    let names = read_contacts(&path).iter()
        .map(|v| v.name().to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["John Doe", "Jane Smith"]);
}
