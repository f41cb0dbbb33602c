use std::fs;
use tempfile::TempDir;

use crate::{
    Contact,
    data::provider::{
        resolve,
        default_contacts,
        SourceProvider,
        SheetProvider,
        StaticProvider,
        DefaultProvider,
        DEFAULT_SOURCE,
    },
};

#[test]
fn test_default_contacts() {
    let contacts = default_contacts();
    assert_eq!(contacts.len(), 10);
    assert_eq!(contacts[0].name(), "John Doe");
    assert_eq!(DefaultProvider.produce().len(), 10);
    assert_eq!(DefaultProvider.name(), DEFAULT_SOURCE);
}

#[test]
fn test_first_non_empty_wins() {
    let empty = StaticProvider::new("empty", Vec::new());
    let first = StaticProvider::new("first", vec![Contact::new("A", "1").unwrap()]);
    let second = StaticProvider::new("second", vec![Contact::new("B", "2").unwrap()]);

    let resolved = resolve(&[&empty, &first, &second]).unwrap();
    assert_eq!(resolved.source(), "first");
    assert_eq!(resolved.contacts().len(), 1);
    assert_eq!(resolved.contacts()[0].name(), "A");
}

#[test]
fn test_all_empty() {
    let empty = StaticProvider::new("empty", Vec::new());
    assert!(resolve(&[&empty]).is_none());
    assert!(resolve(&[]).is_none());
}

#[test]
fn test_sheet_provider_falls_through() {
    let tmp = TempDir::new().unwrap();
    let missing = SheetProvider::new(tmp.path().join("missing.csv"));
    let backup_path = tmp.path().join("backup.csv");
    fs::write(&backup_path, "Name,Phone\nBackup User,555-7000\n").unwrap();
    let backup = SheetProvider::new(&backup_path);

    let resolved = resolve(&[&missing, &backup, &DefaultProvider]).unwrap();
    assert_eq!(resolved.source(), backup_path.display().to_string());
    assert_eq!(resolved.into_contacts()[0].name(), "Backup User");

    let resolved = resolve(&[&missing, &DefaultProvider]).unwrap();
    assert_eq!(resolved.source(), DEFAULT_SOURCE);
}
