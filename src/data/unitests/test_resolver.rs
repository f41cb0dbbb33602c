use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::{
    Contact,
    Error,
    validator::{validate_contact, MAX_NAME_LEN, MAX_PHONE_LEN},
    data::{
        Scenario,
        SourceResolver,
        StaticProvider,
        resolve_with_fallback,
    },
};

fn write_sheet(dir: &TempDir, file: &str, rows: &[(&str, &str)]) -> PathBuf {
    let path = dir.path().join(file);
    let mut content = String::from("Name,Phone\n");
    for (name, phone) in rows {
        content.push_str(&format!("{},{}\n", name, phone));
    }
    fs::write(&path, content).unwrap();
    path
}

fn static_resolver(names: &[&str]) -> SourceResolver {
    let contacts = names.iter()
        .enumerate()
        .map(|(i, v)| Contact::new(v, &format!("555-{:04}", i)).unwrap())
        .collect();
    SourceResolver::with_providers(vec![
        Box::new(StaticProvider::new("fixture", contacts))
    ])
}

#[test]
fn test_fallback_primary_first() {
    let tmp = TempDir::new().unwrap();
    let primary = write_sheet(&tmp, "primary.csv", &[("Primary User", "555-1")]);
    let backup = write_sheet(&tmp, "backup.csv", &[("Backup User", "555-2")]);

    let contacts = resolve_with_fallback(&primary, Some(backup.as_path()));
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name(), "Primary User");
}

#[test]
fn test_fallback_to_backup() {
    let tmp = TempDir::new().unwrap();
    let backup = write_sheet(&tmp, "backup.csv", &[("Backup User", "555-2")]);
    let empty = write_sheet(&tmp, "empty.csv", &[]);

    let contacts = resolve_with_fallback(&tmp.path().join("missing.csv"), Some(backup.as_path()));
    assert_eq!(contacts[0].name(), "Backup User");

    // a readable sheet with no rows falls through just like a missing one
    let contacts = resolve_with_fallback(&empty, Some(backup.as_path()));
    assert_eq!(contacts[0].name(), "Backup User");
}

#[test]
fn test_fallback_never_returns_defaults() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing.csv");
    assert!(resolve_with_fallback(&missing, Some(missing.as_path())).is_empty());
    assert!(resolve_with_fallback(&missing, None).is_empty());
}

#[test]
fn test_base_set_chain() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("missing.csv");
    let backup = write_sheet(&tmp, "backup.csv", &[("Backup User", "555-2")]);

    let resolver = SourceResolver::new(&missing, &backup);
    assert_eq!(resolver.contacts().len(), 1);
    assert!(resolver.is_data_available());
    assert_eq!(resolver.data_source(), backup.display().to_string());
    assert_eq!(
        resolver.data_source_info(),
        format!("Using data from {} (1 contacts)", backup.display())
    );
    assert_eq!(resolver.data_info(), "Sheet data: 1 contacts available, sample: Backup User");

    let resolver = SourceResolver::new(&missing, &missing);
    assert_eq!(resolver.contacts().len(), 10);
    assert!(!resolver.is_data_available());
    assert_eq!(resolver.data_source_info(), "Using default data (10 contacts)");
    assert_eq!(resolver.data_info(), "Sheet data: no valid contacts found");
}

#[test]
fn test_reload() {
    let tmp = TempDir::new().unwrap();
    let primary = tmp.path().join("primary.csv");
    let missing = tmp.path().join("missing.csv");

    let mut resolver = SourceResolver::new(&primary, &missing);
    assert_eq!(resolver.contacts().len(), 10);

    write_sheet(&tmp, "primary.csv", &[("Late User", "555-9")]);
    assert_eq!(resolver.contacts().len(), 10);

    resolver.reload();
    assert_eq!(resolver.contacts().len(), 1);
    assert_eq!(resolver.contacts()[0].name(), "Late User");
}

#[test]
fn test_scenario_keys_case_insensitive() {
    let resolver = static_resolver(&["A"]);
    assert_eq!(Scenario::parse("DUPLICATE"), Some(Scenario::Duplicate));
    assert_eq!(Scenario::parse(" SpecialChars "), Some(Scenario::SpecialChars));
    assert_eq!(Scenario::parse("bogus"), None);
    assert_eq!(resolver.scenario("Duplicate").len(), 3);
    assert_eq!(resolver.scenario("bogus")[0].name(), "A");
}

#[test]
fn test_duplicate_scenario() {
    let contacts = static_resolver(&[]).scenario("duplicate");
    assert_eq!(contacts.len(), 3);
    assert_eq!(contacts[0], contacts[1]);
    assert_ne!(contacts[0].phone_number(), contacts[1].phone_number());
    assert_ne!(contacts[0], contacts[2]);
}

#[test]
fn test_update_scenario() {
    let contacts = static_resolver(&[]).scenario("update");
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].name(), contacts[1].name());
}

#[test]
fn test_boundary_scenario() {
    let contacts = static_resolver(&[]).scenario("boundary");
    assert_eq!(contacts.len(), 3);
    assert_eq!(contacts[0].name().chars().count(), 1);
    assert_eq!(contacts[0].phone_number().chars().count(), 1);
    assert_eq!(contacts[1].name(), "Normal User");
    assert_eq!(contacts[2].name().chars().count(), MAX_NAME_LEN);
    assert_eq!(contacts[2].phone_number().chars().count(), MAX_PHONE_LEN);
    assert!(contacts.iter().all(|v| validate_contact(v).is_valid()));
}

#[test]
fn test_special_chars_scenario() {
    let contacts = static_resolver(&[]).scenario("specialchars");
    let names = contacts.iter().map(|v| v.name()).collect::<Vec<_>>();
    assert!(names.iter().any(|v| v.contains('\'')));
    assert!(names.iter().any(|v| v.contains('&')));
    assert!(names.iter().any(|v| v.contains('@')));
}

#[test]
fn test_mixed_scenario() {
    let contacts = static_resolver(&[]).scenario("mixed");
    let verdicts = contacts.iter()
        .map(|v| validate_contact(v).is_valid())
        .collect::<Vec<_>>();
    assert_eq!(verdicts, vec![true, false, true, false]);
}

#[test]
fn test_performance_cycles_base() {
    let resolver = static_resolver(&["Alice", "Bob"]).with_performance_count(5);
    let contacts = resolver.scenario("performance");
    let names = contacts.iter().map(|v| v.name()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Alice_1", "Bob_1", "Alice_2", "Bob_2", "Alice_3"]);
    assert_eq!(contacts[2].phone_number(), "555-0000");
}

#[test]
fn test_performance_skips_case_variants() {
    let resolver = static_resolver(&["Alice", "ALICE", "Bob"]);
    let contacts = resolver.performance_contacts(4);
    let names = contacts.iter().map(|v| v.name()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Alice_1", "Bob_1", "Alice_2", "Bob_2"]);
}

#[test]
fn test_performance_without_base() {
    let resolver = SourceResolver::with_providers(Vec::new());
    let contacts = resolver.performance_contacts(3);
    assert_eq!(contacts.len(), 3);
    assert_eq!(contacts[0].name(), "PerfUser0");
    assert_eq!(contacts[2].phone_number(), "555-0002");
    assert_eq!(resolver.data_source_info(), "No contact data available");
}

#[test]
fn test_performance_keeps_bounds() {
    let long = "n".repeat(MAX_NAME_LEN);
    let resolver = static_resolver(&[long.as_str(), "Short"]);
    let contacts = resolver.performance_contacts(4);
    assert_eq!(contacts.len(), 4);
    assert_eq!(contacts[0].name(), "PerfUser0");
    assert_eq!(contacts[1].name(), "Short_1");
    assert!(contacts.iter().all(|v| validate_contact(v).is_valid()));
}

#[test]
fn test_contact_index() {
    let resolver = static_resolver(&["A", "B", "C"]);
    assert_eq!(resolver.contact(0).unwrap().name(), "A");
    assert_eq!(resolver.contact(2).unwrap().name(), "C");
    assert!(matches!(resolver.contact(3), Err(Error::OutOfRange(_))));
}

#[test]
fn test_contact_range() {
    let resolver = static_resolver(&["A", "B", "C"]);
    let range = resolver.contact_range(1, 3).unwrap();
    assert_eq!(range.iter().map(|v| v.name()).collect::<Vec<_>>(), vec!["B", "C"]);
    assert!(resolver.contact_range(2, 2).unwrap().is_empty());
    assert!(matches!(resolver.contact_range(2, 1), Err(Error::Argument(_))));
    assert!(matches!(resolver.contact_range(0, 4), Err(Error::OutOfRange(_))));
}
