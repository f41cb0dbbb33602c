use std::path::{Path, PathBuf};
use log::debug;

use crate::Contact;
use super::sheet;

pub const DEFAULT_SOURCE: &str = "defaults";

/// Anything that can hand out a candidate contact list. An empty result
/// means "nothing here, try the next source".
pub trait SourceProvider {
    fn name(&self) -> &str;
    fn produce(&self) -> Vec<Contact>;
}

/// Contacts read from a sheet file on disk.
pub struct SheetProvider {
    path: PathBuf,
    name: String,
}

impl SheetProvider {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SourceProvider for SheetProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn produce(&self) -> Vec<Contact> {
        sheet::read_contacts(&self.path)
    }
}

/// The built-in contact set used when no sheet yields data.
pub struct DefaultProvider;

impl SourceProvider for DefaultProvider {
    fn name(&self) -> &str {
        DEFAULT_SOURCE
    }

    fn produce(&self) -> Vec<Contact> {
        default_contacts()
    }
}

/// A fixed, in-memory contact list.
pub struct StaticProvider {
    name: String,
    contacts: Vec<Contact>,
}

impl StaticProvider {
    pub fn new(name: &str, contacts: Vec<Contact>) -> Self {
        Self {
            name: name.to_string(),
            contacts,
        }
    }
}

impl SourceProvider for StaticProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn produce(&self) -> Vec<Contact> {
        self.contacts.clone()
    }
}

#[derive(Debug, Clone)]
pub struct Resolution {
    source: String,
    contacts: Vec<Contact>,
}

impl Resolution {
    pub(crate) fn new(source: &str, contacts: Vec<Contact>) -> Self {
        Self {
            source: source.to_string(),
            contacts,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn into_contacts(self) -> Vec<Contact> {
        self.contacts
    }
}

/// Tries each provider in order and returns the first non-empty result.
pub fn resolve(providers: &[&dyn SourceProvider]) -> Option<Resolution> {
    for provider in providers {
        let contacts = provider.produce();
        if !contacts.is_empty() {
            debug!("Resolved {} contacts from {}", contacts.len(), provider.name());
            return Some(Resolution::new(provider.name(), contacts));
        }
        debug!("Source {} yielded no contacts", provider.name());
    }
    None
}

const DEFAULT_ENTRIES: [(&str, &str); 10] = [
    ("John Doe",        "555-0101"),
    ("Jane Smith",      "555-0102"),
    ("Bob Johnson",     "555-0103"),
    ("Alice Brown",     "555-0104"),
    ("Charlie Wilson",  "555-0105"),
    ("Diana Prince",    "555-0106"),
    ("Edward Norton",   "555-0107"),
    ("Fiona Green",     "555-0108"),
    ("George Miller",   "555-0109"),
    ("Hannah Lee",      "555-0110"),
];

pub fn default_contacts() -> Vec<Contact> {
    contacts_from(&DEFAULT_ENTRIES)
}

/// Builds contacts from literal pairs. Entries are known to be non-empty.
pub(crate) fn contacts_from(entries: &[(&str, &str)]) -> Vec<Contact> {
    entries.iter()
        .filter_map(|(name, phone)| Contact::new(name, phone).ok())
        .collect()
}
