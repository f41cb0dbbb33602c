use std::collections::HashSet;
use std::path::Path;
use once_cell::unsync::OnceCell;
use log::{info, warn};

use crate::{
    Error,
    error::Result,
    Contact,
    config::Config,
    validator::{self, MAX_NAME_LEN, MAX_PHONE_LEN},
};

use super::{
    scenario::Scenario,
    provider::{
        self,
        SourceProvider,
        SheetProvider,
        DefaultProvider,
        Resolution,
        DEFAULT_SOURCE,
    },
};

const NO_SOURCE: &str = "none";
const INFO_SAMPLES: usize = 3;

/// Tries the primary sheet and then the backup sheet. The result may be
/// empty; falling back to built-in data is left to the caller.
pub fn resolve_with_fallback(primary: &Path, backup: Option<&Path>) -> Vec<Contact> {
    let mut contacts = SheetProvider::new(primary).produce();
    if contacts.is_empty() {
        if let Some(backup) = backup {
            info!("Primary sheet {} is not available, trying backup...", primary.display());
            contacts = SheetProvider::new(backup).produce();
        }
    }
    if contacts.is_empty() {
        warn!("No sheet data is available, will use default test data");
    }
    contacts
}

/// Supplies test contacts from an ordered chain of sources, plus canned
/// contact sets for specific test scenarios.
///
/// The base set is resolved on first use and cached until `reload`.
pub struct SourceResolver {
    providers: Vec<Box<dyn SourceProvider>>,
    performance_count: usize,
    resolved: OnceCell<Resolution>,
}

impl SourceResolver {
    /// Primary sheet, then backup sheet, then the built-in defaults.
    pub fn new<P, Q>(primary: P, backup: Q) -> Self
    where P: AsRef<Path>, Q: AsRef<Path> {
        Self::with_providers(vec![
            Box::new(SheetProvider::new(primary)),
            Box::new(SheetProvider::new(backup)),
            Box::new(DefaultProvider),
        ])
    }

    pub fn from_config(cfg: &dyn Config) -> Self {
        Self::new(cfg.primary_path(), cfg.backup_path())
            .with_performance_count(cfg.performance_count())
    }

    pub fn with_providers(providers: Vec<Box<dyn SourceProvider>>) -> Self {
        Self {
            providers,
            performance_count: crate::configuration::DEFAULT_PERFORMANCE_COUNT,
            resolved: OnceCell::new(),
        }
    }

    pub fn with_performance_count(mut self, count: usize) -> Self {
        self.performance_count = count;
        self
    }

    pub fn performance_count(&self) -> usize {
        self.performance_count
    }

    fn resolution(&self) -> &Resolution {
        self.resolved.get_or_init(|| {
            let chain = self.providers.iter()
                .map(|v| v.as_ref())
                .collect::<Vec<&dyn SourceProvider>>();

            provider::resolve(&chain).unwrap_or_else(|| {
                warn!("No source yielded any contacts");
                Resolution::new(NO_SOURCE, Vec::new())
            })
        })
    }

    pub fn reload(&mut self) {
        self.resolved.take();
    }

    /// The base contact set.
    pub fn contacts(&self) -> Vec<Contact> {
        self.resolution().contacts().to_vec()
    }

    pub fn data_source(&self) -> &str {
        self.resolution().source()
    }

    /// True when the base set came from a real source rather than the
    /// built-in defaults.
    pub fn is_data_available(&self) -> bool {
        let source = self.data_source();
        source != DEFAULT_SOURCE && source != NO_SOURCE
    }

    pub fn data_source_info(&self) -> String {
        let resolved = self.resolution();
        match resolved.source() {
            DEFAULT_SOURCE => format!("Using default data ({} contacts)", resolved.contacts().len()),
            NO_SOURCE => "No contact data available".into(),
            source => format!("Using data from {} ({} contacts)", source, resolved.contacts().len()),
        }
    }

    pub fn data_info(&self) -> String {
        if !self.is_data_available() {
            return "Sheet data: no valid contacts found".into();
        }

        let contacts = self.resolution().contacts();
        let samples = contacts.iter()
            .take(INFO_SAMPLES)
            .map(|v| v.name())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Sheet data: {} contacts available, sample: {}", contacts.len(), samples)
    }

    /// Canned contacts for the scenario named by `key`. Unknown keys get the
    /// base set.
    pub fn scenario(&self, key: &str) -> Vec<Contact> {
        match Scenario::parse(key) {
            Some(scenario) => self.scenario_contacts(scenario),
            None => self.contacts(),
        }
    }

    pub fn scenario_contacts(&self, scenario: Scenario) -> Vec<Contact> {
        match scenario {
            Scenario::Duplicate => provider::contacts_from(&[
                ("Duplicate User",  "555-1001"),
                ("Duplicate User",  "555-1002"),
                ("Unique User",     "555-1003"),
            ]),
            Scenario::Update => provider::contacts_from(&[
                ("Update User",     "555-2001"),
                ("Update User",     "555-2002"),
            ]),
            Scenario::Boundary => provider::contacts_from(&[
                ("A",               "1"),
                ("Normal User",     "555-0100"),
                (longest_name(MAX_NAME_LEN).as_str(), longest_phone(MAX_PHONE_LEN).as_str()),
            ]),
            Scenario::SpecialChars => provider::contacts_from(&[
                ("O'Brien",         "555-3001"),
                ("Smith & Sons",    "555-3002"),
                ("user@example.com","555-3003"),
            ]),
            Scenario::Performance => self.performance_contacts(self.performance_count),
            Scenario::Mixed => provider::contacts_from(&[
                ("Valid Mixed User",    "555-4001"),
                (longest_name(MAX_NAME_LEN + 1).as_str(), "555-4002"),
                ("Another Valid User",  "555-4003"),
                ("Long Phone User",     longest_phone(MAX_PHONE_LEN + 1).as_str()),
            ]),
        }
    }

    /// Generates `count` distinct contacts by cycling the base set, with
    /// case-variant duplicates dropped, and suffixing each name with its
    /// pass number. A generated entry that
    /// would break the validator bounds is replaced by a synthetic one.
    pub fn performance_contacts(&self, count: usize) -> Vec<Contact> {
        let mut seen = HashSet::new();
        let base = self.resolution().contacts().iter()
            .filter(|v| seen.insert(v.key()))
            .collect::<Vec<_>>();

        (0..count)
            .filter_map(|i| {
                if !base.is_empty() {
                    let origin = base[i % base.len()];
                    let name = format!("{}_{}", origin.name(), i / base.len() + 1);
                    if validator::is_within_bounds(&name, origin.phone_number()) {
                        return Contact::new(&name, origin.phone_number()).ok();
                    }
                }
                Contact::new(&format!("PerfUser{}", i), &format!("555-{:04}", i)).ok()
            })
            .collect()
    }

    pub fn contact(&self, index: usize) -> Result<Contact> {
        let contacts = self.resolution().contacts();
        contacts.get(index).cloned().ok_or_else(|| {
            Error::OutOfRange(format!("Invalid contact index: {} (size {})", index, contacts.len()))
        })
    }

    /// Contacts in the half-open index range `[start, end)`.
    pub fn contact_range(&self, start: usize, end: usize) -> Result<Vec<Contact>> {
        if start > end {
            return Err(Error::Argument(format!("Invalid contact range: {}..{}", start, end)));
        }

        let contacts = self.resolution().contacts();
        if end > contacts.len() {
            return Err(Error::OutOfRange(format!(
                "Invalid contact range: {}..{} (size {})", start, end, contacts.len()
            )));
        }
        Ok(contacts[start..end].to_vec())
    }
}

fn longest_name(len: usize) -> String {
    padded("Boundary Name ", 'X', len)
}

fn longest_phone(len: usize) -> String {
    padded("555-", '9', len)
}

fn padded(prefix: &str, fill: char, len: usize) -> String {
    prefix.chars()
        .chain(std::iter::repeat(fill))
        .take(len)
        .collect()
}
