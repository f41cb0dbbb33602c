use std::fmt;
use std::hash::{Hash, Hasher};
use serde::Serialize;

use crate::{
    Error,
    error::Result,
};

/// A named entry in a device's contact list.
///
/// Both fields are trimmed at construction and can never be empty. Identity
/// is the case-folded name only, so two contacts sharing a name but carrying
/// different phone numbers compare equal.
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    #[serde(rename = "name")]
    name: String,

    #[serde(rename = "phoneNumber")]
    phone_number: String,

    #[serde(skip)]
    key: String,
}

impl Contact {
    pub fn new(name: &str, phone_number: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Argument("Contact name cannot be null or empty".into()));
        }
        let phone_number = phone_number.trim();
        if phone_number.is_empty() {
            return Err(Error::Argument("Phone number cannot be null or empty".into()));
        }

        Ok(Self {
            name: name.to_string(),
            phone_number: phone_number.to_string(),
            key: normalize(name),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// The normalized lookup key: trimmed, lower-cased name.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.key == normalize(name)
    }
}

pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Contact {}

impl Hash for Contact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
            "Contact{{name='{}', phoneNumber='{}'}}",
            self.name,
            self.phone_number
        )?;
        Ok(())
    }
}
