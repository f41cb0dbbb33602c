use std::fmt;
use std::slice::Iter;
use log::debug;

use crate::{
    Error,
    error::Result,
    Contact,
    core::contact::normalize,
};

/// The ordered contact list of one device.
///
/// At most one contact per case-insensitive name is kept. The store only
/// guards uniqueness; field validity is the caller's business.
#[derive(Debug, Clone)]
pub struct ContactStore {
    device_id: String,
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new(device_id: &str) -> Result<Self> {
        let device_id = device_id.trim();
        if device_id.is_empty() {
            return Err(Error::Argument("Device id cannot be null or empty".into()));
        }

        Ok(Self {
            device_id: device_id.to_string(),
            contacts: Vec::new(),
        })
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = normalize(name);
        self.contacts.iter().position(|v| v.key() == key)
    }

    pub fn add_new_contact(&mut self, contact: Contact) -> bool {
        if self.position(contact.key()).is_some() {
            debug!("Contact {} already exists on {}", contact.name(), self.device_id);
            return false;
        }

        debug!("Added contact {} to {}", contact.name(), self.device_id);
        self.contacts.push(contact);
        true
    }

    /// Replaces `old` with `new` in place. A rename that would collide with
    /// another stored contact is refused.
    pub fn update_contact(&mut self, old: &Contact, new: Contact) -> bool {
        let Some(pos) = self.position(old.key()) else {
            debug!("Contact {} not found on {}", old.name(), self.device_id);
            return false;
        };

        if let Some(other) = self.position(new.key()) {
            if other != pos {
                debug!("Renaming {} to {} collides with an existing contact",
                    old.name(), new.name());
                return false;
            }
        }

        debug!("Updated contact {} -> {}", self.contacts[pos], new);
        self.contacts[pos] = new;
        true
    }

    pub fn remove_contact(&mut self, contact: &Contact) -> bool {
        let Some(pos) = self.position(contact.key()) else {
            return false;
        };

        let removed = self.contacts.remove(pos);
        debug!("Removed contact {} from {}", removed.name(), self.device_id);
        true
    }

    pub fn query_contact(&self, name: &str) -> Option<&Contact> {
        self.position(name).map(|pos| &self.contacts[pos])
    }

    pub fn contact_exists(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Adds every contact in order, returning how many were accepted.
    pub fn add_all_contacts<I>(&mut self, contacts: I) -> usize
    where I: IntoIterator<Item = Contact> {
        let mut added = 0;
        for contact in contacts {
            if self.add_new_contact(contact) {
                added += 1;
            }
        }
        added
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn all_contacts(&self) -> Vec<Contact> {
        self.contacts.clone()
    }

    pub fn iter(&self) -> Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn clear_all_contacts(&mut self) {
        debug!("Cleared {} contacts from {}", self.contacts.len(), self.device_id);
        self.contacts.clear();
    }

    /// Numbered listing of the stored contacts, one per line.
    pub fn listing(&self) -> String {
        if self.contacts.is_empty() {
            return "Contact List:\n  No contacts available".into();
        }

        let mut output = String::from("Contact List:");
        for (i, v) in self.contacts.iter().enumerate() {
            output.push_str(&format!("\n{}. {} -> {}", i + 1, v.name(), v.phone_number()));
        }
        output
    }
}

impl<'a> IntoIterator for &'a ContactStore {
    type Item = &'a Contact;
    type IntoIter = Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}

impl fmt::Display for ContactStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
            "ContactStore{{device='{}', contacts={}}}",
            self.device_id,
            self.contacts.len()
        )?;
        Ok(())
    }
}
