#[cfg(test)] mod test_contact;
#[cfg(test)] mod test_validator;
#[cfg(test)] mod test_contact_store;
#[cfg(test)] mod test_config;
#[cfg(test)] mod test_logger;

#[cfg(test)]
use crate::Contact;

#[cfg(test)]
fn contact(name: &str, phone: &str) -> Contact {
    Contact::new(name, phone).unwrap()
}
