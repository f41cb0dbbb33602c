pub mod logger;

pub mod config;
pub mod contact;
pub mod contact_store;
pub mod default_configuration;
pub mod error;
pub mod validator;

pub(crate) use error::Result;

#[cfg(test)]
mod unitests;
