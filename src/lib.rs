pub mod core;
pub mod data;
pub mod report;

pub use crate::core::{
    error::{self, Error},
    contact::{self, Contact},
    contact_store::{self, ContactStore},
    validator::{self, ValidationResult},

    config,
    logger,
    default_configuration as configuration,
};

pub use crate::data::{
    sheet,
    Scenario,
    SourceProvider,
    SourceResolver,
    default_contacts,
    resolve_with_fallback,
};

pub use crate::report::{
    Reporter,
    ReportContext,
};

#[macro_export]
macro_rules! elapsed_ms {
    ($time:expr) => {{
        $time.elapsed().as_millis()
    }};
}
