pub(crate) mod cell;

pub mod sheet;
pub mod scenario;
pub mod provider;
pub mod resolver;

pub use self::{
    scenario::Scenario,
    provider::{
        SourceProvider,
        SheetProvider,
        DefaultProvider,
        StaticProvider,
        Resolution,
        default_contacts,
    },
    resolver::{
        SourceResolver,
        resolve_with_fallback,
    },
};
