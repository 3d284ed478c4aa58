//! Penalty catalog and enforcement.
mod catalog;
mod definition;
mod enforcement;
mod error;
mod nfhs;

pub use catalog::{PenaltyCatalog, PenaltyTable};
pub use definition::{
    DownEffect, EnforcementType, PenaltyCategory, PenaltyDefinition, TeamRestriction,
};
pub use enforcement::{EnforcementInput, EnforcementResult, Outcome, enforce};
pub use error::{CatalogError, EnforcementError};
