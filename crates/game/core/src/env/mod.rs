//! Read-only data consulted by the engine.
//!
//! The [`Env`] aggregate bundles the penalty catalog oracle with the rules
//! configuration so plays can reach both without coupling to a concrete
//! catalog implementation.
mod error;

pub use error::OracleError;

use crate::config::RulesConfig;
use crate::penalty::PenaltyCatalog;

/// Aggregates the oracles and configuration required by the play pipeline.
pub struct Env<'a, P>
where
    P: PenaltyCatalog + ?Sized,
{
    catalog: Option<&'a P>,
    rules: RulesConfig,
}

pub type GameEnv<'a> = Env<'a, dyn PenaltyCatalog + 'a>;

impl<'a, P> Env<'a, P>
where
    P: PenaltyCatalog + ?Sized,
{
    pub fn new(catalog: Option<&'a P>, rules: RulesConfig) -> Self {
        Self { catalog, rules }
    }

    pub fn with_catalog(catalog: &'a P, rules: RulesConfig) -> Self {
        Self::new(Some(catalog), rules)
    }

    /// Environment without a catalog; penalty plays will fail.
    pub fn empty() -> Self {
        Self {
            catalog: None,
            rules: RulesConfig::default(),
        }
    }

    /// Returns the penalty catalog, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CatalogNotAvailable` if no catalog was provided.
    pub fn catalog(&self) -> Result<&'a P, OracleError> {
        self.catalog.ok_or(OracleError::CatalogNotAvailable)
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }
}

// Manual impls: derives would require `P: Clone`, which trait objects never are.
impl<P> Clone for Env<'_, P>
where
    P: PenaltyCatalog + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Env<'_, P> where P: PenaltyCatalog + ?Sized {}

impl<P> core::fmt::Debug for Env<'_, P>
where
    P: PenaltyCatalog + ?Sized,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Env")
            .field("catalog", &self.catalog.map(|catalog| catalog.definitions().len()))
            .field("rules", &self.rules)
            .finish()
    }
}
