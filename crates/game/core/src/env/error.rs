//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when accessing oracle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// No penalty catalog was provided to the environment.
    #[error("penalty catalog not available")]
    CatalogNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // The engine cannot enforce anything without a catalog.
            OracleError::CatalogNotAvailable => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            OracleError::CatalogNotAvailable => "ORACLE_CATALOG_NOT_AVAILABLE",
        }
    }
}
