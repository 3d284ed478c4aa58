//! Catalog and enforcement errors.

use crate::error::{ErrorSeverity, GameError};
use crate::field::{FieldError, Side};

/// Errors raised while building or querying a penalty catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogError {
    #[error("penalty '{0}' not found")]
    NotFound(String),

    #[error("penalty '{0}' is defined more than once")]
    DuplicateId(String),

    #[error("penalty '{id}' has {yards} yards (expected 5, 10 or 15)")]
    InvalidYardage { id: String, yards: u8 },

    #[error("penalty '{0}' awards an automatic first down but is not restricted to the defense")]
    AutoFirstDownNotDefensive(String),

    #[error("penalty '{0}' costs a down but is not restricted to the offense")]
    LossOfDownNotOffensive(String),

    #[error("quick pick '{0}' does not name a penalty in the catalog")]
    UnknownQuickPick(String),
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Callers should only offer ids the catalog produced.
            Self::NotFound(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "CATALOG_NOT_FOUND",
            Self::DuplicateId(_) => "CATALOG_DUPLICATE_ID",
            Self::InvalidYardage { .. } => "CATALOG_INVALID_YARDAGE",
            Self::AutoFirstDownNotDefensive(_) => "CATALOG_AUTO_FIRST_NOT_DEFENSIVE",
            Self::LossOfDownNotOffensive(_) => "CATALOG_LOSS_OF_DOWN_NOT_OFFENSIVE",
            Self::UnknownQuickPick(_) => "CATALOG_UNKNOWN_QUICK_PICK",
        }
    }
}

/// Precondition failures for [`enforce`](super::enforce).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnforcementError {
    #[error("invalid field state: {0}")]
    Field(#[from] FieldError),

    #[error("penalty '{penalty}' is a spot foul and needs a spot of foul")]
    MissingSpotOfFoul { penalty: String },

    #[error("penalty '{penalty}' cannot be committed by the {side}")]
    SideNotAllowed { penalty: String, side: Side },

    #[error("penalty '{penalty}' awards an automatic first down and cannot be committed by the offense")]
    AutoFirstDownByOffense { penalty: String },

    #[error("penalty '{penalty}' costs a down and cannot be committed by the defense")]
    LossOfDownByDefense { penalty: String },
}

impl GameError for EnforcementError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Field(inner) => inner.error_code(),
            Self::MissingSpotOfFoul { .. } => "ENFORCEMENT_MISSING_SPOT_OF_FOUL",
            Self::SideNotAllowed { .. } => "ENFORCEMENT_SIDE_NOT_ALLOWED",
            Self::AutoFirstDownByOffense { .. } => "ENFORCEMENT_AUTO_FIRST_BY_OFFENSE",
            Self::LossOfDownByDefense { .. } => "ENFORCEMENT_LOSS_OF_DOWN_BY_DEFENSE",
        }
    }
}
