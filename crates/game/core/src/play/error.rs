//! Play errors.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::field::FieldError;
use crate::penalty::{CatalogError, EnforcementError};
use crate::state::{GamePhase, Possession};

use super::PlayKind;

/// Errors raised while validating or applying a play.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayError {
    /// The play cannot happen in the current phase (e.g. a field goal during a try).
    #[error("{play} is not allowed during {phase}")]
    WrongPhase { play: PlayKind, phase: GamePhase },

    #[error("{} team has no timeouts left", .team.label())]
    NoTimeoutsRemaining { team: Possession },

    #[error("clock value {seconds}s exceeds the quarter length of {max}s")]
    ClockOutOfRange { seconds: u16, max: u16 },

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Enforcement(#[from] EnforcementError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for PlayError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::WrongPhase { .. } | Self::NoTimeoutsRemaining { .. } => ErrorSeverity::Recoverable,
            Self::ClockOutOfRange { .. } => ErrorSeverity::Validation,
            Self::Field(error) => error.severity(),
            Self::Enforcement(error) => error.severity(),
            Self::Catalog(error) => error.severity(),
            Self::Oracle(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::WrongPhase { .. } => "PLAY_WRONG_PHASE",
            Self::NoTimeoutsRemaining { .. } => "PLAY_NO_TIMEOUTS_REMAINING",
            Self::ClockOutOfRange { .. } => "PLAY_CLOCK_OUT_OF_RANGE",
            Self::Field(error) => error.error_code(),
            Self::Enforcement(error) => error.error_code(),
            Self::Catalog(error) => error.error_code(),
            Self::Oracle(error) => error.error_code(),
        }
    }
}

/// Fails with `WrongPhase` unless `phase` is one of `allowed`.
pub(super) fn require_phase(
    play: PlayKind,
    phase: GamePhase,
    allowed: &[GamePhase],
) -> Result<(), PlayError> {
    if allowed.contains(&phase) {
        Ok(())
    } else {
        Err(PlayError::WrongPhase { play, phase })
    }
}
