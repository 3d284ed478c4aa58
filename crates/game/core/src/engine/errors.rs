//! Error types for the play execution pipeline.

use crate::error::{ErrorSeverity, GameError};
use crate::play::{BallCarry, FieldGoal, PenaltyCall, PlayTransition, Timeout};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing a play through the game engine.
///
/// Variants group plays by family; every family shares the same
/// [`crate::play::PlayError`] underneath.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecuteError {
    #[error("scrimmage play failed: {0}")]
    Scrimmage(TransitionPhaseError<<BallCarry as PlayTransition>::Error>),

    #[error("kicking play failed: {0}")]
    Kicking(TransitionPhaseError<<FieldGoal as PlayTransition>::Error>),

    #[error("penalty failed: {0}")]
    Penalty(TransitionPhaseError<<PenaltyCall as PlayTransition>::Error>),

    #[error("administrative entry failed: {0}")]
    Administrative(TransitionPhaseError<<Timeout as PlayTransition>::Error>),
}

impl ExecuteError {
    /// Pipeline stage that rejected the play.
    pub fn phase(&self) -> TransitionPhase {
        self.source_error().phase
    }

    fn source_error(&self) -> &TransitionPhaseError<crate::play::PlayError> {
        match self {
            Self::Scrimmage(inner)
            | Self::Kicking(inner)
            | Self::Penalty(inner)
            | Self::Administrative(inner) => inner,
        }
    }

    /// The underlying play error, without the pipeline stage.
    pub fn play_error(&self) -> &crate::play::PlayError {
        &self.source_error().error
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        let inner = self.source_error();
        match (inner.phase, inner.error.severity()) {
            // A transition that leaves a broken field behind is a rules bug.
            (TransitionPhase::PostValidate, ErrorSeverity::Validation) => ErrorSeverity::Internal,
            (_, severity) => severity,
        }
    }

    fn error_code(&self) -> &'static str {
        self.play_error().error_code()
    }
}
