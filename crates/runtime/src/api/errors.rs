//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the engine and the export so clients can bubble them
//! up with consistent context.
use sideline_core::{ExecuteError, GameError, PlayKind};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{play} rejected")]
    Rejected {
        play: PlayKind,
        #[source]
        error: ExecuteError,
    },

    #[error("play log is empty, nothing to undo")]
    NothingToUndo,

    #[error("failed to serialize game export")]
    Export(#[from] serde_json::Error),
}

impl RuntimeError {
    /// True when the session is unchanged and the scorekeeper can simply
    /// enter a different play.
    pub fn is_recoverable(&self) -> bool {
        match self {
            RuntimeError::Rejected { error, .. } => !error.severity().is_internal(),
            RuntimeError::NothingToUndo => true,
            RuntimeError::Export(_) => false,
        }
    }
}
