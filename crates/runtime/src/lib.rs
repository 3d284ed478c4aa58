//! Runtime orchestration for live scorekeeping.
//!
//! This crate wraps the pure `sideline-core` engine in a stateful
//! [`GameSession`] that a sideline client drives one play at a time.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session, undo and ejection notices
//! - [`api`] exposes the error types downstream clients interact with
//! - [`log`] defines the play log entry
//! - [`summary`] folds the log into halftime and full-game statistics
//! - [`export`] serializes a session to JSON
pub mod api;
pub mod export;
pub mod log;
pub mod session;
pub mod summary;

pub use api::{Result, RuntimeError};
pub use export::GameExport;
pub use log::PlayLogEntry;
pub use session::{EJECTION_THRESHOLD, GameSession, TeamNames};
pub use summary::{GameSummary, TeamStats};
