//! Deterministic football scorekeeping rules shared across clients.
//!
//! `sideline-core` defines the canonical rules (field geometry, penalty
//! enforcement, play resolution, game state) and exposes pure APIs that can be
//! reused by both the runtime and offline tools. All state mutation flows
//! through [`engine::GameEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod field;
pub mod penalty;
pub mod play;
pub mod state;

pub use config::RulesConfig;
pub use engine::{ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase, TransitionPhaseError};
pub use env::{Env, GameEnv, OracleError};
pub use error::{ErrorSeverity, GameError};
pub use field::{
    DriveDirection, FieldError, FieldState, Side, YardLine, format_down_and_distance,
    format_yard_line,
};
pub use penalty::{
    CatalogError, DownEffect, EnforcementError, EnforcementInput, EnforcementResult,
    EnforcementType, Outcome, PenaltyCatalog, PenaltyCategory, PenaltyDefinition, PenaltyTable,
    TeamRestriction, enforce,
};
pub use play::{
    BallCarry, CarryKind, Conversion, ConversionKind, Correction, EndQuarter, FieldGoal,
    FoulRecord, Incompletion, Kickoff, PenaltyCall, Play, PlayError, PlayKind, PlayReport,
    PlayTransition, Punt, ScoreEvent, ScoreKind, SetClock, StartSecondHalf, Timeout, Turnover,
    TurnoverKind,
};
pub use state::{
    GameFields, GamePhase, GameState, OpeningToss, Possession, Quarter, Scoreboard, StateDelta,
    Timeouts,
};
