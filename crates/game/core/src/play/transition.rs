use crate::env::GameEnv;
use crate::field::FieldError;
use crate::state::{GamePhase, GameState};

use super::PlayReport;

/// Defines how a concrete play mutates game state.
///
/// Implementors can override the validation hooks to surface pre- and
/// post-conditions that must hold around the state mutation. All hooks
/// receive read-only access to the catalog and rules via `GameEnv` and must
/// stay side-effect free.
pub trait PlayTransition {
    type Error: From<FieldError>;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the play by mutating the game state directly. Implementations
    /// should assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<PlayReport, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    ///
    /// By default checks the field invariants whenever the next snap is a
    /// scrimmage down.
    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.phase == GamePhase::Scrimmage {
            state.field.validate()?;
        }
        Ok(())
    }
}
