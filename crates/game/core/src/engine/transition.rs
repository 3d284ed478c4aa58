//! Play transition dispatch and execution logic.

use crate::env::GameEnv;
use crate::play::{EndQuarter, Incompletion, Play, PlayReport, PlayTransition, StartSecondHalf};
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the report.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and describe the play
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<PlayReport, TransitionPhaseError<T::Error>>
where
    T: PlayTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let report = transition
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(report)
}

/// Routes each play to its transition and tags failures with the play family.
pub(super) fn execute_transition(
    play: &Play,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<PlayReport, ExecuteError> {
    match play {
        Play::Carry(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Scrimmage)
        }
        Play::Incompletion => drive_transition(&Incompletion, state, env)
            .map_err(ExecuteError::Scrimmage),
        Play::Turnover(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Scrimmage)
        }
        Play::Punt(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Kicking)
        }
        Play::Kickoff(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Kicking)
        }
        Play::FieldGoal(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Kicking)
        }
        Play::Conversion(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Kicking)
        }
        Play::Penalty(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Penalty)
        }
        Play::Timeout(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Administrative)
        }
        Play::EndQuarter => {
            drive_transition(&EndQuarter, state, env).map_err(ExecuteError::Administrative)
        }
        Play::StartSecondHalf => drive_transition(&StartSecondHalf, state, env)
            .map_err(ExecuteError::Administrative),
        Play::SetClock(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Administrative)
        }
        Play::Correction(transition) => {
            drive_transition(transition, state, env).map_err(ExecuteError::Administrative)
        }
    }
}
