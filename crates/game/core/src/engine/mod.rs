//! Play execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. It
//! orchestrates the transition phases and surfaces rich error information
//! for the runtime. Scrimmage downs, kicks, penalties and administrative
//! entries all flow through the same execute() pipeline.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::env::GameEnv;
use crate::play::{Play, PlayReport};
use crate::state::{GameState, StateDelta};

/// Complete outcome of play execution.
///
/// Contains both state change metadata (delta) and the play-specific report.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// State change metadata (which fields changed).
    pub delta: StateDelta,

    /// Log line, yardage, score and foul details for the play.
    pub report: PlayReport,
}

/// Game engine that applies plays to a borrowed [`GameState`].
///
/// All state mutations flow through the three-phase pipeline:
/// pre_validate → apply → post_validate
///
/// A rejected play leaves the state exactly as it was.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes a play by routing it through the appropriate transition pipeline.
    ///
    /// Returns `ExecutionOutcome` containing both state delta and play report.
    pub fn execute(
        &mut self,
        env: GameEnv<'_>,
        play: &Play,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        let before = self.state.clone();

        let report = match transition::execute_transition(play, self.state, &env) {
            Ok(report) => report,
            Err(error) => {
                *self.state = before;
                return Err(error);
            }
        };

        // Count plays only after they are accepted.
        self.state.sequence += 1;

        let delta = StateDelta::from_states(play.kind(), &before, self.state);
        Ok(ExecutionOutcome { delta, report })
    }
}

impl GameState {
    /// Pure form of [`GameEngine::execute`]: returns the state after `play`
    /// and leaves `self` untouched.
    pub fn after(&self, play: &Play, env: GameEnv<'_>) -> Result<GameState, ExecuteError> {
        let mut next = self.clone();
        GameEngine::new(&mut next).execute(env, play)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulesConfig;
    use crate::field::{FieldState, Side, YardLine};
    use crate::penalty::PenaltyTable;
    use crate::play::{BallCarry, CarryKind, Kickoff, PenaltyCall, PlayError};
    use crate::state::{GameFields, GamePhase, OpeningToss};

    fn yl(value: u8) -> YardLine {
        YardLine::new(value).unwrap()
    }

    fn env() -> GameEnv<'static> {
        GameEnv::with_catalog(PenaltyTable::nfhs(), RulesConfig::default())
    }

    #[test]
    fn accepted_play_bumps_sequence_and_reports_delta() {
        let mut state = GameState::opening(OpeningToss::default(), &RulesConfig::default());
        let outcome = GameEngine::new(&mut state)
            .execute(env(), &Play::Kickoff(Kickoff { return_spot: yl(25) }))
            .unwrap();

        assert_eq!(state.sequence, 1);
        assert_eq!(outcome.delta.sequence, 1);
        assert!(outcome.delta.changed(GameFields::LINE_OF_SCRIMMAGE | GameFields::PHASE));
        assert!(!outcome.delta.changed(GameFields::SCORE));
        assert_eq!(outcome.report.description, "Kickoff returned to OWN 25");
    }

    #[test]
    fn rejected_play_leaves_state_untouched() {
        let mut state = GameState::opening(OpeningToss::default(), &RulesConfig::default());
        let before = state.clone();

        let error = GameEngine::new(&mut state)
            .execute(
                env(),
                &Play::Carry(BallCarry {
                    kind: CarryKind::Rush,
                    end_spot: yl(50),
                }),
            )
            .unwrap_err();

        assert_eq!(error.phase(), TransitionPhase::PreValidate);
        assert!(matches!(error, ExecuteError::Scrimmage(_)));
        assert!(matches!(error.play_error(), PlayError::WrongPhase { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn auto_first_down_by_offense_is_a_penalty_error() {
        let mut state = GameState::opening(OpeningToss::default(), &RulesConfig::default());
        state.phase = GamePhase::Scrimmage;
        state.field = FieldState::new(yl(30), state.field.direction, 2, 8).unwrap();

        let error = state
            .after(
                &Play::Penalty(PenaltyCall::new("roughing-passer", Side::Offense)),
                env(),
            )
            .unwrap_err();
        assert!(matches!(error, ExecuteError::Penalty(_)));
        assert_eq!(error.phase(), TransitionPhase::Apply);
        assert!(error.to_string().starts_with("penalty failed: apply failed:"));
    }

    #[test]
    fn after_is_pure() {
        let mut state = GameState::opening(OpeningToss::default(), &RulesConfig::default());
        state.phase = GamePhase::Scrimmage;
        state.field = FieldState::first_and_ten(yl(30), state.field.direction);

        let next = state
            .after(
                &Play::Carry(BallCarry {
                    kind: CarryKind::Completion,
                    end_spot: yl(42),
                }),
                env(),
            )
            .unwrap();

        assert_eq!(state.sequence, 0);
        assert_eq!(next.sequence, 1);
        assert_eq!(next.field.describe(), "1st & 10 at OWN 42");
    }
}
