//! Penalty calls routed through the enforcement engine.

use crate::env::GameEnv;
use crate::field::{FieldState, Side, YardLine};
use crate::penalty::{EnforcementInput, Outcome, enforce};
use crate::state::{GamePhase, GameState};

use super::error::require_phase;
use super::{FoulRecord, PlayError, PlayKind, PlayReport, PlayTransition, award_safety};

/// A flag thrown during a scrimmage down or a try.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PenaltyCall {
    /// Catalog id of the foul, e.g. `"holding-offense"`.
    pub penalty_id: String,
    pub committed_by: Side,
    #[cfg_attr(feature = "serde", serde(default))]
    pub spot_of_foul: Option<YardLine>,
}

impl PenaltyCall {
    pub fn new(penalty_id: impl Into<String>, committed_by: Side) -> Self {
        Self {
            penalty_id: penalty_id.into(),
            committed_by,
            spot_of_foul: None,
        }
    }

    #[must_use]
    pub fn at(mut self, spot_of_foul: YardLine) -> Self {
        self.spot_of_foul = Some(spot_of_foul);
        self
    }
}

impl PlayTransition for PenaltyCall {
    type Error = PlayError;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_phase(
            PlayKind::Penalty,
            state.phase,
            &[GamePhase::Scrimmage, GamePhase::Try],
        )?;
        env.catalog()?.get_by_id(&self.penalty_id)?;
        Ok(())
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<PlayReport, Self::Error> {
        let rules = env.rules();
        let penalty = env.catalog()?.get_by_id(&self.penalty_id)?;
        let input = EnforcementInput {
            penalty,
            committed_by: self.committed_by,
            field: state.field,
            spot_of_foul: self.spot_of_foul,
        };
        let result = enforce(&input)?;

        let offense = state.possession;
        let team = match self.committed_by {
            Side::Offense => offense,
            Side::Defense => offense.flip(),
        };
        let direction = state.field.direction;
        let yards = match self.committed_by {
            Side::Offense => -i16::from(result.yards_applied),
            Side::Defense => i16::from(result.yards_applied),
        };
        let mut report = PlayReport {
            yards,
            ..PlayReport::new(result.description.clone())
        };

        if state.phase == GamePhase::Try {
            // A try is a single down: only the spot moves.
            state.field = FieldState::first_and_ten(result.line_of_scrimmage, direction);
        } else {
            match result.outcome {
                Outcome::Normal => state.field = result.field(direction),
                Outcome::FirstDown => {
                    state.field = result.field(direction);
                    report.first_down = true;
                }
                Outcome::TurnoverOnDowns => state.turn_over(result.line_of_scrimmage, rules),
                Outcome::Safety => {
                    report.score = Some(award_safety(state, offense.flip(), rules));
                }
            }
        }

        report.foul = Some(FoulRecord {
            penalty_id: penalty.id.to_string(),
            category: penalty.category,
            team,
            enforcement: result,
        });
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulesConfig;
    use crate::field::DriveDirection;
    use crate::penalty::{CatalogError, PenaltyTable};
    use crate::state::{OpeningToss, Possession};

    fn yl(value: u8) -> YardLine {
        YardLine::new(value).unwrap()
    }

    fn scrimmage(los: u8, direction: DriveDirection, down: u8, distance: u8) -> GameState {
        let mut state = GameState::opening(OpeningToss::default(), &RulesConfig::default());
        state.phase = GamePhase::Scrimmage;
        state.field = FieldState::new(yl(los), direction, down, distance).unwrap();
        state
    }

    fn call(play: &PenaltyCall, state: &mut GameState) -> Result<PlayReport, PlayError> {
        let env = GameEnv::with_catalog(PenaltyTable::nfhs(), RulesConfig::default());
        play.pre_validate(state, &env)?;
        let report = play.apply(state, &env)?;
        play.post_validate(state, &env)?;
        Ok(report)
    }

    #[test]
    fn defensive_foul_is_charged_to_the_other_team() {
        let mut state = scrimmage(40, DriveDirection::Right, 1, 10);
        let report = call(
            &PenaltyCall::new("pass-interference-defense", Side::Defense),
            &mut state,
        )
        .unwrap();

        assert!(report.first_down);
        assert_eq!(report.yards, 15);
        let foul = report.foul.unwrap();
        assert_eq!(foul.team, Possession::Defense);
        assert_eq!(state.field.describe(), "1st & 10 at OPP 45");
    }

    #[test]
    fn grounding_in_the_end_zone_scores_for_the_defense() {
        let mut state = scrimmage(8, DriveDirection::Right, 2, 10);
        let report = call(
            &PenaltyCall::new("intentional-grounding", Side::Offense).at(yl(1)),
            &mut state,
        )
        .unwrap();

        assert_eq!(report.score.map(|score| score.points), Some(2));
        assert_eq!(state.score.away, 2);
        assert_eq!(state.phase, GamePhase::Kickoff);
        assert_eq!(state.possession, Possession::Defense);
        assert_eq!(state.field.direction, DriveDirection::Left);
        assert_eq!(state.field.line_of_scrimmage, yl(20));
    }

    #[test]
    fn loss_of_down_on_fourth_hands_over_the_ball() {
        let mut state = scrimmage(50, DriveDirection::Left, 4, 3);
        call(
            &PenaltyCall::new("illegal-forward-pass", Side::Offense),
            &mut state,
        )
        .unwrap();

        assert_eq!(state.possession, Possession::Defense);
        assert_eq!(state.field.direction, DriveDirection::Right);
        assert_eq!(state.field.line_of_scrimmage, yl(55));
    }

    #[test]
    fn foul_on_a_try_only_moves_the_spot() {
        let rules = RulesConfig::default();
        let mut state = scrimmage(50, DriveDirection::Right, 1, 10);
        state.set_up_try(Possession::Offense, &rules);

        call(&PenaltyCall::new("false-start", Side::Offense), &mut state).unwrap();
        assert_eq!(state.phase, GamePhase::Try);
        assert_eq!(state.field.line_of_scrimmage, yl(92));
        assert_eq!(state.field.down, 1);
    }

    #[test]
    fn unknown_penalty_is_rejected_before_anything_moves() {
        let mut state = scrimmage(50, DriveDirection::Right, 1, 10);
        let before = state.clone();
        let error = call(&PenaltyCall::new("spearing-nfl", Side::Defense), &mut state);

        assert_eq!(
            error,
            Err(PlayError::Catalog(CatalogError::NotFound("spearing-nfl".to_owned())))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn penalties_need_a_catalog() {
        let mut state = scrimmage(50, DriveDirection::Right, 1, 10);
        let env = GameEnv::empty();
        assert!(matches!(
            PenaltyCall::new("offside", Side::Defense).pre_validate(&state, &env),
            Err(PlayError::Oracle(_))
        ));
        state.phase = GamePhase::Kickoff;
        assert!(matches!(
            PenaltyCall::new("offside", Side::Defense).pre_validate(&state, &env),
            Err(PlayError::WrongPhase { .. })
        ));
    }
}
