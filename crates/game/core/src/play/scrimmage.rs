//! Scrimmage plays: the ball is snapped from the line of scrimmage.

use crate::config::RulesConfig;
use crate::env::GameEnv;
use crate::field::{
    FieldState, YardLine, cap_distance_to_goal, distance_to_goal, distance_to_own_goal,
    format_yard_line, yards_gained,
};
use crate::state::{GamePhase, GameState};

use super::error::require_phase;
use super::{PlayError, PlayKind, PlayReport, PlayTransition, award_safety, award_touchdown, gain_phrase};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CarryKind {
    Rush,
    Completion,
    Sack,
}

/// A run, a completed pass or a sack, ending with the ball dead at `end_spot`.
///
/// An end spot on the goal line ahead is a touchdown; on the goal line
/// behind it is a safety.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BallCarry {
    pub kind: CarryKind,
    pub end_spot: YardLine,
}

impl BallCarry {
    pub fn new(kind: CarryKind, end_spot: YardLine) -> Self {
        Self { kind, end_spot }
    }

    fn play_kind(&self) -> PlayKind {
        match self.kind {
            CarryKind::Rush => PlayKind::Rush,
            CarryKind::Completion => PlayKind::Completion,
            CarryKind::Sack => PlayKind::Sack,
        }
    }
}

impl PlayTransition for BallCarry {
    type Error = PlayError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_phase(self.play_kind(), state.phase, &[GamePhase::Scrimmage])
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<PlayReport, Self::Error> {
        let rules = env.rules();
        let direction = state.field.direction;
        let yards = yards_gained(state.field.line_of_scrimmage, self.end_spot, direction);
        let lead = match self.kind {
            CarryKind::Rush => "Rush",
            CarryKind::Completion => "Pass complete",
            CarryKind::Sack => "Sacked",
        };
        let mut report = PlayReport {
            yards,
            ..PlayReport::new(format!("{lead} {}", gain_phrase(yards)))
        };

        let offense = state.possession;
        if distance_to_goal(self.end_spot, direction) == 0 {
            report.score = Some(award_touchdown(state, offense, rules));
            report.description.push_str(". Touchdown!");
        } else if distance_to_own_goal(self.end_spot, direction) == 0 {
            report.score = Some(award_safety(state, offense.flip(), rules));
            report.description.push_str(". Safety!");
        } else {
            next_down(state, self.end_spot, rules, &mut report);
        }
        Ok(report)
    }
}

/// Forward pass that falls incomplete; the ball returns to the previous spot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Incompletion;

impl PlayTransition for Incompletion {
    type Error = PlayError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_phase(PlayKind::Incompletion, state.phase, &[GamePhase::Scrimmage])
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<PlayReport, Self::Error> {
        let mut report = PlayReport::new("Incomplete pass");
        let spot = state.field.line_of_scrimmage;
        next_down(state, spot, env.rules(), &mut report);
        Ok(report)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TurnoverKind {
    Interception,
    /// Fumble recovered by the defense.
    Fumble,
}

/// The defense takes the ball away and returns it to `return_spot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turnover {
    pub kind: TurnoverKind,
    pub return_spot: YardLine,
}

impl Turnover {
    pub fn new(kind: TurnoverKind, return_spot: YardLine) -> Self {
        Self { kind, return_spot }
    }

    fn play_kind(&self) -> PlayKind {
        match self.kind {
            TurnoverKind::Interception => PlayKind::Interception,
            TurnoverKind::Fumble => PlayKind::Fumble,
        }
    }
}

impl PlayTransition for Turnover {
    type Error = PlayError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_phase(self.play_kind(), state.phase, &[GamePhase::Scrimmage])
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<PlayReport, Self::Error> {
        let rules = env.rules();
        let lead = match self.kind {
            TurnoverKind::Interception => "Intercepted",
            TurnoverKind::Fumble => "Fumble lost",
        };

        // Overtime series end as soon as the defense gains possession.
        if state.is_overtime() {
            state.end_overtime_series(rules);
            return Ok(PlayReport::new(format!("{lead}, end of series")));
        }

        state.possession = state.possession.flip();
        state.field.direction = state.field.direction.flip();
        let direction = state.field.direction;

        if distance_to_goal(self.return_spot, direction) == 0 {
            let returning = state.possession;
            let score = award_touchdown(state, returning, rules);
            return Ok(PlayReport {
                score: Some(score),
                ..PlayReport::new(format!("{lead} and returned for a touchdown!"))
            });
        }

        let touchback = distance_to_own_goal(self.return_spot, direction) == 0;
        state.start_series(self.return_spot, rules.touchback_yard_line);
        let description = if touchback {
            format!("{lead}, touchback")
        } else {
            format!(
                "{lead}, returned to {}",
                format_yard_line(self.return_spot, direction)
            )
        };
        Ok(PlayReport::new(description))
    }
}

/// Punt downed, fair caught or returned to `end_spot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Punt {
    pub end_spot: YardLine,
}

impl PlayTransition for Punt {
    type Error = PlayError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_phase(PlayKind::Punt, state.phase, &[GamePhase::Scrimmage])
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<PlayReport, Self::Error> {
        let rules = env.rules();
        let kicked_from = state.field.line_of_scrimmage;
        let kicking_direction = state.field.direction;

        if state.is_overtime() {
            state.end_overtime_series(rules);
            return Ok(PlayReport::new("Punt, end of series"));
        }

        state.possession = state.possession.flip();
        state.field.direction = kicking_direction.flip();
        if distance_to_goal(self.end_spot, state.field.direction) == 0 {
            let returning = state.possession;
            let score = award_touchdown(state, returning, rules);
            return Ok(PlayReport {
                score: Some(score),
                ..PlayReport::new("Punt returned for a touchdown!")
            });
        }

        let touchback = distance_to_own_goal(self.end_spot, state.field.direction) == 0;
        state.start_series(self.end_spot, rules.touchback_yard_line);

        let net = yards_gained(kicked_from, state.field.line_of_scrimmage, kicking_direction);
        let description = if touchback {
            "Punt, touchback".to_owned()
        } else {
            format!(
                "Punt to {}, net {net}",
                format_yard_line(state.field.line_of_scrimmage, state.field.direction)
            )
        };
        Ok(PlayReport::new(description))
    }
}

/// Moves the chains after a play that ended in the field of play at `spot`.
fn next_down(state: &mut GameState, spot: YardLine, rules: &RulesConfig, report: &mut PlayReport) {
    let field = state.field;
    let remaining = field.yards_to_gain_from(spot);

    if remaining <= 0 {
        state.field = FieldState::first_and_ten(spot, field.direction);
        report.first_down = true;
        report.description.push_str(". First down!");
    } else if field.down >= FieldState::LAST_DOWN {
        state.turn_over(spot, rules);
        report.description.push_str(". Turnover on downs.");
    } else {
        let remaining = u8::try_from(remaining).unwrap_or(u8::MAX);
        state.field = FieldState {
            line_of_scrimmage: spot,
            direction: field.direction,
            down: field.down + 1,
            distance: cap_distance_to_goal(spot, field.direction, remaining),
        };
        report.description.push('.');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulesConfig;
    use crate::field::DriveDirection;
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

    fn run<T: PlayTransition<Error = PlayError>>(
        play: &T,
        state: &mut GameState,
    ) -> Result<PlayReport, PlayError> {
        let env = GameEnv::empty();
        play.pre_validate(state, &env)?;
        let report = play.apply(state, &env)?;
        play.post_validate(state, &env)?;
        Ok(report)
    }

    #[test]
    fn short_gain_advances_the_down() {
        let mut state = scrimmage(30, DriveDirection::Right, 1, 10);
        let report = run(&BallCarry::new(CarryKind::Rush, yl(34)), &mut state).unwrap();

        assert_eq!(report.yards, 4);
        assert_eq!(report.description, "Rush for 4 yards.");
        assert_eq!(state.field.down, 2);
        assert_eq!(state.field.distance, 6);
        assert_eq!(state.field.line_of_scrimmage, yl(34));
    }

    #[test]
    fn reaching_the_marker_is_a_first_down_driving_left() {
        let mut state = scrimmage(30, DriveDirection::Left, 3, 4);
        let report = run(&BallCarry::new(CarryKind::Completion, yl(12)), &mut state).unwrap();

        assert!(report.first_down);
        assert_eq!(report.yards, 18);
        assert_eq!(state.field.down, 1);
        assert_eq!(state.field.distance, 10);
    }

    #[test]
    fn first_down_inside_the_ten_is_goal_to_go() {
        let mut state = scrimmage(80, DriveDirection::Right, 2, 5);
        run(&BallCarry::new(CarryKind::Rush, yl(94)), &mut state).unwrap();

        assert_eq!(state.field.down, 1);
        assert_eq!(state.field.distance, 6);
        assert!(state.field.is_goal_to_go());
    }

    #[test]
    fn reaching_the_goal_line_is_a_touchdown() {
        let mut state = scrimmage(88, DriveDirection::Right, 1, 10);
        let report = run(&BallCarry::new(CarryKind::Rush, YardLine::RIGHT_GOAL), &mut state).unwrap();

        assert_eq!(state.score.home, 6);
        assert_eq!(state.phase, GamePhase::Try);
        assert_eq!(state.field.line_of_scrimmage, yl(97));
        assert!(report.description.ends_with("Touchdown!"));
    }

    #[test]
    fn sack_in_the_end_zone_is_a_safety() {
        let mut state = scrimmage(95, DriveDirection::Left, 2, 10);
        let report = run(&BallCarry::new(CarryKind::Sack, YardLine::RIGHT_GOAL), &mut state).unwrap();

        assert_eq!(report.yards, -5);
        assert_eq!(state.score.away, 2);
        assert_eq!(state.phase, GamePhase::Kickoff);
        assert_eq!(state.possession, Possession::Defense);
        assert_eq!(state.field.line_of_scrimmage, yl(80));
        assert_eq!(
            format_yard_line(state.field.line_of_scrimmage, state.field.direction),
            "OPP 20"
        );
    }

    #[test]
    fn failed_fourth_down_turns_the_ball_over() {
        let mut state = scrimmage(60, DriveDirection::Right, 4, 2);
        let report = run(&Incompletion, &mut state).unwrap();

        assert_eq!(report.description, "Incomplete pass. Turnover on downs.");
        assert_eq!(state.possession, Possession::Defense);
        assert_eq!(state.field.direction, DriveDirection::Left);
        assert_eq!(state.field.line_of_scrimmage, yl(60));
        assert_eq!((state.field.down, state.field.distance), (1, 10));
    }

    #[test]
    fn interception_flips_possession_and_direction() {
        let mut state = scrimmage(45, DriveDirection::Right, 3, 7);
        let report = run(
            &Turnover::new(TurnoverKind::Interception, yl(70)),
            &mut state,
        )
        .unwrap();

        assert_eq!(state.possession, Possession::Defense);
        assert_eq!(state.field.direction, DriveDirection::Left);
        assert_eq!(state.field.line_of_scrimmage, yl(70));
        assert_eq!(report.description, "Intercepted, returned to OWN 30");
    }

    #[test]
    fn pick_six_scores_for_the_defense() {
        let mut state = scrimmage(45, DriveDirection::Right, 3, 7);
        let report = run(
            &Turnover::new(TurnoverKind::Interception, YardLine::LEFT_GOAL),
            &mut state,
        )
        .unwrap();

        assert_eq!(state.score.away, 6);
        assert_eq!(state.phase, GamePhase::Try);
        assert_eq!(state.field.line_of_scrimmage, yl(3));
        assert!(report.score.is_some());
    }

    #[test]
    fn punt_into_the_end_zone_is_a_touchback() {
        let mut state = scrimmage(55, DriveDirection::Right, 4, 8);
        let report = run(&Punt { end_spot: YardLine::RIGHT_GOAL }, &mut state).unwrap();

        assert_eq!(report.description, "Punt, touchback");
        assert_eq!(state.field.direction, DriveDirection::Left);
        assert_eq!(state.field.line_of_scrimmage, yl(80));
    }

    #[test]
    fn punt_returned_to_the_goal_scores() {
        let mut state = scrimmage(30, DriveDirection::Right, 4, 6);
        let report = run(&Punt { end_spot: YardLine::LEFT_GOAL }, &mut state).unwrap();

        assert_eq!(report.description, "Punt returned for a touchdown!");
        assert_eq!(report.score.map(|score| score.team), Some(Possession::Defense));
        assert_eq!(state.score.away, 6);
        assert_eq!(state.phase, GamePhase::Try);
        assert_eq!(state.possession, Possession::Defense);
        assert_eq!(state.field.line_of_scrimmage, yl(3));
    }

    #[test]
    fn overtime_interception_ends_the_series() {
        let rules = RulesConfig::default();
        let mut state = scrimmage(40, DriveDirection::Right, 2, 7);
        state.start_overtime(&rules);
        assert_eq!(state.possession, Possession::Defense);

        let report = run(
            &Turnover::new(TurnoverKind::Interception, yl(50)),
            &mut state,
        )
        .unwrap();
        assert_eq!(report.description, "Intercepted, end of series");
        assert_eq!(state.possession, Possession::Offense);
        assert_eq!(state.field.direction, DriveDirection::Left);
        assert_eq!(state.field.describe(), "1st & Goal at OPP 10");
    }

    #[test]
    fn overtime_turnover_on_downs_settles_the_game() {
        let rules = RulesConfig::default();
        let mut state = scrimmage(40, DriveDirection::Right, 2, 7);
        state.start_overtime(&rules);
        state.end_overtime_series(&rules);
        state.score.away = 3;
        state.field.down = 4;

        let report = run(&Incompletion, &mut state).unwrap();
        assert_eq!(report.description, "Incomplete pass. Turnover on downs.");
        assert!(state.is_final());
        assert_eq!(state.possession, Possession::Offense);
    }

    #[test]
    fn scrimmage_plays_need_a_scrimmage_down() {
        let mut state = GameState::opening(OpeningToss::default(), &RulesConfig::default());
        assert_eq!(
            run(&Incompletion, &mut state),
            Err(PlayError::WrongPhase {
                play: PlayKind::Incompletion,
                phase: GamePhase::Kickoff
            })
        );
    }
}
