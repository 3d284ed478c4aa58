//! Administrative entries: timeouts, quarter changes, clock and down edits.
//!
//! None of these are snaps. They still run through the engine so the delta
//! and the play log see every change to the state.

use crate::env::GameEnv;
use crate::field::{FieldState, YardLine, distance_to_goal};
use crate::state::{GamePhase, GameState, Possession, Quarter, Timeouts};

use super::error::require_phase;
use super::{PlayError, PlayKind, PlayReport, PlayTransition};

const LIVE: &[GamePhase] = &[GamePhase::Kickoff, GamePhase::Scrimmage, GamePhase::Try];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeout {
    pub team: Possession,
}

impl PlayTransition for Timeout {
    type Error = PlayError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_phase(PlayKind::Timeout, state.phase, LIVE)?;
        if state.timeouts.remaining(self.team) == 0 {
            return Err(PlayError::NoTimeoutsRemaining { team: self.team });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<PlayReport, Self::Error> {
        if !state.timeouts.charge(self.team) {
            return Err(PlayError::NoTimeoutsRemaining { team: self.team });
        }
        Ok(PlayReport::new(format!(
            "Timeout {}, {} left",
            self.team.label(),
            state.timeouts.remaining(self.team)
        )))
    }
}

/// Closes the current quarter.
///
/// - Q1 and Q3: teams change ends, the series carries over.
/// - Q2: halftime, timeouts reset.
/// - Q4 and overtime: another overtime period when tied, otherwise final.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndQuarter;

impl PlayTransition for EndQuarter {
    type Error = PlayError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_phase(PlayKind::EndQuarter, state.phase, LIVE)
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<PlayReport, Self::Error> {
        let rules = env.rules();
        let ended = state.quarter;

        let description = match ended {
            Quarter::Q1 | Quarter::Q3 => {
                state.quarter = if ended == Quarter::Q1 {
                    Quarter::Q2
                } else {
                    Quarter::Q4
                };
                state.clock_secs = rules.quarter_length_secs;
                state.field = state.field.change_ends();
                format!("End of {ended}")
            }
            Quarter::Q2 => {
                state.phase = GamePhase::Halftime;
                state.clock_secs = 0;
                state.timeouts = Timeouts::full(rules.timeouts_per_half);
                format!("Halftime, {}", state.score)
            }
            Quarter::Q4 | Quarter::Overtime if state.score.is_tied() => {
                state.start_overtime(rules);
                format!("End of {ended}, overtime tied at {}", state.score)
            }
            Quarter::Q4 | Quarter::Overtime => {
                state.phase = GamePhase::Final;
                state.clock_secs = 0;
                format!("Final, {}", state.score)
            }
        };
        Ok(PlayReport::new(description))
    }
}

/// Leaves halftime into the third-quarter kickoff, received by the team that
/// kicked to open the game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartSecondHalf;

impl PlayTransition for StartSecondHalf {
    type Error = PlayError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_phase(PlayKind::StartSecondHalf, state.phase, &[GamePhase::Halftime])
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<PlayReport, Self::Error> {
        let rules = env.rules();
        let receiving = state.opening_receiver.flip();

        state.quarter = Quarter::Q3;
        state.clock_secs = rules.quarter_length_secs;
        state.timeouts = Timeouts::full(rules.timeouts_per_half);
        state.field = state.field.change_ends();
        state.set_up_free_kick(receiving, rules);

        Ok(PlayReport::new(format!(
            "Second half, {} team receives",
            receiving.label()
        )))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetClock {
    /// Seconds left in the quarter.
    pub seconds: u16,
}

impl PlayTransition for SetClock {
    type Error = PlayError;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_phase(
            PlayKind::SetClock,
            state.phase,
            &[
                GamePhase::Kickoff,
                GamePhase::Scrimmage,
                GamePhase::Try,
                GamePhase::Halftime,
            ],
        )?;
        let max = env.rules().quarter_length_secs;
        if self.seconds > max {
            return Err(PlayError::ClockOutOfRange {
                seconds: self.seconds,
                max,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<PlayReport, Self::Error> {
        state.clock_secs = self.seconds;
        Ok(PlayReport::new(format!(
            "Clock set to {}:{:02}",
            self.seconds / 60,
            self.seconds % 60
        )))
    }
}

/// Manual fix of the spot, down and distance.
///
/// A distance past the goal line is capped to goal-to-go; everything else
/// must already be a valid live-ball field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Correction {
    pub line_of_scrimmage: YardLine,
    pub down: u8,
    pub distance: u8,
}

impl Correction {
    fn corrected(&self, state: &GameState) -> Result<FieldState, PlayError> {
        let direction = state.field.direction;
        let to_goal = distance_to_goal(self.line_of_scrimmage, direction);
        Ok(FieldState::new(
            self.line_of_scrimmage,
            direction,
            self.down,
            self.distance.min(to_goal),
        )?)
    }
}

impl PlayTransition for Correction {
    type Error = PlayError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_phase(PlayKind::Correction, state.phase, &[GamePhase::Scrimmage])?;
        self.corrected(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<PlayReport, Self::Error> {
        state.field = self.corrected(state)?;
        Ok(PlayReport::new(format!(
            "Corrected to {}",
            state.field.describe()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulesConfig;
    use crate::field::{DriveDirection, FieldError};
    use crate::state::OpeningToss;

    fn yl(value: u8) -> YardLine {
        YardLine::new(value).unwrap()
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

    fn scrimmage(los: u8, direction: DriveDirection) -> GameState {
        let mut state = GameState::opening(OpeningToss::default(), &RulesConfig::default());
        state.phase = GamePhase::Scrimmage;
        state.field = FieldState::new(yl(los), direction, 2, 7).unwrap();
        state
    }

    #[test]
    fn timeouts_run_out() {
        let mut state = scrimmage(40, DriveDirection::Right);
        let team = Possession::Defense;
        for left in (0..3).rev() {
            let report = run(&Timeout { team }, &mut state).unwrap();
            assert_eq!(report.description, format!("Timeout away, {left} left"));
        }
        assert_eq!(
            run(&Timeout { team }, &mut state),
            Err(PlayError::NoTimeoutsRemaining { team })
        );
        assert_eq!(state.timeouts.remaining(Possession::Offense), 3);
    }

    #[test]
    fn first_quarter_ends_with_a_change_of_ends() {
        let mut state = scrimmage(40, DriveDirection::Right);
        state.clock_secs = 0;

        run(&EndQuarter, &mut state).unwrap();
        assert_eq!(state.quarter, Quarter::Q2);
        assert_eq!(state.clock_secs, 720);
        assert_eq!(state.field.line_of_scrimmage, yl(60));
        assert_eq!(state.field.direction, DriveDirection::Left);
        assert_eq!(state.field.describe(), "2nd & 7 at OWN 40");
    }

    #[test]
    fn halftime_resets_timeouts_and_the_other_team_receives() {
        let mut state = scrimmage(40, DriveDirection::Right);
        state.quarter = Quarter::Q2;
        state.timeouts = Timeouts { home: 0, away: 1 };

        let report = run(&EndQuarter, &mut state).unwrap();
        assert_eq!(report.description, "Halftime, 0-0");
        assert_eq!(state.phase, GamePhase::Halftime);
        assert_eq!(state.timeouts, Timeouts::full(3));
        assert!(matches!(
            run(&Timeout { team: Possession::Offense }, &mut state),
            Err(PlayError::WrongPhase { .. })
        ));

        run(&StartSecondHalf, &mut state).unwrap();
        assert_eq!(state.quarter, Quarter::Q3);
        assert_eq!(state.phase, GamePhase::Kickoff);
        assert_eq!(state.possession, Possession::Defense);
        // Home drove right in Q2; away drives right after the ends change.
        assert_eq!(state.field.direction, DriveDirection::Right);
        assert_eq!(state.field.line_of_scrimmage, yl(60));
    }

    #[test]
    fn tied_fourth_quarter_goes_to_overtime() {
        let mut state = scrimmage(40, DriveDirection::Right);
        state.quarter = Quarter::Q4;
        state.score.home = 14;
        state.score.away = 14;

        run(&EndQuarter, &mut state).unwrap();
        assert_eq!(state.quarter, Quarter::Overtime);
        assert_eq!(state.phase, GamePhase::Scrimmage);
        assert_eq!(state.possession, Possession::Defense);
        assert_eq!(state.field.describe(), "1st & Goal at OPP 10");
        assert_eq!(state.timeouts, Timeouts::full(1));
    }

    #[test]
    fn untied_game_is_final() {
        let mut state = scrimmage(40, DriveDirection::Right);
        state.quarter = Quarter::Overtime;
        state.score.home = 21;
        state.score.away = 14;

        let report = run(&EndQuarter, &mut state).unwrap();
        assert_eq!(report.description, "Final, 21-14");
        assert!(state.is_final());
        assert!(matches!(
            run(&SetClock { seconds: 10 }, &mut state),
            Err(PlayError::WrongPhase { .. })
        ));
    }

    #[test]
    fn clock_edits_are_bounded_by_the_quarter() {
        let mut state = scrimmage(40, DriveDirection::Right);
        let report = run(&SetClock { seconds: 332 }, &mut state).unwrap();
        assert_eq!(report.description, "Clock set to 5:32");
        assert_eq!(state.clock_secs, 332);

        assert_eq!(
            run(&SetClock { seconds: 721 }, &mut state),
            Err(PlayError::ClockOutOfRange {
                seconds: 721,
                max: 720
            })
        );
    }

    #[test]
    fn corrections_are_goal_capped_and_validated() {
        let mut state = scrimmage(40, DriveDirection::Right);
        let report = run(
            &Correction {
                line_of_scrimmage: yl(95),
                down: 3,
                distance: 10,
            },
            &mut state,
        )
        .unwrap();
        assert_eq!(report.description, "Corrected to 3rd & Goal at OPP 5");
        assert_eq!(state.field.distance, 5);

        assert_eq!(
            run(
                &Correction {
                    line_of_scrimmage: yl(50),
                    down: 5,
                    distance: 10,
                },
                &mut state,
            ),
            Err(PlayError::Field(FieldError::InvalidDown(5)))
        );
        assert_eq!(state.field.line_of_scrimmage, yl(95));
    }
}
