//! Kicking plays: free kicks, field goals and tries.

use crate::env::GameEnv;
use crate::field::{YardLine, distance_to_goal, distance_to_own_goal, format_yard_line};
use crate::state::{GamePhase, GameState};

use super::error::require_phase;
use super::{PlayError, PlayKind, PlayReport, PlayTransition, ScoreKind, award, award_touchdown};

/// Free kick received by the team in possession and returned to `return_spot`.
///
/// A return spot in the receiving team's own end zone is a touchback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kickoff {
    pub return_spot: YardLine,
}

impl PlayTransition for Kickoff {
    type Error = PlayError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_phase(PlayKind::Kickoff, state.phase, &[GamePhase::Kickoff])
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<PlayReport, Self::Error> {
        let rules = env.rules();
        let direction = state.field.direction;

        if distance_to_goal(self.return_spot, direction) == 0 {
            let receiving = state.possession;
            let score = award_touchdown(state, receiving, rules);
            return Ok(PlayReport {
                score: Some(score),
                ..PlayReport::new("Kickoff returned for a touchdown!")
            });
        }

        let touchback = distance_to_own_goal(self.return_spot, direction) == 0;
        state.start_series(self.return_spot, rules.kickoff_touchback_yard_line);
        let description = if touchback {
            "Kickoff, touchback".to_owned()
        } else {
            format!(
                "Kickoff returned to {}",
                format_yard_line(state.field.line_of_scrimmage, direction)
            )
        };
        Ok(PlayReport::new(description))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldGoal {
    pub good: bool,
}

impl PlayTransition for FieldGoal {
    type Error = PlayError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        require_phase(PlayKind::FieldGoal, state.phase, &[GamePhase::Scrimmage])
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<PlayReport, Self::Error> {
        let rules = env.rules();
        let kicking = state.possession;

        if self.good {
            let score = award(state, kicking, ScoreKind::FieldGoal, rules.field_goal_points);
            state.kick_after_score(kicking.flip(), rules);
            Ok(PlayReport {
                score: Some(score),
                ..PlayReport::new("Field goal is good")
            })
        } else {
            // Missed kicks are taken over at the previous spot.
            let spot = state.field.line_of_scrimmage;
            state.turn_over(spot, rules);
            Ok(PlayReport::new("Field goal is no good"))
        }
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
pub enum ConversionKind {
    /// Kick try, one point.
    ExtraPoint,
    /// Scrimmage try, two points.
    TwoPoint,
}

/// The try after a touchdown. Either way the scoring team kicks off next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conversion {
    pub kind: ConversionKind,
    pub good: bool,
}

impl PlayTransition for Conversion {
    type Error = PlayError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let play = match self.kind {
            ConversionKind::ExtraPoint => PlayKind::ExtraPoint,
            ConversionKind::TwoPoint => PlayKind::TwoPoint,
        };
        require_phase(play, state.phase, &[GamePhase::Try])
    }

    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<PlayReport, Self::Error> {
        let rules = env.rules();
        let scoring = state.possession;
        let (kind, points, label) = match self.kind {
            ConversionKind::ExtraPoint => (ScoreKind::ExtraPoint, rules.extra_point_points, "Extra point"),
            ConversionKind::TwoPoint => (ScoreKind::TwoPoint, rules.two_point_points, "Two-point try"),
        };

        let mut report = PlayReport::new(if self.good {
            format!("{label} is good")
        } else {
            format!("{label} is no good")
        });
        if self.good {
            report.score = Some(award(state, scoring, kind, points));
        }
        state.kick_after_score(scoring.flip(), rules);
        Ok(report)
    }
}
