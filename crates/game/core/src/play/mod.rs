//! Plays the scorekeeper can record, and how each one moves the game state.
//!
//! # Module Structure
//!
//! - `transition`: the [`PlayTransition`] trait every play implements
//! - `error`: [`PlayError`]
//! - `scrimmage`: runs, passes, sacks, incompletions, turnovers, punts
//! - `kicking`: kickoffs, field goals, tries
//! - `penalty`: penalty calls routed through the enforcement engine
//! - `admin`: timeouts, quarter changes, clock and down/distance corrections
mod admin;
mod error;
mod kicking;
mod penalty;
mod scrimmage;
mod transition;

pub use admin::{Correction, EndQuarter, SetClock, StartSecondHalf, Timeout};
pub use error::PlayError;
pub use kicking::{Conversion, ConversionKind, FieldGoal, Kickoff};
pub use penalty::PenaltyCall;
pub use scrimmage::{BallCarry, CarryKind, Incompletion, Punt, Turnover, TurnoverKind};
pub use transition::PlayTransition;

use crate::config::RulesConfig;
use crate::penalty::{EnforcementResult, PenaltyCategory};
use crate::state::{GameState, Possession};

/// One discrete event entered by the scorekeeper.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Play {
    Carry(BallCarry),
    Incompletion,
    Turnover(Turnover),
    Punt(Punt),
    Kickoff(Kickoff),
    FieldGoal(FieldGoal),
    Conversion(Conversion),
    Penalty(PenaltyCall),
    Timeout(Timeout),
    EndQuarter,
    StartSecondHalf,
    SetClock(SetClock),
    Correction(Correction),
}

impl Play {
    pub fn kind(&self) -> PlayKind {
        match self {
            Play::Carry(carry) => match carry.kind {
                CarryKind::Rush => PlayKind::Rush,
                CarryKind::Completion => PlayKind::Completion,
                CarryKind::Sack => PlayKind::Sack,
            },
            Play::Incompletion => PlayKind::Incompletion,
            Play::Turnover(turnover) => match turnover.kind {
                TurnoverKind::Interception => PlayKind::Interception,
                TurnoverKind::Fumble => PlayKind::Fumble,
            },
            Play::Punt(_) => PlayKind::Punt,
            Play::Kickoff(_) => PlayKind::Kickoff,
            Play::FieldGoal(_) => PlayKind::FieldGoal,
            Play::Conversion(conversion) => match conversion.kind {
                ConversionKind::ExtraPoint => PlayKind::ExtraPoint,
                ConversionKind::TwoPoint => PlayKind::TwoPoint,
            },
            Play::Penalty(_) => PlayKind::Penalty,
            Play::Timeout(_) => PlayKind::Timeout,
            Play::EndQuarter => PlayKind::EndQuarter,
            Play::StartSecondHalf => PlayKind::StartSecondHalf,
            Play::SetClock(_) => PlayKind::SetClock,
            Play::Correction(_) => PlayKind::Correction,
        }
    }
}

/// Flat tag naming a [`Play`], used in deltas, logs and statistics.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PlayKind {
    Rush,
    Completion,
    Sack,
    Incompletion,
    Interception,
    Fumble,
    Punt,
    Kickoff,
    FieldGoal,
    ExtraPoint,
    TwoPoint,
    Penalty,
    Timeout,
    EndQuarter,
    StartSecondHalf,
    SetClock,
    Correction,
}

impl PlayKind {
    /// Administrative entries do not count as plays in the summary.
    pub const fn is_snap(self) -> bool {
        !matches!(
            self,
            Self::Timeout | Self::EndQuarter | Self::StartSecondHalf | Self::SetClock | Self::Correction
        )
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
pub enum ScoreKind {
    Touchdown,
    FieldGoal,
    Safety,
    ExtraPoint,
    TwoPoint,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreEvent {
    pub team: Possession,
    pub kind: ScoreKind,
    pub points: u8,
}

/// Foul details kept for the log and the penalty statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoulRecord {
    pub penalty_id: String,
    pub category: PenaltyCategory,
    /// Team charged with the foul.
    pub team: Possession,
    pub enforcement: EnforcementResult,
}

/// Play-specific result returned alongside the state delta.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayReport {
    /// Human-readable log line.
    pub description: String,
    /// Net yards for the team that snapped the ball.
    pub yards: i16,
    pub first_down: bool,
    pub score: Option<ScoreEvent>,
    pub foul: Option<FoulRecord>,
}

impl PlayReport {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }
}

/// Credits a touchdown and sets up the try for the scoring team.
pub(crate) fn award_touchdown(
    state: &mut GameState,
    team: Possession,
    rules: &RulesConfig,
) -> ScoreEvent {
    let event = award(state, team, ScoreKind::Touchdown, rules.touchdown_points);
    state.set_up_try(team, rules);
    event
}

/// Credits a safety; the scoring team receives the ensuing free kick.
pub(crate) fn award_safety(state: &mut GameState, team: Possession, rules: &RulesConfig) -> ScoreEvent {
    let event = award(state, team, ScoreKind::Safety, rules.safety_points);
    if state.is_overtime() {
        state.end_overtime_series(rules);
    } else {
        state.set_up_safety_kick(team, rules);
    }
    event
}

pub(crate) fn award(state: &mut GameState, team: Possession, kind: ScoreKind, points: u8) -> ScoreEvent {
    state.score.credit(team, points);
    ScoreEvent { team, kind, points }
}

/// `"for 7 yards"`, `"for no gain"`, `"for a loss of 3"`.
pub(crate) fn gain_phrase(yards: i16) -> String {
    match yards {
        0 => "for no gain".to_owned(),
        1 => "for 1 yard".to_owned(),
        n if n > 0 => format!("for {n} yards"),
        n => format!("for a loss of {}", -n),
    }
}
