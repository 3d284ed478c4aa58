//! Authoritative game state representation.
//!
//! One [`GameState`] value describes everything the rules need between snaps.
//! Runtime layers clone or query it but change it exclusively through the
//! engine.
pub mod delta;

pub use delta::{GameFields, StateDelta};

use crate::config::RulesConfig;
use crate::field::{DriveDirection, FieldState, YardLine, advance, distance_to_own_goal};

/// Which team has the ball, relative to the tracked team.
///
/// `Offense` means the tracked (home) team is in possession.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum Possession {
    #[default]
    Offense,
    Defense,
}

impl Possession {
    pub const fn flip(self) -> Self {
        match self {
            Self::Offense => Self::Defense,
            Self::Defense => Self::Offense,
        }
    }

    /// `"home"` for the tracked team, `"away"` for its opponent.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Offense => "home",
            Self::Defense => "away",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoreboard {
    pub home: u16,
    pub away: u16,
}

impl Scoreboard {
    pub fn credit(&mut self, team: Possession, points: u8) {
        match team {
            Possession::Offense => self.home += u16::from(points),
            Possession::Defense => self.away += u16::from(points),
        }
    }

    pub fn points(&self, team: Possession) -> u16 {
        match team {
            Possession::Offense => self.home,
            Possession::Defense => self.away,
        }
    }

    pub fn is_tied(&self) -> bool {
        self.home == self.away
    }
}

impl core::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Quarter {
    #[default]
    Q1,
    Q2,
    Q3,
    Q4,
    /// Overtime period. Repeats until the tie is broken.
    #[strum(serialize = "OT")]
    Overtime,
}

impl Quarter {
    pub const fn is_first_half(self) -> bool {
        matches!(self, Self::Q1 | Self::Q2)
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum GamePhase {
    /// Ball is set for a free kick; `possession` is the receiving team.
    #[default]
    Kickoff,
    Scrimmage,
    /// Scrimmage down after a touchdown.
    Try,
    Halftime,
    Final,
}

impl GamePhase {
    pub const fn is_live(self) -> bool {
        !matches!(self, Self::Halftime | Self::Final)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeouts {
    pub home: u8,
    pub away: u8,
}

impl Timeouts {
    pub const fn full(per_half: u8) -> Self {
        Self {
            home: per_half,
            away: per_half,
        }
    }

    pub fn remaining(&self, team: Possession) -> u8 {
        match team {
            Possession::Offense => self.home,
            Possession::Defense => self.away,
        }
    }

    /// Charges one timeout; returns false when none are left.
    pub fn charge(&mut self, team: Possession) -> bool {
        let slot = match team {
            Possession::Offense => &mut self.home,
            Possession::Defense => &mut self.away,
        };
        match slot.checked_sub(1) {
            Some(left) => {
                *slot = left;
                true
            }
            None => false,
        }
    }
}

/// Result of the coin toss.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpeningToss {
    /// Team receiving the opening kickoff.
    pub receiving: Possession,
    /// Direction the receiving team drives in the first quarter.
    pub direction: DriveDirection,
}

/// Canonical snapshot of the game between snaps.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Down, distance and spot for the team in possession.
    ///
    /// In `Kickoff` the line of scrimmage is the kicking spot seen from the
    /// receiving team.
    pub field: FieldState,
    pub possession: Possession,
    pub score: Scoreboard,
    pub quarter: Quarter,
    pub phase: GamePhase,
    /// Seconds left in the quarter.
    pub clock_secs: u16,
    pub timeouts: Timeouts,
    /// Team that received the opening kickoff; the other team receives after halftime.
    pub opening_receiver: Possession,
    /// Number of plays executed so far.
    pub sequence: u32,
    /// Series completed in the current overtime period.
    #[cfg_attr(feature = "serde", serde(default))]
    pub overtime_series: u8,
}

impl GameState {
    /// First-quarter kickoff after the coin toss.
    pub fn opening(toss: OpeningToss, rules: &RulesConfig) -> Self {
        let mut state = Self {
            field: FieldState::first_and_ten(YardLine::MIDFIELD, toss.direction),
            possession: toss.receiving,
            score: Scoreboard::default(),
            quarter: Quarter::Q1,
            phase: GamePhase::Kickoff,
            clock_secs: rules.quarter_length_secs,
            timeouts: Timeouts::full(rules.timeouts_per_half),
            opening_receiver: toss.receiving,
            sequence: 0,
            overtime_series: 0,
        };
        state.set_up_free_kick(toss.receiving, rules);
        state
    }

    /// Hands the ball to the other team for a fresh series at `spot`.
    pub fn change_possession(&mut self, spot: YardLine) {
        self.possession = self.possession.flip();
        self.field = self.field.change_possession(spot);
    }

    /// Sets up a free kick received by `receiving`.
    ///
    /// The spot is the kicking team's kickoff line, expressed from the
    /// receiving team's side of the field.
    pub fn set_up_free_kick(&mut self, receiving: Possession, rules: &RulesConfig) {
        self.free_kick_from(receiving, rules.kickoff_yard_line);
    }

    /// Sets up the free kick after a safety, from the kicking team's 20.
    pub fn set_up_safety_kick(&mut self, receiving: Possession, rules: &RulesConfig) {
        self.free_kick_from(receiving, rules.safety_kick_yard_line);
    }

    fn free_kick_from(&mut self, receiving: Possession, kick_yard_line: u8) {
        let direction = if receiving == self.possession {
            self.field.direction
        } else {
            self.field.direction.flip()
        };
        let kicking_spot = advance(
            direction.goal_ahead(),
            direction,
            -i16::from(kick_yard_line),
        );
        self.possession = receiving;
        self.field = FieldState::first_and_ten(YardLine::live(kicking_spot), direction);
        self.phase = GamePhase::Kickoff;
    }

    /// Sets up the try for the team that just scored a touchdown.
    pub fn set_up_try(&mut self, scoring: Possession, rules: &RulesConfig) {
        let direction = if scoring == self.possession {
            self.field.direction
        } else {
            self.field.direction.flip()
        };
        let spot = advance(
            direction.goal_ahead(),
            direction,
            -i16::from(rules.try_yard_line),
        );
        self.possession = scoring;
        self.field = FieldState::first_and_ten(YardLine::live(spot), direction);
        self.phase = GamePhase::Try;
    }

    /// Fresh series for the team in possession at `spot`, or
    /// `touchback_yards` from its own goal when `spot` is in its own end zone.
    pub fn start_series(&mut self, spot: YardLine, touchback_yards: u8) {
        let direction = self.field.direction;
        let spot = if distance_to_own_goal(spot, direction) == 0 {
            touchback_spot(direction, touchback_yards)
        } else {
            spot
        };
        self.field = FieldState::first_and_ten(spot, direction);
        self.phase = GamePhase::Scrimmage;
    }

    pub fn is_final(&self) -> bool {
        self.phase == GamePhase::Final
    }

    pub fn is_overtime(&self) -> bool {
        self.quarter == Quarter::Overtime
    }

    /// Ends the current possession. In overtime the other team starts its
    /// own series; otherwise it takes over at `spot`.
    pub fn turn_over(&mut self, spot: YardLine, rules: &RulesConfig) {
        if self.is_overtime() {
            self.end_overtime_series(rules);
        } else {
            self.change_possession(spot);
        }
    }

    /// Kickoff to `receiving` after a score, or the next overtime series.
    pub fn kick_after_score(&mut self, receiving: Possession, rules: &RulesConfig) {
        if self.is_overtime() {
            self.end_overtime_series(rules);
        } else {
            self.set_up_free_kick(receiving, rules);
        }
    }

    /// Opens an overtime period for the team not in possession, attacking
    /// the goal the other team defended.
    pub fn start_overtime(&mut self, rules: &RulesConfig) {
        self.quarter = Quarter::Overtime;
        self.clock_secs = rules.quarter_length_secs;
        self.timeouts = Timeouts::full(RulesConfig::OVERTIME_TIMEOUTS);
        self.overtime_series = 0;
        self.possession = self.possession.flip();
        self.field.direction = self.field.direction.flip();
        self.start_overtime_series(rules);
    }

    /// Closes the series of the team in possession.
    ///
    /// Each team gets one series per period, both attacking the same goal,
    /// with no kickoffs. After the second series the game is final unless
    /// it is still tied, in which case the team that went second opens the
    /// next period.
    pub fn end_overtime_series(&mut self, rules: &RulesConfig) {
        self.overtime_series += 1;
        if self.overtime_series % 2 == 1 {
            self.possession = self.possession.flip();
            self.start_overtime_series(rules);
        } else if !self.score.is_tied() {
            self.phase = GamePhase::Final;
            self.clock_secs = 0;
        } else {
            self.overtime_series = 0;
            self.timeouts = Timeouts::full(RulesConfig::OVERTIME_TIMEOUTS);
            self.start_overtime_series(rules);
        }
    }

    fn start_overtime_series(&mut self, rules: &RulesConfig) {
        let direction = self.field.direction;
        let spot = advance(
            direction.goal_ahead(),
            direction,
            -i16::from(rules.overtime_yard_line),
        );
        self.field = FieldState::first_and_ten(YardLine::live(spot), direction);
        self.phase = GamePhase::Scrimmage;
    }
}

/// Touchback spot for a team driving in `direction`.
pub fn touchback_spot(direction: DriveDirection, touchback_yards: u8) -> YardLine {
    YardLine::live(advance(
        direction.goal_behind(),
        direction,
        i16::from(touchback_yards),
    ))
}
