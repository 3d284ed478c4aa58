//! Field position, drive direction and down/distance bookkeeping.
//!
//! The field is a 0–100 line with a goal line at each end. Nothing here is
//! absolute: "ahead" and "behind" only make sense together with the
//! [`DriveDirection`] of the team in possession, so every calculation goes
//! through the primitives in [`geometry`].
mod format;
pub mod geometry;

pub use format::{down_ordinal, format_down_and_distance, format_yard_line};
pub use geometry::{
    advance, cap_distance_to_goal, distance_to_goal, distance_to_own_goal, yards_gained,
};

use crate::config::RulesConfig;
use crate::error::{ErrorSeverity, GameError};

/// Absolute yard line on the 0–100 scale.
///
/// 0 and 100 are the goal lines; live-ball spots are 1–99.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct YardLine(u8);

impl YardLine {
    /// Goal line the offense reaches when driving left.
    pub const LEFT_GOAL: Self = Self(0);
    /// Goal line the offense reaches when driving right.
    pub const RIGHT_GOAL: Self = Self(100);
    pub const MIDFIELD: Self = Self(50);

    pub const fn new(value: u8) -> Result<Self, FieldError> {
        if value > 100 {
            Err(FieldError::YardLineOutOfRange(value as i16))
        } else {
            Ok(Self(value))
        }
    }

    /// Converts a raw (possibly off-field) value, rejecting anything outside 0–100.
    pub fn from_raw(raw: i16) -> Result<Self, FieldError> {
        u8::try_from(raw)
            .ok()
            .filter(|value| *value <= 100)
            .map(Self)
            .ok_or(FieldError::YardLineOutOfRange(raw))
    }

    /// Clamps a raw value into the live-ball range 1–99.
    pub fn live(raw: i16) -> Self {
        Self(raw.clamp(1, 99) as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_live(self) -> bool {
        self.0 >= 1 && self.0 <= 99
    }

    /// The same spot seen from the other end of the field.
    pub const fn mirrored(self) -> Self {
        Self(100 - self.0)
    }
}

impl TryFrom<u8> for YardLine {
    type Error = FieldError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<YardLine> for u8 {
    fn from(yard_line: YardLine) -> Self {
        yard_line.0
    }
}

impl core::fmt::Display for YardLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which goal line the team in possession is driving toward.
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
pub enum DriveDirection {
    /// Advancing toward yard line 0.
    Left,
    /// Advancing toward yard line 100.
    #[default]
    Right,
}

impl DriveDirection {
    pub const fn flip(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Sign applied to forward yardage.
    pub const fn sign(self) -> i16 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    /// The opponent's goal line.
    pub const fn goal_ahead(self) -> YardLine {
        match self {
            Self::Left => YardLine::LEFT_GOAL,
            Self::Right => YardLine::RIGHT_GOAL,
        }
    }

    /// The offense's own goal line.
    pub const fn goal_behind(self) -> YardLine {
        self.flip().goal_ahead()
    }
}

/// Unit relative to the ball: the team snapping it or the team defending.
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
pub enum Side {
    Offense,
    Defense,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Offense => Self::Defense,
            Self::Defense => Self::Offense,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldError {
    #[error("yard line {0} is off the field (expected 0-100)")]
    YardLineOutOfRange(i16),

    #[error("line of scrimmage {0} is not a live-ball spot (expected 1-99)")]
    DeadBallSpot(YardLine),

    #[error("down {0} is out of range (expected 1-4)")]
    InvalidDown(u8),

    #[error("distance {distance} is invalid at yard line {line_of_scrimmage} (expected 1-{max})")]
    InvalidDistance {
        distance: u8,
        line_of_scrimmage: YardLine,
        max: u8,
    },
}

impl GameError for FieldError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::YardLineOutOfRange(_) => "FIELD_YARD_LINE_OUT_OF_RANGE",
            Self::DeadBallSpot(_) => "FIELD_DEAD_BALL_SPOT",
            Self::InvalidDown(_) => "FIELD_INVALID_DOWN",
            Self::InvalidDistance { .. } => "FIELD_INVALID_DISTANCE",
        }
    }
}

/// Line of scrimmage, drive direction, down and distance for the next snap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldState {
    pub line_of_scrimmage: YardLine,
    pub direction: DriveDirection,
    pub down: u8,
    pub distance: u8,
}

impl FieldState {
    pub const FIRST_DOWN: u8 = 1;
    pub const LAST_DOWN: u8 = 4;

    /// Creates a validated field state.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] if the line of scrimmage is not live, the down is
    /// outside 1–4, or the distance is zero or reaches past the goal line.
    pub fn new(
        line_of_scrimmage: YardLine,
        direction: DriveDirection,
        down: u8,
        distance: u8,
    ) -> Result<Self, FieldError> {
        let field = Self {
            line_of_scrimmage,
            direction,
            down,
            distance,
        };
        field.validate()?;
        Ok(field)
    }

    /// 1st & 10 (or 1st & goal) at `spot`, clamped to a live-ball spot.
    pub fn first_and_ten(spot: YardLine, direction: DriveDirection) -> Self {
        let line_of_scrimmage = YardLine::live(i16::from(spot.value()));
        Self {
            line_of_scrimmage,
            direction,
            down: Self::FIRST_DOWN,
            distance: cap_distance_to_goal(
                line_of_scrimmage,
                direction,
                RulesConfig::FIRST_DOWN_YARDS,
            ),
        }
    }

    /// Fresh set of downs for the other team at `spot`.
    pub fn change_possession(&self, spot: YardLine) -> Self {
        Self::first_and_ten(spot, self.direction.flip())
    }

    /// Teams switch ends between quarters: same relative spot, mirrored field.
    pub fn change_ends(&self) -> Self {
        Self {
            line_of_scrimmage: self.line_of_scrimmage.mirrored(),
            direction: self.direction.flip(),
            ..*self
        }
    }

    /// Raw yard line of the first-down marker.
    pub fn line_to_gain(&self) -> i16 {
        advance(
            self.line_of_scrimmage,
            self.direction,
            i16::from(self.distance),
        )
    }

    /// Signed yards from `spot` to the first-down marker; zero or negative
    /// means the marker has been reached.
    pub fn yards_to_gain_from(&self, spot: YardLine) -> i16 {
        (self.line_to_gain() - i16::from(spot.value())) * self.direction.sign()
    }

    pub fn distance_to_goal(&self) -> u8 {
        distance_to_goal(self.line_of_scrimmage, self.direction)
    }

    pub fn is_goal_to_go(&self) -> bool {
        self.distance >= self.distance_to_goal()
    }

    /// Checks the live-ball invariants: LOS 1–99, down 1–4, and
    /// `1 <= distance <= distance_to_goal`.
    pub fn validate(&self) -> Result<(), FieldError> {
        if !self.line_of_scrimmage.is_live() {
            return Err(FieldError::DeadBallSpot(self.line_of_scrimmage));
        }
        if !(Self::FIRST_DOWN..=Self::LAST_DOWN).contains(&self.down) {
            return Err(FieldError::InvalidDown(self.down));
        }
        let max = self.distance_to_goal();
        if self.distance == 0 || self.distance > max {
            return Err(FieldError::InvalidDistance {
                distance: self.distance,
                line_of_scrimmage: self.line_of_scrimmage,
                max,
            });
        }
        Ok(())
    }

    /// Display form, e.g. `3rd & 4 at OPP 38`.
    pub fn describe(&self) -> String {
        format_down_and_distance(
            self.down,
            self.distance,
            self.line_of_scrimmage,
            self.direction,
        )
    }
}
