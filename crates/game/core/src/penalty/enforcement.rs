//! Penalty enforcement.
//!
//! [`enforce`] is a pure function from a foul and the current field state to
//! the field state for the next snap. It never touches the score or
//! possession; the play resolver turns a safety or a turnover on downs into
//! those changes.

use super::definition::{DownEffect, PenaltyDefinition};
use super::error::EnforcementError;
use crate::config::RulesConfig;
use crate::field::{
    advance, cap_distance_to_goal, distance_to_goal, distance_to_own_goal, down_ordinal,
    DriveDirection, FieldState, Side, YardLine,
};

/// Everything needed to walk off one foul.
#[derive(Clone, Copy, Debug)]
pub struct EnforcementInput<'a> {
    pub penalty: &'a PenaltyDefinition,
    pub committed_by: Side,
    pub field: FieldState,
    /// Required when the penalty enforces from the spot of the foul; ignored otherwise.
    pub spot_of_foul: Option<YardLine>,
}

impl<'a> EnforcementInput<'a> {
    pub fn new(penalty: &'a PenaltyDefinition, committed_by: Side, field: FieldState) -> Self {
        Self {
            penalty,
            committed_by,
            field,
            spot_of_foul: None,
        }
    }

    #[must_use]
    pub fn with_spot_of_foul(mut self, spot: YardLine) -> Self {
        self.spot_of_foul = Some(spot);
        self
    }
}

/// What the walk-off did to the series. Exactly one applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    /// Same series continues.
    #[default]
    Normal,
    FirstDown,
    /// Loss of down on 4th down.
    TurnoverOnDowns,
    /// Foul in the offense's own end zone; two points to the defense.
    Safety,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnforcementResult {
    pub line_of_scrimmage: YardLine,
    /// Down for the next snap. Reads 5 after a turnover on downs.
    pub down: u8,
    pub distance: u8,
    pub outcome: Outcome,
    /// Yards actually walked off, after any half-the-distance reduction.
    pub yards_applied: u8,
    pub half_distance: bool,
    pub description: String,
}

impl EnforcementResult {
    pub fn is_first_down(&self) -> bool {
        self.outcome == Outcome::FirstDown
    }

    pub fn is_turnover(&self) -> bool {
        self.outcome == Outcome::TurnoverOnDowns
    }

    pub fn is_safety(&self) -> bool {
        self.outcome == Outcome::Safety
    }

    /// Field state for the next snap by the same offense.
    ///
    /// Only meaningful for [`Outcome::Normal`] and [`Outcome::FirstDown`].
    pub fn field(&self, direction: DriveDirection) -> FieldState {
        FieldState {
            line_of_scrimmage: self.line_of_scrimmage,
            direction,
            down: self.down,
            distance: self.distance,
        }
    }
}

/// Walks off a penalty under NFHS rules.
///
/// # Errors
///
/// Rejects invalid field states, sides the penalty cannot be committed by,
/// and spot fouls without a spot of foul.
pub fn enforce(input: &EnforcementInput<'_>) -> Result<EnforcementResult, EnforcementError> {
    let EnforcementInput {
        penalty,
        committed_by,
        field,
        spot_of_foul,
    } = *input;

    field.validate()?;
    check_preconditions(penalty, committed_by)?;

    let spot = if penalty.is_spot_foul() {
        spot_of_foul.ok_or_else(|| EnforcementError::MissingSpotOfFoul {
            penalty: penalty.id.to_string(),
        })?
    } else {
        field.line_of_scrimmage
    };
    let direction = field.direction;

    // Yards between the enforcement spot and the goal line the foul moves toward.
    let room = match committed_by {
        Side::Offense => distance_to_own_goal(spot, direction),
        Side::Defense => distance_to_goal(spot, direction),
    };
    let half_distance = penalty.yards >= room;
    let yards_applied = if half_distance { room / 2 } else { penalty.yards };

    let delta = match committed_by {
        Side::Offense => -i16::from(yards_applied),
        Side::Defense => i16::from(yards_applied),
    };
    let line_of_scrimmage = YardLine::live(advance(spot, direction, delta));

    let safety = penalty.can_cause_safety() && distance_to_own_goal(spot, direction) <= 1;

    let to_goal = distance_to_goal(line_of_scrimmage, direction);
    let fresh_series = cap_distance_to_goal(line_of_scrimmage, direction, RulesConfig::FIRST_DOWN_YARDS);
    let remaining = field.yards_to_gain_from(line_of_scrimmage);

    let (down, distance, mut outcome) = match penalty.down_effect {
        DownEffect::AutoFirst => (FieldState::FIRST_DOWN, fresh_series, Outcome::FirstDown),
        DownEffect::LossOfDown if field.down >= FieldState::LAST_DOWN => (
            field.down + 1,
            cap_distance_to_goal(line_of_scrimmage, direction, field.distance),
            Outcome::TurnoverOnDowns,
        ),
        DownEffect::LossOfDown if remaining <= 0 => {
            (FieldState::FIRST_DOWN, fresh_series, Outcome::FirstDown)
        }
        DownEffect::Replay if remaining <= 0 && committed_by == Side::Defense => {
            (FieldState::FIRST_DOWN, fresh_series, Outcome::FirstDown)
        }
        // An offensive spot foul walked off beyond the marker keeps the down.
        DownEffect::Replay if remaining <= 0 => (
            field.down,
            cap_distance_to_goal(line_of_scrimmage, direction, clamp_yards(remaining.unsigned_abs())),
            Outcome::Normal,
        ),
        DownEffect::LossOfDown => (
            field.down + 1,
            remaining_distance(remaining, to_goal),
            Outcome::Normal,
        ),
        DownEffect::Replay => (field.down, remaining_distance(remaining, to_goal), Outcome::Normal),
    };
    if safety {
        outcome = Outcome::Safety;
    }

    let description = describe(penalty, committed_by, yards_applied, half_distance, down, distance, outcome);

    Ok(EnforcementResult {
        line_of_scrimmage,
        down,
        distance,
        outcome,
        yards_applied,
        half_distance,
        description,
    })
}

fn check_preconditions(penalty: &PenaltyDefinition, committed_by: Side) -> Result<(), EnforcementError> {
    match (penalty.down_effect, committed_by) {
        (DownEffect::AutoFirst, Side::Offense) => {
            return Err(EnforcementError::AutoFirstDownByOffense {
                penalty: penalty.id.to_string(),
            });
        }
        (DownEffect::LossOfDown, Side::Defense) => {
            return Err(EnforcementError::LossOfDownByDefense {
                penalty: penalty.id.to_string(),
            });
        }
        _ => {}
    }
    if !penalty.allows(committed_by) {
        return Err(EnforcementError::SideNotAllowed {
            penalty: penalty.id.to_string(),
            side: committed_by,
        });
    }
    Ok(())
}

/// Positive yards to the line to gain, goal-to-go capped.
fn remaining_distance(remaining: i16, to_goal: u8) -> u8 {
    let remaining = u8::try_from(remaining).unwrap_or(u8::MAX);
    remaining.min(to_goal).max(1)
}

fn clamp_yards(yards: u16) -> u8 {
    u8::try_from(yards).unwrap_or(u8::MAX)
}

fn describe(
    penalty: &PenaltyDefinition,
    committed_by: Side,
    yards_applied: u8,
    half_distance: bool,
    down: u8,
    distance: u8,
    outcome: Outcome,
) -> String {
    let mut text = format!("{}, {}. ", penalty.name, committed_by);
    if half_distance {
        text.push_str("Half the distance to the goal. ");
    } else {
        text.push_str(&format!("{yards_applied} yard penalty. "));
    }

    match outcome {
        Outcome::Safety => text.push_str("SAFETY - 2 points!"),
        Outcome::TurnoverOnDowns => text.push_str("Turnover on downs."),
        Outcome::FirstDown if penalty.is_auto_first_down() => text.push_str("Automatic first down."),
        Outcome::FirstDown => text.push_str("First down!"),
        Outcome::Normal if penalty.is_loss_of_down() => {
            text.push_str(&format!("Loss of down. {} & {distance}.", down_ordinal(down)));
        }
        Outcome::Normal => text.push_str(&format!("Replay {} down.", down_ordinal(down))),
    }
    text
}
