//! Directional yard-line arithmetic shared by penalty enforcement, the play
//! resolver and the display helpers.
//!
//! Every sign flip between "driving left" and "driving right" lives here.

use super::{DriveDirection, YardLine};

/// Moves `delta` yards forward (negative: backward) in the drive direction.
///
/// The result is raw and may fall off the field; callers decide whether that
/// means a score, a half-the-distance cap, or a clamp.
pub fn advance(yard_line: YardLine, direction: DriveDirection, delta: i16) -> i16 {
    i16::from(yard_line.value()) + direction.sign() * delta
}

/// Yards from `yard_line` to the goal line ahead of the offense.
pub fn distance_to_goal(yard_line: YardLine, direction: DriveDirection) -> u8 {
    match direction {
        DriveDirection::Right => 100 - yard_line.value(),
        DriveDirection::Left => yard_line.value(),
    }
}

/// Yards from `yard_line` back to the offense's own goal line.
pub fn distance_to_own_goal(yard_line: YardLine, direction: DriveDirection) -> u8 {
    distance_to_goal(yard_line, direction.flip())
}

/// Signed yards gained moving from `from` to `to`.
pub fn yards_gained(from: YardLine, to: YardLine, direction: DriveDirection) -> i16 {
    (i16::from(to.value()) - i16::from(from.value())) * direction.sign()
}

/// Goal-to-go cap: never more than the yards left to the goal line, never
/// less than one.
pub fn cap_distance_to_goal(yard_line: YardLine, direction: DriveDirection, requested: u8) -> u8 {
    requested.min(distance_to_goal(yard_line, direction)).max(1)
}
