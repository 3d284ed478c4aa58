//! Direction-aware display strings for the scoreboard and play log.

use super::geometry::{distance_to_goal, distance_to_own_goal};
use super::{DriveDirection, YardLine};

/// `1st`, `2nd`, `3rd`, `4th`; anything else gets a `th` suffix.
pub fn down_ordinal(down: u8) -> String {
    match down {
        1 => "1st".to_owned(),
        2 => "2nd".to_owned(),
        3 => "3rd".to_owned(),
        _ => format!("{down}th"),
    }
}

/// Formats a yard line relative to the team driving in `direction`.
///
/// Returns `"50"` at midfield, `"OWN n"` in the offense's half and `"OPP n"`
/// in the opponent's half. Goal lines render as `OWN GOAL` / `OPP GOAL`.
pub fn format_yard_line(yard_line: YardLine, direction: DriveDirection) -> String {
    if yard_line == YardLine::MIDFIELD {
        return "50".to_owned();
    }

    let own = distance_to_own_goal(yard_line, direction);
    if own < 50 {
        if own == 0 {
            "OWN GOAL".to_owned()
        } else {
            format!("OWN {own}")
        }
    } else {
        match distance_to_goal(yard_line, direction) {
            0 => "OPP GOAL".to_owned(),
            opp => format!("OPP {opp}"),
        }
    }
}

/// Formats `"{ordinal} & {distance} at {yard line}"`, with `Goal` in place of
/// the distance when the first-down marker is at or beyond the goal line.
pub fn format_down_and_distance(
    down: u8,
    distance: u8,
    yard_line: YardLine,
    direction: DriveDirection,
) -> String {
    let to_go = if distance >= distance_to_goal(yard_line, direction) {
        "Goal".to_owned()
    } else {
        distance.to_string()
    };
    format!(
        "{} & {} at {}",
        down_ordinal(down),
        to_go,
        format_yard_line(yard_line, direction)
    )
}
