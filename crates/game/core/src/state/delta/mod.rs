mod bitmask;

use crate::play::PlayKind;
use crate::state::GameState;

pub use bitmask::GameFields;

/// Minimal description of an executed play's impact on the game state.
///
/// Captures which fields changed, not their values; the new values are on
/// the state itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateDelta {
    /// The play that caused this transition.
    pub play: PlayKind,
    /// Sequence number assigned to the play.
    pub sequence: u32,
    pub fields: GameFields,
}

impl StateDelta {
    /// Creates a delta by comparing two game states field by field.
    pub fn from_states(play: PlayKind, before: &GameState, after: &GameState) -> Self {
        let mut fields = GameFields::empty();
        let mut mark = |changed: bool, flag: GameFields| fields.set(flag, changed);

        mark(
            before.field.line_of_scrimmage != after.field.line_of_scrimmage,
            GameFields::LINE_OF_SCRIMMAGE,
        );
        mark(before.field.down != after.field.down, GameFields::DOWN);
        mark(before.field.distance != after.field.distance, GameFields::DISTANCE);
        mark(before.field.direction != after.field.direction, GameFields::DIRECTION);
        mark(before.possession != after.possession, GameFields::POSSESSION);
        mark(before.score != after.score, GameFields::SCORE);
        mark(before.quarter != after.quarter, GameFields::QUARTER);
        mark(before.phase != after.phase, GameFields::PHASE);
        mark(before.clock_secs != after.clock_secs, GameFields::CLOCK);
        mark(before.timeouts != after.timeouts, GameFields::TIMEOUTS);

        Self {
            play,
            sequence: after.sequence,
            fields,
        }
    }

    /// Returns true if the play left every tracked field untouched.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn changed(&self, fields: GameFields) -> bool {
        self.fields.intersects(fields)
    }
}
