use bitflags::bitflags;

bitflags! {
    /// Tracks which fields of a [`GameState`](crate::state::GameState) changed during a play.
    ///
    /// Each bit represents one field the scoreboard or play log cares about.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct GameFields: u16 {
        const LINE_OF_SCRIMMAGE = 1 << 0;
        const DOWN              = 1 << 1;
        const DISTANCE          = 1 << 2;
        const DIRECTION         = 1 << 3;
        const POSSESSION        = 1 << 4;
        const SCORE             = 1 << 5;
        const QUARTER           = 1 << 6;
        const PHASE             = 1 << 7;
        const CLOCK             = 1 << 8;
        const TIMEOUTS          = 1 << 9;
    }
}
