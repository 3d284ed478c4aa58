//! Play log entry type.
//!
//! Every accepted play is stored together with the state it was applied to,
//! so undo is a matter of popping the entry and restoring `before`.

use serde::{Deserialize, Serialize};

use sideline_core::{GameState, Play, PlayReport, Quarter, StateDelta};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayLogEntry {
    /// Sequence number assigned by the engine.
    pub sequence: u32,

    /// Quarter and clock when the play was entered.
    pub quarter: Quarter,
    pub clock_secs: u16,

    pub play: Play,
    pub report: PlayReport,
    pub delta: StateDelta,

    /// Field position and score going into the play, before it was applied.
    pub before: Box<GameState>,

    /// Warnings raised for the scorekeeper (e.g. ejections).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
}

impl PlayLogEntry {
    pub fn new(play: Play, before: GameState, report: PlayReport, delta: StateDelta) -> Self {
        Self {
            sequence: delta.sequence,
            quarter: before.quarter,
            clock_secs: before.clock_secs,
            play,
            report,
            delta,
            before: Box::new(before),
            notices: Vec::new(),
        }
    }

    /// One display line: `"Q2 05:32  Rush for 7 yards."`.
    pub fn line(&self) -> String {
        format!(
            "{} {:02}:{:02}  {}",
            self.quarter,
            self.clock_secs / 60,
            self.clock_secs % 60,
            self.report.description
        )
    }
}
