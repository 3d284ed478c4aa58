//! Statistical summary derived from the play log.
//!
//! Nothing here is tracked incrementally: a summary is a fold over log
//! entries, so undo never leaves stale counts behind.

use serde::{Deserialize, Serialize};

use sideline_core::{
    FieldGoal, Play, PlayKind, Possession, Quarter, ScoreKind, Scoreboard,
};

use crate::log::PlayLogEntry;

/// Counts for one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStats {
    /// Snaps taken while in possession.
    pub plays: u16,
    pub touchdowns: u16,
    pub field_goals_made: u16,
    pub field_goals_missed: u16,
    /// Safeties scored.
    pub safeties: u16,
    /// Interceptions thrown.
    pub interceptions: u16,
    pub fumbles_lost: u16,
    /// Times sacked.
    pub sacks: u16,
    pub first_downs: u16,
    pub penalties: u16,
    pub penalty_yards: u16,
    pub timeouts_used: u16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub total_plays: u16,
    pub score: Scoreboard,
    pub home: TeamStats,
    pub away: TeamStats,
}

impl GameSummary {
    /// Folds `entries` in order. `score` is taken from the caller since the
    /// log does not store the state after the last play.
    pub fn from_log(entries: &[PlayLogEntry], score: Scoreboard) -> Self {
        let mut summary = Self {
            score,
            ..Self::default()
        };
        for entry in entries {
            summary.add(entry);
        }
        summary
    }

    pub fn team(&self, team: Possession) -> &TeamStats {
        match team {
            Possession::Offense => &self.home,
            Possession::Defense => &self.away,
        }
    }

    fn team_mut(&mut self, team: Possession) -> &mut TeamStats {
        match team {
            Possession::Offense => &mut self.home,
            Possession::Defense => &mut self.away,
        }
    }

    fn add(&mut self, entry: &PlayLogEntry) {
        let kind = entry.play.kind();
        let offense = entry.before.possession;
        let report = &entry.report;

        if kind.is_snap() {
            self.total_plays += 1;
            self.team_mut(offense).plays += 1;
        }
        if report.first_down {
            self.team_mut(offense).first_downs += 1;
        }

        match &entry.play {
            Play::Carry(_) if kind == PlayKind::Sack => self.team_mut(offense).sacks += 1,
            Play::Turnover(_) if kind == PlayKind::Interception => {
                self.team_mut(offense).interceptions += 1;
            }
            Play::Turnover(_) => self.team_mut(offense).fumbles_lost += 1,
            Play::FieldGoal(FieldGoal { good: false }) => {
                self.team_mut(offense).field_goals_missed += 1;
            }
            Play::Timeout(timeout) => self.team_mut(timeout.team).timeouts_used += 1,
            _ => {}
        }

        if let Some(score) = report.score {
            let stats = self.team_mut(score.team);
            match score.kind {
                ScoreKind::Touchdown => stats.touchdowns += 1,
                ScoreKind::FieldGoal => stats.field_goals_made += 1,
                ScoreKind::Safety => stats.safeties += 1,
                ScoreKind::ExtraPoint | ScoreKind::TwoPoint => {}
            }
        }

        if let Some(foul) = &report.foul {
            let stats = self.team_mut(foul.team);
            stats.penalties += 1;
            stats.penalty_yards += u16::from(foul.enforcement.yards_applied);
        }
    }
}

/// Index of the entry that ended the second quarter, if it has been recorded.
pub(crate) fn halftime_index(entries: &[PlayLogEntry]) -> Option<usize> {
    entries.iter().position(|entry| {
        entry.play.kind() == PlayKind::EndQuarter && entry.before.quarter == Quarter::Q2
    })
}
