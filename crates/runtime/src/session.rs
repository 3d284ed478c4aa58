//! The stateful shell around the pure engine.
//!
//! A [`GameSession`] owns the authoritative [`GameState`], the play log and
//! the catalog/rules pair the engine reads from. It is single-threaded and
//! owned by one caller.

use std::sync::Arc;

use sideline_core::{
    GameEngine, GameEnv, GameError, GameState, OpeningToss, PenaltyCatalog, PenaltyCategory,
    PenaltyTable, Play, Possession, RulesConfig,
};

use crate::api::{Result, RuntimeError};
use crate::export::GameExport;
use crate::log::PlayLogEntry;
use crate::summary::{GameSummary, halftime_index};

/// Unsportsmanlike fouls by one team that trigger an ejection notice.
pub const EJECTION_THRESHOLD: usize = 2;

/// Display names for the two teams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamNames {
    pub home: String,
    pub away: String,
}

impl TeamNames {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }

    pub fn get(&self, team: Possession) -> &str {
        match team {
            Possession::Offense => &self.home,
            Possession::Defense => &self.away,
        }
    }
}

impl Default for TeamNames {
    fn default() -> Self {
        Self::new("Home", "Away")
    }
}

pub struct GameSession {
    state: GameState,
    log: Vec<PlayLogEntry>,
    catalog: Arc<dyn PenaltyCatalog>,
    rules: RulesConfig,
    teams: TeamNames,
}

impl GameSession {
    /// Starts a game at the opening kickoff.
    pub fn new(opening: OpeningToss, rules: RulesConfig, catalog: Arc<dyn PenaltyCatalog>) -> Self {
        tracing::info!(
            receiving = opening.receiving.label(),
            direction = %opening.direction,
            "game started"
        );
        Self {
            state: GameState::opening(opening, &rules),
            log: Vec::new(),
            catalog,
            rules,
            teams: TeamNames::default(),
        }
    }

    /// Session with the built-in NFHS catalog and default rules.
    pub fn nfhs(opening: OpeningToss) -> Self {
        Self::new(
            opening,
            RulesConfig::default(),
            Arc::new(PenaltyTable::nfhs().clone()),
        )
    }

    #[must_use]
    pub fn with_team_names(mut self, teams: TeamNames) -> Self {
        self.teams = teams;
        self
    }

    /// Applies `play` and appends it to the log.
    ///
    /// A rejected play leaves the session unchanged.
    pub fn record(&mut self, play: Play) -> Result<&PlayLogEntry> {
        let kind = play.kind();
        let before = self.state.clone();
        let env = GameEnv::with_catalog(self.catalog.as_ref(), self.rules);

        let outcome = match GameEngine::new(&mut self.state).execute(env, &play) {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!(
                    play = %kind,
                    phase = error.phase().as_str(),
                    code = error.error_code(),
                    "play rejected: {error}"
                );
                return Err(RuntimeError::Rejected { play: kind, error });
            }
        };

        if let Some(foul) = &outcome.report.foul {
            tracing::debug!(
                penalty = %foul.penalty_id,
                team = foul.team.label(),
                yards = foul.enforcement.yards_applied,
                outcome = ?foul.enforcement.outcome,
                "penalty enforced"
            );
        }
        tracing::info!(
            sequence = outcome.delta.sequence,
            play = %kind,
            "{} | {}",
            outcome.report.description,
            self.state.field.describe()
        );

        let mut entry = PlayLogEntry::new(play, before, outcome.report, outcome.delta);
        if let Some(notice) = self.ejection_notice(&entry) {
            tracing::warn!("{notice}");
            entry.notices.push(notice);
        }

        let index = self.log.len();
        self.log.push(entry);
        Ok(&self.log[index])
    }

    /// Counts the unsportsmanlike fouls on the team charged in `entry`,
    /// including it.
    fn ejection_notice(&self, entry: &PlayLogEntry) -> Option<String> {
        let foul = entry.report.foul.as_ref()?;
        if foul.category != PenaltyCategory::Unsportsmanlike {
            return None;
        }
        let count = 1 + self
            .log
            .iter()
            .filter_map(|logged| logged.report.foul.as_ref())
            .filter(|logged| {
                logged.category == PenaltyCategory::Unsportsmanlike && logged.team == foul.team
            })
            .count();
        (count >= EJECTION_THRESHOLD).then(|| {
            format!(
                "{} has {count} unsportsmanlike fouls: the offending player is ejected",
                self.teams.get(foul.team)
            )
        })
    }

    /// Removes the last play and restores the state it was applied to.
    pub fn undo_last(&mut self) -> Result<PlayLogEntry> {
        let entry = self.log.pop().ok_or(RuntimeError::NothingToUndo)?;
        self.state = (*entry.before).clone();
        tracing::info!(
            sequence = entry.sequence,
            "undid: {}",
            entry.report.description
        );
        Ok(entry)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn log(&self) -> &[PlayLogEntry] {
        &self.log
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn catalog(&self) -> &dyn PenaltyCatalog {
        self.catalog.as_ref()
    }

    pub fn teams(&self) -> &TeamNames {
        &self.teams
    }

    /// Summary of every play recorded so far.
    pub fn summary(&self) -> GameSummary {
        GameSummary::from_log(&self.log, self.state.score)
    }

    /// Summary of the first half, once the second quarter has been ended.
    pub fn halftime_report(&self) -> Option<GameSummary> {
        let index = halftime_index(&self.log)?;
        let entries = &self.log[..=index];
        Some(GameSummary::from_log(entries, entries[index].before.score))
    }

    pub fn export(&self) -> GameExport {
        GameExport {
            home: self.teams.home.clone(),
            away: self.teams.away.clone(),
            state: self.state.clone(),
            summary: self.summary(),
            halftime: self.halftime_report(),
            log: self.log.clone(),
        }
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("plays", &self.log.len())
            .field("rules", &self.rules)
            .field("teams", &self.teams)
            .finish_non_exhaustive()
    }
}
