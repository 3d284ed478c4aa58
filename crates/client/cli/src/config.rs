//! CLI configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use sideline_runtime::TeamNames;

/// Settings that do not come from command line flags.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// `tracing` filter directive for the log file.
    pub log_filter: String,
    pub teams: TeamNames,
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_owned(),
            teams: TeamNames::default(),
            log_dir: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SIDELINE_LOG` - Log filter (default: info)
    /// - `SIDELINE_HOME_NAME` - Home team name (default: Home)
    /// - `SIDELINE_AWAY_NAME` - Away team name (default: Away)
    /// - `SIDELINE_LOG_DIR` - Directory for log files (default: platform-specific)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(filter) = read_env::<String>("SIDELINE_LOG") {
            config.log_filter = filter;
        }
        if let Some(home) = read_env::<String>("SIDELINE_HOME_NAME") {
            config.teams.home = home;
        }
        if let Some(away) = read_env::<String>("SIDELINE_AWAY_NAME") {
            config.teams.away = away;
        }
        config.log_dir = read_env::<PathBuf>("SIDELINE_LOG_DIR");

        config
    }

    /// Log directory, falling back to the platform cache directory.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(default_log_dir)
    }
}

/// Platform-specific log directory.
///
/// - macOS: `~/Library/Caches/sideline/logs`
/// - Linux: `~/.cache/sideline/logs` (or `$XDG_CACHE_HOME/sideline/logs`)
/// - Windows: `%LOCALAPPDATA%\sideline\logs`
fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "sideline")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/sideline"))
        .join("logs")
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    value.parse().ok()
}
