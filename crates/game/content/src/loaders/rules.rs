//! Rules configuration loader.

use std::path::Path;

use sideline_core::RulesConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for rules configuration from TOML files.
///
/// Missing keys keep their NFHS defaults, so a league file only lists what it
/// changes:
///
/// ```toml
/// quarter_length_secs = 600
/// timeouts_per_half = 2
/// ```
pub struct RulesLoader;

impl RulesLoader {
    /// Load rules from a TOML file and check that every spot is on the field.
    pub fn load(path: &Path) -> LoadResult<RulesConfig> {
        let content = read_file(path)?;
        let rules: RulesConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse rules TOML: {}", e))?;

        Self::validate(&rules)?;
        Ok(rules)
    }

    fn validate(rules: &RulesConfig) -> LoadResult<()> {
        anyhow::ensure!(
            rules.quarter_length_secs > 0,
            "quarter_length_secs must be positive"
        );
        for (name, yards) in [
            ("kickoff_yard_line", rules.kickoff_yard_line),
            ("safety_kick_yard_line", rules.safety_kick_yard_line),
            ("try_yard_line", rules.try_yard_line),
            ("touchback_yard_line", rules.touchback_yard_line),
            ("kickoff_touchback_yard_line", rules.kickoff_touchback_yard_line),
            ("overtime_yard_line", rules.overtime_yard_line),
        ] {
            anyhow::ensure!(
                (1..=99).contains(&yards),
                "{name} must be between 1 and 99 (got {yards})"
            );
        }
        Ok(())
    }
}
