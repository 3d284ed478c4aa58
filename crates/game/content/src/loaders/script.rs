//! Game script loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sideline_core::{OpeningToss, Play};

use crate::loaders::{LoadResult, read_file};

/// A recorded game: the coin toss and every entry the scorekeeper made, in order.
///
/// Scripts are usually written with the `unwrap_variant_newtypes` and
/// `implicit_some` RON extensions enabled:
///
/// ```ron
/// #![enable(unwrap_variant_newtypes, implicit_some)]
/// (
///     opening: (receiving: offense, direction: right),
///     plays: [
///         Kickoff(return_spot: 28),
///         Carry(kind: rush, end_spot: 33),
///         Penalty(penalty_id: "false-start", committed_by: offense),
///     ],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScript {
    #[serde(default)]
    pub opening: OpeningToss,
    pub plays: Vec<Play>,
}

/// Loader for game scripts from RON files.
pub struct ScriptLoader;

impl ScriptLoader {
    /// Load a game script from a RON file.
    pub fn load(path: &Path) -> LoadResult<GameScript> {
        let content = read_file(path)?;
        let script: GameScript = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse game script RON {}: {}", path.display(), e))?;

        Ok(script)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use sideline_core::{
        BallCarry, CarryKind, DriveDirection, Kickoff, PenaltyCall, Possession, Side, YardLine,
    };

    use super::*;

    #[test]
    fn loads_plays_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"#![enable(unwrap_variant_newtypes, implicit_some)]
            (
                opening: (receiving: defense, direction: left),
                plays: [
                    Kickoff(return_spot: 72),
                    Carry(kind: sack, end_spot: 80),
                    Incompletion,
                    Penalty(penalty_id: "intentional-grounding", committed_by: offense, spot_of_foul: 88),
                    EndQuarter,
                ],
            )"#
        )
        .unwrap();

        let script = ScriptLoader::load(file.path()).unwrap();
        assert_eq!(
            script.opening,
            OpeningToss {
                receiving: Possession::Defense,
                direction: DriveDirection::Left,
            }
        );
        assert_eq!(script.plays.len(), 5);
        assert_eq!(
            script.plays[0],
            Play::Kickoff(Kickoff {
                return_spot: YardLine::new(72).unwrap()
            })
        );
        assert_eq!(
            script.plays[1],
            Play::Carry(BallCarry::new(CarryKind::Sack, YardLine::new(80).unwrap()))
        );
        assert_eq!(
            script.plays[3],
            Play::Penalty(
                PenaltyCall::new("intentional-grounding", Side::Offense)
                    .at(YardLine::new(88).unwrap())
            )
        );
        assert_eq!(script.plays[4], Play::EndQuarter);
    }

    #[test]
    fn yard_lines_off_the_field_fail_to_parse() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"#![enable(unwrap_variant_newtypes)]
            (plays: [Punt(end_spot: 140)])"#
        )
        .unwrap();

        let error = ScriptLoader::load(file.path()).unwrap_err();
        assert!(error.to_string().contains("Failed to parse game script"));
    }
}
