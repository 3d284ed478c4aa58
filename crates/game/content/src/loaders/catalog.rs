//! Penalty catalog loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sideline_core::{PenaltyCatalog, PenaltyDefinition, PenaltyTable, Side};

use crate::loaders::{LoadResult, read_file};

/// Quick-pick ids per unit, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickPicks {
    #[serde(default)]
    pub offense: Vec<String>,
    #[serde(default)]
    pub defense: Vec<String>,
}

/// Penalty catalog structure for RON files.
///
/// Example:
/// ```ron
/// (
///     penalties: [
///         (
///             id: "holding-offense",
///             name: "Holding (Offense)",
///             short_name: "Holding",
///             yards: 10,
///             team: offense,
///             category: blocking,
///         ),
///     ],
///     quick_picks: (offense: ["holding-offense"]),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    pub penalties: Vec<PenaltyDefinition>,
    #[serde(default)]
    pub quick_picks: QuickPicks,
}

impl CatalogFile {
    /// Snapshot of an existing catalog, e.g. to export the built-in table for editing.
    pub fn from_catalog(catalog: &dyn PenaltyCatalog) -> Self {
        let ids = |side: Side| -> Vec<String> {
            catalog
                .quick_picks(side)
                .into_iter()
                .map(|penalty| penalty.id.to_string())
                .collect()
        };
        Self {
            penalties: catalog.definitions().to_vec(),
            quick_picks: QuickPicks {
                offense: ids(Side::Offense),
                defense: ids(Side::Defense),
            },
        }
    }
}

/// Loader for penalty catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate a penalty catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a [`CatalogFile`]
    ///
    /// # Returns
    ///
    /// Returns a validated [`PenaltyTable`]; duplicate ids, odd yardages and
    /// unknown quick picks are rejected.
    pub fn load(path: &Path) -> LoadResult<PenaltyTable> {
        let content = read_file(path)?;
        let file: CatalogFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse penalty catalog RON: {}", e))?;

        PenaltyTable::new(
            file.penalties,
            file.quick_picks.offense,
            file.quick_picks.defense,
        )
        .map_err(|e| anyhow::anyhow!("Invalid penalty catalog {}: {}", path.display(), e))
    }

    /// Serialize a catalog to pretty RON, the format [`CatalogLoader::load`] reads.
    pub fn to_ron(catalog: &dyn PenaltyCatalog) -> LoadResult<String> {
        ron::ser::to_string_pretty(
            &CatalogFile::from_catalog(catalog),
            ron::ser::PrettyConfig::default(),
        )
        .map_err(|e| anyhow::anyhow!("Failed to serialize penalty catalog: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_small_league_catalog() {
        let file = write(
            r#"(
                penalties: [
                    (
                        id: "holding-offense",
                        name: "Holding (Offense)",
                        short_name: "Holding",
                        yards: 10,
                        team: offense,
                        category: blocking,
                    ),
                    (
                        id: "facemask",
                        name: "Face Mask",
                        short_name: "Face Mask",
                        yards: 15,
                        team: either,
                        category: personal,
                        description: "Grasping and twisting the face mask",
                    ),
                ],
                quick_picks: (offense: ["holding-offense"], defense: ["facemask"]),
            )"#,
        );

        let table = CatalogLoader::load(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        let facemask = table.get_by_id("facemask").unwrap();
        assert!(facemask.allows(Side::Offense));
        assert_eq!(facemask.description, "Grasping and twisting the face mask");
        assert_eq!(table.quick_picks(Side::Offense)[0].id, "holding-offense");
    }

    #[test]
    fn rejects_invalid_yardage() {
        let file = write(
            r#"(
                penalties: [
                    (
                        id: "delay",
                        name: "Delay",
                        short_name: "Delay",
                        yards: 7,
                        team: offense,
                        category: kicking,
                    ),
                ],
            )"#,
        );

        let error = CatalogLoader::load(file.path()).unwrap_err();
        assert!(error.to_string().contains("Invalid penalty catalog"));
    }

    #[test]
    fn exported_builtin_table_loads_back() {
        let ron = CatalogLoader::to_ron(PenaltyTable::nfhs()).unwrap();
        let file = write(&ron);

        let table = CatalogLoader::load(file.path()).unwrap();
        assert_eq!(&table, PenaltyTable::nfhs());
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = CatalogLoader::load(Path::new("/nonexistent/penalties.ron")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/penalties.ron"));
    }
}
