//! Penalty catalog oracle.
//!
//! Provides lookup of penalty definitions by id, category and committing unit.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::definition::{PenaltyCategory, PenaltyDefinition, TeamRestriction};
use super::error::CatalogError;
use super::nfhs;
use crate::field::Side;

/// Oracle providing penalty definitions.
///
/// The engine only ever reads from a catalog. The built-in NFHS table is
/// [`PenaltyTable::nfhs`]; custom tables are loaded from RON by the content crate.
pub trait PenaltyCatalog: Send + Sync {
    fn definitions(&self) -> &[PenaltyDefinition];

    /// Hand-picked most common fouls for fast entry, in display order.
    fn quick_picks(&self, side: Side) -> Vec<&PenaltyDefinition>;

    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no definition has this id.
    fn get_by_id(&self, id: &str) -> Result<&PenaltyDefinition, CatalogError> {
        self.definitions()
            .iter()
            .find(|penalty| penalty.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_owned()))
    }

    /// Definitions in `category` that `side` can commit (its own or `Either`).
    fn by_category_and_team(
        &self,
        category: PenaltyCategory,
        side: Side,
    ) -> Vec<&PenaltyDefinition> {
        self.definitions()
            .iter()
            .filter(|penalty| penalty.category == category && penalty.allows(side))
            .collect()
    }

    /// Every definition `side` can commit.
    fn all_for_team(&self, side: Side) -> Vec<&PenaltyDefinition> {
        self.definitions()
            .iter()
            .filter(|penalty| penalty.allows(side))
            .collect()
    }
}

static NFHS: LazyLock<PenaltyTable> = LazyLock::new(|| PenaltyTable {
    definitions: nfhs::definitions(),
    quick_offense: nfhs::QUICK_PICKS_OFFENSE.map(str::to_owned).to_vec(),
    quick_defense: nfhs::QUICK_PICKS_DEFENSE.map(str::to_owned).to_vec(),
});

/// Validated, immutable list of penalty definitions plus quick-pick ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PenaltyTable {
    definitions: Vec<PenaltyDefinition>,
    quick_offense: Vec<String>,
    quick_defense: Vec<String>,
}

impl PenaltyTable {
    /// Builds a table, enforcing the catalog invariants.
    ///
    /// # Errors
    ///
    /// Fails on duplicate ids, yardage other than 5/10/15, automatic first
    /// downs not restricted to the defense, loss-of-down fouls not restricted
    /// to the offense, or quick picks that name no definition.
    pub fn new(
        definitions: Vec<PenaltyDefinition>,
        quick_offense: Vec<String>,
        quick_defense: Vec<String>,
    ) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for penalty in &definitions {
            let id = penalty.id.to_string();
            if !seen.insert(&*penalty.id) {
                return Err(CatalogError::DuplicateId(id));
            }
            if !PenaltyDefinition::ALLOWED_YARDS.contains(&penalty.yards) {
                return Err(CatalogError::InvalidYardage {
                    id,
                    yards: penalty.yards,
                });
            }
            if penalty.is_auto_first_down() && penalty.team != TeamRestriction::Defense {
                return Err(CatalogError::AutoFirstDownNotDefensive(id));
            }
            if penalty.is_loss_of_down() && penalty.team != TeamRestriction::Offense {
                return Err(CatalogError::LossOfDownNotOffensive(id));
            }
        }

        if let Some(unknown) = quick_offense
            .iter()
            .chain(&quick_defense)
            .find(|id| !seen.contains(id.as_str()))
        {
            return Err(CatalogError::UnknownQuickPick(unknown.clone()));
        }

        Ok(Self {
            definitions,
            quick_offense,
            quick_defense,
        })
    }

    /// The built-in NFHS/UIL catalog.
    pub fn nfhs() -> &'static PenaltyTable {
        &NFHS
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl PenaltyCatalog for PenaltyTable {
    fn definitions(&self) -> &[PenaltyDefinition] {
        &self.definitions
    }

    fn quick_picks(&self, side: Side) -> Vec<&PenaltyDefinition> {
        let ids = match side {
            Side::Offense => &self.quick_offense,
            Side::Defense => &self.quick_defense,
        };
        ids.iter()
            .filter_map(|id| self.get_by_id(id).ok())
            .collect()
    }
}
