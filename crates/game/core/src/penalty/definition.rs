use std::borrow::Cow;

use crate::field::Side;

/// Which unit a penalty can be called against.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TeamRestriction {
    Offense,
    Defense,
    /// Either unit can commit it; resolved per call.
    Either,
}

impl TeamRestriction {
    pub const fn allows(self, side: Side) -> bool {
        matches!(
            (self, side),
            (Self::Either, _) | (Self::Offense, Side::Offense) | (Self::Defense, Side::Defense)
        )
    }
}

/// UI grouping only; never consulted by enforcement.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PenaltyCategory {
    PreSnap,
    Blocking,
    Passing,
    Personal,
    Kicking,
    Unsportsmanlike,
}

impl PenaltyCategory {
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PreSnap => "Pre-Snap",
            Self::Blocking => "Blocking",
            Self::Passing => "Passing",
            Self::Personal => "Personal Foul",
            Self::Kicking => "Kicking",
            Self::Unsportsmanlike => "Unsportsmanlike",
        }
    }
}

/// Spot the walk-off is measured from.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum EnforcementType {
    /// From the line of scrimmage of the down (most fouls).
    #[default]
    PreviousSpot,
    /// From where the foul occurred.
    SpotOfFoul,
    /// From where the ball would next be snapped (dead-ball fouls).
    SucceedingSpot,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DownEffect {
    /// Repeat the down.
    #[default]
    Replay,
    /// Offense loses the down.
    LossOfDown,
    /// Defense foul that always awards a first down.
    AutoFirst,
}

/// One row of a penalty catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PenaltyDefinition {
    pub id: Cow<'static, str>,
    pub name: Cow<'static, str>,
    pub short_name: Cow<'static, str>,
    pub yards: u8,
    pub team: TeamRestriction,
    pub category: PenaltyCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enforcement: EnforcementType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub down_effect: DownEffect,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Cow<'static, str>,
}

impl PenaltyDefinition {
    pub const ALLOWED_YARDS: [u8; 3] = [5, 10, 15];

    /// Previous-spot, replay-the-down foul; refine with the builder methods.
    pub fn new(
        id: &'static str,
        name: &'static str,
        short_name: &'static str,
        yards: u8,
        team: TeamRestriction,
        category: PenaltyCategory,
    ) -> Self {
        Self {
            id: Cow::Borrowed(id),
            name: Cow::Borrowed(name),
            short_name: Cow::Borrowed(short_name),
            yards,
            team,
            category,
            enforcement: EnforcementType::PreviousSpot,
            down_effect: DownEffect::Replay,
            description: Cow::Borrowed(""),
        }
    }

    #[must_use]
    pub fn spot_of_foul(mut self) -> Self {
        self.enforcement = EnforcementType::SpotOfFoul;
        self
    }

    #[must_use]
    pub fn loss_of_down(mut self) -> Self {
        self.down_effect = DownEffect::LossOfDown;
        self
    }

    #[must_use]
    pub fn auto_first_down(mut self) -> Self {
        self.down_effect = DownEffect::AutoFirst;
        self
    }

    #[must_use]
    pub fn described(mut self, description: &'static str) -> Self {
        self.description = Cow::Borrowed(description);
        self
    }

    pub fn is_auto_first_down(&self) -> bool {
        self.down_effect == DownEffect::AutoFirst
    }

    pub fn is_loss_of_down(&self) -> bool {
        self.down_effect == DownEffect::LossOfDown
    }

    pub fn is_spot_foul(&self) -> bool {
        self.enforcement == EnforcementType::SpotOfFoul
    }

    /// Only a loss-of-down spot foul (intentional grounding) can leave the
    /// ball in the passer's own end zone.
    pub fn can_cause_safety(&self) -> bool {
        self.is_spot_foul() && self.is_loss_of_down()
    }

    pub fn allows(&self, side: Side) -> bool {
        self.team.allows(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn team_restriction_matching() {
        assert!(TeamRestriction::Either.allows(Side::Offense));
        assert!(TeamRestriction::Either.allows(Side::Defense));
        assert!(TeamRestriction::Offense.allows(Side::Offense));
        assert!(!TeamRestriction::Offense.allows(Side::Defense));
        assert!(!TeamRestriction::Defense.allows(Side::Offense));
    }

    #[test]
    fn builder_sets_derived_flags() {
        let grounding = PenaltyDefinition::new(
            "intentional-grounding",
            "Intentional Grounding",
            "Grounding",
            5,
            TeamRestriction::Offense,
            PenaltyCategory::Passing,
        )
        .spot_of_foul()
        .loss_of_down();

        assert!(grounding.is_spot_foul());
        assert!(grounding.is_loss_of_down());
        assert!(!grounding.is_auto_first_down());
        assert!(grounding.can_cause_safety());
    }

    #[test]
    fn category_names_round_trip() {
        assert_eq!(PenaltyCategory::PreSnap.to_string(), "pre-snap");
        assert_eq!(
            "unsportsmanlike".parse::<PenaltyCategory>(),
            Ok(PenaltyCategory::Unsportsmanlike)
        );
        assert_eq!(PenaltyCategory::Personal.display_name(), "Personal Foul");
    }
}
