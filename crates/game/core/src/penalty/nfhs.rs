//! Built-in NFHS/UIL (Texas high school) penalty table.
//!
//! Almost everything enforces from the previous spot. Only the three roughing
//! fouls carry an automatic first down; defensive pass interference does not.

use super::definition::{PenaltyCategory as Cat, PenaltyDefinition as P, TeamRestriction as Team};

pub(super) const QUICK_PICKS_OFFENSE: [&str; 3] = ["false-start", "holding-offense", "illegal-motion"];
pub(super) const QUICK_PICKS_DEFENSE: [&str; 3] =
    ["offside", "pass-interference-defense", "personal-foul"];

pub(super) fn definitions() -> Vec<P> {
    vec![
        // ===== pre-snap / dead ball =====
        P::new("false-start", "False Start", "False Start", 5, Team::Offense, Cat::PreSnap)
            .described("Offensive player moves before snap (dead ball)"),
        P::new("delay-of-game", "Delay of Game", "Delay of Game", 5, Team::Offense, Cat::PreSnap)
            .described("Play clock violation"),
        P::new("illegal-formation", "Illegal Formation", "Illegal Formation", 5, Team::Offense, Cat::PreSnap)
            .described("Less than 7 on line, illegal splits, etc."),
        P::new("illegal-motion", "Illegal Motion", "Illegal Motion", 5, Team::Offense, Cat::PreSnap)
            .described("Player in motion toward LOS at snap"),
        P::new("illegal-shift", "Illegal Shift", "Illegal Shift", 5, Team::Offense, Cat::PreSnap)
            .described("Not set for 1 second before snap"),
        P::new("illegal-substitution", "Illegal Substitution", "Illegal Sub", 5, Team::Either, Cat::PreSnap)
            .described("12 men on field or sub not set"),
        P::new("encroachment", "Encroachment", "Encroachment", 5, Team::Defense, Cat::PreSnap)
            .described("Contact with offense before snap"),
        P::new("offside", "Offsides", "Offsides", 5, Team::Defense, Cat::PreSnap)
            .described("In neutral zone at snap"),
        P::new("neutral-zone-infraction", "Neutral Zone Infraction", "Neutral Zone", 5, Team::Defense, Cat::PreSnap)
            .described("Causes offense to false start"),
        // ===== blocking =====
        P::new("holding-offense", "Holding", "Holding", 10, Team::Offense, Cat::Blocking)
            .described("Restraining a defender"),
        P::new("holding-defense", "Holding", "Holding", 5, Team::Defense, Cat::Blocking)
            .described("Defensive holding (5 yards, not 10)"),
        P::new("illegal-block-back", "Illegal Block in the Back", "Block in Back", 10, Team::Either, Cat::Blocking)
            .described("Block in back (not clipping)"),
        P::new("clipping", "Clipping", "Clipping", 15, Team::Either, Cat::Blocking)
            .described("Block from behind below waist"),
        P::new("chop-block", "Chop Block", "Chop Block", 15, Team::Offense, Cat::Blocking)
            .described("High-low combination block"),
        P::new("cut-block", "Illegal Cut Block", "Cut Block", 15, Team::Offense, Cat::Blocking)
            .described("Illegal low block"),
        // ===== passing =====
        P::new("pass-interference-offense", "Offensive Pass Interference", "OPI", 15, Team::Offense, Cat::Passing)
            .described("Offensive player interferes with defender"),
        P::new("pass-interference-defense", "Defensive Pass Interference", "DPI", 15, Team::Defense, Cat::Passing)
            .described("Not an automatic first down in high school"),
        P::new("intentional-grounding", "Intentional Grounding", "Grounding", 5, Team::Offense, Cat::Passing)
            .spot_of_foul()
            .loss_of_down()
            .described("Passer throws the ball away (spot foul + loss of down)"),
        P::new("illegal-forward-pass", "Illegal Forward Pass", "Illegal Pass", 5, Team::Offense, Cat::Passing)
            .loss_of_down()
            .described("Second forward pass or pass from beyond LOS"),
        P::new("ineligible-downfield", "Ineligible Receiver Downfield", "Ineligible Downfield", 5, Team::Offense, Cat::Passing)
            .described("Lineman past LOS on pass play"),
        P::new("illegal-touching", "Illegal Touching", "Illegal Touching", 5, Team::Offense, Cat::Passing)
            .loss_of_down()
            .described("Ineligible receiver touches forward pass"),
        // ===== personal fouls =====
        P::new("roughing-passer", "Roughing the Passer", "Roughing Passer", 15, Team::Defense, Cat::Personal)
            .auto_first_down()
            .described("Automatic first down"),
        P::new("roughing-kicker", "Roughing the Kicker", "Roughing Kicker", 15, Team::Defense, Cat::Personal)
            .auto_first_down()
            .described("Automatic first down"),
        P::new("roughing-snapper", "Roughing the Snapper", "Roughing Snapper", 15, Team::Defense, Cat::Personal)
            .auto_first_down()
            .described("Automatic first down"),
        P::new("running-into-kicker", "Running Into the Kicker", "Running Into Kicker", 5, Team::Defense, Cat::Personal)
            .described("Lesser version of roughing"),
        P::new("facemask-15", "Facemask", "Facemask", 15, Team::Either, Cat::Personal)
            .described("Grab and twist facemask"),
        P::new("facemask-5", "Facemask (Incidental)", "Facemask", 5, Team::Either, Cat::Personal)
            .described("Incidental grasp of facemask"),
        P::new("targeting", "Targeting", "Targeting", 15, Team::Either, Cat::Personal)
            .described("Leading with helmet (possible ejection)"),
        P::new("horse-collar", "Horse Collar Tackle", "Horse Collar", 15, Team::Defense, Cat::Personal)
            .described("Grab inside collar or nameplate"),
        P::new("late-hit", "Late Hit / Unnecessary Roughness", "Late Hit", 15, Team::Either, Cat::Personal)
            .described("Hit after play is over"),
        P::new("personal-foul", "Personal Foul", "Personal Foul", 15, Team::Either, Cat::Personal)
            .described("General rough play"),
        P::new("spearing", "Spearing", "Spearing", 15, Team::Either, Cat::Personal)
            .described("Leading with helmet crown"),
        P::new("tripping", "Tripping", "Tripping", 15, Team::Either, Cat::Personal)
            .described("Intentionally tripping opponent"),
        // ===== kicking =====
        P::new("kick-catch-interference", "Kick Catch Interference", "KCI", 15, Team::Defense, Cat::Kicking)
            .described("Interference with fair catch"),
        P::new("illegal-kick", "Illegal Kick", "Illegal Kick", 5, Team::Either, Cat::Kicking)
            .spot_of_foul()
            .described("Kicking ball illegally"),
        P::new("illegal-batting", "Illegal Batting", "Illegal Batting", 10, Team::Either, Cat::Kicking)
            .spot_of_foul()
            .described("Batting ball illegally"),
        // ===== unsportsmanlike conduct =====
        P::new("unsportsmanlike-conduct", "Unsportsmanlike Conduct", "Unsportsmanlike", 15, Team::Either, Cat::Unsportsmanlike)
            .described("Poor sportsmanship (2nd = ejection)"),
        P::new("taunting", "Taunting", "Taunting", 15, Team::Either, Cat::Unsportsmanlike)
            .described("Taunting opponent"),
        P::new("sideline-interference", "Sideline Interference", "Sideline Interference", 15, Team::Either, Cat::Unsportsmanlike)
            .described("Sideline personnel interfering"),
    ]
}
