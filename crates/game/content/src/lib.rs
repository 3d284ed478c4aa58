//! Data-driven content definitions and loaders.
//!
//! This crate reads the files a scorekeeper can customise:
//! - Penalty catalogs (RON), replacing the built-in NFHS table
//! - Rules configuration (TOML), overriding quarter length, spots and points
//! - Game scripts (RON), a coin toss followed by the plays to record
//!
//! Content is consumed by the runtime and never appears in game state.
//!
//! All loaders use sideline-core types directly with serde for RON/TOML deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{CatalogFile, CatalogLoader, GameScript, QuickPicks, RulesLoader, ScriptLoader};
