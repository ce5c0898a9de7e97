//! Stat Engine
//!
//! Domain core for the weekly stats dashboard: position/player filtering,
//! league baseline calculation, per-stat summaries with threshold
//! breakdowns, and season totals. Pure and synchronous; all functions are
//! computed fresh from the immutable season table on each selection change.

pub mod baseline;
pub mod filter;
pub mod summary;
pub mod thresholds;
pub mod totals;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

pub use baseline::{league_baseline, LeagueBaseline};
pub use filter::{player_series, players_at, PlayerSeries};
pub use summary::{summarize, StatSummary, ThresholdRate};
pub use thresholds::canonical_thresholds;
pub use totals::{season_totals, StatTotal};
pub use types::{Position, SelectionError, StatKey};
