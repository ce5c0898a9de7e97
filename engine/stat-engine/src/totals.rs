//! Season totals for the header table.

use crate::filter::PlayerSeries;
use crate::types::StatKey;
use serde::Serialize;

/// One season-total cell: stat label plus the integer total
#[derive(Debug, Clone, Serialize)]
pub struct StatTotal {
    pub key: StatKey,
    pub label: &'static str,
    pub total: i64,
}

/// Sum each stat in the position's stat set across all games, missing
/// values as zero, truncated to integer display precision. Stats with no
/// recorded value in any game (absent columns) are skipped.
pub fn season_totals(series: &PlayerSeries) -> Vec<StatTotal> {
    series
        .position
        .stat_keys()
        .iter()
        .filter(|&&key| series.has_stat(key))
        .map(|&key| {
            let sum: f64 = series.games.iter().filter_map(|g| key.value(g)).sum();
            StatTotal { key, label: key.label(), total: sum as i64 }
        })
        .collect()
}
