//! League baseline calculation.
//!
//! Produces the per-week league-average overlay drawn on each chart. For
//! most positions the reference population is every player at the
//! position. For QBs it is the 32 quarterbacks with the most season-total
//! passing yards, which keeps backups and spot-starters from dragging the
//! baseline down.

use crate::types::{Position, StatKey};
use nflverse_fetcher::GameRecord;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// How many QBs count as "starter-level" for the baseline population
const QB_POPULATION_SIZE: usize = 32;

/// Per-week mean of each tracked stat over the reference population.
///
/// Weeks with no recorded values for a stat have no entry: an undefined
/// baseline renders as "no overlay", never as zero.
#[derive(Debug, Clone, Default)]
pub struct LeagueBaseline {
    per_stat: HashMap<StatKey, BTreeMap<u32, f64>>,
}

impl LeagueBaseline {
    /// The league mean for a stat in a given week, if defined
    pub fn mean_for(&self, key: StatKey, week: u32) -> Option<f64> {
        self.per_stat.get(&key).and_then(|weeks| weeks.get(&week)).copied()
    }

    /// Whether any week has a defined mean for this stat
    pub fn has_stat(&self, key: StatKey) -> bool {
        self.per_stat.contains_key(&key)
    }
}

/// Compute the per-week league baseline for a position.
pub fn league_baseline(records: &[GameRecord], position: Position) -> LeagueBaseline {
    let pos = position.to_string();

    let population: Vec<&GameRecord> = if position == Position::QB {
        let starters = top_passers(records, QB_POPULATION_SIZE);
        debug!("QB baseline population: {} starters", starters.len());
        records
            .iter()
            .filter(|r| r.position == pos && starters.contains(r.player_display_name.as_str()))
            .collect()
    } else {
        records.iter().filter(|r| r.position == pos).collect()
    };

    // Mean over recorded values only; weeks where nobody has the stat stay
    // undefined rather than reading as zero.
    let mut sums: HashMap<(StatKey, u32), (f64, usize)> = HashMap::new();
    for record in &population {
        for key in StatKey::ALL {
            if let Some(v) = key.value(record) {
                let entry = sums.entry((key, record.week)).or_insert((0.0, 0));
                entry.0 += v;
                entry.1 += 1;
            }
        }
    }

    let mut per_stat: HashMap<StatKey, BTreeMap<u32, f64>> = HashMap::new();
    for ((key, week), (sum, count)) in sums {
        per_stat.entry(key).or_default().insert(week, sum / count as f64);
    }

    LeagueBaseline { per_stat }
}

/// Display names of the `limit` QBs with the highest season-total passing
/// yards. Ties at the cut are broken by first appearance in the input.
fn top_passers(records: &[GameRecord], limit: usize) -> HashSet<&str> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for record in records.iter().filter(|r| r.position == "QB") {
        let name = record.player_display_name.as_str();
        if !totals.contains_key(name) {
            order.push(name);
        }
        *totals.entry(name).or_insert(0.0) += record.passing_yards.unwrap_or(0.0);
    }

    // Stable sort: equal totals keep first-appearance order
    order.sort_by(|a, b| totals[b].partial_cmp(&totals[a]).unwrap_or(std::cmp::Ordering::Equal));
    order.into_iter().take(limit).collect()
}
