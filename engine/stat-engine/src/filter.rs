//! Position/player filtering over the season table.

use crate::types::{Position, SelectionError, StatKey};
use nflverse_fetcher::GameRecord;

/// The ordered-by-week subsequence of one player's games.
///
/// Derived from the season table on every selection change, never stored.
/// Week order is non-decreasing by construction.
#[derive(Debug, Clone)]
pub struct PlayerSeries {
    pub position: Position,
    pub player: String,
    pub games: Vec<GameRecord>,
}

impl PlayerSeries {
    /// Number of games in the series
    pub fn len(&self) -> usize {
        self.games.len()
    }

    /// Whether the player has any games
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// First game of the season, used for header info (team, headshot)
    pub fn first(&self) -> Option<&GameRecord> {
        self.games.first()
    }

    /// Stat values in week order, missing values as zero
    pub fn values(&self, key: StatKey) -> Vec<f64> {
        self.games.iter().map(|g| key.value(g).unwrap_or(0.0)).collect()
    }

    /// Whether any game carries a value for this stat. False means the
    /// column is absent from this year's schema (or never recorded for the
    /// player) and its chart/summary block should be skipped.
    pub fn has_stat(&self, key: StatKey) -> bool {
        self.games.iter().any(|g| key.value(g).is_some())
    }

    /// Chart category labels, "{week} vs {opponent}"
    pub fn labels(&self) -> Vec<String> {
        self.games.iter().map(|g| format!("{} vs {}", g.week, g.opponent_team)).collect()
    }

    /// Week numbers in series order
    pub fn weeks(&self) -> Vec<u32> {
        self.games.iter().map(|g| g.week).collect()
    }
}

/// Sorted, deduplicated display names of players at a position. The set of
/// valid selections is derived from the data, never hardcoded.
pub fn players_at(records: &[GameRecord], position: Position) -> Vec<String> {
    let pos = position.to_string();
    let mut names: Vec<String> = records
        .iter()
        .filter(|r| r.position == pos && !r.player_display_name.is_empty())
        .map(|r| r.player_display_name.clone())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Select one player's games at a position, ordered ascending by week.
///
/// Returns `PlayerNotFound` when the name does not appear at the position;
/// a player who appears but has zero rows simply yields an empty series,
/// which downstream consumers render as "no data".
pub fn player_series(
    records: &[GameRecord],
    position: Position,
    player: &str,
) -> Result<PlayerSeries, SelectionError> {
    let pos = position.to_string();
    let mut games: Vec<GameRecord> = records
        .iter()
        .filter(|r| r.position == pos && r.player_display_name == player)
        .cloned()
        .collect();

    if games.is_empty() && !players_at(records, position).iter().any(|n| n == player) {
        return Err(SelectionError::PlayerNotFound {
            position,
            player: player.to_string(),
        });
    }

    // Stable sort keeps input order among same-week rows
    games.sort_by_key(|g| g.week);

    Ok(PlayerSeries { position, player: player.to_string(), games })
}
