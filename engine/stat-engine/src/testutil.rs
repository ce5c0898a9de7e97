//! Shared fixture builders for unit tests.

use nflverse_fetcher::GameRecord;

/// A minimal game record for one player-week
pub fn game(name: &str, position: &str, week: u32) -> GameRecord {
    GameRecord {
        player_id: format!("00-{name}"),
        player_display_name: name.to_string(),
        player_name: name.to_string(),
        position: position.to_string(),
        position_group: position.to_string(),
        season: 2024,
        week,
        season_type: "REG".to_string(),
        ..GameRecord::default()
    }
}

/// A game record carrying a passing line
pub fn passing_game(name: &str, week: u32, yards: f64) -> GameRecord {
    GameRecord { passing_yards: Some(yards), ..game(name, "QB", week) }
}

/// A game record carrying a receiving line
pub fn receiving_game(name: &str, week: u32, yards: Option<f64>) -> GameRecord {
    GameRecord { receiving_yards: yards, ..game(name, "WR", week) }
}
