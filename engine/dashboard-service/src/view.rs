//! View assembly.
//!
//! Builds the renderable dashboard structures from the season table and the
//! current selection: header, season totals, one chart block per stat in
//! the position's stat set, and the raw game log.

use nflverse_fetcher::GameRecord;
use stat_engine::{
    canonical_thresholds, league_baseline, player_series, players_at, season_totals, summarize,
    Position, SelectionError, StatKey, StatSummary, StatTotal,
};
use std::collections::HashMap;
use tracing::debug;

/// Chart data for one stat: weekly bars plus the overlay lines.
#[derive(Debug, Clone)]
pub struct StatChart {
    pub key: StatKey,
    pub label: &'static str,
    /// Category labels, "{week} vs {opponent}"
    pub categories: Vec<String>,
    /// Weekly values, missing as zero
    pub values: Vec<f64>,
    /// Season-average line
    pub season_mean: f64,
    /// Last-3-games line
    pub last3_mean: f64,
    /// League-average overlay per category; `None` where the baseline is
    /// undefined for that week (drawn as a gap, not as zero)
    pub league_means: Vec<Option<f64>>,
    pub summary: StatSummary,
}

/// The raw game log with its fixed column ordering. Identity and internal
/// columns (ids, short names, headshot URL, derived labels) are excluded.
#[derive(Debug, Clone)]
pub struct GameLog {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Everything the presentation layer needs for one selection.
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub title: String,
    pub headshot_url: String,
    pub position: Position,
    pub player: String,
    pub totals: Vec<StatTotal>,
    pub charts: Vec<StatChart>,
    pub game_log: GameLog,
}

/// Leading game-log columns, always in this order
const LOG_LEAD_COLUMNS: [&str; 6] =
    ["season_type", "season", "week", "opponent_team", "position", "recent_team"];

/// Build the full dashboard view for one (position, player) selection.
///
/// `user_thresholds` carries any custom per-stat thresholds the user typed;
/// a non-positive entry is ignored. Stats with no recorded value in any of
/// the player's games are skipped entirely (missing-column tolerance).
pub fn build_dashboard(
    records: &[GameRecord],
    position: Position,
    player: &str,
    user_thresholds: &HashMap<StatKey, f64>,
) -> Result<DashboardView, SelectionError> {
    if players_at(records, position).is_empty() {
        return Err(SelectionError::NoPlayers(position));
    }

    let series = player_series(records, position, player)?;
    let baseline = league_baseline(records, position);

    let (title, headshot_url) = match series.first() {
        Some(first) => (
            format!("{player} - {} ({position})", first.recent_team),
            first.headshot_url.clone(),
        ),
        None => (format!("{player} ({position})"), String::new()),
    };

    let mut charts = Vec::new();
    for &key in position.stat_keys() {
        if !series.has_stat(key) {
            debug!("Skipping {key}: no recorded values for {player}");
            continue;
        }

        let values = series.values(key);
        let user_threshold = user_thresholds.get(&key).copied();
        let Some(summary) = summarize(&values, canonical_thresholds(key), user_threshold) else {
            continue;
        };

        let league_means: Vec<Option<f64>> = if baseline.has_stat(key) {
            series.weeks().iter().map(|&w| baseline.mean_for(key, w)).collect()
        } else {
            vec![None; values.len()]
        };

        charts.push(StatChart {
            key,
            label: key.label(),
            categories: series.labels(),
            values,
            season_mean: summary.mean,
            last3_mean: summary.last3_mean,
            league_means,
            summary,
        });
    }

    let totals = season_totals(&series);
    let game_log = build_game_log(&series.games);

    Ok(DashboardView {
        title,
        headshot_url,
        position,
        player: player.to_string(),
        totals,
        charts,
        game_log,
    })
}

/// Assemble the game log table in its fixed column order.
fn build_game_log(games: &[GameRecord]) -> GameLog {
    let mut columns: Vec<&'static str> = LOG_LEAD_COLUMNS.to_vec();
    columns.extend(StatKey::ALL.iter().map(|k| k.name()));

    let rows = games
        .iter()
        .map(|g| {
            let mut row = vec![
                g.season_type.clone(),
                g.season.to_string(),
                g.week.to_string(),
                g.opponent_team.clone(),
                g.position.clone(),
                g.recent_team.clone(),
            ];
            row.extend(StatKey::ALL.iter().map(|k| format_stat(k.value(g))));
            row
        })
        .collect();

    GameLog { columns, rows }
}

/// Format one stat cell: blank for missing, no trailing ".0" for integers.
fn format_stat(value: Option<f64>) -> String {
    match value {
        None => String::new(),
        Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) => format!("{v:.1}"),
    }
}
