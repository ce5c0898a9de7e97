//! Terminal renderer.
//!
//! Draws a `DashboardView` as text: header, totals table, one bar-chart
//! block per stat with the summary and threshold breakdown beside it, and
//! the raw game log.

use crate::view::{DashboardView, GameLog, StatChart};
use colored::*;
use std::fmt::Write as _;

const BAR_WIDTH: usize = 40;

/// Render the whole dashboard to a string
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", view.title.bold());
    if !view.headshot_url.is_empty() {
        let _ = writeln!(out, "{}", view.headshot_url.dimmed());
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "Season Totals".bold().underline());
    if view.totals.is_empty() {
        let _ = writeln!(out, "  (no data)");
    } else {
        for total in &view.totals {
            let _ = writeln!(out, "  {:<22} {:>8}", total.label, total.total);
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", "Weekly Performance".bold().underline());
    if view.charts.is_empty() {
        let _ = writeln!(out, "  (no data)");
    }
    for chart in &view.charts {
        render_chart(&mut out, chart);
    }

    render_game_log(&mut out, &view.game_log);

    out
}

fn render_chart(out: &mut String, chart: &StatChart) {
    let _ = writeln!(out, "\n{}", chart.label.yellow().bold());

    let scale = chart.values.iter().cloned().fold(0.0, f64::max);
    for (i, (category, &value)) in chart.categories.iter().zip(&chart.values).enumerate() {
        let filled = if scale > 0.0 {
            ((value / scale) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = "█".repeat(filled);
        let overlay = match chart.league_means.get(i).copied().flatten() {
            Some(league) => format!("  (lg {league:.1})").blue().to_string(),
            None => String::new(),
        };
        let width = BAR_WIDTH;
        let _ = writeln!(out, "  {category:<12} {bar:<width$} {value:>6.1}{overlay}");
    }

    let s = &chart.summary;
    let _ = writeln!(out, "  {}", "Stat Summary".bold());
    let _ = writeln!(out, "    High: {:.1}  Low: {:.1}  Average: {:.1}", s.high, s.low, s.mean);
    let _ = writeln!(out, "    Avg (Last 3): {:.1}  Avg (Last 5): {:.1}", s.last3_mean, s.last5_mean);
    match s.std_dev {
        Some(sd) => {
            let _ = writeln!(out, "    Std Dev: {sd:.2}");
        }
        None => {
            let _ = writeln!(out, "    Std Dev: n/a");
        }
    }

    if let Some(user) = s.user_rate {
        let line = format!(
            "    {:.1}% of games over {}",
            user.over_pct,
            format_threshold(user.threshold)
        );
        let _ = writeln!(out, "{}", line.green());
    }

    let _ = writeln!(out, "  {}", "Breakdown".bold());
    for rate in &s.breakdown {
        let _ = writeln!(
            out,
            "    Over {}: {:.1}%",
            format_threshold(rate.threshold),
            rate.over_pct
        );
    }
}

fn render_game_log(out: &mut String, log: &GameLog) {
    let _ = writeln!(out, "\n{}", "Game Log".bold().underline());

    let widths: Vec<usize> = log
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            log.rows.iter().map(|r| r[i].len()).max().unwrap_or(0).max(col.len())
        })
        .collect();

    let header: Vec<String> = log
        .columns
        .iter()
        .zip(widths.iter().copied())
        .map(|(col, w)| format!("{col:<w$}"))
        .collect();
    let _ = writeln!(out, "  {}", header.join("  ").dimmed());

    for row in &log.rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths.iter().copied())
            .map(|(cell, w)| format!("{cell:<w$}"))
            .collect();
        let _ = writeln!(out, "  {}", cells.join("  "));
    }
}

fn format_threshold(t: f64) -> String {
    if t.fract() == 0.0 {
        format!("{t:.0}")
    } else {
        format!("{t:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::build_dashboard;
    use nflverse_fetcher::GameRecord;
    use stat_engine::Position;
    use std::collections::HashMap;

    fn fixture() -> Vec<GameRecord> {
        let mut records = Vec::new();
        for (week, yards) in [(1, 80.0), (2, 120.0)] {
            records.push(GameRecord {
                player_display_name: "Puka Nacua".to_string(),
                position: "WR".to_string(),
                recent_team: "LA".to_string(),
                opponent_team: "SEA".to_string(),
                season: 2024,
                week,
                season_type: "REG".to_string(),
                receiving_yards: Some(yards),
                ..GameRecord::default()
            });
        }
        records
    }

    #[test]
    fn renders_every_section() {
        colored::control::set_override(false);
        let view =
            build_dashboard(&fixture(), Position::WR, "Puka Nacua", &HashMap::new()).unwrap();
        let text = render_dashboard(&view);

        assert!(text.contains("Puka Nacua - LA (WR)"));
        assert!(text.contains("Season Totals"));
        assert!(text.contains("Receiving Yards"));
        assert!(text.contains("Over 99.5: 50.0%"));
        assert!(text.contains("Game Log"));
        assert!(text.contains("1 vs SEA"));
    }

    #[test]
    fn chartless_view_renders_no_data() {
        colored::control::set_override(false);
        let records = vec![GameRecord {
            player_display_name: "Blocking TE".to_string(),
            position: "TE".to_string(),
            season: 2024,
            week: 1,
            ..GameRecord::default()
        }];
        let view =
            build_dashboard(&records, Position::TE, "Blocking TE", &HashMap::new()).unwrap();
        let text = render_dashboard(&view);

        assert!(text.contains("(no data)"));
    }
}
