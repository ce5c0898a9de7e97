//! Weekly NFL Player Stats Dashboard
//!
//! Terminal dashboard over the nflverse weekly player stats: pick a
//! position and player, get per-stat charts with season/recent-form
//! averages, league-average overlays, threshold breakdowns, season totals,
//! and the raw game log.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

use dashboard_service::{
    build_dashboard, initialize_logging, load_configuration, render_dashboard, DashboardConfig,
};
use nflverse_fetcher::{NflverseFetcher, SeasonData, SeasonStore};
use stat_engine::{players_at, Position, StatKey};

#[derive(Parser)]
#[command(name = "dashboard")]
#[command(about = "Weekly NFL player stats dashboard")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List selectable players at a position
    Players {
        /// Position (QB, RB, WR, TE)
        #[arg(short, long)]
        position: String,

        /// Read records from a JSON dump instead of the network
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Render the full dashboard for one player
    Show {
        /// Position (QB, RB, WR, TE)
        #[arg(short, long)]
        position: String,

        /// Player display name (e.g., "Josh Allen")
        #[arg(long)]
        player: String,

        /// Custom threshold, STAT=VALUE (e.g., receiving_yards=100); repeatable
        #[arg(short, long = "threshold")]
        thresholds: Vec<String>,

        /// Season to load, overriding the configured one
        #[arg(short, long)]
        season: Option<u16>,

        /// Read records from a JSON dump instead of the network
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Fetch the configured seasons and dump them as JSON for offline use
    Fetch {
        /// Season to load, overriding the configured one
        #[arg(short, long)]
        season: Option<u16>,

        /// Output file path
        #[arg(short, long)]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let mut config = load_configuration(cli.config.as_deref())?;
    initialize_logging(&config.logging)?;

    match cli.command {
        Commands::Players { position, input } => {
            let position: Position = position.parse()?;
            let data = load_season_data(&config, input.as_deref()).await?;
            for name in players_at(&data.records, position) {
                println!("{name}");
            }
        }

        Commands::Show { position, player, thresholds, season, input } => {
            let position: Position = position.parse()?;
            let user_thresholds = parse_thresholds(&thresholds)?;
            if let Some(season) = season {
                config.fetcher.seasons = vec![season];
            }
            let data = load_season_data(&config, input.as_deref()).await?;
            let view = build_dashboard(&data.records, position, &player, &user_thresholds)?;
            print!("{}", render_dashboard(&view));
        }

        Commands::Fetch { season, out } => {
            if let Some(season) = season {
                config.fetcher.seasons = vec![season];
            }
            let data = load_season_data(&config, None).await?;
            let json = serde_json::to_string_pretty(&data)?;
            std::fs::write(&out, json)
                .with_context(|| format!("Failed to write dump to {}", out.display()))?;
            info!("Wrote {} records to {}", data.records.len(), out.display());
        }
    }

    Ok(())
}

/// Load the season table, either from a JSON dump or via the fetcher.
async fn load_season_data(config: &DashboardConfig, input: Option<&Path>) -> Result<SeasonData> {
    match input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read dump file: {}", path.display()))?;
            let data: SeasonData =
                serde_json::from_str(&raw).context("Malformed season data dump")?;
            info!("Loaded {} records from {}", data.records.len(), path.display());
            Ok(data)
        }
        None => {
            let fetcher = NflverseFetcher::new(config.fetcher.clone())?;
            let mut store = SeasonStore::new(config.fetcher.seasons.clone());
            let data = store.get_or_load(&fetcher).await?;
            Ok(data.clone())
        }
    }
}

/// Parse repeated `STAT=VALUE` threshold arguments.
fn parse_thresholds(args: &[String]) -> Result<HashMap<StatKey, f64>> {
    let mut thresholds = HashMap::new();
    for arg in args {
        let (name, value) = arg
            .split_once('=')
            .with_context(|| format!("Invalid threshold '{arg}', expected STAT=VALUE"))?;
        let key = StatKey::parse(name.trim())
            .with_context(|| format!("Unknown stat '{name}' in threshold '{arg}'"))?;
        let value: f64 = value
            .trim()
            .parse()
            .with_context(|| format!("Invalid threshold value in '{arg}'"))?;
        thresholds.insert(key, value);
    }
    Ok(thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_threshold_pairs() {
        let args = vec!["receiving_yards=100".to_string(), "receptions = 5".to_string()];
        let thresholds = parse_thresholds(&args).unwrap();
        assert_eq!(thresholds[&StatKey::ReceivingYards], 100.0);
        assert_eq!(thresholds[&StatKey::Receptions], 5.0);
    }

    #[test]
    fn rejects_malformed_thresholds() {
        assert!(parse_thresholds(&["receiving_yards".to_string()]).is_err());
        assert!(parse_thresholds(&["sacks=3".to_string()]).is_err());
        assert!(parse_thresholds(&["receptions=lots".to_string()]).is_err());
    }
}
