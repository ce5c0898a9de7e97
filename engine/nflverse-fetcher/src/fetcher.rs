use crate::config::FetcherConfig;
use crate::models::GameRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// A source of weekly player-game rows.
///
/// The production implementation downloads from the nflverse releases;
/// tests inject fixture tables through this trait instead of hitting the
/// network. A source must be deterministic for a given season set.
#[async_trait]
pub trait WeeklyDataSource: Send + Sync {
    /// Fetch one row per player per completed week for the given seasons
    async fn fetch_weekly(&self, seasons: &[u16]) -> Result<Vec<GameRecord>>;
}

/// Downloads weekly player stats from the nflverse data releases
pub struct NflverseFetcher {
    config: FetcherConfig,
    client: Client,
}

impl NflverseFetcher {
    /// Create a new fetcher instance
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { config, client })
    }

    /// Fetch and parse the weekly stats CSV for one season
    async fn fetch_season(&self, season: u16) -> Result<Vec<GameRecord>> {
        let url = self.config.url_for(season);
        info!("Fetching weekly player stats from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch weekly stats for {season}"))?;

        if !response.status().is_success() {
            anyhow::bail!("Weekly stats request failed with status: {}", response.status());
        }

        let body = response.text().await.context("Failed to read weekly stats body")?;
        info!("Fetched weekly stats CSV ({} bytes)", body.len());

        let records = parse_weekly_csv(&body)
            .with_context(|| format!("Failed to parse weekly stats CSV for {season}"))?;
        info!("Parsed {} player-week rows for season {}", records.len(), season);

        Ok(records)
    }
}

#[async_trait]
impl WeeklyDataSource for NflverseFetcher {
    async fn fetch_weekly(&self, seasons: &[u16]) -> Result<Vec<GameRecord>> {
        let mut all = Vec::new();
        for (i, &season) in seasons.iter().enumerate() {
            if i > 0 {
                // Small delay between release downloads to be respectful
                tokio::time::sleep(Duration::from_millis(250)).await;
            }
            all.extend(self.fetch_season(season).await?);
        }
        Ok(all)
    }
}

/// Parse a weekly stats CSV body into game records.
///
/// Columns beyond the modeled set are ignored; modeled stat columns absent
/// from the header deserialize as missing, which downstream code treats as
/// "column not in this year's schema".
pub fn parse_weekly_csv(body: &str) -> Result<Vec<GameRecord>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(body.as_bytes());

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: GameRecord = row.context("Malformed weekly stats row")?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "\
player_id,player_name,player_display_name,position,position_group,headshot_url,recent_team,season,week,season_type,opponent_team,completions,attempts,passing_yards,passing_tds,interceptions,carries,rushing_yards,rushing_tds,receptions,targets,receiving_yards,receiving_tds,receiving_fumbles,fantasy_points,fantasy_points_ppr
00-0034857,J.Allen,Josh Allen,QB,QB,https://example.com/allen.png,BUF,2024,1,REG,ARI,18,23,232,2,0,9,39,0,NA,NA,NA,NA,NA,23.2,23.2
00-0036963,A.St. Brown,Amon-Ra St. Brown,WR,WR,https://example.com/asb.png,DET,2024,1,REG,LA,,,,,,,,,7,9,42,0,0,8.2,15.2
";

    #[test]
    fn parses_fixture_rows() {
        let records = parse_weekly_csv(FIXTURE).unwrap();
        assert_eq!(records.len(), 2);

        let allen = &records[0];
        assert_eq!(allen.player_display_name, "Josh Allen");
        assert_eq!(allen.position, "QB");
        assert_eq!(allen.season, 2024);
        assert_eq!(allen.week, 1);
        assert_eq!(allen.opponent_team, "ARI");
        assert_eq!(allen.passing_yards, Some(232.0));
        assert_eq!(allen.receptions, None);

        let asb = &records[1];
        assert_eq!(asb.completions, None);
        assert_eq!(asb.receptions, Some(7.0));
        assert_eq!(asb.fantasy_points_ppr, Some(15.2));
    }

    #[test]
    fn ignores_unknown_columns() {
        let body = "\
player_display_name,position,season,week,opponent_team,receiving_yards,some_future_column
Justin Jefferson,WR,2024,3,HOU,102,xyz
";
        let records = parse_weekly_csv(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].receiving_yards, Some(102.0));
        // Columns absent from the header come back as missing
        assert_eq!(records[0].passing_yards, None);
    }

    #[test]
    fn rejects_non_numeric_stat_value() {
        let body = "\
player_display_name,position,season,week,opponent_team,receiving_yards
Justin Jefferson,WR,2024,3,HOU,not-a-number
";
        assert!(parse_weekly_csv(body).is_err());
    }
}
