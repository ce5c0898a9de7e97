use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a numeric stat field. CSV carries these as strings where
/// missing values appear as an empty string or the literal "NA"/"NaN" (the
/// nflverse exports use both); JSON dumps carry plain numbers or null.
fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Str(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Num(v)) if v.is_nan() => Ok(None),
        Some(Raw::Num(v)) => Ok(Some(v)),
        Some(Raw::Str(s)) => match s.trim() {
            "" | "NA" | "NaN" => Ok(None),
            s => s.parse::<f64>().map(Some).map_err(serde::de::Error::custom),
        },
    }
}

/// One player's stat line for one completed week.
///
/// Field names follow the nflverse `player_stats` CSV schema. Numeric stat
/// fields are optional because the schema varies year to year and rows only
/// carry the columns relevant to the player's usage; consumers treat a
/// missing value as zero when aggregating.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameRecord {
    /// nflverse GSIS player ID (e.g., "00-0034857")
    #[serde(default)]
    pub player_id: String,

    /// Short name (e.g., "J.Allen")
    #[serde(default)]
    pub player_name: String,

    /// Display name (e.g., "Josh Allen")
    #[serde(default)]
    pub player_display_name: String,

    /// Position (QB, RB, WR, TE, ...)
    #[serde(default)]
    pub position: String,

    /// Position group (e.g., "QB", "RB", "WR")
    #[serde(default)]
    pub position_group: String,

    /// Player headshot image URL
    #[serde(default)]
    pub headshot_url: String,

    /// Team abbreviation for this week (e.g., "BUF")
    #[serde(default)]
    pub recent_team: String,

    /// Season year
    pub season: u16,

    /// Week number
    pub week: u32,

    /// Season type ("REG", "POST")
    #[serde(default)]
    pub season_type: String,

    /// Opponent team abbreviation
    #[serde(default)]
    pub opponent_team: String,

    #[serde(default, deserialize_with = "opt_f64")]
    pub completions: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub attempts: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub passing_yards: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub passing_tds: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub interceptions: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub carries: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub rushing_yards: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub rushing_tds: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub receptions: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub targets: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub receiving_yards: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub receiving_tds: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub receiving_fumbles: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub fantasy_points: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64")]
    pub fantasy_points_ppr: Option<f64>,
}

/// Container for one loaded season set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonData {
    /// Seasons covered by this load
    pub seasons: Vec<u16>,
    /// When this data was fetched
    pub fetched_at: DateTime<Utc>,
    /// One record per player per completed week
    pub records: Vec<GameRecord>,
}

impl SeasonData {
    /// Create a new season data container
    pub fn new(seasons: Vec<u16>, records: Vec<GameRecord>) -> Self {
        Self { seasons, fetched_at: Utc::now(), records }
    }

    /// Number of player-week rows in this load
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the load produced any rows
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The stat fields use a custom deserializer tuned for CSV; make sure
    // the JSON dump path still reads back what it wrote.
    #[test]
    fn json_dump_round_trip() {
        let record = GameRecord {
            player_display_name: "Josh Allen".to_string(),
            position: "QB".to_string(),
            season: 2024,
            week: 1,
            passing_yards: Some(232.0),
            ..GameRecord::default()
        };
        let data = SeasonData::new(vec![2024], vec![record]);

        let json = serde_json::to_string(&data).unwrap();
        let back: SeasonData = serde_json::from_str(&json).unwrap();

        assert_eq!(back.seasons, vec![2024]);
        assert_eq!(back.records[0].passing_yards, Some(232.0));
        assert_eq!(back.records[0].receiving_yards, None);
    }
}
