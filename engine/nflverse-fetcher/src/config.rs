use serde::{Deserialize, Serialize};

/// Configuration for the nflverse fetcher
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Download URL template; `{year}` is replaced per requested season
    pub url_template: String,

    /// Seasons to load (e.g., [2024])
    pub seasons: Vec<u16>,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            url_template:
                "https://github.com/nflverse/nflverse-data/releases/download/player_stats/player_stats_{year}.csv"
                    .to_string(),
            seasons: vec![2024],
            timeout_secs: 30,
        }
    }
}

impl FetcherConfig {
    /// Resolve the download URL for one season
    pub fn url_for(&self, season: u16) -> String {
        self.url_template.replace("{year}", &season.to_string())
    }
}
