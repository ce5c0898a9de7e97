//! Service configuration management

use anyhow::{Context, Result};
use nflverse_fetcher::FetcherConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Season data provider configuration
    pub fetcher: FetcherConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty, compact)
    pub format: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { fetcher: FetcherConfig::default(), logging: LoggingConfig::default() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "compact".to_string() }
    }
}

/// Load configuration: defaults, then the TOML file if one is given, then
/// environment variable overrides.
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    let mut config = match path {
        Some(path) => load_from_file(path)?,
        None => DashboardConfig::default(),
    };

    load_from_env(&mut config);
    validate_config(&config)?;

    Ok(config)
}

/// Load configuration from a TOML file
fn load_from_file(path: &Path) -> Result<DashboardConfig> {
    tracing::debug!("Loading configuration from file: {:?}", path);
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Apply environment variable overrides
fn load_from_env(config: &mut DashboardConfig) {
    if let Ok(level) = std::env::var("DASHBOARD_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Ok(format) = std::env::var("DASHBOARD_LOG_FORMAT") {
        config.logging.format = format;
    }

    if let Ok(seasons) = std::env::var("NFLVERSE_SEASONS") {
        let parsed: Vec<u16> = seasons.split(',').filter_map(|s| s.trim().parse().ok()).collect();
        if !parsed.is_empty() {
            config.fetcher.seasons = parsed;
        }
    }

    if let Ok(url) = std::env::var("NFLVERSE_URL_TEMPLATE") {
        config.fetcher.url_template = url;
    }

    if let Ok(timeout) = std::env::var("NFLVERSE_TIMEOUT_SECS") {
        if let Ok(secs) = timeout.parse() {
            config.fetcher.timeout_secs = secs;
        }
    }
}

/// Reject configurations that cannot work
fn validate_config(config: &DashboardConfig) -> Result<()> {
    if config.fetcher.seasons.is_empty() {
        anyhow::bail!("At least one season must be configured");
    }
    if !config.fetcher.url_template.contains("{year}") {
        anyhow::bail!("Fetcher URL template must contain a {{year}} placeholder");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&DashboardConfig::default()).is_ok());
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[logging]\nlevel = \"debug\"\n\n[fetcher]\nseasons = [2023, 2024]\n"
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.fetcher.seasons, vec![2023, 2024]);
        // Unset sections keep their defaults
        assert!(config.fetcher.url_template.contains("{year}"));
    }

    #[test]
    fn empty_seasons_are_rejected() {
        let mut config = DashboardConfig::default();
        config.fetcher.seasons.clear();
        assert!(validate_config(&config).is_err());
    }
}
