//! Dashboard Service Library
//!
//! Wires the season data provider and the stat engine into renderable
//! views: configuration management, logging setup, view assembly, and a
//! terminal renderer.

use anyhow::{Context, Result};

pub mod config;
pub mod logging;
pub mod render;
pub mod view;

pub use config::DashboardConfig;
pub use logging::initialize_logging;
pub use render::render_dashboard;
pub use view::{build_dashboard, DashboardView, GameLog, StatChart};

/// Load configuration from the optional TOML file and environment variables
pub fn load_configuration(path: Option<&std::path::Path>) -> Result<DashboardConfig> {
    config::load_config(path).context("Failed to load dashboard configuration")
}
