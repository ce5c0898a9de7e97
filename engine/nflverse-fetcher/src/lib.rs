//! nflverse Fetcher
//!
//! This crate fetches weekly NFL player box-score data from the nflverse
//! data releases and holds it in an in-process season cache. The dashboard
//! loads one season of data at startup and reads it for the rest of the
//! process lifetime.

pub mod config;
pub mod fetcher;
pub mod models;
pub mod store;

pub use config::FetcherConfig;
pub use fetcher::{NflverseFetcher, WeeklyDataSource};
pub use models::{GameRecord, SeasonData};
pub use store::SeasonStore;
