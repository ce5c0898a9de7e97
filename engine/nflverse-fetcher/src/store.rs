use crate::fetcher::WeeklyDataSource;
use crate::models::SeasonData;
use anyhow::Result;
use tracing::info;

/// Process-wide cache for the season load.
///
/// The season table is fetched at most once and is read-only afterwards;
/// every derived structure (player series, baselines, summaries) is a pure
/// function of it. `reload` is the explicit invalidation hook.
pub struct SeasonStore {
    seasons: Vec<u16>,
    data: Option<SeasonData>,
}

impl SeasonStore {
    /// Create an empty store for the given seasons
    pub fn new(seasons: Vec<u16>) -> Self {
        Self { seasons, data: None }
    }

    /// Get the cached season data, fetching it on first use
    pub async fn get_or_load(&mut self, source: &dyn WeeklyDataSource) -> Result<&SeasonData> {
        if self.data.is_none() {
            info!("Loading season data for seasons {:?}", self.seasons);
            let records = source.fetch_weekly(&self.seasons).await?;
            self.data = Some(SeasonData::new(self.seasons.clone(), records));
        }

        Ok(self.data.as_ref().expect("season data populated above"))
    }

    /// Drop the cached load and fetch fresh data for a new season set
    pub async fn reload(
        &mut self,
        seasons: Vec<u16>,
        source: &dyn WeeklyDataSource,
    ) -> Result<&SeasonData> {
        info!("Reloading season data for seasons {:?}", seasons);
        self.seasons = seasons;
        self.data = None;
        self.get_or_load(source).await
    }

    /// The cached data, if a load has happened
    pub fn data(&self) -> Option<&SeasonData> {
        self.data.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GameRecord;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl WeeklyDataSource for CountingSource {
        async fn fetch_weekly(&self, _seasons: &[u16]) -> Result<Vec<GameRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    #[test]
    fn fetches_at_most_once() {
        let source = CountingSource { calls: AtomicUsize::new(0) };
        let mut store = SeasonStore::new(vec![2024]);

        tokio_test::block_on(async {
            store.get_or_load(&source).await.unwrap();
            store.get_or_load(&source).await.unwrap();
            store.get_or_load(&source).await.unwrap();
        });

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reload_refetches() {
        let source = CountingSource { calls: AtomicUsize::new(0) };
        let mut store = SeasonStore::new(vec![2024]);

        tokio_test::block_on(async {
            store.get_or_load(&source).await.unwrap();
            store.reload(vec![2023], &source).await.unwrap();
        });

        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert_eq!(store.data().unwrap().seasons, vec![2023]);
    }
}
