// conferia-core/src/application/loader.rs

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::table::Table;
use crate::infrastructure::cache::TableCache;
use crate::ports::TableFetcher;

/// Fail-soft table loading: fetcher + cache behind the `load -> Option`
/// contract. Any fetch or decode failure collapses to absence; the caller
/// decides whether a missing table is blocking (essentials) or a designed
/// success path (divergences).
pub struct TableLoader<'a> {
    fetcher: &'a dyn TableFetcher,
    cache: &'a TableCache,
}

impl<'a> TableLoader<'a> {
    pub fn new(fetcher: &'a dyn TableFetcher, cache: &'a TableCache) -> Self {
        Self { fetcher, cache }
    }

    pub async fn load(&self, source: &str) -> Option<Arc<Table>> {
        if let Some(hit) = self.cache.get(source) {
            debug!(source, "table cache hit");
            return Some(hit);
        }

        match self.fetcher.fetch(source).await {
            Ok(table) if !table.is_empty() => Some(self.cache.insert(source, table)),
            Ok(_) => {
                // The fetcher contract already rejects empty tables, but a
                // loader must hold its own invariant whatever the fetcher.
                warn!(source, "source returned an empty table");
                None
            }
            Err(e) => {
                warn!(source, error = %e, "failed to load table source");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ConferiaError;
    use crate::infrastructure::error::InfrastructureError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stub fetcher serving a canned response and counting fetches.
    struct StubFetcher {
        response: Result<Table, String>,
        fetches: AtomicUsize,
    }

    impl StubFetcher {
        fn ok(table: Table) -> Self {
            Self {
                response: Ok(table),
                fetches: AtomicUsize::new(0),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
                fetches: AtomicUsize::new(0),
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TableFetcher for StubFetcher {
        async fn fetch(&self, _source: &str) -> Result<Table, ConferiaError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            match &self.response {
                Ok(table) => Ok(table.clone()),
                Err(message) => Err(ConferiaError::Infrastructure(
                    InfrastructureError::ConfigError(message.clone()),
                )),
            }
        }
    }

    fn small_table() -> Table {
        Table::new(vec!["a".into()], vec![vec!["1".into()]])
    }

    #[tokio::test]
    async fn test_load_populates_cache_and_skips_refetch() {
        let fetcher = StubFetcher::ok(small_table());
        let cache = TableCache::new();
        let loader = TableLoader::new(&fetcher, &cache);

        assert!(loader.load("s1").await.is_some());
        assert!(loader.load("s1").await.is_some());
        assert_eq!(fetcher.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_collapses_to_none() {
        let fetcher = StubFetcher::failing("boom");
        let cache = TableCache::new();
        let loader = TableLoader::new(&fetcher, &cache);

        assert!(loader.load("s1").await.is_none());
        // Failures are not cached: the next render retries.
        assert!(loader.load("s1").await.is_none());
        assert_eq!(fetcher.fetch_count(), 2);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_empty_table_collapses_to_none() {
        let fetcher = StubFetcher::ok(Table::new(vec!["a".into()], vec![]));
        let cache = TableCache::new();
        let loader = TableLoader::new(&fetcher, &cache);

        assert!(loader.load("s1").await.is_none());
        assert!(cache.is_empty());
    }
}
