// conferia-core/src/ports/fetcher.rs

// This file defines what the application needs from a table source,
// without knowing how it is fetched or decoded.

use crate::domain::table::Table;
use crate::error::ConferiaError;
use async_trait::async_trait;

#[async_trait]
pub trait TableFetcher: Send + Sync {
    /// Fetch and decode one tabular source. Errors stay typed here; the
    /// fail-soft collapse to absence happens in the application loader.
    async fn fetch(&self, source: &str) -> Result<Table, ConferiaError>;
}
