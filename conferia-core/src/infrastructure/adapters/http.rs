// conferia-core/src/infrastructure/adapters/http.rs

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::table::Table;
use crate::error::ConferiaError;
use crate::infrastructure::decode::decode_csv;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::TableFetcher;

/// Fetches published CSV exports. `http(s)://` sources go through a shared
/// HTTP client; anything else is read as a local file path, which is how
/// tests and offline runs feed fixtures in.
pub struct CsvTableFetcher {
    client: reqwest::Client,
}

impl CsvTableFetcher {
    pub fn new(timeout: Duration) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    async fn fetch_bytes(&self, source: &str) -> Result<Vec<u8>, InfrastructureError> {
        if source.starts_with("http://") || source.starts_with("https://") {
            let response = self
                .client
                .get(source)
                .send()
                .await?
                .error_for_status()?;
            Ok(response.bytes().await?.to_vec())
        } else {
            Ok(tokio::fs::read(source).await?)
        }
    }
}

#[async_trait]
impl TableFetcher for CsvTableFetcher {
    async fn fetch(&self, source: &str) -> Result<Table, ConferiaError> {
        let bytes = self.fetch_bytes(source).await?;
        let table = decode_csv(source, &bytes)?;
        debug!(
            source,
            rows = table.row_count(),
            cols = table.width(),
            "table fetched"
        );
        Ok(table)
    }
}
