// conferia/src/commands/mod.rs

pub mod inspect;
pub mod render;
pub mod sources;

use std::path::Path;
use std::time::Duration;

use conferia_core::domain::schema::Variant;
use conferia_core::infrastructure::adapters::CsvTableFetcher;
use conferia_core::infrastructure::config::{DashboardConfig, load_dashboard_config};

/// Shared command preamble: parse the variant, load the configuration,
/// build the HTTP fetcher with the configured timeout.
pub(crate) fn setup(
    variant: &str,
    config_path: Option<&Path>,
) -> anyhow::Result<(Variant, DashboardConfig, CsvTableFetcher)> {
    let variant: Variant = variant.parse()?;
    let config = load_dashboard_config(config_path)?;
    let fetcher = CsvTableFetcher::new(Duration::from_secs(config.request_timeout_secs))?;
    Ok((variant, config, fetcher))
}
