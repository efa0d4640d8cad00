// conferia-core/src/infrastructure/config/sources.rs

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domain::schema::Variant;
use crate::infrastructure::error::InfrastructureError;

// --- PUBLISHED EXPORT URLS (immutable defaults) ---

const FISCAL_BASE_URL: &str = "https://docs.google.com/spreadsheets/d/1j_gp1Wviqi2XtsqXmN6LM9v6NUg1CfuwuFPNBwIBNzs/export?format=csv&gid=0";
const FISCAL_RULES_URL: &str = "https://docs.google.com/spreadsheets/d/1j_gp1Wviqi2XtsqXmN6LM9v6NUg1CfuwuFPNBwIBNzs/export?format=csv&gid=811132636";
const FISCAL_DIVERGENCES_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQXjBJDTJKEqmfsJ7--1yKYu4GS_HGjSL6oYqmxvBQAuq531vP9Tn8aAtslzfcv7-nBI2etu-66UFg1/pub?gid=89787833&single=true&output=csv";
const FISCAL_SUMMARY_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQXjBJDTJKEqmfsJ7--1yKYu4GS_HGjSL6oYqmxvBQAuq531vP9Tn8aAtslzfcv7-nBI2etu-66UFg1/pub?gid=1794490689&single=true&output=csv";

const XML_BASE_URL: &str = FISCAL_BASE_URL;
const XML_RULES_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQXjBJDTJKEqmfsJ7--1yKYu4GS_HGjSL6oYqmxvBQAuq531vP9Tn8aAtslzfcv7-nBI2etu-66UFg1/pub?gid=1940409074&single=true&output=csv";
const XML_DIVERGENCES_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQXjBJDTJKEqmfsJ7--1yKYu4GS_HGjSL6oYqmxvBQAuq531vP9Tn8aAtslzfcv7-nBI2etu-66UFg1/pub?gid=783374226&single=true&output=csv";
const XML_SUMMARY_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQXjBJDTJKEqmfsJ7--1yKYu4GS_HGjSL6oYqmxvBQAuq531vP9Tn8aAtslzfcv7-nBI2etu-66UFg1/pub?gid=2111793638&single=true&output=csv";

fn default_timeout_secs() -> u64 {
    30
}

/// The four table sources of one dashboard variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSet {
    pub base: String,
    pub rules: String,
    pub divergences: String,
    pub summary: String,
}

impl SourceSet {
    fn fiscal_defaults() -> Self {
        Self {
            base: FISCAL_BASE_URL.to_string(),
            rules: FISCAL_RULES_URL.to_string(),
            divergences: FISCAL_DIVERGENCES_URL.to_string(),
            summary: FISCAL_SUMMARY_URL.to_string(),
        }
    }

    fn xml_defaults() -> Self {
        Self {
            base: XML_BASE_URL.to_string(),
            rules: XML_RULES_URL.to_string(),
            divergences: XML_DIVERGENCES_URL.to_string(),
            summary: XML_SUMMARY_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(
        rename = "request-timeout-secs",
        default = "default_timeout_secs"
    )]
    pub request_timeout_secs: u64,

    #[serde(default = "SourceSet::fiscal_defaults")]
    pub fiscal: SourceSet,

    #[serde(default = "SourceSet::xml_defaults")]
    pub xml: SourceSet,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_timeout_secs(),
            fiscal: SourceSet::fiscal_defaults(),
            xml: SourceSet::xml_defaults(),
        }
    }
}

impl DashboardConfig {
    pub fn sources(&self, variant: Variant) -> &SourceSet {
        match variant {
            Variant::Fiscal => &self.fiscal,
            Variant::Xml => &self.xml,
        }
    }
}

// --- LOADER ---

/// Loads the dashboard configuration.
///
/// An explicit path must exist; otherwise the working directory is searched
/// for the candidate filenames and, when none is present, the built-in
/// published-URL defaults apply. Environment variables are layered on top.
#[instrument(skip(explicit))]
pub fn load_dashboard_config(
    explicit: Option<&Path>,
) -> Result<DashboardConfig, InfrastructureError> {
    let mut config = match resolve_config_path(explicit)? {
        Some(path) => {
            info!(path = ?path, "Loading dashboard configuration");
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)?
        }
        None => {
            info!("No configuration file found, using built-in sources");
            DashboardConfig::default()
        }
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

fn resolve_config_path(
    explicit: Option<&Path>,
) -> Result<Option<PathBuf>, InfrastructureError> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(Some(path.to_path_buf()));
        }
        return Err(InfrastructureError::ConfigNotFound(
            path.display().to_string(),
        ));
    }

    let candidates = ["conferia.yaml", "conferia_sources.yaml"];
    for filename in candidates {
        let p = PathBuf::from(filename);
        if p.exists() {
            return Ok(Some(p));
        }
    }
    Ok(None)
}

fn apply_env_overrides(config: &mut DashboardConfig) {
    // Lets operators do: CONFERIA_TIMEOUT_SECS=5 conferia render
    if let Ok(val) = std::env::var("CONFERIA_TIMEOUT_SECS")
        && let Ok(secs) = val.parse::<u64>()
    {
        info!(old = config.request_timeout_secs, new = secs, "Overriding timeout via ENV");
        config.request_timeout_secs = secs;
    }
}
