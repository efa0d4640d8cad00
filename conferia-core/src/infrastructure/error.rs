// conferia-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- HTTP ---
    #[error("HTTP Error: {0}")]
    #[diagnostic(
        code(conferia::infra::http),
        help("Check the source URL, its sharing settings and network connectivity.")
    )]
    Http(#[from] reqwest::Error),

    // --- CSV DECODING ---
    #[error("CSV Decoding Error: {0}")]
    #[diagnostic(
        code(conferia::infra::csv),
        help("The source did not return well-formed CSV content.")
    )]
    Csv(#[from] csv::Error),

    #[error("Source '{0}' returned no tabular data")]
    #[diagnostic(code(conferia::infra::empty_table))]
    EmptyTable(String),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(conferia::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(conferia::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Configuration file not found at '{0}'")]
    #[diagnostic(code(conferia::infra::config_missing))]
    ConfigNotFound(String),
}
