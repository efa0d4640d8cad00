// conferia-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConferiaError {
    // --- DOMAIN ERRORS (Essentials gate, schema bindings) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (HTTP, CSV, IO, Config) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- GENERIC / APPLICATIVE ERRORS ---
    #[error("Internal Error: {0}")]
    InternalError(String),
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for ConferiaError {
    fn from(err: std::io::Error) -> Self {
        ConferiaError::Infrastructure(InfrastructureError::Io(err))
    }
}
