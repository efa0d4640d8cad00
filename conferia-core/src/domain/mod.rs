pub mod analytics;
pub mod error;
pub mod schema;
pub mod table;

// Convenient re-exports to simplify imports elsewhere
pub use error::DomainError;
pub use schema::Variant;
pub use table::Table;
