// conferia-core/src/application/mod.rs

pub mod dashboard;
pub mod loader;
pub mod report;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do:
// `use conferia_core::application::{TableLoader, build_dashboard};`
// without knowing the internal file structure.

pub use dashboard::build_dashboard;
pub use loader::TableLoader;
pub use report::{DashboardReport, DivergenceSection};
