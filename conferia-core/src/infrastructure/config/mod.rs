pub mod sources;

pub use sources::{DashboardConfig, SourceSet, load_dashboard_config};
