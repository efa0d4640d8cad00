// conferia-core/src/application/report.rs

use serde::Serialize;

use crate::domain::analytics::{CoverageMetrics, DivergenceMetrics};

// --- DTOs (Data Transfer Objects) ---
// These structures define exactly what a presentation surface consumes:
// scorecard scalars plus the two grouped-count series.

/// Full dashboard report for one variant.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub variant: String,
    pub generated_at: String,
    pub coverage: CoverageMetrics,
    pub divergences: DivergenceSection,
}

/// The divergence half of the dashboard. An absent or empty divergence
/// table is the designed success path, not a degraded state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DivergenceSection {
    /// No divergences found in the data sample.
    Clean,
    Found(DivergenceMetrics),
}

impl DivergenceSection {
    pub fn is_clean(&self) -> bool {
        matches!(self, DivergenceSection::Clean)
    }
}
