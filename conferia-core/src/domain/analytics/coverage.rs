// conferia-core/src/domain/analytics/coverage.rs

use serde::Serialize;

use crate::domain::schema::SummaryTotals;
use crate::domain::table::Table;

/// KPI set A: rule-catalog coverage scorecards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageMetrics {
    /// Rows in the rule catalog (scenarios evaluated).
    pub rules_evaluated: u64,
    /// Rows in the summary table (rules with a conference summary).
    pub rules_in_summary: u64,
    pub records_checked: u64,
    pub success_count: u64,
    pub error_count: u64,
    pub success_rate: f64,
    pub error_rate: f64,
}

impl CoverageMetrics {
    /// Pure arithmetic over the catalog row count and the summary totals.
    /// Zero records checked yields both rates = 0, not NaN.
    pub fn compute(rule_catalog: &Table, totals: SummaryTotals) -> Self {
        let (success_rate, error_rate) = if totals.checked > 0 {
            (
                totals.success as f64 / totals.checked as f64,
                totals.error as f64 / totals.checked as f64,
            )
        } else {
            (0.0, 0.0)
        };
        Self {
            rules_evaluated: rule_catalog.row_count() as u64,
            rules_in_summary: totals.rules,
            records_checked: totals.checked,
            success_count: totals.success,
            error_count: totals.error,
            success_rate,
            error_rate,
        }
    }
}
