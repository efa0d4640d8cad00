// conferia-core/src/domain/analytics/mod.rs

pub mod coverage;
pub mod divergence;
pub mod rulekey;

// Re-exports
pub use coverage::CoverageMetrics;
pub use divergence::{DivergenceMetrics, RuleFailureCount, TOP_RULES_LIMIT};
