// conferia-core/src/domain/analytics/divergence.rs

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::domain::analytics::rulekey;
use crate::domain::schema::DivergenceView;
use crate::domain::table::Table;

/// How many rule keys the failure ranking keeps.
pub const TOP_RULES_LIMIT: usize = 10;

/// One entry of the ranked failure series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleFailureCount {
    pub rule: String,
    pub count: u64,
}

/// KPI set B: divergence analysis. Computed only when the divergence table
/// is present and non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivergenceMetrics {
    /// Distinct rows in the base sample.
    pub sample_size: u64,
    /// Distinct composite document keys among the divergence rows.
    pub documents_with_divergence: u64,
    /// Every row is one field-level mismatch, not one document.
    pub divergence_row_count: u64,
    /// The TOP_RULES_LIMIT most frequent rule keys, ordered ascending by
    /// count for horizontal-bar consumption; ties keep first-encountered
    /// order.
    pub top_failing_rules: Vec<RuleFailureCount>,
    /// Per-category mismatch counts, unordered.
    pub divergence_by_category: HashMap<String, u64>,
}

impl DivergenceMetrics {
    pub fn compute(base: &Table, view: &DivergenceView<'_>) -> Self {
        let rows = view.row_count();

        let mut documents: HashSet<Vec<&str>> = HashSet::new();
        let mut by_category: HashMap<String, u64> = HashMap::new();
        // Rule-key counts in first-encountered order, so the later sorts
        // can stay stable across ties.
        let mut rule_order: Vec<RuleFailureCount> = Vec::new();
        let mut rule_slots: HashMap<String, usize> = HashMap::new();

        for row in 0..rows {
            documents.insert(view.document_key(row));
            *by_category
                .entry(view.category(row).to_string())
                .or_insert(0) += 1;

            let key = rulekey::derive(view.rule_text(row), view.rule_prefix());
            match rule_slots.get(&key) {
                Some(&slot) => rule_order[slot].count += 1,
                None => {
                    rule_slots.insert(key.clone(), rule_order.len());
                    rule_order.push(RuleFailureCount { rule: key, count: 1 });
                }
            }
        }

        // Keep the highest counts, then flip to ascending. Both sorts are
        // stable, so equal counts stay in first-encountered order.
        rule_order.sort_by(|a, b| b.count.cmp(&a.count));
        rule_order.truncate(TOP_RULES_LIMIT);
        rule_order.sort_by(|a, b| a.count.cmp(&b.count));

        Self {
            sample_size: base.distinct_row_count() as u64,
            documents_with_divergence: documents.len() as u64,
            divergence_row_count: rows as u64,
            top_failing_rules: rule_order,
            divergence_by_category: by_category,
        }
    }
}
