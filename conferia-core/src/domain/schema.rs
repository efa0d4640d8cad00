// conferia-core/src/domain/schema.rs
//
// Explicit schema binding for the two dashboard variants. The published
// sheets carry no declared schema: summary columns are addressed by header
// name, divergence columns by position. Binding resolves and validates both
// up front so a reordered export fails loudly instead of being misread.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::error::DomainError;
use crate::domain::table::Table;

// --- VARIANTS ---

/// Dashboard flavor. Same KPI formulas, different column bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Fiscal-document conference (one row per checked document).
    Fiscal,
    /// XML field conference (one row per checked item).
    Xml,
}

impl Variant {
    pub fn schema(self) -> &'static VariantSchema {
        match self {
            Variant::Fiscal => &FISCAL_SCHEMA,
            Variant::Xml => &XML_SCHEMA,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Fiscal => "fiscal",
            Variant::Xml => "xml",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fiscal" => Ok(Variant::Fiscal),
            "xml" => Ok(Variant::Xml),
            other => Err(DomainError::UnknownVariant(other.to_string())),
        }
    }
}

/// Column bindings for one dashboard variant.
#[derive(Debug, Clone)]
pub struct VariantSchema {
    pub name: &'static str,
    pub summary: SummaryColumns,
    pub divergence: DivergenceColumns,
}

/// Summary columns are bound by header name.
#[derive(Debug, Clone)]
pub struct SummaryColumns {
    pub checked: &'static str,
    pub success: &'static str,
    pub error: &'static str,
}

/// Divergence columns are bound by position into the header row.
#[derive(Debug, Clone)]
pub struct DivergenceColumns {
    /// Composite natural key identifying one logical source document.
    pub document_key: &'static [usize],
    /// Category column feeding the per-category distribution.
    pub category: usize,
    /// Free-text rule-application description the RuleKey derives from.
    pub rule_text: usize,
    /// Literal prefix stripped from the derived RuleKey, when present.
    pub rule_prefix: Option<&'static str>,
}

pub static FISCAL_SCHEMA: VariantSchema = VariantSchema {
    name: "fiscal",
    summary: SummaryColumns {
        checked: "Notas Conferidas",
        success: "Sucesso",
        error: "Erro",
    },
    divergence: DivergenceColumns {
        // branch code, document number, series
        document_key: &[0, 3, 4],
        // state
        category: 1,
        rule_text: 10,
        rule_prefix: Some("Regra: "),
    },
};

pub static XML_SCHEMA: VariantSchema = VariantSchema {
    name: "xml",
    summary: SummaryColumns {
        checked: "Itens Conferidos",
        success: "Sucesso",
        error: "Erro",
    },
    divergence: DivergenceColumns {
        // access key, product
        document_key: &[0, 1],
        // product
        category: 1,
        // checked field name
        rule_text: 2,
        rule_prefix: None,
    },
};

// --- BOUND VIEWS ---

/// Summary table with its three numeric columns resolved.
#[derive(Debug)]
pub struct SummaryView<'t> {
    table: &'t Table,
    cols: [(usize, &'static str); 3], // (position, header name): checked, success, error
}

/// Column-wise totals over the bound summary columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryTotals {
    pub rules: u64,
    pub checked: u64,
    pub success: u64,
    pub error: u64,
}

impl<'t> SummaryView<'t> {
    pub fn bind(table: &'t Table, cols: &SummaryColumns) -> Result<Self, DomainError> {
        let resolve = |name: &'static str| {
            table
                .column_index(name)
                .map(|idx| (idx, name))
                .ok_or_else(|| DomainError::UnexpectedColumnLayout {
                    table: "summary".to_string(),
                    detail: format!(
                        "column '{}' not found (headers: [{}])",
                        name,
                        table.headers().join(", ")
                    ),
                })
        };
        Ok(Self {
            table,
            cols: [resolve(cols.checked)?, resolve(cols.success)?, resolve(cols.error)?],
        })
    }

    /// Column-wise sums across all rows. A row where success + error
    /// exceeds the checked count is tolerated but logged.
    pub fn totals(&self) -> Result<SummaryTotals, DomainError> {
        let mut sums = [0u64; 3];
        for row_idx in 0..self.table.row_count() {
            let mut row_vals = [0u64; 3];
            for (slot, (col_idx, name)) in self.cols.iter().enumerate() {
                let raw = self.table.cell(row_idx, *col_idx);
                row_vals[slot] =
                    parse_count(raw).ok_or_else(|| DomainError::MalformedSummaryCell {
                        column: (*name).to_string(),
                        row: row_idx,
                        value: raw.to_string(),
                    })?;
            }
            let [checked, success, error] = row_vals;
            if success + error > checked {
                warn!(
                    row = row_idx,
                    checked, success, error, "summary row drift: success + error > checked"
                );
            }
            for (slot, v) in row_vals.iter().enumerate() {
                sums[slot] += v;
            }
        }
        Ok(SummaryTotals {
            rules: self.table.row_count() as u64,
            checked: sums[0],
            success: sums[1],
            error: sums[2],
        })
    }
}

/// Parses one summary count. Blank cells read as zero (exports leave
/// untouched rules empty); integral floats like "12.0" are accepted.
fn parse_count(raw: &str) -> Option<u64> {
    let t = raw.trim();
    if t.is_empty() {
        return Some(0);
    }
    if let Ok(v) = t.parse::<u64>() {
        return Some(v);
    }
    match t.parse::<f64>() {
        Ok(f) if f >= 0.0 && f.fract() == 0.0 => Some(f as u64),
        _ => None,
    }
}

/// Divergence table with its positional bindings validated against the
/// header width.
#[derive(Debug)]
pub struct DivergenceView<'t> {
    table: &'t Table,
    cols: &'static DivergenceColumns,
}

impl<'t> DivergenceView<'t> {
    pub fn bind(
        table: &'t Table,
        cols: &'static DivergenceColumns,
    ) -> Result<Self, DomainError> {
        let max_pos = cols
            .document_key
            .iter()
            .copied()
            .chain([cols.category, cols.rule_text])
            .max()
            .unwrap_or(0);
        if max_pos >= table.width() {
            return Err(DomainError::UnexpectedColumnLayout {
                table: "divergences".to_string(),
                detail: format!(
                    "expected at least {} columns, found {}",
                    max_pos + 1,
                    table.width()
                ),
            });
        }
        Ok(Self { table, cols })
    }

    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    /// Composite document key of one row, in binding order.
    pub fn document_key(&self, row: usize) -> Vec<&str> {
        self.cols
            .document_key
            .iter()
            .map(|&col| self.table.cell(row, col))
            .collect()
    }

    pub fn category(&self, row: usize) -> &str {
        self.table.cell(row, self.cols.category)
    }

    pub fn rule_text(&self, row: usize) -> &str {
        self.table.cell(row, self.cols.rule_text)
    }

    pub fn rule_prefix(&self) -> Option<&'static str> {
        self.cols.rule_prefix
    }
}
