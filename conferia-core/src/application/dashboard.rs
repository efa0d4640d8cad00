// conferia-core/src/application/dashboard.rs

use chrono::Utc;
use tracing::{info, instrument};

use crate::application::loader::TableLoader;
use crate::application::report::{DashboardReport, DivergenceSection};
use crate::domain::analytics::{CoverageMetrics, DivergenceMetrics};
use crate::domain::error::DomainError;
use crate::domain::schema::{DivergenceView, SummaryView, Variant};
use crate::error::ConferiaError;
use crate::infrastructure::config::SourceSet;

/// Builds the full dashboard report for one variant: load the four tables,
/// gate on the essentials, bind the variant schema, aggregate.
///
/// Pure function of the loaded tables; two invocations over identical
/// inputs yield identical metrics.
#[instrument(skip(loader, sources), fields(variant = %variant))]
pub async fn build_dashboard(
    loader: &TableLoader<'_>,
    variant: Variant,
    sources: &SourceSet,
) -> Result<DashboardReport, ConferiaError> {
    // The four loads are mutually independent; issue them concurrently.
    let (base, rules, divergences, summary) = futures::join!(
        loader.load(&sources.base),
        loader.load(&sources.rules),
        loader.load(&sources.divergences),
        loader.load(&sources.summary),
    );

    // Essentials gate: base, rules and summary must all be present.
    let mut missing = Vec::new();
    if base.is_none() {
        missing.push("base");
    }
    if rules.is_none() {
        missing.push("rules");
    }
    if summary.is_none() {
        missing.push("summary");
    }
    if !missing.is_empty() {
        return Err(DomainError::EssentialDataMissing {
            missing: missing.join(", "),
        }
        .into());
    }
    let (Some(base), Some(rules), Some(summary)) = (base, rules, summary) else {
        return Err(ConferiaError::InternalError(
            "essentials gate invariant broken".to_string(),
        ));
    };

    let schema = variant.schema();

    // KPI set A: catalog coverage
    let summary_view = SummaryView::bind(&summary, &schema.summary)?;
    let coverage = CoverageMetrics::compute(&rules, summary_view.totals()?);

    // KPI set B: divergence analysis, only when divergences exist
    let divergences = match divergences {
        Some(div) if !div.is_empty() => {
            let view = DivergenceView::bind(&div, &schema.divergence)?;
            DivergenceSection::Found(DivergenceMetrics::compute(&base, &view))
        }
        _ => {
            info!("no divergences in the sample");
            DivergenceSection::Clean
        }
    };

    Ok(DashboardReport {
        variant: schema.name.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        coverage,
        divergences,
    })
}
