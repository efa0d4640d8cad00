// conferia/src/commands/render.rs
//
// USE CASE: Fetch the four tables, aggregate, print the dashboard report.

use std::path::Path;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table as DisplayTable};
use tracing::debug;

use conferia_core::application::{DashboardReport, DivergenceSection, TableLoader, build_dashboard};
use conferia_core::infrastructure::cache::TableCache;

pub async fn execute(
    variant: &str,
    config_path: Option<&Path>,
    format: &str,
) -> anyhow::Result<()> {
    println!("⚙️  Loading configuration...");
    let (variant, config, fetcher) = super::setup(variant, config_path)?;

    let cache = TableCache::new();
    let loader = TableLoader::new(&fetcher, &cache);

    println!("📥 Fetching tables for '{variant}'...");
    let report = build_dashboard(&loader, variant, config.sources(variant)).await?;
    debug!(variant = %report.variant, "report assembled");

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "table" => print_report(&report),
        other => anyhow::bail!("Unknown format '{other}' (expected: table | json)"),
    }

    Ok(())
}

fn print_report(report: &DashboardReport) {
    println!("\n📊 Conference Dashboard — {}", report.variant);

    // --- KPI SET A: RULE COVERAGE ---
    println!("\nRule Coverage");
    let mut scorecards = new_table(vec!["Metric", "Value"]);
    let coverage = &report.coverage;
    scorecards.add_row(vec![
        "Rules evaluated".to_string(),
        coverage.rules_evaluated.to_string(),
    ]);
    scorecards.add_row(vec![
        "Rules in summary".to_string(),
        coverage.rules_in_summary.to_string(),
    ]);
    scorecards.add_row(vec![
        "Records checked".to_string(),
        coverage.records_checked.to_string(),
    ]);
    scorecards.add_row(vec![
        "Checks without error".to_string(),
        coverage.success_count.to_string(),
    ]);
    scorecards.add_row(vec![
        "Checks with error".to_string(),
        coverage.error_count.to_string(),
    ]);
    scorecards.add_row(vec!["Success rate".to_string(), percent(coverage.success_rate)]);
    scorecards.add_row(vec!["Error rate".to_string(), percent(coverage.error_rate)]);
    println!("{scorecards}");

    // --- KPI SET B: DIVERGENCE ANALYSIS ---
    println!("\nDivergence Analysis");
    match &report.divergences {
        DivergenceSection::Clean => {
            println!("🎉 No divergences found in the data sample!");
        }
        DivergenceSection::Found(metrics) => {
            let mut cards = new_table(vec!["Metric", "Value"]);
            cards.add_row(vec![
                "Documents in sample".to_string(),
                metrics.sample_size.to_string(),
            ]);
            cards.add_row(vec![
                "Documents with divergence".to_string(),
                metrics.documents_with_divergence.to_string(),
            ]);
            cards.add_row(vec![
                "Divergence rows".to_string(),
                metrics.divergence_row_count.to_string(),
            ]);
            println!("{cards}");

            println!("\nTop failing rules");
            let mut rules = new_table(vec!["Rule", "Divergences"]);
            for entry in &metrics.top_failing_rules {
                rules.add_row(vec![entry.rule.clone(), entry.count.to_string()]);
            }
            println!("{rules}");

            println!("\nDivergences by category");
            let mut by_category: Vec<(&String, &u64)> =
                metrics.divergence_by_category.iter().collect();
            // Unordered by contract; sorted here for stable terminal output.
            by_category.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            let mut categories = new_table(vec!["Category", "Divergences"]);
            for (category, count) in by_category {
                categories.add_row(vec![category.clone(), count.to_string()]);
            }
            println!("{categories}");
        }
    }
}

fn new_table(header: Vec<&str>) -> DisplayTable {
    let mut table = DisplayTable::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn percent(rate: f64) -> String {
    format!("{:.2}%", rate * 100.0)
}
