// conferia/src/commands/inspect.rs
//
// USE CASE: Fetch one raw table and dump headers + sample rows. Unlike
// `render`, fetch failures surface here as typed errors on purpose, so an
// operator can see why a source refuses to load.

use std::path::Path;

use conferia_core::ports::TableFetcher;

pub async fn execute(
    variant: &str,
    table: &str,
    limit: usize,
    config_path: Option<&Path>,
) -> anyhow::Result<()> {
    let (variant, config, fetcher) = super::setup(variant, config_path)?;
    let sources = config.sources(variant);

    let source = match table {
        "base" => &sources.base,
        "rules" => &sources.rules,
        "divergences" => &sources.divergences,
        "summary" => &sources.summary,
        other => anyhow::bail!(
            "Unknown table '{other}' (expected: base | rules | divergences | summary)"
        ),
    };

    println!("\n🔍 Inspecting Table: '{table}' ({variant})");

    let fetched = fetcher.fetch(source).await?;

    println!("   Columns: [{}]", fetched.headers().join(", "));
    println!("   --- Rows (Limit {limit}) ---");
    for row in fetched.rows().iter().take(limit) {
        println!("   ➜ {}", row.join(" | "));
    }
    println!("   ({} rows total)", fetched.row_count());

    Ok(())
}
