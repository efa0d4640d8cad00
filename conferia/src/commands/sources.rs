// conferia/src/commands/sources.rs
//
// USE CASE: Show the resolved source configuration for one variant.

use std::path::Path;

pub fn execute(variant: &str, config_path: Option<&Path>) -> anyhow::Result<()> {
    let (variant, config, _fetcher) = super::setup(variant, config_path)?;
    let sources = config.sources(variant);

    println!("🔗 Sources for '{variant}':");
    println!("   base        ➜ {}", sources.base);
    println!("   rules       ➜ {}", sources.rules);
    println!("   divergences ➜ {}", sources.divergences);
    println!("   summary     ➜ {}", sources.summary);
    println!("   (request timeout: {}s)", config.request_timeout_secs);

    Ok(())
}
