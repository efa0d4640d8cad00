// conferia/src/main.rs

use clap::Parser;

mod cli;
mod commands;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing)
    // RUST_LOG=debug conferia render ... for the details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        // --- USE CASE: RENDER THE DASHBOARD ---
        Commands::Render {
            variant,
            config,
            format,
        } => {
            if let Err(e) = commands::render::execute(&variant, config.as_deref(), &format).await {
                eprintln!("❌ Render failed: {e}");
                std::process::exit(1);
            }
        }

        // --- USE CASE: INSPECT ONE RAW TABLE ---
        Commands::Inspect {
            variant,
            table,
            limit,
            config,
        } => {
            if let Err(e) =
                commands::inspect::execute(&variant, &table, limit, config.as_deref()).await
            {
                eprintln!("❌ Inspect failed: {e}");
                std::process::exit(1);
            }
        }

        // --- USE CASE: SHOW RESOLVED SOURCES ---
        Commands::Sources { variant, config } => {
            if let Err(e) = commands::sources::execute(&variant, config.as_deref()) {
                eprintln!("❌ Sources failed: {e}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
