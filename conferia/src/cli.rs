// conferia/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "conferia")]
#[command(about = "Validation analytics for fiscal document and XML conference runs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📊 Fetches the four tables and renders the dashboard report
    Render {
        /// Dashboard variant: fiscal | xml
        #[arg(long, short, default_value = "fiscal")]
        variant: String,

        /// Source configuration file (defaults to ./conferia.yaml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: table | json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// 🔍 Fetches one raw table (headers + sample rows)
    Inspect {
        /// Dashboard variant: fiscal | xml
        #[arg(long, short, default_value = "fiscal")]
        variant: String,

        /// Table to inspect: base | rules | divergences | summary
        #[arg(long, short)]
        table: String,

        /// Number of sample rows to display
        #[arg(long, default_value = "5")]
        limit: usize,

        /// Source configuration file (defaults to ./conferia.yaml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// 🔗 Shows the resolved source configuration for a variant
    Sources {
        /// Dashboard variant: fiscal | xml
        #[arg(long, short, default_value = "fiscal")]
        variant: String,

        /// Source configuration file (defaults to ./conferia.yaml)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
