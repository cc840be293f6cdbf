use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use stockdesk_core::UnitId;

#[derive(Parser, Debug)]
#[command(name = "stockdesk")]
#[command(about = "Resolve unit availability, prices and label text from a stock snapshot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Snapshot document (JSON)
    #[arg(short = 's', long, env = "STOCKDESK_SNAPSHOT", value_name = "PATH")]
    pub snapshot: PathBuf,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "json", global = true)]
    pub format: OutputFormat,

    /// Log filter directive (overrides RUST_LOG)
    #[arg(long = "log-level", value_name = "FILTER", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Availability of every unit in the snapshot
    #[command(alias = "a")]
    Availability,

    /// Price facts for one unit
    #[command(alias = "p")]
    Price {
        /// Unit id
        #[arg(short = 'u', long)]
        unit: UnitId,
    },

    /// Printable labels for one unit
    #[command(alias = "l")]
    Labels {
        /// Unit id
        #[arg(short = 'u', long)]
        unit: UnitId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// One line per record
    Human,
}
