//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Badge-log attendance calculator.
///
/// Computes time in office, cafeteria breaks, and the projected logout time
/// for an 8-hour workday from raw building-access badge logs.
#[derive(Debug, Parser)]
#[command(name = "bt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the attendance summary for one employee-day log.
    Calculate {
        /// Path to the badge-log file; reads stdin when omitted.
        file: Option<PathBuf>,

        /// Emit the summary as JSON instead of a text report.
        #[arg(long)]
        json: bool,
    },

    /// Print the bundled sample badge log.
    Sample,
}
