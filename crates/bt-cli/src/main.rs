use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bt_cli::commands::{calculate, sample};
use bt_cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match &cli.command {
        Some(Commands::Calculate { file, json }) => {
            calculate::run(file.as_deref(), *json)?;
        }
        Some(Commands::Sample) => {
            sample::run()?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
