//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Single Header - Amalgamate a C/C++ library into one distributable header
#[derive(Parser, Debug)]
#[command(name = "single-header")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the single-header artifact
    Build(commands::build::BuildArgs),

    /// Check that the artifact on disk is up to date
    Check(commands::check::CheckArgs),

    /// Print the order in which headers are amalgamated
    Order(commands::order::OrderArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level)?;

        match self.command {
            Commands::Build(args) => commands::build::execute(args),
            Commands::Check(args) => commands::check::execute(args),
            Commands::Order(args) => commands::order::execute(args),
        }
    }
}

/// Initialize `env_logger`. `RUST_LOG` wins over `--log-level` when set.
fn init_logging(level: &str) -> Result<()> {
    let filter: log::LevelFilter = level
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid log level '{}'", level))?;

    let mut builder = env_logger::Builder::new();
    builder.filter_level(filter).format_timestamp(None);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    // A logger may already be installed when commands run in-process.
    let _ = builder.try_init();
    Ok(())
}
