//! # Check Command Implementation
//!
//! This module implements the `check` subcommand. It regenerates the
//! artifact in memory and compares it with the file on disk, ignoring the
//! `// Generated on` line. Useful in CI to catch a forgotten rebuild.
//!
//! The command exits with an error when the artifact is missing or stale,
//! and never modifies any files.

use anyhow::Result;
use clap::Args;

use single_header::phases::orchestrator::{self, CheckStatus};

use super::{generation_date, ConfigArgs};

/// Check that the artifact on disk is up to date
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the `check` command.
pub fn execute(args: CheckArgs) -> Result<()> {
    let config = args.config.load()?;
    let output = config.output_path();

    match orchestrator::execute_check(&config, generation_date()?)? {
        CheckStatus::UpToDate => {
            if !args.quiet {
                println!("✅ {} is up to date", output.display());
            }
            Ok(())
        }
        CheckStatus::Stale => anyhow::bail!(
            "{} is out of date; run `single-header build`",
            output.display()
        ),
        CheckStatus::Missing => anyhow::bail!(
            "{} does not exist; run `single-header build`",
            output.display()
        ),
    }
}
