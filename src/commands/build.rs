//! Build command implementation
//!
//! The build command executes the full pipeline:
//! 1. Discovery of interface and implementation files
//! 2. Ordering headers by their local includes
//! 3. Stripping namespaces and classifying directives
//! 4. Assembling the artifact
//! 5. Writing to disk

use anyhow::Result;
use clap::Args;
use std::io::Write;

use super::{generation_date, ConfigArgs};

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print the artifact to stdout instead of writing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the build command
pub fn execute(args: BuildArgs) -> Result<()> {
    use single_header::phases::orchestrator;
    use std::time::Instant;

    let start_time = Instant::now();
    let config = args.config.load()?;
    let date = generation_date()?;

    let generated = orchestrator::execute_build(&config, date, !args.dry_run)?;

    if args.dry_run {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(generated.artifact.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    if !args.quiet {
        let duration = start_time.elapsed();
        println!(
            "✅ Built {} in {:.2}s",
            generated.output_path.display(),
            duration.as_secs_f64()
        );
        println!(
            "   {} headers, {} sources, {} system includes",
            generated.interface_files, generated.implementation_files, generated.external_includes
        );
    }

    Ok(())
}
