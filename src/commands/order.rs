//! Order command implementation
//!
//! Prints interface files in the order they are amalgamated, each with the
//! local includes that resolved to other interface files. Handy when a
//! header lands before something it needs.

use anyhow::Result;
use clap::{Args, ValueEnum};

use single_header::phases::{orchestrator, OrderedFiles};

use super::ConfigArgs;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderFormat {
    #[default]
    Text,
    Json,
}

/// Arguments for the order command
#[derive(Args, Debug)]
pub struct OrderArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OrderFormat::Text)]
    pub format: OrderFormat,
}

/// Execute the order command
pub fn execute(args: OrderArgs) -> Result<()> {
    let config = args.config.load()?;
    let ordered = orchestrator::execute_order(&config)?;
    print!("{}", render(&ordered, args.format)?);
    Ok(())
}

fn render(ordered: &OrderedFiles, format: OrderFormat) -> Result<String> {
    match format {
        OrderFormat::Json => {
            let mut json = serde_json::to_string_pretty(&ordered.summary())?;
            json.push('\n');
            Ok(json)
        }
        OrderFormat::Text => {
            let mut out = String::new();
            for (idx, entry) in ordered.entries.iter().enumerate() {
                out.push_str(&format!("{:>3}. {}", idx + 1, entry.file.basename));
                if !entry.dependencies.is_empty() {
                    out.push_str(&format!(" <- {}", entry.dependencies.join(", ")));
                }
                out.push('\n');
            }
            Ok(out)
        }
    }
}
