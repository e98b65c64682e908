//! wakachi - wrap CJK text into chunks that never break mid-word
//!
//! # Usage
//!
//! ```bash
//! # Korean: split on spaces
//! wakachi segment -i input.txt -l ko
//!
//! # Japanese / Chinese: replay a saved syntax analysis
//! wakachi segment -i input.html -a annotations.json --use-entities -f json
//! ```

use anyhow::Result;
use clap::Parser;
use wakachi_cli::commands::Commands;

/// Dependency-aware line-wrap segmentation for CJK text
#[derive(Debug, Parser)]
#[command(name = "wakachi", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Segment(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::List { subcommand } => {
            subcommand.execute();
            Ok(())
        }
    }
}
