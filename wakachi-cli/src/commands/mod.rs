//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment a text or HTML file into wrappable chunks
    Segment(segment::SegmentArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List how languages are handled
    Languages,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) {
        match self {
            ListCommands::Languages => {
                println!("Language handling:");
                println!(
                    "  {:<6} split on spaces, no annotations needed",
                    wakachi_core::api::defaults::WHITESPACE_LANGUAGE
                );
                println!("  {:<6} chunks from the syntax analysis in --annotations", "other");
            }
            ListCommands::Formats => {
                println!("Available output formats:");
                println!("  html    - Wrapped markup (default)");
                println!("  json    - Chunks, tokens, markup and language as JSON");
                println!("  chunks  - One chunk per line (⏎ break, ␣ space)");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_commands_debug_format() {
        let validate_cmd = Commands::Validate(validate::ValidateArgs {
            config: PathBuf::from("wakachi.toml"),
        });

        let debug_str = format!("{:?}", validate_cmd);
        assert!(debug_str.contains("Validate"));
        assert!(debug_str.contains("wakachi.toml"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Formats"));
    }
}
