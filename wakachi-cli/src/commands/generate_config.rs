//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, CliConfig::template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file");
        println!("2. Validate your configuration:");
        println!("   wakachi validate -c {}", self.output.display());
        println!("3. Use it for segmentation:");
        println!(
            "   wakachi segment -i input.html -a annotations.json -c {}",
            self.output.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("wakachi.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: false,
        };

        assert!(args.execute().is_ok());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[segment]"));
        assert!(content.contains("[attributes]"));
    }

    #[test]
    fn test_existing_file_needs_force() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("wakachi.toml");
        std::fs::write(&output_path, "keep me").unwrap();

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: false,
        };
        assert!(args.execute().is_err());
        assert_eq!(std::fs::read_to_string(&output_path).unwrap(), "keep me");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            force: true,
        };
        assert!(args.execute().is_ok());
    }
}
