//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::from_file(&self.config).and_then(|config| {
            let options = config.validate()?;
            Ok((config, options))
        }) {
            Ok((config, options)) => {
                println!("✓ Configuration is valid!");
                println!("  Language: {}", options.language().unwrap_or("auto"));
                match options.max_length() {
                    Some(max_length) => println!("  Max length: {max_length}"),
                    None => println!("  Max length: unlimited"),
                }
                for (key, value) in options.merged_attributes() {
                    println!("  Attribute: {key}=\"{value}\"");
                }
                if let Some(dir) = &config.cache.dir {
                    println!("  Cache: {}", dir.display());
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_valid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", CliConfig::template()).unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };
        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[segment]\nmax_length = 0\n").unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("max_length must be greater than 0"));
    }
}
