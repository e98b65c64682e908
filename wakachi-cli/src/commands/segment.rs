//! Segment command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use wakachi_core::{AnnotationFile, FileCache, SegmentOptions, Segmenter};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::OutputFormat;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input text or HTML file (`-` reads standard input)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Saved syntax and entity analysis of the input (JSON)
    #[arg(short, long, value_name = "FILE", env = "WAKACHI_ANNOTATIONS")]
    pub annotations: Option<PathBuf>,

    /// Language hint; `ko` splits on spaces without annotations
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Leave CJK chunks longer than this many characters unwrapped
    #[arg(short = 'm', long, value_name = "N")]
    pub max_length: Option<usize>,

    /// Attribute for wrapped chunks (repeatable)
    #[arg(long = "attr", value_name = "KEY=VALUE")]
    pub attributes: Vec<String>,

    /// Keep named entities from the annotations in one chunk
    #[arg(short = 'e', long)]
    pub use_entities: bool,

    /// Directory for the result cache
    #[arg(long, value_name = "DIR", env = "WAKACHI_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "html")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Split a `key=value` argument
pub fn parse_attribute(raw: &str) -> Result<(String, String), CliError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(CliError::InvalidAttribute(raw.to_string())),
    }
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting segmentation");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let options = self.options(&config)?;
        let segmenter = self.segmenter(&config)?;

        let source = FileReader::read_text_or_stdin(&self.input)?;
        let segmentation = segmenter
            .segment(&source, &options)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to segment {}", self.input.display()))?;
        log::info!(
            "{} chunks, {} wrapped candidates",
            segmentation.chunks.len(),
            segmentation.content_chunk_count()
        );

        let mut formatter = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                self.format.formatter(BufWriter::new(file))
            }
            None => self.format.formatter(io::stdout()),
        };
        formatter.format_segmentation(&segmentation)?;
        formatter.finish()?;

        Ok(())
    }

    /// Merge file settings with flags; flags win
    pub fn options(&self, config: &CliConfig) -> Result<SegmentOptions> {
        let mut builder = config.options_builder();

        for raw in &self.attributes {
            let (key, value) = parse_attribute(raw)?;
            builder = builder.attribute(key, value);
        }
        if let Some(language) = &self.language {
            builder = builder.language(language.clone());
        }
        if let Some(max_length) = self.max_length {
            builder = builder.max_length(max_length);
        }
        if self.use_entities {
            builder = builder.use_entities(true);
        }

        Ok(builder.build().map_err(CliError::from)?)
    }

    fn segmenter(&self, config: &CliConfig) -> Result<Segmenter> {
        let mut segmenter = match &self.annotations {
            Some(path) => Segmenter::from_annotations(load_annotations(path)?),
            None => Segmenter::new(),
        };

        if let Some(dir) = self.cache_dir.as_ref().or(config.cache.dir.as_ref()) {
            log::debug!("Using result cache in {}", dir.display());
            segmenter = segmenter.with_cache(FileCache::new(dir));
        }

        Ok(segmenter)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // Fails only when a logger is already installed in this process.
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

fn load_annotations(path: &Path) -> Result<AnnotationFile> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }
    let annotations = AnnotationFile::from_path(path).map_err(|e| {
        CliError::ConfigError(format!("invalid annotations {}: {e}", path.display()))
    })?;
    Ok(annotations)
}
