//! Output formatting module

use anyhow::Result;
use std::io::Write;
use wakachi_core::Segmentation;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one segmentation result
    fn format_segmentation(&mut self, segmentation: &Segmentation) -> Result<()>;

    /// Finalize output (e.g., flush buffered JSON)
    fn finish(&mut self) -> Result<()>;
}

pub mod chunks;
pub mod html;
pub mod json;

pub use chunks::ChunksFormatter;
pub use html::HtmlFormatter;
pub use json::JsonFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Wrapped HTML markup
    Html,
    /// Full segmentation result as JSON
    Json,
    /// One chunk per line
    Chunks,
}

impl OutputFormat {
    /// Formatter writing to `writer`
    pub fn formatter<W>(self, writer: W) -> Box<dyn OutputFormatter>
    where
        W: Write + Send + Sync + 'static,
    {
        match self {
            OutputFormat::Html => Box::new(HtmlFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Chunks => Box::new(ChunksFormatter::new(writer)),
        }
    }
}
