//! HTML output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wakachi_core::Segmentation;

/// HTML formatter - outputs the wrapped markup of each result on its own line
pub struct HtmlFormatter<W: Write> {
    writer: W,
}

impl<W: Write> HtmlFormatter<W> {
    /// Create a new HTML formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for HtmlFormatter<W> {
    fn format_segmentation(&mut self, segmentation: &Segmentation) -> Result<()> {
        writeln!(self.writer, "{}", segmentation.html)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
