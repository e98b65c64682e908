//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wakachi_core::Segmentation;

/// JSON formatter - outputs the full result, or an array of results
pub struct JsonFormatter<W: Write> {
    writer: W,
    results: Vec<Segmentation>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            results: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_segmentation(&mut self, segmentation: &Segmentation) -> Result<()> {
        self.results.push(segmentation.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        match self.results.as_slice() {
            [single] => serde_json::to_writer_pretty(&mut self.writer, single)?,
            results => serde_json::to_writer_pretty(&mut self.writer, results)?,
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
