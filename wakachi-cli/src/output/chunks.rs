//! Chunk list output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wakachi_core::{ChunkData, ChunkTag, Segmentation};

/// Marker printed for break chunks
pub const BREAK_MARKER: &str = "⏎";

/// Marker printed for space chunks
pub const SPACE_MARKER: &str = "␣";

/// Chunks formatter - outputs one chunk word per line
pub struct ChunksFormatter<W: Write> {
    writer: W,
}

impl<W: Write> ChunksFormatter<W> {
    /// Create a new chunks formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

fn display_word(chunk: &ChunkData) -> &str {
    match chunk.tag {
        ChunkTag::Break => BREAK_MARKER,
        ChunkTag::Space => SPACE_MARKER,
        _ => &chunk.word,
    }
}

impl<W: Write + Send + Sync> OutputFormatter for ChunksFormatter<W> {
    fn format_segmentation(&mut self, segmentation: &Segmentation) -> Result<()> {
        for chunk in &segmentation.chunks {
            writeln!(self.writer, "{}", display_word(chunk))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
