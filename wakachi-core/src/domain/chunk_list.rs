//! Ordered chunk container
//!
//! Chunks are kept in surface order. No offsets are stored: the start of a
//! chunk is always the running sum of the character lengths before it, so
//! queries stay valid after replacements as long as those replacements keep
//! the total character count.

use std::ops::Range;

use super::chunk::Chunk;
use super::error::{CoreError, Result};

/// Ordered sequence of chunks addressed by index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkList {
    chunks: Vec<Chunk>,
}

impl ChunkList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chunks: Vec::with_capacity(capacity),
        }
    }

    /// Append a chunk at the end
    pub(crate) fn push(&mut self, chunk: Chunk) {
        self.chunks.push(chunk);
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }

    /// Chunks covered by an index range, as returned by [`Self::get_overlaps`]
    pub fn slice(&self, range: Range<usize>) -> &[Chunk] {
        &self.chunks[range]
    }

    /// Words of all chunks in order
    pub fn words(&self) -> Vec<&str> {
        self.chunks.iter().map(Chunk::word).collect()
    }

    /// Concatenated text of all chunks
    pub fn text(&self) -> String {
        self.chunks.iter().map(Chunk::word).collect()
    }

    /// Total length in characters
    pub fn char_len(&self) -> usize {
        self.chunks.iter().map(Chunk::char_len).sum()
    }

    /// Index range of the chunks intersecting `[offset, offset + length)`.
    ///
    /// Offsets count characters. When the character at `offset` is a space
    /// the range starts one character later, so a span that begins on the
    /// separating space still lines up with the word after it. An empty
    /// range means nothing overlaps.
    pub fn get_overlaps(&self, offset: usize, length: usize) -> Range<usize> {
        let mut offset = offset;
        let starts_on_space = self
            .chunks
            .iter()
            .flat_map(|chunk| chunk.word().chars())
            .nth(offset)
            == Some(' ');
        if starts_on_space {
            offset += 1;
        }

        let end = offset.saturating_add(length);
        let mut index = 0;
        let mut first = None;
        let mut last = 0;

        for (position, chunk) in self.chunks.iter().enumerate() {
            let chunk_len = chunk.char_len();
            if offset < index + chunk_len && index < end {
                first.get_or_insert(position);
                last = position;
            }
            index += chunk_len;
        }

        match first {
            Some(first) => first..last + 1,
            None => 0..0,
        }
    }

    /// Replace a contiguous run of chunks with a single chunk.
    ///
    /// The new chunk takes the position of the first replaced chunk. An
    /// empty or out-of-bounds range is a logic error in the caller.
    pub fn swap(&mut self, range: Range<usize>, chunk: Chunk) -> Result<()> {
        if range.is_empty() || range.end > self.chunks.len() {
            return Err(CoreError::InvalidSwapRange {
                start: range.start,
                end: range.end,
                len: self.chunks.len(),
            });
        }

        self.chunks.splice(range, std::iter::once(chunk));
        Ok(())
    }
}

impl FromIterator<Chunk> for ChunkList {
    fn from_iter<I: IntoIterator<Item = Chunk>>(iter: I) -> Self {
        Self {
            chunks: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Chunk>> for ChunkList {
    fn from(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }
}

impl IntoIterator for ChunkList {
    type Item = Chunk;
    type IntoIter = std::vec::IntoIter<Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChunkList {
    type Item = &'a Chunk;
    type IntoIter = std::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}
