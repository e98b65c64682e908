//! Entity-driven regrouping
//!
//! Named entities ("六本木ヒルズ", "New York") must not be wrapped in the
//! middle, so every chunk touched by an entity span is merged into one.

use log::{debug, warn};

use crate::domain::error::Result;
use crate::domain::{Chunk, ChunkList, EntitySpan};

/// Merge the chunks overlapped by each entity span.
///
/// Spans are applied in the order given, each against the list as left by
/// the previous ones. Merging keeps the total character count, so offsets
/// computed against the source text stay valid throughout. A span that
/// overlaps nothing is skipped.
pub fn group_by_entities(mut chunks: ChunkList, entities: &[EntitySpan]) -> Result<ChunkList> {
    let mut merged = 0;

    for entity in entities {
        let range = chunks.get_overlaps(entity.begin_offset, entity.char_len());
        if range.is_empty() {
            warn!(
                "entity {:?} at offset {} overlaps no chunk, skipping",
                entity.content, entity.begin_offset
            );
            continue;
        }

        let word: String = chunks.slice(range.clone()).iter().map(Chunk::word).collect();
        chunks.swap(range, Chunk::new(word))?;
        merged += 1;
    }

    debug!("grouped {merged} of {} entities", entities.len());
    Ok(chunks)
}
