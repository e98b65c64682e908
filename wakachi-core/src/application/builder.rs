//! Initial chunk construction
//!
//! Two sources of chunks exist: a syntax analysis (one chunk per token, with
//! space chunks reinserted where the token offsets leave gaps) and a plain
//! whitespace split for languages that already separate words with spaces.

use log::debug;

use crate::domain::chunk::PUNCT_POS;
use crate::domain::{Chunk, ChunkList, ChunkOptions, ChunkTag, Dependency, Token};

/// Build one chunk per token.
///
/// A token that starts past the end of the previous one is preceded by a
/// single space chunk. Dependent tokens lean toward their syntactic head:
/// forward when the head comes later, backward otherwise.
pub fn chunks_from_tokens(tokens: &[Token]) -> ChunkList {
    let mut chunks = ChunkList::with_capacity(tokens.len() * 2);
    let mut sentence_length = 0;

    for (index, token) in tokens.iter().enumerate() {
        if token.begin_offset > sentence_length {
            chunks.push(Chunk::space());
            sentence_length = token.begin_offset;
        }

        let tag = if token.pos == PUNCT_POS {
            ChunkTag::Punct
        } else {
            ChunkTag::None
        };
        let options = ChunkOptions::default()
            .tag(tag)
            .pos(token.pos.as_str())
            .label(token.label.as_str());
        let mut chunk = Chunk::with_options(token.word.as_str(), options);

        let direction = if index < token.head_token_index {
            Dependency::Forward
        } else {
            Dependency::Backward
        };
        chunk.maybe_add_dependency(direction);

        chunks.push(chunk);
        sentence_length += token.char_len();
    }

    debug!(
        "built {} chunks from {} tokens",
        chunks.len(),
        tokens.len()
    );
    chunks
}

/// Split text on single spaces, keeping a space chunk between words
pub fn chunks_per_space(text: &str) -> ChunkList {
    let mut chunks = ChunkList::new();
    if text.is_empty() {
        return chunks;
    }

    for (index, word) in text.split(' ').enumerate() {
        if index > 0 {
            chunks.push(Chunk::space());
        }
        chunks.push(Chunk::new(word));
    }

    chunks
}
