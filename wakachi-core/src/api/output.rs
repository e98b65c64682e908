//! Output of a segmentation

use serde::{Deserialize, Serialize};

use crate::domain::{ChunkData, ChunkTag, Token};

/// Chunks, source tokens and rendered markup for one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
    /// Final chunk sequence
    pub chunks: Vec<ChunkData>,
    /// Tokens returned by the annotator; `None` on the whitespace path
    pub tokens: Option<Vec<Token>>,
    /// Wrapped markup
    pub html: String,
    /// Language reported by the annotator, or the requested hint
    pub language: Option<String>,
}

impl Segmentation {
    /// Chunk words in order
    pub fn words(&self) -> Vec<&str> {
        self.chunks.iter().map(|chunk| chunk.word.as_str()).collect()
    }

    /// Number of chunks that are neither spaces nor breaks
    pub fn content_chunk_count(&self) -> usize {
        self.chunks
            .iter()
            .filter(|chunk| !matches!(chunk.tag, ChunkTag::Space | ChunkTag::Break))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Chunk;

    #[test]
    fn test_words_and_content_count() {
        let result = Segmentation {
            chunks: vec![
                Chunk::new("우리").serialize(),
                Chunk::space().serialize(),
                Chunk::new("집에").serialize(),
                Chunk::breakline().serialize(),
            ],
            tokens: None,
            html: String::new(),
            language: None,
        };
        assert_eq!(result.words(), vec!["우리", " ", "집에", "\n"]);
        assert_eq!(result.content_chunk_count(), 2);
    }
}
