//! Externally produced annotations consumed by the engine

use serde::{Deserialize, Serialize};

/// One token of a syntax analysis.
///
/// Offsets and lengths are in characters (Unicode scalar values).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form
    pub word: String,
    /// Character offset of the token in the analysed text
    pub begin_offset: usize,
    /// Part-of-speech tag
    pub pos: String,
    /// Dependency label
    pub label: String,
    /// Index of the syntactic head within the token sequence
    pub head_token_index: usize,
}

impl Token {
    pub fn new(
        word: impl Into<String>,
        begin_offset: usize,
        pos: impl Into<String>,
        label: impl Into<String>,
        head_token_index: usize,
    ) -> Self {
        Self {
            word: word.into(),
            begin_offset,
            pos: pos.into(),
            label: label.into(),
            head_token_index,
        }
    }

    pub fn char_len(&self) -> usize {
        self.word.chars().count()
    }
}

/// A named-entity occurrence that should never be wrapped inside
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub content: String,
    pub begin_offset: usize,
}

impl EntitySpan {
    pub fn new(content: impl Into<String>, begin_offset: usize) -> Self {
        Self {
            content: content.into(),
            begin_offset,
        }
    }

    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Split a multi-word mention into one span per space-separated word.
    ///
    /// Each offset advances by the previous word's length only; the separating
    /// space is absorbed later by the overlap query.
    pub fn per_word(content: &str, begin_offset: usize) -> Vec<EntitySpan> {
        let mut offset = begin_offset;
        content
            .split(' ')
            .map(|word| {
                let span = EntitySpan::new(word, offset);
                offset = offset.saturating_add(word.chars().count());
                span
            })
            .collect()
    }
}
