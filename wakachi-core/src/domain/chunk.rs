//! Chunk: the atomic wrappable unit
//!
//! A chunk holds a run of source characters together with the linguistic
//! metadata that decides how it merges with its neighbours. Chunks are
//! values; pipeline stages build new chunks rather than editing ones an
//! earlier stage still refers to.

use serde::{Deserialize, Serialize};

use super::unicode::{has_cjk, is_open_punctuation};

/// Dependency labels whose chunks lean towards a neighbouring word
pub const DEPENDENT_LABELS: [&str; 10] = [
    "P", "SNUM", "PRT", "AUX", "SUFF", "AUXPASS", "RDROP", "NUMBER", "NUM", "PREF",
];

/// Part-of-speech tag that marks a token as punctuation
pub const PUNCT_POS: &str = "PUNCT";

/// Word carried by space chunks
pub const SPACE_WORD: &str = " ";

/// Word carried by breakline chunks
pub const BREAK_WORD: &str = "\n";

/// Local classification of a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChunkTag {
    /// Ordinary content
    #[default]
    None,
    /// Separator between words
    Space,
    /// Explicit line break
    Break,
    /// Punctuation mark
    Punct,
}

/// Which neighbour a chunk should be merged into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dependency {
    /// Independent chunk
    #[default]
    Unresolved,
    /// Merge toward the following chunk
    Forward,
    /// Merge toward the preceding chunk
    Backward,
}

/// Construction options for [`Chunk::with_options`]
#[derive(Debug, Clone, Default)]
pub struct ChunkOptions {
    pub tag: ChunkTag,
    pub pos: Option<String>,
    pub label: Option<String>,
    /// `None` leaves the dependency to the punctuation rule
    pub dependency: Option<Dependency>,
}

impl ChunkOptions {
    pub fn tag(mut self, tag: ChunkTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn pos(mut self, pos: impl Into<String>) -> Self {
        self.pos = Some(pos.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn dependency(mut self, dependency: Dependency) -> Self {
        self.dependency = Some(dependency);
        self
    }
}

/// Tagged text unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    word: String,
    tag: ChunkTag,
    pos: Option<String>,
    label: Option<String>,
    dependency: Dependency,
}

/// Public projection of a chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkData {
    pub word: String,
    pub tag: ChunkTag,
    pub pos: Option<String>,
    pub label: Option<String>,
    pub dependency: Dependency,
    pub has_cjk: bool,
}

impl Chunk {
    /// Create a content chunk with default metadata
    pub fn new(word: impl Into<String>) -> Self {
        Self::with_options(word, ChunkOptions::default())
    }

    /// Create a chunk with explicit metadata.
    ///
    /// Punctuation chunks without an explicit dependency get one from their
    /// first character: opening brackets and quotes lean forward, every other
    /// mark leans backward.
    pub fn with_options(word: impl Into<String>, options: ChunkOptions) -> Self {
        let word = word.into();
        let dependency = match (options.tag, options.dependency) {
            (_, Some(dependency)) => dependency,
            (ChunkTag::Punct, None) if is_open_punctuation(&word) => Dependency::Forward,
            (ChunkTag::Punct, None) => Dependency::Backward,
            (_, None) => Dependency::Unresolved,
        };

        Self {
            word,
            tag: options.tag,
            pos: options.pos,
            label: options.label,
            dependency,
        }
    }

    /// Separator chunk
    pub fn space() -> Self {
        Self::with_options(SPACE_WORD, ChunkOptions::default().tag(ChunkTag::Space))
    }

    /// Explicit line break chunk
    pub fn breakline() -> Self {
        Self::with_options(BREAK_WORD, ChunkOptions::default().tag(ChunkTag::Break))
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn tag(&self) -> ChunkTag {
        self.tag
    }

    pub fn pos(&self) -> Option<&str> {
        self.pos.as_deref()
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn dependency(&self) -> Dependency {
        self.dependency
    }

    /// Length of the word in characters
    pub fn char_len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_space(&self) -> bool {
        self.tag == ChunkTag::Space
    }

    pub fn is_break(&self) -> bool {
        self.tag == ChunkTag::Break
    }

    /// True if any character of the current word is CJK
    pub fn has_cjk(&self) -> bool {
        has_cjk(&self.word)
    }

    /// Apply a position-derived default dependency.
    ///
    /// Only chunks that are still unresolved and carry one of
    /// [`DEPENDENT_LABELS`] are affected.
    pub fn maybe_add_dependency(&mut self, direction: Dependency) {
        if self.dependency != Dependency::Unresolved {
            return;
        }
        if self
            .label
            .as_deref()
            .is_some_and(|label| DEPENDENT_LABELS.contains(&label))
        {
            self.dependency = direction;
        }
    }

    /// Same metadata, different word
    pub(crate) fn with_word(self, word: String) -> Self {
        Self { word, ..self }
    }

    pub(crate) fn with_tag(self, tag: ChunkTag) -> Self {
        Self { tag, ..self }
    }

    pub fn serialize(&self) -> ChunkData {
        ChunkData {
            word: self.word.clone(),
            tag: self.tag,
            pos: self.pos.clone(),
            label: self.label.clone(),
            dependency: self.dependency,
            has_cjk: self.has_cjk(),
        }
    }
}

impl From<&Chunk> for ChunkData {
    fn from(chunk: &Chunk) -> Self {
        chunk.serialize()
    }
}
