//! Precomputed annotations loaded from JSON
//!
//! The document follows the shape of the Cloud Natural Language
//! `annotateText` / `analyzeEntities` responses (UTF-32 offsets), so a saved
//! response can be replayed without network access:
//!
//! ```json
//! {
//!   "language": "ja",
//!   "tokens": [
//!     {
//!       "text": { "content": "六本木", "beginOffset": 0 },
//!       "partOfSpeech": { "tag": "NOUN" },
//!       "dependencyEdge": { "headTokenIndex": 1, "label": "NN" }
//!     }
//!   ],
//!   "entities": [
//!     { "name": "六本木ヒルズ", "mentions": [{ "text": { "content": "六本木ヒルズ", "beginOffset": 0 } }] }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Annotation, BoxError, EntityExtractor, SyntaxAnnotator};
use crate::domain::{EntitySpan, Token};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextSpan {
    content: String,
    #[serde(default)]
    begin_offset: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PartOfSpeech {
    tag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DependencyEdge {
    #[serde(default)]
    head_token_index: usize,
    label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawToken {
    text: TextSpan,
    part_of_speech: PartOfSpeech,
    dependency_edge: DependencyEdge,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Mention {
    text: TextSpan,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawEntity {
    #[serde(default)]
    mentions: Vec<Mention>,
}

/// Annotator and entity extractor backed by a saved analysis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotationFile {
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    tokens: Vec<RawToken>,
    #[serde(default)]
    entities: Vec<RawEntity>,
}

impl AnnotationFile {
    /// Parse an annotation document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read and parse an annotation document from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, BoxError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| format!("failed to read annotations {}: {e}", path.display()))?;
        Ok(Self::from_json(&json)?)
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Tokens in engine form
    pub fn tokens(&self) -> Vec<Token> {
        self.tokens
            .iter()
            .map(|raw| Token {
                word: raw.text.content.clone(),
                begin_offset: raw.text.begin_offset,
                pos: raw.part_of_speech.tag.clone(),
                label: raw.dependency_edge.label.clone(),
                head_token_index: raw.dependency_edge.head_token_index,
            })
            .collect()
    }

    /// The first mention of every entity, split into per-word spans
    pub fn entity_spans(&self) -> Vec<EntitySpan> {
        self.entities
            .iter()
            .filter_map(|entity| entity.mentions.first())
            .flat_map(|mention| EntitySpan::per_word(&mention.text.content, mention.text.begin_offset))
            .collect()
    }
}

impl SyntaxAnnotator for AnnotationFile {
    fn annotate(&self, _text: &str, language: Option<&str>) -> Result<Annotation, BoxError> {
        Ok(Annotation {
            tokens: self.tokens(),
            language: self
                .language
                .clone()
                .or_else(|| language.map(str::to_owned)),
        })
    }
}

impl EntityExtractor for AnnotationFile {
    fn extract_entities(
        &self,
        _text: &str,
        _language: Option<&str>,
    ) -> Result<Vec<EntitySpan>, BoxError> {
        Ok(self.entity_spans())
    }
}
