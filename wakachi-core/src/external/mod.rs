//! Collaborators outside the engine
//!
//! The engine needs a plain-text normalizer, a syntax annotator, an entity
//! extractor and optionally a result cache. They are reached only through
//! the traits below; this module also ships offline implementations.

mod annotation_file;
mod cache;
mod normalizer;

pub use annotation_file::AnnotationFile;
pub use cache::{cache_key, FileCache, MemoryCache, CACHE_SALT};
pub use normalizer::HtmlNormalizer;

use crate::api::Segmentation;
use crate::domain::{EntitySpan, Token};

/// Error type returned by collaborators
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result of a syntax analysis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    pub tokens: Vec<Token>,
    /// Language reported by the annotator, if any
    pub language: Option<String>,
}

/// Turns markup or raw text into the plain text the engine analyses
pub trait TextNormalizer: Send + Sync {
    fn normalize(&self, source: &str) -> String;
}

/// Produces tokens with part-of-speech and dependency information
pub trait SyntaxAnnotator: Send + Sync {
    fn annotate(&self, text: &str, language: Option<&str>) -> Result<Annotation, BoxError>;
}

/// Produces entity spans, one per word of each entity mention
pub trait EntityExtractor: Send + Sync {
    fn extract_entities(
        &self,
        text: &str,
        language: Option<&str>,
    ) -> Result<Vec<EntitySpan>, BoxError>;
}

/// Key-value store for finished segmentations
pub trait ResultCache: Send + Sync {
    fn get(&self, source: &str, language: &str) -> Result<Option<Segmentation>, BoxError>;

    fn set(&self, source: &str, language: &str, value: &Segmentation) -> Result<(), BoxError>;
}
