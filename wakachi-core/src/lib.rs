//! Line-wrap aware segmentation for CJK text
//!
//! Text written in Chinese, Japanese or Korean scripts has no reliable word
//! separators, so browsers break lines in the middle of words. This crate
//! splits such text into semantic chunks using a syntax analysis (tokens with
//! part-of-speech and dependency labels) and renders every CJK chunk inside
//! its own `<span>`, letting a stylesheet keep each chunk on one line.
//!
//! # Architecture
//!
//! The crate follows a layered layout:
//! - **Domain layer**: chunk model, chunk sequences and character classes
//! - **Application layer**: the segmentation stages and the HTML serializer
//! - **External layer**: collaborator traits (normalizer, annotator, entity
//!   extractor, cache) and offline implementations
//! - **API layer**: [`Segmenter`] and its options
//!
//! # Example
//!
//! ```rust
//! use wakachi_core::{process_tokens, HtmlSerializer, Token};
//!
//! let tokens = vec![
//!     Token::new("今日", 0, "NOUN", "NN", 1),
//!     Token::new("は", 2, "PRT", "PRT", 0),
//!     Token::new("晴れ", 3, "NOUN", "ROOT", 2),
//! ];
//!
//! let chunks = process_tokens(&tokens, None).unwrap();
//! assert_eq!(chunks.words(), vec!["今日は", "晴れ"]);
//!
//! let html = HtmlSerializer::default().serialize(&chunks);
//! assert_eq!(
//!     html,
//!     r#"<span><span class="ww">今日は</span><span class="ww">晴れ</span></span>"#
//! );
//! ```

pub mod api;
pub mod application;
pub mod domain;
pub mod external;

pub use api::{
    Error as ApiError, Input, SegmentOptions, SegmentOptionsBuilder, Segmentation, Segmenter,
};
pub use application::{process_tokens, resolve_dependency, HtmlSerializer};
pub use domain::*;
pub use external::{
    AnnotationFile, EntityExtractor, FileCache, HtmlNormalizer, MemoryCache, ResultCache,
    SyntaxAnnotator, TextNormalizer,
};
