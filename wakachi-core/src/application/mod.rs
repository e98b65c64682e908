//! Application layer: the segmentation stages
//!
//! Each stage takes a [`ChunkList`](crate::domain::ChunkList) by value and
//! returns a new one, so stages compose freely and can be tested alone:
//!
//! ```text
//! tokens -> chunks_from_tokens -> group_by_entities -> resolve_dependency
//!        -> insert_breaklines -> HtmlSerializer::serialize
//! ```

pub mod breakline;
pub mod builder;
pub mod entity;
pub mod html;
pub mod processor;
pub mod resolver;

pub use breakline::insert_breaklines;
pub use builder::{chunks_from_tokens, chunks_per_space};
pub use entity::group_by_entities;
pub use html::{default_attributes, escape_text, HtmlSerializer, DEFAULT_CLASS};
pub use processor::process_tokens;
pub use resolver::{concatenate, resolve_dependency, Direction};
