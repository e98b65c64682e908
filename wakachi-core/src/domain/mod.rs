//! Domain layer: chunk model and character classification
//!
//! Everything here is pure and deterministic. The application layer builds
//! the segmentation stages on top of these types.

pub mod chunk;
pub mod chunk_list;
pub mod error;
pub mod token;
pub mod unicode;

pub use chunk::{Chunk, ChunkData, ChunkOptions, ChunkTag, Dependency, DEPENDENT_LABELS};
pub use chunk_list::ChunkList;
pub use error::CoreError;
pub use token::{EntitySpan, Token};
