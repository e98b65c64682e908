//! Public API for wakachi-core
//!
//! [`Segmenter`] ties the normalizer, the annotator collaborators and the
//! segmentation stages together behind one call. Callers that already hold
//! tokens can use the [`application`](crate::application) stages directly.

mod config;
mod error;
mod input;
mod output;
mod segmenter;
mod validation;


pub use config::{defaults, SegmentOptions, SegmentOptionsBuilder};
pub use error::{Error, Result};
pub use input::Input;
pub use output::Segmentation;
pub use segmenter::Segmenter;
