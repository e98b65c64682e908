//! Core error types (deterministic only)

use core::fmt;

/// Engine errors (no I/O, no external failures)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A swap was requested for a range that is empty or outside the list
    InvalidSwapRange {
        start: usize,
        end: usize,
        len: usize,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidSwapRange { start, end, len } => write!(
                f,
                "invalid swap range {start}..{end} for chunk list of length {len}"
            ),
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
