//! Error types for disjoint-set operations.

use thiserror::Error;

/// Result type alias for disjoint-set operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An element index at or past the end of the universe.
    #[error("index {index} out of bounds for disjoint set of {len} elements")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A size that cannot describe a universe of elements.
    #[error("invalid disjoint set size: {0}")]
    InvalidSize(i64),
}
