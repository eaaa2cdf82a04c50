//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in list operations.
///
/// Every variant is a caller contract violation: the controller state is
/// left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Position is past the footer row (or past the last item for range queries).
    #[error("Position {position} is out of range (row count {row_count})")]
    PositionOutOfRange {
        /// Requested position.
        position: usize,
        /// Number of rows the position was checked against.
        row_count: usize,
    },

    /// Position refers to the footer, which has no backing item.
    #[error("Position {position} is the footer row, not an item")]
    NotAnItemRow {
        /// Requested position.
        position: usize,
    },

    /// Range start lies after its end.
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// Inclusive start position.
        start: usize,
        /// Inclusive end position.
        end: usize,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
