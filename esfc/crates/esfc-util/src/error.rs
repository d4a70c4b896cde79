//! Core error types for esfc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for invalid source locations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanError {
    /// Lines are 1-based
    #[error("Invalid point: line must be at least 1, got {line}")]
    InvalidLine {
        /// Line that was passed
        line: u32,
    },

    /// Columns are 1-based
    #[error("Invalid point: column must be at least 1, got {column}")]
    InvalidColumn {
        /// Column that was passed
        column: u32,
    },

    /// The end of a position lies before its start
    #[error("Invalid position: start offset {start} > end offset {end}")]
    InvertedPosition {
        /// Offset of the start point
        start: usize,
        /// Offset of the end point, smaller than `start`
        end: usize,
    },
}

/// Result type alias for span operations
pub type SpanResult<T> = std::result::Result<T, SpanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SpanError::InvalidLine { line: 0 }.to_string(),
            "Invalid point: line must be at least 1, got 0"
        );
        assert_eq!(
            SpanError::InvalidColumn { column: 0 }.to_string(),
            "Invalid point: column must be at least 1, got 0"
        );
        assert_eq!(
            SpanError::InvertedPosition { start: 4, end: 2 }.to_string(),
            "Invalid position: start offset 4 > end offset 2"
        );
    }
}
