//! Error types for Papyr operations.
//!
//! This module provides the common `Error` type and `Result<T>` alias used
//! across all Papyr crates. Uses `thiserror` for derive macros.
//!
//! # Taxonomy
//!
//! - `DimensionMismatch` / `LengthMismatch`: configuration errors. Fatal for
//!   the operation that raised them; never silently recovered.
//! - `Source`: a single category fetch failed. Recoverable: ingestion logs
//!   a warning and continues with the remaining categories.
//! - `NothingLoaded`: no category produced any papers. Terminal for the
//!   ingestion run; any previously installed corpus is left untouched.
//! - `Internal`: the paper/vector alignment invariant was observed broken.
//!   Indicates a bug, not a user error.

use thiserror::Error;

/// Errors that can occur in Papyr operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A vector's length does not match the index dimension.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension the index was constructed with.
        expected: usize,
        /// Dimension of the offending vector.
        actual: usize,
    },

    /// Paper and vector batches have different lengths.
    #[error("Length mismatch: {records} papers but {vectors} vectors")]
    LengthMismatch {
        /// Number of papers in the batch.
        records: usize,
        /// Number of vectors in the batch.
        vectors: usize,
    },

    /// A document source failed to fetch one category.
    #[error("Source failure: {0}")]
    Source(String),

    /// An ingestion run produced no papers from any category.
    #[error("Nothing loaded: no papers were fetched from any category")]
    NothingLoaded,

    /// Failed to decode a feed or document payload.
    #[error("Parse error: {0}")]
    Parse(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Internal invariant violation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a source failure error.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an HTTP transport error.
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Create an internal invariant error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type alias using Papyr's Error type.
pub type Result<T> = std::result::Result<T, Error>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = Error::DimensionMismatch {
            expected: 384,
            actual: 768,
        };
        assert_eq!(err.to_string(), "Dimension mismatch: expected 384, got 768");
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = Error::LengthMismatch {
            records: 3,
            vectors: 2,
        };
        assert!(err.to_string().contains("3 papers"));
        assert!(err.to_string().contains("2 vectors"));
    }

    #[test]
    fn test_helper_constructors() {
        assert!(matches!(Error::config("x"), Error::Config(_)));
        assert!(matches!(Error::source("x"), Error::Source(_)));
        assert!(matches!(Error::parse("x"), Error::Parse(_)));
        assert!(matches!(Error::http("x"), Error::Http(_)));
        assert!(matches!(Error::internal("x"), Error::Internal(_)));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
