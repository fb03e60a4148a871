//! Error types for TextDB
//!
//! Provides a unified error type for all store operations.

use thiserror::Error;

/// Result type alias using TextDbError
pub type Result<T> = std::result::Result<T, TextDbError>;

/// Unified error type for TextDB operations
#[derive(Debug, Error)]
pub enum TextDbError {
    // -------------------------------------------------------------------------
    // Precondition Errors
    // -------------------------------------------------------------------------
    #[error("Key {key} not found")]
    NotFound { key: usize },

    #[error("Position {key} is out of range ({min}-{max})")]
    OutOfRange { key: usize, min: usize, max: usize },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl TextDbError {
    /// True for errors caused by a rejected key or position
    pub fn is_precondition(&self) -> bool {
        matches!(self, TextDbError::NotFound { .. } | TextDbError::OutOfRange { .. })
    }
}
