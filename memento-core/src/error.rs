//! Error types for the memento core library.
//!
//! Saving and restoring never fail. Only configuration loading does.

use thiserror::Error;

/// Top-level error type for memento operations that can fail.
#[derive(Error, Debug)]
pub enum MementoError {
    /// Configuration could not be parsed or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, MementoError>;
