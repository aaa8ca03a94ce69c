//! Errors raised while loading movement data from disk.

use terrain_core::error::MovementError;
use thiserror::Error;

/// Error loading or validating movement data files.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Failed to read file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse RON file.
    #[error("Failed to parse RON file '{path}': {source}")]
    ParseError {
        /// Path to the file.
        path: String,
        /// Underlying parse error.
        #[source]
        source: ron::error::SpannedError,
    },

    /// Parsed data failed to resolve.
    #[error("Invalid movement data in '{path}': {source}")]
    ValidationError {
        /// Path to the file.
        path: String,
        /// Underlying resolution error.
        #[source]
        source: MovementError,
    },

    /// Cost model setup failed outside file resolution.
    #[error("Movement model error: {0}")]
    Movement(#[from] MovementError),

    /// Directory contained no data files.
    #[error("No .ron files found in '{0}'")]
    NoDataFiles(String),
}

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
