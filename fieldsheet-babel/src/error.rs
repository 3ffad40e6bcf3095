//! Error types for format conversion

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while selecting, serializing or publishing a format.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// The document could not be assembled or packed
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// The artifact could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
