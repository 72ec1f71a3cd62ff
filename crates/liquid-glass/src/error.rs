//! Error types for the styling plugin.

use std::path::PathBuf;

/// Result type alias for plugin operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating rules or installing the guide.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A token path the generator references is absent from the host's
    /// table. This is a build-time configuration defect, not a runtime
    /// condition.
    #[error("missing theme token '{path}'")]
    MissingToken { path: String },

    /// Filesystem error while writing the design guide.
    #[error("failed to write design guide '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a missing-token error.
    pub fn missing_token(path: impl Into<String>) -> Self {
        Self::MissingToken { path: path.into() }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
