use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort an indexing run
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Input unavailable: {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output unavailable: {}: {source}", .path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IndexError {
    pub fn input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputUnavailable {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for indexing operations
pub type Result<T> = std::result::Result<T, IndexError>;
