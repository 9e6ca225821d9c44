// crates/landmarks-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while loading a landmark dump.
///
/// The reader reports each kind with its own message but hands the caller
/// only "dataset or nothing"; use [`crate::load_from_path`] directly when the
/// kind matters.
#[derive(Debug, Error)]
pub enum LandmarkError {
    /// Nothing (or no regular file) at the expected path.
    #[error("File '{}' not found.", .path.display())]
    FileNotFound { path: PathBuf },

    /// The file exists but is not syntactically valid JSON.
    #[error("'{}' is not a valid JSON file.", .path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Any other read or shape failure, carrying the underlying message.
    #[error("{0}")]
    Io(String),
}

impl From<std::io::Error> for LandmarkError {
    fn from(e: std::io::Error) -> Self {
        LandmarkError::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LandmarkError>;
