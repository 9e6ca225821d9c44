// crates/landmarks-core/src/loader/mod.rs

//! # Data Loader
//!
//! Resolves the dump location, handles the physical read, and turns
//! `serde_json` failures into the three [`LandmarkError`] kinds.

use crate::error::{LandmarkError, Result};
use crate::model::LandmarkDataset;
use log::{debug, info};
use serde_json::error::Category;
use std::path::{Path, PathBuf};

mod common_io;

/// Directory the tracking graph writes its dump into.
pub const DEFAULT_INPUT_DIR: &str = "json";
/// File name of the dump inside [`DEFAULT_INPUT_DIR`].
pub const DEFAULT_INPUT_FILE: &str = "landmarks_output.json";

/// `json/landmarks_output.json`, relative to the working directory.
pub fn default_input_path() -> PathBuf {
    Path::new(DEFAULT_INPUT_DIR).join(DEFAULT_INPUT_FILE)
}

/// **Standard Loader:** reads and parses a landmark dump.
///
/// - missing file -> [`LandmarkError::FileNotFound`]
/// - syntax error or truncated text -> [`LandmarkError::MalformedJson`]
/// - anything else, including a well-formed document of the wrong shape
///   (top level not an array, a category that is not an array) ->
///   [`LandmarkError::Io`]
pub fn load_from_path(path: impl AsRef<Path>) -> Result<LandmarkDataset> {
    let path = path.as_ref();
    debug!("loading landmarks from {}", path.display());

    // The handle lives only inside this block and is dropped on every path.
    let text = {
        let reader = common_io::open_stream(path)?;
        common_io::read_text(reader)?
    };
    debug!("read {} bytes from {}", text.len(), path.display());

    let frames = parse_dataset(&text, path)?;
    info!("loaded {} frames from {}", frames.len(), path.display());
    Ok(frames)
}

fn parse_dataset(text: &str, path: &Path) -> Result<LandmarkDataset> {
    serde_json::from_str(text).map_err(|e| match e.classify() {
        Category::Syntax | Category::Eof => LandmarkError::MalformedJson {
            path: path.to_path_buf(),
            source: e,
        },
        Category::Data | Category::Io => LandmarkError::Io(e.to_string()),
    })
}
