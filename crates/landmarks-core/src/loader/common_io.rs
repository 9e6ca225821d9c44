// crates/landmarks-core/src/loader/common_io.rs
use crate::error::{LandmarkError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Opens `path` for buffered reading.
///
/// A missing path (or a directory) is reported as
/// [`LandmarkError::FileNotFound`] before any open is attempted; a file that
/// exists but cannot be opened is an I/O failure.
pub fn open_stream(path: &Path) -> Result<BufReader<File>> {
    if !path.is_file() {
        return Err(LandmarkError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| {
        LandmarkError::Io(format!("cannot open {}: {}", path.display(), e))
    })?;

    Ok(BufReader::new(file))
}

/// Reads the whole stream as UTF-8 text. Invalid UTF-8 is an I/O failure,
/// not a JSON one.
pub fn read_text<R: Read>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}
