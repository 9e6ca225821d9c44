// crates/landmarks-core/src/report.rs

//! Human-readable summary of a landmark dump.
//!
//! Every outcome, good or bad, ends up as text on the given writer; the
//! caller only learns whether a dataset came back.

use crate::common::DatasetSummary;
use crate::error::LandmarkError;
use crate::loader::{default_input_path, load_from_path};
use crate::model::{Frame, LandmarkDataset};
use log::{debug, warn};
use std::io::{self, Write};
use std::path::Path;

/// Loads `json/landmarks_output.json` and prints its summary to stdout.
pub fn read_landmarks_summary() -> Option<LandmarkDataset> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    read_landmarks_summary_from(default_input_path(), &mut out)
}

/// Loads `path`, writes the summary (or the error line) to `out`, and
/// returns the dataset on success.
pub fn read_landmarks_summary_from<W: Write>(
    path: impl AsRef<Path>,
    out: &mut W,
) -> Option<LandmarkDataset> {
    let path = path.as_ref();
    let outcome = load_from_path(path);

    let written = match &outcome {
        Ok(frames) => write_summary(out, path, frames),
        Err(e) => {
            warn!("{e}");
            write_error(out, e)
        }
    };
    if let Err(e) = written {
        warn!("could not write landmark summary: {e}");
    }

    outcome.ok()
}

fn write_summary<W: Write>(out: &mut W, path: &Path, frames: &[Frame]) -> io::Result<()> {
    let summary = DatasetSummary::from_frames(frames);

    writeln!(out, "Successfully loaded landmarks data from '{}'", path.display())?;
    writeln!(out, "Number of frames/objects: {}", summary.frames)?;

    if summary.first_frame.is_some() {
        writeln!(out)?;
        writeln!(out, "Landmarks in first frame:")?;
        for (category, count) in summary.first_frame_counts() {
            writeln!(out, "  {} landmarks: {}", category.label(), count)?;
        }
    }

    if let Some(first) = frames.first() {
        debug!(
            "first frame: timestamp_us={:?} image={:?}x{:?}",
            first.timestamp_us, first.image_width, first.image_height
        );
    }
    debug!("frames per category (pose, left, right, face): {:?}", summary.frames_with);

    out.flush()
}

fn write_error<W: Write>(out: &mut W, err: &LandmarkError) -> io::Result<()> {
    match err {
        LandmarkError::FileNotFound { .. } | LandmarkError::MalformedJson { .. } => {
            writeln!(out, "Error: {err}")?
        }
        LandmarkError::Io(msg) => writeln!(out, "Error reading file: {msg}")?,
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn dump(value: serde_json::Value) -> (TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("landmarks_output.json");
        fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();
        (dir, path)
    }

    fn run(path: &Path) -> (Option<LandmarkDataset>, String) {
        let mut buf = Vec::new();
        let data = read_landmarks_summary_from(path, &mut buf);
        (data, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn pose_only_first_frame() {
        let pose = vec![json!({"x": 0.5, "y": 0.5, "z": 0.0}); 33];
        let (_dir, path) = dump(json!([
            { "pose_landmarks": pose },
            { "pose_landmarks": [], "face_landmarks": vec![json!({}); 468] },
        ]));

        let (data, text) = run(&path);
        assert_eq!(data.map(|d| d.len()), Some(2));

        let expected = format!(
            "Successfully loaded landmarks data from '{}'\n\
             Number of frames/objects: 2\n\
             \n\
             Landmarks in first frame:\n  Pose landmarks: 33\n",
            path.display()
        );
        assert_eq!(text, expected);
        assert!(!text.contains("hand"));
        assert!(!text.contains("Face"));
    }

    #[test]
    fn all_categories_in_fixed_order() {
        let (_dir, path) = dump(json!([{
            "face_landmarks": vec![json!({}); 468],
            "right_hand_landmarks": vec![json!({}); 21],
            "left_hand_landmarks": [],
            "pose_landmarks": vec![json!({}); 33],
        }]));

        let (_, text) = run(&path);
        let lines: Vec<_> = text.lines().skip(3).collect();
        assert_eq!(
            lines,
            [
                "Landmarks in first frame:",
                "  Pose landmarks: 33",
                "  Left hand landmarks: 0",
                "  Right hand landmarks: 21",
                "  Face landmarks: 468",
            ]
        );
    }

    #[test]
    fn empty_dataset_has_no_breakdown() {
        let (_dir, path) = dump(json!([]));
        let (data, text) = run(&path);
        assert_eq!(data, Some(vec![]));
        assert!(text.contains("Number of frames/objects: 0\n"));
        assert!(!text.contains("first frame"));
    }

    #[test]
    fn missing_file_reports_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("json").join("landmarks_output.json");
        let (data, text) = run(&path);
        assert!(data.is_none());
        assert_eq!(text, format!("Error: File '{}' not found.\n", path.display()));
    }

    #[test]
    fn truncated_file_reports_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("landmarks_output.json");
        fs::write(&path, r#"[{"pose_landmarks":"#).unwrap();

        let (data, text) = run(&path);
        assert!(data.is_none());
        assert_eq!(
            text,
            format!("Error: '{}' is not a valid JSON file.\n", path.display())
        );
    }

    #[test]
    fn wrong_shape_reports_generic_error() {
        let (_dir, path) = dump(json!([{ "pose_landmarks": { "x": 1.0 } }]));
        let (data, text) = run(&path);
        assert!(data.is_none());
        assert!(text.starts_with("Error reading file: "), "{text}");
        assert!(text.contains("invalid type"), "{text}");
    }
}
