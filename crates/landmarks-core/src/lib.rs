// crates/landmarks-core/src/lib.rs

//! # landmarks-core
//!
//! Reads the per-frame landmark dump written by the holistic tracking graph
//! (`json/landmarks_output.json`) and summarizes its structure: how many
//! frames there are, and how many pose / hand / face landmarks the first
//! frame carries.
//!
//! ```no_run
//! let dataset = landmarks_core::read_landmarks_summary();
//! if let Some(frames) = dataset {
//!     println!("{} frames", frames.len());
//! }
//! ```

pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod report;

// Re-exports
pub use crate::common::DatasetSummary;
pub use crate::error::{LandmarkError, Result};
pub use crate::loader::{default_input_path, load_from_path, DEFAULT_INPUT_DIR, DEFAULT_INPUT_FILE};
pub use crate::model::{Frame, LandmarkCategory, LandmarkDataset, LandmarkEntry};
pub use crate::report::{read_landmarks_summary, read_landmarks_summary_from};
