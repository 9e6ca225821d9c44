// crates/landmarks-core/src/common.rs
use crate::model::{Frame, LandmarkCategory};
use serde::Serialize;

/// Aggregate view of a loaded dataset.
///
/// `first_frame` holds the per-category counts of the first frame only; a
/// category the first frame does not carry is `None`, not zero. It is empty
/// when the dataset has no frames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub frames: usize,
    pub first_frame: Option<[Option<usize>; 4]>,
    /// Number of frames carrying each category, indexed like
    /// [`LandmarkCategory::ALL`].
    pub frames_with: [usize; 4],
}

impl DatasetSummary {
    pub fn from_frames(frames: &[Frame]) -> Self {
        let first_frame = frames
            .first()
            .map(|f| LandmarkCategory::ALL.map(|c| f.count(c)));

        let mut frames_with = [0usize; 4];
        for frame in frames {
            for (slot, category) in frames_with.iter_mut().zip(LandmarkCategory::ALL) {
                if frame.landmarks(category).is_some() {
                    *slot += 1;
                }
            }
        }

        Self {
            frames: frames.len(),
            first_frame,
            frames_with,
        }
    }

    /// `(category, count)` for each category present in the first frame.
    pub fn first_frame_counts(&self) -> impl Iterator<Item = (LandmarkCategory, usize)> + '_ {
        self.first_frame.iter().flat_map(|counts| {
            LandmarkCategory::ALL
                .into_iter()
                .zip(counts.iter())
                .filter_map(|(c, n)| n.map(|n| (c, n)))
        })
    }
}
