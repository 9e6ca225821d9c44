// crates/landmarks-core/src/model.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One keypoint as written by the tracking graph:
/// `{"x": .., "y": .., "z": .., "visibility": .., "presence": ..}`.
///
/// Only the number of entries per category is ever looked at, so the entry
/// itself stays an untyped JSON value.
pub type LandmarkEntry = Value;

/// All frames of a dump, in capture order.
pub type LandmarkDataset = Vec<Frame>;

/// The four keypoint sources a frame may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkCategory {
    Pose,
    LeftHand,
    RightHand,
    Face,
}

impl LandmarkCategory {
    /// Every category, in the order summaries list them.
    pub const ALL: [LandmarkCategory; 4] = [
        LandmarkCategory::Pose,
        LandmarkCategory::LeftHand,
        LandmarkCategory::RightHand,
        LandmarkCategory::Face,
    ];

    /// Key used for this category in a frame object.
    pub fn key(self) -> &'static str {
        match self {
            LandmarkCategory::Pose => "pose_landmarks",
            LandmarkCategory::LeftHand => "left_hand_landmarks",
            LandmarkCategory::RightHand => "right_hand_landmarks",
            LandmarkCategory::Face => "face_landmarks",
        }
    }

    /// Human label, e.g. `"Left hand"`.
    pub fn label(self) -> &'static str {
        match self {
            LandmarkCategory::Pose => "Pose",
            LandmarkCategory::LeftHand => "Left hand",
            LandmarkCategory::RightHand => "Right hand",
            LandmarkCategory::Face => "Face",
        }
    }
}

impl fmt::Display for LandmarkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single captured instant.
///
/// Categories are independently optional. The graph only writes a category
/// when it detected something, so an absent key means "not seen", while a
/// present key must hold an array (`null` or a scalar is rejected).
///
/// Metadata is kept as written and never checked; a repeated key keeps its
/// last value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Frame {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp_us: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_width: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_height: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pose_landmarks: Option<Vec<LandmarkEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_hand_landmarks: Option<Vec<LandmarkEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_hand_landmarks: Option<Vec<LandmarkEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub face_landmarks: Option<Vec<LandmarkEntry>>,
}

impl TryFrom<Map<String, Value>> for Frame {
    type Error = String;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Frame {
            timestamp_us: map.remove("timestamp_us"),
            image_width: map.remove("image_width"),
            image_height: map.remove("image_height"),
            pose_landmarks: take_category(&mut map, LandmarkCategory::Pose)?,
            left_hand_landmarks: take_category(&mut map, LandmarkCategory::LeftHand)?,
            right_hand_landmarks: take_category(&mut map, LandmarkCategory::RightHand)?,
            face_landmarks: take_category(&mut map, LandmarkCategory::Face)?,
        })
    }
}

fn take_category(
    map: &mut Map<String, Value>,
    category: LandmarkCategory,
) -> Result<Option<Vec<LandmarkEntry>>, String> {
    let found = match map.remove(category.key()) {
        None => return Ok(None),
        Some(Value::Array(entries)) => return Ok(Some(entries)),
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Object(_)) => "map",
    };
    Err(format!("invalid type: {found}, expected a sequence for `{category}`"))
}

impl Frame {
    /// Entries for `category`, or `None` if the frame does not carry it.
    pub fn landmarks(&self, category: LandmarkCategory) -> Option<&[LandmarkEntry]> {
        let field = match category {
            LandmarkCategory::Pose => &self.pose_landmarks,
            LandmarkCategory::LeftHand => &self.left_hand_landmarks,
            LandmarkCategory::RightHand => &self.right_hand_landmarks,
            LandmarkCategory::Face => &self.face_landmarks,
        };
        field.as_deref()
    }

    /// Number of entries for `category`; `None` when absent (never `Some(0)`
    /// for a missing key).
    #[inline]
    pub fn count(&self, category: LandmarkCategory) -> Option<usize> {
        self.landmarks(category).map(<[_]>::len)
    }

    /// Categories present in this frame, in summary order.
    pub fn categories(&self) -> impl Iterator<Item = LandmarkCategory> + '_ {
        LandmarkCategory::ALL
            .into_iter()
            .filter(move |c| self.landmarks(*c).is_some())
    }
}
