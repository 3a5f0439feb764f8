//! Body landmark types produced by the pose-estimation collaborator.
//!
//! The pose model reports landmarks in normalized image coordinates.
//! Everything downstream (angles, distances, balance) works in this
//! normalized space, so frame resolution never enters the math.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A point in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Point2D {
    /// X coordinate (0.0 = left, 1.0 = right)
    pub x: f64,
    /// Y coordinate (0.0 = top, 1.0 = bottom)
    pub y: f64,
}

impl Point2D {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Body parts the analysis tracks.
///
/// Landmarks are always addressed by this enum, never by the positional
/// index the upstream model happens to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    LeftShoulder,
    RightShoulder,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl BodyPart {
    /// The eight landmarks every frame must carry to count as a detection.
    pub const REQUIRED: [BodyPart; 8] = [
        BodyPart::LeftShoulder,
        BodyPart::RightShoulder,
        BodyPart::LeftHip,
        BodyPart::RightHip,
        BodyPart::LeftKnee,
        BodyPart::RightKnee,
        BodyPart::LeftAnkle,
        BodyPart::RightAnkle,
    ];

    /// Wire name of the part (matches the landmarker's JSON keys).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }

    /// Parse a wire name into a tracked part. Parts the analysis does not
    /// use (nose, wrists, ...) return `None` and are dropped at the source.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left_shoulder" => Some(Self::LeftShoulder),
            "right_shoulder" => Some(Self::RightShoulder),
            "left_hip" => Some(Self::LeftHip),
            "right_hip" => Some(Self::RightHip),
            "left_knee" => Some(Self::LeftKnee),
            "right_knee" => Some(Self::RightKnee),
            "left_ankle" => Some(Self::LeftAnkle),
            "right_ankle" => Some(Self::RightAnkle),
            _ => None,
        }
    }
}

/// A single detected landmark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Landmark {
    /// Position in normalized image coordinates
    pub point: Point2D,
    /// Detection confidence (0.0 to 1.0); 1.0 when the model omits it
    pub visibility: f32,
}

impl Landmark {
    /// Create a landmark with full visibility.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            point: Point2D::new(x, y),
            visibility: 1.0,
        }
    }

    /// Create a landmark with an explicit visibility score.
    pub fn with_visibility(x: f64, y: f64, visibility: f32) -> Self {
        Self {
            point: Point2D::new(x, y),
            visibility,
        }
    }
}

/// One frame's detected landmarks, keyed by body part.
///
/// A frame with no detection is represented as `Option<LandmarkSet>::None`
/// upstream, never as an empty set; an instance of this type always came
/// from a frame where the model reported a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LandmarkSet {
    parts: HashMap<BodyPart, Landmark>,
}

impl LandmarkSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a landmark.
    pub fn insert(&mut self, part: BodyPart, landmark: Landmark) {
        self.parts.insert(part, landmark);
    }

    /// Get a landmark by part.
    pub fn get(&self, part: BodyPart) -> Option<&Landmark> {
        self.parts.get(&part)
    }

    /// Get a landmark's position by part.
    pub fn point(&self, part: BodyPart) -> Option<Point2D> {
        self.parts.get(&part).map(|l| l.point)
    }

    /// Number of landmarks in the set.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// True if the set holds no landmarks.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// True if every required part is present.
    pub fn has_required_parts(&self) -> bool {
        BodyPart::REQUIRED.iter().all(|p| self.parts.contains_key(p))
    }
}

impl FromIterator<(BodyPart, Landmark)> for LandmarkSet {
    fn from_iter<I: IntoIterator<Item = (BodyPart, Landmark)>>(iter: I) -> Self {
        Self {
            parts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_set() -> LandmarkSet {
        BodyPart::REQUIRED
            .iter()
            .map(|&p| (p, Landmark::new(0.5, 0.5)))
            .collect()
    }

    #[test]
    fn test_part_names_round_trip() {
        for part in BodyPart::REQUIRED {
            assert_eq!(BodyPart::from_name(part.as_str()), Some(part));
        }
        assert_eq!(BodyPart::from_name("nose"), None);
    }

    #[test]
    fn test_has_required_parts() {
        let mut set = full_set();
        assert!(set.has_required_parts());

        set = BodyPart::REQUIRED[..7]
            .iter()
            .map(|&p| (p, Landmark::new(0.5, 0.5)))
            .collect();
        assert!(!set.has_required_parts());
    }

    #[test]
    fn test_point_lookup() {
        let mut set = LandmarkSet::new();
        set.insert(BodyPart::LeftHip, Landmark::new(0.25, 0.75));

        let p = set.point(BodyPart::LeftHip).unwrap();
        assert!((p.x - 0.25).abs() < f64::EPSILON);
        assert!((p.y - 0.75).abs() < f64::EPSILON);
        assert!(set.point(BodyPart::RightHip).is_none());
    }

    #[test]
    fn test_serde_part_names() {
        let json = serde_json::to_string(&BodyPart::LeftKnee).unwrap();
        assert_eq!(json, "\"left_knee\"");
    }
}
