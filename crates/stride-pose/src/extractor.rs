//! Per-frame pose metric extraction.

use stride_models::{BodyPart, LandmarkSet};

use crate::geometry::{angle, distance};

/// Scalar measurements derived from a single frame's landmarks.
///
/// Instances are consumed by the aggregator immediately; only the scalar
/// fields survive into the per-video time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePoseMetrics {
    /// Angle at the left knee (hip-knee-ankle), degrees
    pub left_knee_angle: f64,
    /// Angle at the right knee, degrees
    pub right_knee_angle: f64,
    /// Angle at the left hip (shoulder-hip-knee), degrees
    pub left_hip_angle: f64,
    /// Angle at the right hip, degrees
    pub right_hip_angle: f64,
    /// Ankle-to-ankle distance in normalized coordinates
    pub stride_length: f64,
    /// Vertical shoulder offset; smaller means more level
    pub shoulder_balance: f64,
    /// Mean hip y-coordinate, tracked for jump height
    pub hip_center_y: f64,
}

impl FramePoseMetrics {
    /// Mean of the left and right knee angles.
    pub fn knee_angle(&self) -> f64 {
        (self.left_knee_angle + self.right_knee_angle) / 2.0
    }

    /// Mean of the left and right hip angles.
    pub fn hip_angle(&self) -> f64 {
        (self.left_hip_angle + self.right_hip_angle) / 2.0
    }
}

/// Extract per-frame measurements from one frame's landmarks.
///
/// Returns `None` when any required landmark is missing. The aggregator
/// treats that the same as a frame with no detection at all; it is the
/// "pose not detected" sentinel, not a computation error.
pub fn extract_frame_metrics(landmarks: &LandmarkSet) -> Option<FramePoseMetrics> {
    let left_shoulder = landmarks.point(BodyPart::LeftShoulder)?;
    let right_shoulder = landmarks.point(BodyPart::RightShoulder)?;
    let left_hip = landmarks.point(BodyPart::LeftHip)?;
    let right_hip = landmarks.point(BodyPart::RightHip)?;
    let left_knee = landmarks.point(BodyPart::LeftKnee)?;
    let right_knee = landmarks.point(BodyPart::RightKnee)?;
    let left_ankle = landmarks.point(BodyPart::LeftAnkle)?;
    let right_ankle = landmarks.point(BodyPart::RightAnkle)?;

    Some(FramePoseMetrics {
        left_knee_angle: angle(left_hip, left_knee, left_ankle),
        right_knee_angle: angle(right_hip, right_knee, right_ankle),
        left_hip_angle: angle(left_shoulder, left_hip, left_knee),
        right_hip_angle: angle(right_shoulder, right_hip, right_knee),
        stride_length: distance(left_ankle, right_ankle),
        shoulder_balance: (left_shoulder.y - right_shoulder.y).abs(),
        hip_center_y: (left_hip.y + right_hip.y) / 2.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_models::Landmark;

    /// An upright figure with straight legs and level shoulders.
    fn upright_pose() -> LandmarkSet {
        let mut set = LandmarkSet::new();
        set.insert(BodyPart::LeftShoulder, Landmark::new(0.4, 0.2));
        set.insert(BodyPart::RightShoulder, Landmark::new(0.6, 0.2));
        set.insert(BodyPart::LeftHip, Landmark::new(0.4, 0.5));
        set.insert(BodyPart::RightHip, Landmark::new(0.6, 0.5));
        set.insert(BodyPart::LeftKnee, Landmark::new(0.4, 0.7));
        set.insert(BodyPart::RightKnee, Landmark::new(0.6, 0.7));
        set.insert(BodyPart::LeftAnkle, Landmark::new(0.4, 0.9));
        set.insert(BodyPart::RightAnkle, Landmark::new(0.6, 0.9));
        set
    }

    #[test]
    fn test_upright_pose_metrics() {
        let metrics = extract_frame_metrics(&upright_pose()).unwrap();

        // Hip, knee, and ankle are vertically collinear per side.
        assert!((metrics.left_knee_angle - 180.0).abs() < 1e-9);
        assert!((metrics.right_knee_angle - 180.0).abs() < 1e-9);
        assert!((metrics.left_hip_angle - 180.0).abs() < 1e-9);

        // Ankles are 0.2 apart horizontally.
        assert!((metrics.stride_length - 0.2).abs() < 1e-9);

        // Level shoulders, hips at mid-height.
        assert!(metrics.shoulder_balance.abs() < 1e-9);
        assert!((metrics.hip_center_y - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_missing_landmark_yields_none() {
        let full = upright_pose();
        // Everything except the right ankle.
        let partial: LandmarkSet = [
            BodyPart::LeftShoulder,
            BodyPart::RightShoulder,
            BodyPart::LeftHip,
            BodyPart::RightHip,
            BodyPart::LeftKnee,
            BodyPart::RightKnee,
            BodyPart::LeftAnkle,
        ]
        .iter()
        .filter_map(|&p| full.get(p).map(|l| (p, *l)))
        .collect();

        assert!(extract_frame_metrics(&partial).is_none());
    }

    #[test]
    fn test_empty_set_yields_none() {
        assert!(extract_frame_metrics(&LandmarkSet::new()).is_none());
    }

    #[test]
    fn test_uneven_shoulders() {
        let mut set = upright_pose();
        set.insert(BodyPart::LeftShoulder, Landmark::new(0.4, 0.25));
        let metrics = extract_frame_metrics(&set).unwrap();
        assert!((metrics.shoulder_balance - 0.05).abs() < 1e-9);
    }
}
