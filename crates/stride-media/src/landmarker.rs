//! Driver for the external pose landmarker process.
//!
//! The landmarker is a pretrained pose-estimation model behind a CLI
//! contract: given a video path it writes one JSON object per frame to
//! stdout, in frame order:
//!
//! ```text
//! {"frame": 0, "landmarks": {"left_hip": {"x": 0.41, "y": 0.52, "visibility": 0.98}, ...}}
//! {"frame": 1, "landmarks": null}
//! ```
//!
//! `landmarks: null` means no person was detected in that frame. Keys the
//! analysis does not track (nose, wrists, ...) are ignored.

use std::collections::HashMap;
use std::path::Path;
use std::process::Stdio;

use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, warn};

use stride_models::{BodyPart, Landmark, LandmarkSet};

use crate::error::{MediaError, MediaResult};

/// Configuration for the landmarker subprocess.
#[derive(Debug, Clone)]
pub struct LandmarkerConfig {
    /// Executable name or path of the landmarker
    pub binary: String,
    /// Landmarks below this visibility are treated as missing
    pub min_visibility: f32,
}

impl Default for LandmarkerConfig {
    fn default() -> Self {
        Self {
            binary: "pose-landmarker".to_string(),
            min_visibility: 0.5,
        }
    }
}

impl LandmarkerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            binary: std::env::var("POSE_LANDMARKER_BIN")
                .unwrap_or_else(|_| "pose-landmarker".to_string()),
            min_visibility: std::env::var("POSE_MIN_VISIBILITY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.5),
        }
    }
}

/// One frame of landmarker wire output.
#[derive(Debug, Deserialize)]
pub struct LandmarkFrame {
    /// Zero-based frame index
    pub frame: u64,
    /// Detected landmarks by wire name, or null for no detection
    pub landmarks: Option<HashMap<String, RawLandmark>>,
}

/// A landmark as the wire carries it.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RawLandmark {
    pub x: f64,
    pub y: f64,
    #[serde(default = "full_visibility")]
    pub visibility: f32,
}

fn full_visibility() -> f32 {
    1.0
}

impl LandmarkFrame {
    /// Convert wire landmarks into a typed set.
    ///
    /// Untracked part names are dropped, as are landmarks below the
    /// visibility floor. Returns `None` for a no-detection frame.
    pub fn into_landmark_set(self, min_visibility: f32) -> Option<LandmarkSet> {
        let raw = self.landmarks?;
        Some(
            raw.into_iter()
                .filter_map(|(name, lm)| {
                    let part = BodyPart::from_name(&name)?;
                    if lm.visibility < min_visibility {
                        return None;
                    }
                    Some((part, Landmark::with_visibility(lm.x, lm.y, lm.visibility)))
                })
                .collect(),
        )
    }
}

/// Runs the landmarker over a video and streams its per-frame output.
#[derive(Debug, Clone, Default)]
pub struct Landmarker {
    config: LandmarkerConfig,
}

impl Landmarker {
    /// Create a landmarker driver.
    pub fn new(config: LandmarkerConfig) -> Self {
        Self { config }
    }

    /// Stream per-frame landmark sets, invoking `on_frame` once per frame
    /// in playback order. `None` is a frame with no usable detection.
    pub async fn run<F>(&self, video: impl AsRef<Path>, mut on_frame: F) -> MediaResult<()>
    where
        F: FnMut(Option<LandmarkSet>),
    {
        let video = video.as_ref();

        which::which(&self.config.binary)
            .map_err(|_| MediaError::LandmarkerNotFound(self.config.binary.clone()))?;

        debug!(
            binary = %self.config.binary,
            video = %video.display(),
            "Starting pose landmarker"
        );

        let mut child = Command::new(&self.config.binary)
            .arg("--video")
            .arg(video)
            .arg("--output-format")
            .arg("jsonl")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let stdout = child.stdout.take().expect("stdout not captured");
        let mut stderr = child.stderr.take().expect("stderr not captured");

        let mut lines = BufReader::new(stdout).lines();
        let mut last_frame: Option<u64> = None;

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let frame: LandmarkFrame = serde_json::from_str(line)?;

            // The contract is strictly ordered frames; a regression here
            // means the landmarker is broken, not the video.
            if let Some(last) = last_frame {
                if frame.frame <= last {
                    return Err(MediaError::landmarker_failed(
                        format!("frame index went backwards at frame {}", frame.frame),
                        None,
                    ));
                }
            }
            last_frame = Some(frame.frame);

            on_frame(frame.into_landmark_set(self.config.min_visibility));
        }

        let mut stderr_buf = String::new();
        let _ = stderr.read_to_string(&mut stderr_buf).await;

        let status = child.wait().await?;
        if !status.success() {
            warn!(
                exit_code = ?status.code(),
                stderr = %stderr_buf.trim(),
                "Pose landmarker exited with failure"
            );
            return Err(MediaError::landmarker_failed(
                if stderr_buf.trim().is_empty() {
                    "landmarker exited with non-zero status".to_string()
                } else {
                    stderr_buf.trim().to_string()
                },
                status.code(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detection_line() {
        let line = r#"{"frame": 3, "landmarks": {
            "left_shoulder": {"x": 0.4, "y": 0.2, "visibility": 0.99},
            "right_shoulder": {"x": 0.6, "y": 0.2},
            "nose": {"x": 0.5, "y": 0.1, "visibility": 0.97}
        }}"#;
        let frame: LandmarkFrame = serde_json::from_str(line).unwrap();
        assert_eq!(frame.frame, 3);

        let set = frame.into_landmark_set(0.5).unwrap();
        // Nose is not a tracked part and is dropped.
        assert_eq!(set.len(), 2);
        // Missing visibility defaults to full.
        let rs = set.get(BodyPart::RightShoulder).unwrap();
        assert!((rs.visibility - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_no_detection_line() {
        let line = r#"{"frame": 7, "landmarks": null}"#;
        let frame: LandmarkFrame = serde_json::from_str(line).unwrap();
        assert!(frame.into_landmark_set(0.5).is_none());
    }

    #[test]
    fn test_low_visibility_landmarks_are_dropped() {
        let line = r#"{"frame": 0, "landmarks": {
            "left_hip": {"x": 0.4, "y": 0.5, "visibility": 0.2},
            "right_hip": {"x": 0.6, "y": 0.5, "visibility": 0.9}
        }}"#;
        let frame: LandmarkFrame = serde_json::from_str(line).unwrap();
        let set = frame.into_landmark_set(0.5).unwrap();
        assert!(set.get(BodyPart::LeftHip).is_none());
        assert!(set.get(BodyPart::RightHip).is_some());
    }

    #[test]
    fn test_malformed_line_is_an_error() {
        let result: Result<LandmarkFrame, _> = serde_json::from_str("{not json");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = LandmarkerConfig::default();
        assert_eq!(config.binary, "pose-landmarker");
        assert!((config.min_visibility - 0.5).abs() < f32::EPSILON);
    }
}
