//! Error types for media operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for media operations.
pub type MediaResult<T> = Result<T, MediaError>;

/// Errors that can occur while reading a video and driving the landmarker.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("FFprobe not found in PATH")]
    FfprobeNotFound,

    #[error("Pose landmarker '{0}' not found in PATH")]
    LandmarkerNotFound(String),

    #[error("Could not read video file: {message}")]
    ProbeFailed {
        message: String,
        stderr: Option<String>,
    },

    #[error("Pose landmarker failed: {message}")]
    LandmarkerFailed {
        message: String,
        exit_code: Option<i32>,
    },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid video file: {0}")]
    InvalidVideo(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed landmarker output: {0}")]
    MalformedLandmarks(#[from] serde_json::Error),

    #[error(transparent)]
    Analysis(#[from] stride_pose::PoseError),
}

impl MediaError {
    /// Create a probe failure error.
    pub fn probe_failed(message: impl Into<String>, stderr: Option<String>) -> Self {
        Self::ProbeFailed {
            message: message.into(),
            stderr,
        }
    }

    /// Create a landmarker failure error.
    pub fn landmarker_failed(message: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::LandmarkerFailed {
            message: message.into(),
            exit_code,
        }
    }
}
