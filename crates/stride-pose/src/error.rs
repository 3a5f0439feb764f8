//! Error types for the aggregation pipeline.

use thiserror::Error;

/// Result type for pose analysis operations.
pub type PoseResult<T> = Result<T, PoseError>;

/// Errors that can occur while reducing landmark frames to a result.
///
/// All variants are terminal for the analysis; nothing is retried and no
/// partial result is ever produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoseError {
    /// The video yielded no frames, or no frame carried a usable landmark set.
    #[error("No pose landmarks detected in video")]
    NoPoseDetected,

    /// A summary statistic's denominator collapsed to zero.
    #[error("Degenerate metric: {0} is zero")]
    DegenerateMetric(&'static str),
}
