//! Cross-frame aggregation of per-frame measurements.

use stride_models::{AnalysisResult, LandmarkSet};
use tracing::debug;

use crate::error::PoseResult;
use crate::extractor::{extract_frame_metrics, FramePoseMetrics};
use crate::summary;

/// Parallel per-frame metric series accumulated over one video.
///
/// Invariant: all five series have the same length at all times. Length
/// zero is a valid state and means no frame produced a detection.
#[derive(Debug, Clone, Default)]
pub struct MetricTimeSeries {
    /// Mean knee angle per detected frame, degrees
    pub knee_angles: Vec<f64>,
    /// Mean hip angle per detected frame, degrees
    pub hip_angles: Vec<f64>,
    /// Ankle-to-ankle distance per detected frame
    pub stride_lengths: Vec<f64>,
    /// Balance per detected frame, inverted so higher is better
    pub balance_scores: Vec<f64>,
    /// Hip center height per detected frame
    pub hip_heights: Vec<f64>,
}

impl MetricTimeSeries {
    /// Number of detected frames recorded so far.
    pub fn len(&self) -> usize {
        self.knee_angles.len()
    }

    /// True when no frame has produced a detection.
    pub fn is_empty(&self) -> bool {
        self.knee_angles.is_empty()
    }

    fn push(&mut self, metrics: &FramePoseMetrics) {
        self.knee_angles.push(metrics.knee_angle());
        self.hip_angles.push(metrics.hip_angle());
        self.stride_lengths.push(metrics.stride_length);
        // Invert so the series is "higher is better".
        self.balance_scores.push(1.0 - metrics.shoulder_balance);
        self.hip_heights.push(metrics.hip_center_y);
    }
}

/// One-pass aggregator fed one frame at a time, in playback order.
///
/// Frames without a detection (or with an incomplete landmark set) are
/// counted but contribute nothing to the series.
#[derive(Debug, Clone, Default)]
pub struct PoseAggregator {
    series: MetricTimeSeries,
    frames_seen: u64,
}

impl PoseAggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame. `None` means the model saw no person.
    pub fn push(&mut self, landmarks: Option<&LandmarkSet>) {
        self.frames_seen += 1;
        if let Some(set) = landmarks {
            if let Some(metrics) = extract_frame_metrics(set) {
                self.series.push(&metrics);
            }
        }
    }

    /// Total frames pushed, detected or not.
    pub fn frames_seen(&self) -> u64 {
        self.frames_seen
    }

    /// Frames that produced a usable landmark set.
    pub fn samples(&self) -> usize {
        self.series.len()
    }

    /// Borrow the accumulated series.
    pub fn series(&self) -> &MetricTimeSeries {
        &self.series
    }

    /// Reduce the accumulated series to the final result.
    ///
    /// `total_frames` and `fps` come from the container metadata and feed
    /// the duration and speed estimates. Fails with
    /// [`PoseError::NoPoseDetected`](crate::PoseError::NoPoseDetected)
    /// when nothing was detected in the whole video.
    pub fn finish(self, total_frames: u64, fps: f64) -> PoseResult<AnalysisResult> {
        debug!(
            frames_seen = self.frames_seen,
            samples = self.series.len(),
            total_frames,
            fps,
            "Reducing metric series to summary"
        );
        summary::summarize(&self.series, self.frames_seen, total_frames, fps)
    }
}
