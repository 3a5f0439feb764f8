//! Summary statistics and composite scoring.
//!
//! The speed estimate, jump-height scaling, and ankle-angle formula are
//! engineered heuristics whose constants are already exposed to downstream
//! consumers; they are preserved exactly rather than re-derived.

use stride_models::{AnalysisResult, JointAngles};

use crate::error::{PoseError, PoseResult};
use crate::recommend;
use crate::series::MetricTimeSeries;

/// Reduce the accumulated series to the final result record.
///
/// The series must be non-empty; an empty series means the video produced
/// no detections and fails as [`PoseError::NoPoseDetected`].
pub fn summarize(
    series: &MetricTimeSeries,
    frame_count: u64,
    total_frames: u64,
    fps: f64,
) -> PoseResult<AnalysisResult> {
    if series.is_empty() {
        return Err(PoseError::NoPoseDetected);
    }

    let avg_knee_angle = mean(&series.knee_angles);
    let avg_hip_angle = mean(&series.hip_angles);
    let avg_stride_length = mean(&series.stride_lengths);
    let balance_score = mean(&series.balance_scores) * 100.0;

    // Vertical hip excursion over the video, scaled to approximate cm.
    let jump_height = (max(&series.hip_heights) - min(&series.hip_heights)) * 100.0;

    let seconds = total_frames as f64 / fps;
    if seconds <= 0.0 {
        return Err(PoseError::DegenerateMetric("video duration"));
    }

    // Detection rate per second weighted by stride length. A heuristic,
    // not a physical velocity.
    let speed_estimate = series.len() as f64 / seconds * avg_stride_length * 10.0;

    if avg_knee_angle == 0.0 {
        return Err(PoseError::DegenerateMetric("mean knee angle"));
    }
    if avg_stride_length == 0.0 {
        return Err(PoseError::DegenerateMetric("mean stride length"));
    }

    let knee_consistency = 100.0 - std_dev(&series.knee_angles) / avg_knee_angle * 100.0;
    let stride_consistency =
        100.0 - std_dev(&series.stride_lengths) / avg_stride_length * 100.0;
    let technique_score = (knee_consistency + stride_consistency) / 2.0;

    let overall_score =
        (balance_score + technique_score + (speed_estimate * 5.0).min(100.0)) / 3.0;

    let recommendations = recommend::recommendations(
        avg_knee_angle,
        balance_score,
        technique_score,
        speed_estimate,
        jump_height,
    );
    let summary = recommend::summary_sentence(frame_count, overall_score);

    Ok(AnalysisResult {
        jump_height: round1(jump_height),
        stride_length: round2(avg_stride_length * 2.0),
        joint_angles: JointAngles {
            knee: round_int(avg_knee_angle),
            // The ankle is not landmarked directly; estimate it from the
            // knee with the published linear heuristic.
            ankle: round_int(90.0 + (avg_knee_angle - 150.0) * 0.3),
            hip: round_int(avg_hip_angle),
        },
        speed: round1(speed_estimate),
        balance: round_int(balance_score),
        technique: round_int(technique_score),
        overall_score: round_int(overall_score),
        summary,
        recommendations,
        frame_count,
        duration: round2(seconds),
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (the original analysis used ddof = 0).
fn std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Round half away from zero, one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round half away from zero, two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round_int(value: f64) -> i64 {
    value.round() as i64
}
