//! End-to-end video analysis pipeline.
//!
//! Reads one video, streams the landmarker's per-frame output into the
//! aggregator, and reduces it to the final result. Strictly one pass, in
//! frame order; either a complete result comes back or an error does.

use std::path::Path;

use tracing::{debug, info};

use stride_models::AnalysisResult;
use stride_pose::PoseAggregator;

use crate::error::{MediaError, MediaResult};
use crate::landmarker::{Landmarker, LandmarkerConfig};
use crate::probe;

/// File extensions the analysis accepts.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["mp4", "webm", "mov", "avi"];

/// True if the filename carries a supported video extension.
pub fn is_supported_extension(filename: &str) -> bool {
    Path::new(&filename.to_lowercase())
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Analyze a video file into summary performance metrics.
///
/// Probes the container for frame rate and frame count, runs the pose
/// landmarker over every frame, and reduces the detected landmarks to an
/// [`AnalysisResult`]. Each call is an independent, single-threaded
/// analysis; concurrent callers get their own landmarker process.
pub async fn analyze_video(
    path: impl AsRef<Path>,
    config: &LandmarkerConfig,
) -> MediaResult<AnalysisResult> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MediaError::FileNotFound(path.to_path_buf()));
    }

    let info = probe::probe_video(path).await?;
    debug!(
        video = %path.display(),
        fps = info.fps,
        total_frames = info.total_frames,
        codec = %info.codec,
        "Probed video"
    );

    let landmarker = Landmarker::new(config.clone());
    let mut aggregator = PoseAggregator::new();
    landmarker
        .run(path, |landmarks| aggregator.push(landmarks.as_ref()))
        .await?;

    // Containers occasionally lie about their frame count; trust the
    // frames we actually saw when the probe came back empty.
    let total_frames = if info.total_frames > 0 {
        info.total_frames
    } else {
        aggregator.frames_seen()
    };

    let frames_seen = aggregator.frames_seen();
    let samples = aggregator.samples();
    let result = aggregator.finish(total_frames, info.fps)?;

    info!(
        video = %path.display(),
        frames = frames_seen,
        samples,
        overall_score = result.overall_score,
        "Video analysis complete"
    );

    Ok(result)
}
