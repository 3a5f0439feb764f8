//! Frame-to-metrics aggregation pipeline.
//!
//! Takes a stream of per-frame body landmarks (produced by an external
//! pose-estimation model) and reduces it to summary performance metrics
//! plus coaching recommendations:
//!
//! 1. [`geometry`] - angle and distance primitives
//! 2. [`extractor`] - one frame's landmarks to scalar measurements
//! 3. [`PoseAggregator`] - accumulates measurements across frames
//! 4. [`summary`] - series to final scores and the result record
//! 5. [`recommend`] - threshold rules to coaching text
//!
//! The whole pipeline is synchronous and pure; frame I/O lives in
//! `stride-media`.

pub mod error;
pub mod extractor;
pub mod geometry;
pub mod recommend;
pub mod series;
pub mod summary;

pub use error::{PoseError, PoseResult};
pub use extractor::{extract_frame_metrics, FramePoseMetrics};
pub use series::{MetricTimeSeries, PoseAggregator};
