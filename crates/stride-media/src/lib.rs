//! Video probing and pose landmarker plumbing.
//!
//! Everything the core pipeline treats as an external collaborator lives
//! here: ffprobe container metadata, the pose landmarker subprocess, and
//! the [`pipeline::analyze_video`] entry point that wires both into the
//! aggregator from `stride-pose`.

pub mod error;
pub mod landmarker;
pub mod pipeline;
pub mod probe;

pub use error::{MediaError, MediaResult};
pub use landmarker::{Landmarker, LandmarkerConfig};
pub use pipeline::{analyze_video, is_supported_extension, SUPPORTED_EXTENSIONS};
pub use probe::{probe_video, VideoInfo};
