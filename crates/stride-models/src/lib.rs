//! Shared data models for the StrideLab backend.
//!
//! This crate provides Serde-serializable types for:
//! - Body landmarks produced by the pose-estimation collaborator
//! - Final analysis results and their HTTP response envelope

pub mod landmark;
pub mod result;

// Re-export common types
pub use landmark::{BodyPart, Landmark, LandmarkSet, Point2D};
pub use result::{AnalysisRecord, AnalysisResult, JointAngles};
