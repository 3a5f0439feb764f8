//! Final analysis output records.
//!
//! Field names in the serialized form are a published contract consumed by
//! the coaching UI; they must not change.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Joint angle summary in degrees, rounded for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct JointAngles {
    /// Average knee angle over the video
    pub knee: i64,
    /// Ankle angle estimated from the knee angle
    pub ankle: i64,
    /// Average hip angle over the video
    pub hip: i64,
}

/// The complete result of analyzing one video.
///
/// Produced once per analysis and never mutated afterwards. Scores are
/// percentages rounded to integers; `jumpHeight` and `strideLength` keep
/// fractional precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Vertical hip excursion scaled to approximate centimeters
    pub jump_height: f64,
    /// Average ankle-to-ankle distance, doubled as a meters estimate
    pub stride_length: f64,
    /// Summary joint angles in degrees
    pub joint_angles: JointAngles,
    /// Heuristic speed estimate (not a physical measurement)
    pub speed: f64,
    /// Shoulder-level balance score (0-100, higher is better)
    pub balance: i64,
    /// Movement consistency score (0-100)
    pub technique: i64,
    /// Composite of balance, technique, and speed
    pub overall_score: i64,
    /// One-sentence qualitative summary
    pub summary: String,
    /// Ordered coaching recommendations; never empty
    pub recommendations: Vec<String>,
    /// Frames read from the video, detected or not
    pub frame_count: u64,
    /// Video duration in seconds
    pub duration: f64,
}

/// HTTP response envelope: the analysis result plus request metadata.
///
/// The metadata keys keep their historical snake_case names while the
/// flattened result keeps its camelCase ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisRecord {
    #[serde(flatten)]
    pub result: AnalysisResult,
    /// Server-generated identifier for this analysis
    pub analysis_id: String,
    /// Filename of the uploaded video
    pub original_filename: String,
    /// Caller-supplied athlete identifier, passed through untouched
    pub athlete_id: Option<String>,
    /// Caller-supplied test type, passed through untouched
    pub test_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            jump_height: 10.0,
            stride_length: 0.2,
            joint_angles: JointAngles {
                knee: 150,
                ankle: 90,
                hip: 170,
            },
            speed: 1.0,
            balance: 98,
            technique: 100,
            overall_score: 68,
            summary: "Analysis of 10 frames shows developing athletic performance \
                      with specific areas for improvement."
                .to_string(),
            recommendations: vec!["Incorporate speed training to improve overall velocity".into()],
            frame_count: 10,
            duration: 0.33,
        }
    }

    #[test]
    fn test_result_field_names_are_contract() {
        let json = serde_json::to_value(sample_result()).unwrap();
        for key in [
            "jumpHeight",
            "strideLength",
            "jointAngles",
            "speed",
            "balance",
            "technique",
            "overallScore",
            "summary",
            "recommendations",
            "frameCount",
            "duration",
        ] {
            assert!(json.get(key).is_some(), "missing contract field {key}");
        }
        for key in ["knee", "ankle", "hip"] {
            assert!(json["jointAngles"].get(key).is_some());
        }
    }

    #[test]
    fn test_record_flattens_result() {
        let record = AnalysisRecord {
            result: sample_result(),
            analysis_id: "abc".into(),
            original_filename: "sprint.mp4".into(),
            athlete_id: Some("ath-1".into()),
            test_type: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["analysis_id"], "abc");
        assert_eq!(json["original_filename"], "sprint.mp4");
        assert_eq!(json["athlete_id"], "ath-1");
        assert!(json["test_type"].is_null());
        // The metrics land at the top level, not nested.
        assert!(json.get("jumpHeight").is_some());
        assert!(json.get("result").is_none());
    }
}
