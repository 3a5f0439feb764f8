//! Threshold-based coaching recommendations.
//!
//! Rules are evaluated against the computed summary in a fixed order and
//! are independent of each other. The coaching strings are part of the
//! output consumed by the coaching UI.

/// Knee angles below this are read as insufficient knee drive.
const KNEE_ANGLE_THRESHOLD: f64 = 140.0;
/// Balance scores below this trigger core-stability coaching.
const BALANCE_THRESHOLD: f64 = 70.0;
/// Technique scores below this trigger consistency coaching.
const TECHNIQUE_THRESHOLD: f64 = 75.0;
/// Speed estimates below this trigger speed-training coaching.
const SPEED_THRESHOLD: f64 = 8.0;
/// Jump heights below this trigger explosive-power coaching.
const JUMP_HEIGHT_THRESHOLD: f64 = 10.0;

/// Generate the ordered recommendation list for a summary.
///
/// Never returns an empty list: when no rule fires, two fixed
/// positive-reinforcement strings are returned instead.
pub fn recommendations(
    avg_knee_angle: f64,
    balance_score: f64,
    technique_score: f64,
    speed_estimate: f64,
    jump_height: f64,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if avg_knee_angle < KNEE_ANGLE_THRESHOLD {
        recommendations
            .push("Work on knee drive - your knee angle is too acute during movement".to_string());
    }
    if balance_score < BALANCE_THRESHOLD {
        recommendations.push("Focus on core stability exercises to improve balance".to_string());
    }
    if technique_score < TECHNIQUE_THRESHOLD {
        recommendations
            .push("Practice consistent movement patterns to improve technique".to_string());
    }
    if speed_estimate < SPEED_THRESHOLD {
        recommendations.push("Incorporate speed training to improve overall velocity".to_string());
    }
    if jump_height < JUMP_HEIGHT_THRESHOLD {
        recommendations.push("Work on explosive power training to increase jump height".to_string());
    }

    if recommendations.is_empty() {
        recommendations.push("Excellent form! Continue with current training regimen".to_string());
        recommendations.push("Consider advanced technique refinement".to_string());
    }

    recommendations
}

/// One-sentence qualitative summary from frame count and overall score.
pub fn summary_sentence(frame_count: u64, overall_score: f64) -> String {
    let grade = if overall_score > 85.0 {
        "excellent"
    } else if overall_score > 70.0 {
        "good"
    } else {
        "developing"
    };
    format!(
        "Analysis of {frame_count} frames shows {grade} athletic performance \
         with specific areas for improvement."
    )
}
