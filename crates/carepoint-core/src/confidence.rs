//! Confidence banding.

use carepoint_contracts::{assessment::Confidence, condition::ConditionDefinition};

/// Ratio above which a candidate is High regardless of match count.
pub const HIGH_RATIO: f64 = 0.6;

/// Ratio above which a candidate is at least Moderate.
pub const MODERATE_RATIO: f64 = 0.3;

/// `score / max_possible_score`, or 0 for a definition without symptoms.
pub fn confidence_ratio(definition: &ConditionDefinition, score: f64) -> f64 {
    let max = definition.max_possible_score();
    if max > 0.0 {
        score / max
    } else {
        0.0
    }
}

/// Band a score, first match wins:
///
/// 1. High: ratio > 0.6, or matches ≥ `min_match + 1`
/// 2. Moderate: ratio > 0.3, or matches ≥ `min_match`
/// 3. Low: otherwise
pub fn classify(definition: &ConditionDefinition, score: f64, matches: u32) -> Confidence {
    let ratio = confidence_ratio(definition, score);

    if ratio > HIGH_RATIO || matches >= definition.min_match.saturating_add(1) {
        Confidence::High
    } else if ratio > MODERATE_RATIO || matches >= definition.min_match {
        Confidence::Moderate
    } else {
        Confidence::Low
    }
}
