//! Weighted symptom scoring.
//!
//! Scoring is symptom-driven: the outer loop walks a definition's symptoms
//! and asks whether *any* input token contains each one. A definition
//! symptom therefore counts at most once, however many tokens mention it.

use tracing::debug;

use carepoint_contracts::{
    assessment::Confidence,
    condition::{ConditionDefinition, PRIMARY_WEIGHT, SECONDARY_WEIGHT},
    severity::Severity,
};

use crate::normalize::{any_contains, normalize_symptom, SymptomToken};

/// Added when the input severity is in the definition's `required_severity`.
pub const SEVERITY_BONUS: f64 = 1.0;

/// Subtracted when the input severity is outside `required_severity`.
pub const SEVERITY_PENALTY: f64 = 1.0;

/// Added to urgent conditions that matched at least one primary symptom.
pub const URGENCY_BONUS: f64 = 0.5;

/// Raw score and match count for one definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionScore {
    pub score: f64,
    /// Matched definition symptoms, primary and secondary.
    pub matches: u32,
}

/// A definition together with its score and confidence for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub definition: &'a ConditionDefinition,
    pub score: f64,
    pub matches: u32,
    pub confidence: Confidence,
}

/// Score one definition against the normalized input.
pub fn score_condition(
    definition: &ConditionDefinition,
    tokens: &[SymptomToken],
    severity: Option<Severity>,
) -> ConditionScore {
    let mut score = 0.0;
    let mut matches = 0;
    let mut primary_matched = false;

    for symptom in &definition.primary_symptoms {
        if any_contains(tokens, &normalize_symptom(symptom)) {
            score += PRIMARY_WEIGHT;
            matches += 1;
            primary_matched = true;
        }
    }

    for symptom in &definition.secondary_symptoms {
        if any_contains(tokens, &normalize_symptom(symptom)) {
            score += SECONDARY_WEIGHT;
            matches += 1;
        }
    }

    if let (Some(required), Some(reported)) = (&definition.required_severity, severity) {
        if required.contains(&reported) {
            score += SEVERITY_BONUS;
        } else {
            score -= SEVERITY_PENALTY;
        }
    }

    if definition.is_urgent && primary_matched {
        score += URGENCY_BONUS;
    }

    debug!(
        condition = %definition.name,
        score,
        matches,
        "condition scored"
    );

    ConditionScore { score, matches }
}
