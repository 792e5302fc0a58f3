//! Generic candidates for input that matches no catalog condition.

use carepoint_contracts::assessment::{Confidence, ConditionMatch};

use crate::normalize::{any_contains, SymptomToken};

pub const GENERAL_PAIN: &str = "General Pain / Discomfort";
pub const UNDETERMINED_VIRAL: &str = "Undetermined Viral Infection";

const GENERAL_PAIN_DESCRIPTION: &str = "Your symptoms describe pain or discomfort that does \
not point to a specific condition. Rest, gentle movement, and over-the-counter pain relief \
may help; see a provider if the pain persists or worsens.";

const UNDETERMINED_VIRAL_DESCRIPTION: &str = "Your symptoms do not clearly match a known \
condition and may reflect a minor viral illness. Rest, fluids, and monitoring are usually \
enough; contact a provider if symptoms persist.";

/// The single fallback candidate for unmatched, non-empty input.
///
/// Returns `None` for empty input. Any token containing "pain" yields a
/// Moderate [`GENERAL_PAIN`]; anything else a Low [`UNDETERMINED_VIRAL`].
/// Fallbacks are never urgent.
pub fn fallback_candidate(tokens: &[SymptomToken]) -> Option<ConditionMatch> {
    if tokens.is_empty() {
        return None;
    }

    let candidate = if any_contains(tokens, "pain") {
        ConditionMatch {
            name: GENERAL_PAIN.to_string(),
            confidence: Confidence::Moderate,
            description: GENERAL_PAIN_DESCRIPTION.to_string(),
            is_urgent: false,
        }
    } else {
        ConditionMatch {
            name: UNDETERMINED_VIRAL.to_string(),
            confidence: Confidence::Low,
            description: UNDETERMINED_VIRAL_DESCRIPTION.to_string(),
            is_urgent: false,
        }
    };

    Some(candidate)
}
