//! Condition definitions: the static knowledge the engine scores against.

use serde::{Deserialize, Serialize};

use crate::duration::DurationBucket;
use crate::severity::Severity;

/// Score contributed by each matched primary symptom.
pub const PRIMARY_WEIGHT: f64 = 2.0;

/// Score contributed by each matched secondary symptom.
pub const SECONDARY_WEIGHT: f64 = 1.0;

/// A single condition the engine can suggest.
///
/// Definitions are loaded once when the catalog is built and are never
/// mutated afterwards. Declaration order inside the catalog is significant:
/// it breaks ties between equally scored candidates.
///
/// Example in TOML:
/// ```toml
/// [[conditions]]
/// name = "Tension Headache"
/// description = "A common headache caused by muscle tension and stress."
/// primary_symptoms = ["Headache"]
/// secondary_symptoms = ["Neck Stiffness", "Fatigue"]
/// min_match = 1
/// required_severity = ["mild", "moderate"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionDefinition {
    /// Display name; unique within a catalog.
    pub name: String,

    /// Symptoms that weigh [`PRIMARY_WEIGHT`] each. Disjoint from
    /// `secondary_symptoms`.
    #[serde(default)]
    pub primary_symptoms: Vec<String>,

    /// Symptoms that weigh [`SECONDARY_WEIGHT`] each.
    #[serde(default)]
    pub secondary_symptoms: Vec<String>,

    /// Human-readable explanation returned with every match.
    pub description: String,

    /// Minimum number of matched symptoms (primary + secondary) before the
    /// condition is eligible for output. Must be at least 1.
    pub min_match: u32,

    /// Severities this condition is associated with.
    ///
    /// `None` means no severity affinity: the input severity is ignored.
    /// Otherwise a listed severity earns +1 and any other severity costs 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_severity: Option<Vec<Severity>>,

    /// Marks conditions that should escalate the whole assessment when they
    /// surface at Moderate or High confidence.
    #[serde(default)]
    pub is_urgent: bool,

    /// Durations typically associated with this condition. Informational
    /// only; scoring does not read it.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub duration_hint: Vec<DurationBucket>,
}

impl ConditionDefinition {
    /// Total number of declared symptoms, primary and secondary.
    pub fn symptom_count(&self) -> usize {
        self.primary_symptoms.len() + self.secondary_symptoms.len()
    }

    /// The highest score reachable from symptom matches alone.
    ///
    /// Severity and urgency adjustments are not counted, so a candidate's
    /// score may exceed this value.
    pub fn max_possible_score(&self) -> f64 {
        PRIMARY_WEIGHT * self.primary_symptoms.len() as f64
            + SECONDARY_WEIGHT * self.secondary_symptoms.len() as f64
    }
}
