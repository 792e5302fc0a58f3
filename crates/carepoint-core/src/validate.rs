//! Catalog invariants, checked once before any scoring happens.
//!
//! A catalog that fails these checks must never be scored: the confidence
//! ratio divides by each definition's maximum score, and tie-breaking relies
//! on names being unique.

use std::collections::HashSet;

use tracing::warn;

use carepoint_contracts::{
    condition::ConditionDefinition,
    error::{CarepointError, CarepointResult},
};

use crate::normalize::normalize_symptom;

/// Check every definition and return the first violation found.
///
/// Rules, per definition:
/// - the name is non-blank and unique across the catalog
/// - at least one symptom is declared (primary or secondary)
/// - `min_match >= 1`
/// - every symptom name is non-blank and appears once across both lists
///   (compared after normalization)
/// - `required_severity`, when present, lists at least one severity
///
/// A `min_match` larger than the number of declared symptoms is legal but
/// makes the condition unreachable; it is logged, not rejected.
pub fn validate_definitions(definitions: &[ConditionDefinition]) -> CarepointResult<()> {
    let mut seen_names = HashSet::new();

    for def in definitions {
        let invalid = |reason: String| CarepointError::CatalogInvalid {
            condition: def.name.clone(),
            reason,
        };

        if def.name.trim().is_empty() {
            return Err(invalid("condition name must not be blank".to_string()));
        }

        if !seen_names.insert(def.name.as_str()) {
            return Err(invalid("condition name is declared more than once".to_string()));
        }

        if def.symptom_count() == 0 {
            return Err(invalid(
                "at least one primary or secondary symptom is required".to_string(),
            ));
        }

        if def.min_match < 1 {
            return Err(invalid("min_match must be at least 1".to_string()));
        }

        let mut primary = HashSet::new();
        for symptom in &def.primary_symptoms {
            let normalized = normalize_symptom(symptom);
            if normalized.is_empty() {
                return Err(invalid("symptom name must not be blank".to_string()));
            }
            if !primary.insert(normalized) {
                return Err(invalid(format!(
                    "primary symptom '{}' is listed more than once",
                    symptom
                )));
            }
        }

        let mut secondary = HashSet::new();
        for symptom in &def.secondary_symptoms {
            let normalized = normalize_symptom(symptom);
            if normalized.is_empty() {
                return Err(invalid("symptom name must not be blank".to_string()));
            }
            if primary.contains(&normalized) {
                return Err(invalid(format!(
                    "symptom '{}' is listed as both primary and secondary",
                    symptom
                )));
            }
            if !secondary.insert(normalized) {
                return Err(invalid(format!(
                    "secondary symptom '{}' is listed more than once",
                    symptom
                )));
            }
        }

        if matches!(&def.required_severity, Some(set) if set.is_empty()) {
            return Err(invalid(
                "required_severity must list at least one severity when present".to_string(),
            ));
        }

        if def.min_match as usize > def.symptom_count() {
            warn!(
                condition = %def.name,
                min_match = def.min_match,
                symptoms = def.symptom_count(),
                "min_match exceeds declared symptoms; condition can never be suggested"
            );
        }
    }

    Ok(())
}
