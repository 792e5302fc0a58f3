//! Symptom normalization.
//!
//! Both sides of every comparison go through [`normalize_symptom`]: the
//! user's input tokens and the catalog's symptom names.

/// A lower-cased, trimmed symptom string. Lives for a single request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymptomToken(String);

impl SymptomToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring containment against an already-normalized symptom name.
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

/// Lower-case and trim a single symptom string.
pub fn normalize_symptom(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize raw input into tokens.
///
/// Order and duplicates are preserved. Entries that are blank after
/// trimming are dropped.
pub fn normalize_symptoms<S: AsRef<str>>(raw: &[S]) -> Vec<SymptomToken> {
    raw.iter()
        .map(|s| normalize_symptom(s.as_ref()))
        .filter(|s| !s.is_empty())
        .map(SymptomToken)
        .collect()
}

/// True when any token contains `needle` (already normalized).
pub fn any_contains(tokens: &[SymptomToken], needle: &str) -> bool {
    tokens.iter().any(|token| token.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        let tokens = normalize_symptoms(&["  Chest Pain ", "NAUSEA"]);
        let raw: Vec<&str> = tokens.iter().map(SymptomToken::as_str).collect();
        assert_eq!(raw, vec!["chest pain", "nausea"]);
    }

    #[test]
    fn keeps_duplicates_and_order() {
        let tokens = normalize_symptoms(&["Cough", "cough", "Fever"]);
        let raw: Vec<&str> = tokens.iter().map(SymptomToken::as_str).collect();
        assert_eq!(raw, vec!["cough", "cough", "fever"]);
    }

    #[test]
    fn drops_blank_entries() {
        let tokens = normalize_symptoms(&["", "   ", "\t", "Fatigue"]);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].as_str(), "fatigue");
    }

    #[test]
    fn containment_is_substring_based() {
        let tokens = normalize_symptoms(&["Severe chest pain at night"]);
        assert!(any_contains(&tokens, "chest pain"));
        assert!(any_contains(&tokens, "pain"));
        assert!(!any_contains(&tokens, "stomach pain"));
    }
}
