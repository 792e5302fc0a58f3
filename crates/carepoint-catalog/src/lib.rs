//! # carepoint-catalog
//!
//! A TOML-driven, validate-on-load condition catalog for the Carepoint
//! assessment engine.
//!
//! ## Overview
//!
//! This crate provides [`TomlCatalog`], which implements the
//! [`ConditionCatalog`](carepoint_core::traits::ConditionCatalog) trait.
//! Conditions are declared in a TOML file as `[[conditions]]` tables and
//! checked against the catalog invariants before the catalog can be used.
//! A builtin catalog is embedded and available through
//! [`TomlCatalog::builtin`].
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use carepoint_catalog::TomlCatalog;
//! use carepoint_core::Assessor;
//!
//! let assessor = Assessor::new(Arc::new(TomlCatalog::builtin()?))?;
//! ```

pub mod catalog;
pub mod symptoms;

pub use catalog::{CatalogConfig, TomlCatalog};
pub use symptoms::CANONICAL_SYMPTOMS;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Write;

    use carepoint_contracts::{
        duration::DurationBucket, error::CarepointError, severity::Severity,
    };
    use carepoint_core::{normalize::normalize_symptom, traits::ConditionCatalog};

    use crate::{TomlCatalog, CANONICAL_SYMPTOMS};

    // ── 1. minimal catalog ────────────────────────────────────────────────────

    #[test]
    fn test_minimal_catalog_loads() {
        let toml = r#"
            [[conditions]]
            name = "Tension Headache"
            description = "Muscle tension headache"
            primary_symptoms = ["Headache"]
            min_match = 1
        "#;

        let catalog = TomlCatalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.len(), 1);

        let def = catalog.get("Tension Headache").unwrap();
        assert!(def.secondary_symptoms.is_empty());
        assert_eq!(def.required_severity, None);
        assert!(!def.is_urgent);
        assert!(def.duration_hint.is_empty());
    }

    // ── 2. optional fields ────────────────────────────────────────────────────

    #[test]
    fn test_optional_fields_deserialize() {
        let toml = r#"
            [[conditions]]
            name = "Migraine"
            description = "Recurring headaches"
            primary_symptoms = ["Headache", "Nausea"]
            secondary_symptoms = ["Dizziness"]
            min_match = 2
            required_severity = ["moderate", "severe"]
            is_urgent = true
            duration_hint = ["A few hours", "1 day"]
        "#;

        let catalog = TomlCatalog::from_toml_str(toml).unwrap();
        let def = catalog.get("Migraine").unwrap();

        assert_eq!(def.required_severity, Some(vec![Severity::Moderate, Severity::Severe]));
        assert!(def.is_urgent);
        assert_eq!(
            def.duration_hint,
            vec![DurationBucket::FewHours, DurationBucket::OneDay]
        );
    }

    // ── 3. declaration order is preserved ─────────────────────────────────────

    #[test]
    fn test_declaration_order_preserved() {
        let toml = r#"
            [[conditions]]
            name = "Zeta"
            description = "z"
            primary_symptoms = ["fever"]
            min_match = 1

            [[conditions]]
            name = "Alpha"
            description = "a"
            primary_symptoms = ["cough"]
            min_match = 1
        "#;

        let catalog = TomlCatalog::from_toml_str(toml).unwrap();
        let names: Vec<&str> = catalog.conditions().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    // ── 4. invariant violations fail at load time ─────────────────────────────

    #[test]
    fn test_zero_symptoms_rejected() {
        let toml = r#"
            [[conditions]]
            name = "Nothing"
            description = "no symptoms at all"
            min_match = 1
        "#;

        match TomlCatalog::from_toml_str(toml) {
            Err(CarepointError::CatalogInvalid { condition, reason }) => {
                assert_eq!(condition, "Nothing");
                assert!(reason.contains("at least one"), "unexpected reason: {reason}");
            }
            other => panic!("expected CatalogInvalid, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_min_match_rejected() {
        let toml = r#"
            [[conditions]]
            name = "Cold"
            description = "c"
            primary_symptoms = ["cough"]
            min_match = 0
        "#;

        assert!(matches!(
            TomlCatalog::from_toml_str(toml),
            Err(CarepointError::CatalogInvalid { .. })
        ));
    }

    #[test]
    fn test_blank_symptom_name_rejected() {
        let toml = r#"
            [[conditions]]
            name = "Ghost"
            description = "g"
            primary_symptoms = ["  "]
            min_match = 1
            is_urgent = true
        "#;

        match TomlCatalog::from_toml_str(toml) {
            Err(CarepointError::CatalogInvalid { condition, reason }) => {
                assert_eq!(condition, "Ghost");
                assert!(reason.contains("must not be blank"), "unexpected reason: {reason}");
            }
            other => panic!("expected CatalogInvalid, got {:?}", other),
        }
    }

    #[test]
    fn test_repeated_symptom_rejected() {
        let toml = r#"
            [[conditions]]
            name = "Dup"
            description = "d"
            primary_symptoms = ["Headache", "headache"]
            min_match = 2
        "#;

        match TomlCatalog::from_toml_str(toml) {
            Err(CarepointError::CatalogInvalid { condition, reason }) => {
                assert_eq!(condition, "Dup");
                assert!(reason.contains("more than once"), "unexpected reason: {reason}");
            }
            other => panic!("expected CatalogInvalid, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_severity_is_config_error() {
        let toml = r#"
            [[conditions]]
            name = "Cold"
            description = "c"
            primary_symptoms = ["cough"]
            min_match = 1
            required_severity = ["unbearable"]
        "#;

        assert!(matches!(
            TomlCatalog::from_toml_str(toml),
            Err(CarepointError::ConfigError { .. })
        ));
    }

    // ── 5. TOML parse error ───────────────────────────────────────────────────

    /// Malformed TOML must produce a `CarepointError::ConfigError`.
    #[test]
    fn test_toml_parse_error() {
        let bad_toml = r#"
            this is not valid toml ][[[
        "#;

        match TomlCatalog::from_toml_str(bad_toml) {
            Err(CarepointError::ConfigError { reason }) => {
                assert!(
                    reason.contains("failed to parse catalog TOML"),
                    "expected parse error message, got: {reason}"
                );
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 6. file loading ───────────────────────────────────────────────────────

    #[test]
    fn test_from_file_reads_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [[conditions]]
            name = "Allergic Reaction"
            description = "a"
            primary_symptoms = ["Skin Rash"]
            min_match = 1
            "#
        )
        .unwrap();

        let catalog = TomlCatalog::from_file(file.path()).unwrap();
        assert!(catalog.get("Allergic Reaction").is_some());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");

        match TomlCatalog::from_file(&missing) {
            Err(CarepointError::ConfigError { reason }) => {
                assert!(reason.contains("absent.toml"), "unexpected reason: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    // ── 7. builtin catalog ────────────────────────────────────────────────────

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = TomlCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        for name in ["Migraine", "Tension Headache", "Angina (Heart Related)"] {
            assert!(catalog.get(name).is_some(), "builtin catalog is missing {name}");
        }
        assert!(catalog.get("Angina (Heart Related)").unwrap().is_urgent);
    }

    #[test]
    fn test_every_canonical_symptom_is_known() {
        let catalog = TomlCatalog::builtin().unwrap();
        for chip in CANONICAL_SYMPTOMS {
            let wanted = normalize_symptom(chip);
            let known = catalog.conditions().iter().any(|def| {
                def.primary_symptoms
                    .iter()
                    .chain(&def.secondary_symptoms)
                    .any(|s| normalize_symptom(s) == wanted)
            });
            assert!(known, "no builtin condition declares the '{chip}' chip");
        }
    }

    #[test]
    fn test_builtin_has_no_bare_pain_symptom() {
        // A bare "pain" entry would swallow every pain complaint and starve
        // the General Pain fallback.
        let catalog = TomlCatalog::builtin().unwrap();
        for def in catalog.conditions() {
            for s in def.primary_symptoms.iter().chain(&def.secondary_symptoms) {
                assert_ne!(normalize_symptom(s), "pain", "in {}", def.name);
            }
        }
    }
}
