//! Reference scenarios run by `carepoint scenarios`.
//!
//! Each scenario pairs a request with the outcome the builtin catalog must
//! produce. The command is a smoke test for edited catalogs: point it at a
//! custom file with `--catalog` to see which reference outcomes still hold.

use carepoint_contracts::{
    AssessmentRequest, AssessmentResult, Confidence, DurationBucket, Severity,
};
use carepoint_core::Assessor;

/// A named request and the check its result must pass.
pub struct Scenario {
    pub title: &'static str,
    pub request: AssessmentRequest,
    pub check: fn(&AssessmentResult) -> Result<(), String>,
}

/// Outcome of running one scenario.
pub struct ScenarioOutcome {
    pub title: &'static str,
    pub result: AssessmentResult,
    pub verdict: Result<(), String>,
}

pub fn reference_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            title: "Migraine: headache, nausea, light sensitivity (severe, 1 day)",
            request: AssessmentRequest::new(["Headache", "Nausea", "Sensitivity to Light"])
                .with_severity(Severity::Severe)
                .with_duration(DurationBucket::OneDay),
            check: |result| expect_confidence(result, "Migraine", Confidence::High),
        },
        Scenario {
            title: "Tension headache: headache only (mild, 2-7 days)",
            request: AssessmentRequest::new(["Headache"])
                .with_severity(Severity::Mild)
                .with_duration(DurationBucket::TwoToSevenDays),
            check: |result| {
                expect_present(result, "Tension Headache")?;
                expect_absent(result, "Migraine")
            },
        },
        Scenario {
            title: "Angina: chest pain, shortness of breath (no severity)",
            request: AssessmentRequest::new(["Chest Pain", "Shortness of Breath"]),
            check: |result| {
                let angina = expect_present(result, "Angina (Heart Related)")?;
                if !angina.is_urgent {
                    return Err("Angina should be flagged urgent".to_string());
                }
                if angina.confidence.is_actionable() && !result.overall_urgent {
                    return Err("assessment should be urgent".to_string());
                }
                Ok(())
            },
        },
        Scenario {
            title: "Fallback: unmatched back pain",
            request: AssessmentRequest::new(["Back pain"]),
            check: |result| {
                if result.conditions.len() != 1 {
                    return Err(format!(
                        "expected exactly one fallback, got {}",
                        result.conditions.len()
                    ));
                }
                expect_confidence(result, "General Pain / Discomfort", Confidence::Moderate)
            },
        },
        Scenario {
            title: "Empty input",
            request: AssessmentRequest::default(),
            check: |result| {
                if !result.is_empty() || result.overall_urgent {
                    return Err("expected an empty, non-urgent result".to_string());
                }
                Ok(())
            },
        },
    ]
}

pub fn run(assessor: &Assessor) -> Vec<ScenarioOutcome> {
    reference_scenarios()
        .into_iter()
        .map(|scenario| {
            let result = assessor.assess(&scenario.request);
            let verdict = (scenario.check)(&result);
            ScenarioOutcome {
                title: scenario.title,
                result,
                verdict,
            }
        })
        .collect()
}

fn expect_present<'r>(
    result: &'r AssessmentResult,
    name: &str,
) -> Result<&'r carepoint_contracts::ConditionMatch, String> {
    result.find(name).ok_or_else(|| {
        let got: Vec<&str> = result.conditions.iter().map(|c| c.name.as_str()).collect();
        format!("expected '{}' among {:?}", name, got)
    })
}

fn expect_absent(result: &AssessmentResult, name: &str) -> Result<(), String> {
    match result.find(name) {
        Some(_) => Err(format!("'{}' should not be suggested", name)),
        None => Ok(()),
    }
}

fn expect_confidence(
    result: &AssessmentResult,
    name: &str,
    confidence: Confidence,
) -> Result<(), String> {
    let found = expect_present(result, name)?;
    if found.confidence != confidence {
        return Err(format!(
            "expected '{}' at {} confidence, got {}",
            name, confidence, found.confidence
        ));
    }
    Ok(())
}
