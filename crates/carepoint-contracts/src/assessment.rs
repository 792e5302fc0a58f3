//! Assessment request and result types.
//!
//! An `AssessmentRequest` flows in from the symptom-selection screen; an
//! `AssessmentResult` flows back out for display. Both are plain data and
//! serialize to JSON for callers outside the process.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::duration::DurationBucket;
use crate::severity::Severity;

/// Three-tier probability band attached to every candidate.
///
/// Ordered `Low < Moderate < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Moderate,
    High,
}

impl Confidence {
    /// True for the bands that may escalate an assessment to urgent.
    pub fn is_actionable(self) -> bool {
        matches!(self, Confidence::Moderate | Confidence::High)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Confidence::Low => "Low",
            Confidence::Moderate => "Moderate",
            Confidence::High => "High",
        };
        f.write_str(label)
    }
}

/// Everything the engine needs for one assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    /// Raw symptom strings: chip labels and free-text entries, in any case.
    #[serde(default)]
    pub symptoms: Vec<String>,
    /// Reported severity, if the user picked one.
    #[serde(default)]
    pub severity: Option<Severity>,
    /// Reported duration, if the user picked one. Not used for scoring.
    #[serde(default)]
    pub duration: Option<DurationBucket>,
}

impl AssessmentRequest {
    /// Build a request from any iterator of symptom strings.
    pub fn new<I, S>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symptoms: symptoms.into_iter().map(Into::into).collect(),
            severity: None,
            duration: None,
        }
    }

    /// Set the reported severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Set the reported duration.
    pub fn with_duration(mut self, duration: DurationBucket) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// The projection of one candidate condition handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionMatch {
    pub name: String,
    pub confidence: Confidence,
    pub description: String,
    pub is_urgent: bool,
}

/// The engine's answer to an `AssessmentRequest`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Best candidates first; never more than three.
    pub conditions: Vec<ConditionMatch>,
    /// True when an urgent condition surfaced at Moderate or High confidence.
    pub overall_urgent: bool,
}

impl AssessmentResult {
    /// True when no candidate (not even a fallback) was produced.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Look up a candidate by its condition name.
    pub fn find(&self, name: &str) -> Option<&ConditionMatch> {
        self.conditions.iter().find(|c| c.name == name)
    }
}
