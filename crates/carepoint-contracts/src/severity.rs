//! Symptom severity as reported by the user.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CarepointError, CarepointResult};

/// How strongly the user experiences their symptoms.
///
/// Closed on purpose: a condition's `required_severity` set is matched
/// against these variants, never against free text.
///
/// Serialized lower-case in both JSON and TOML:
/// ```toml
/// required_severity = ["moderate", "severe"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
    Extreme,
}

impl Severity {
    /// Every severity, mildest first.
    pub const ALL: [Severity; 4] = [
        Severity::Mild,
        Severity::Moderate,
        Severity::Severe,
        Severity::Extreme,
    ];

    /// The lower-case wire name (`"mild"`, `"moderate"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Extreme => "extreme",
        }
    }

    /// Title shown next to the severity picker.
    pub fn title(self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
            Severity::Extreme => "Extreme",
        }
    }

    /// One-line explanation offered to the user when picking a severity.
    pub fn description(self) -> &'static str {
        match self {
            Severity::Mild => "Barely noticeable, doesn't affect daily activities",
            Severity::Moderate => "Noticeable and somewhat bothersome",
            Severity::Severe => "Very bothersome, affects daily activities",
            Severity::Extreme => "Unbearable, requires immediate attention",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CarepointError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> CarepointResult<Self> {
        let wanted = s.trim().to_lowercase();
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == wanted)
            .ok_or_else(|| CarepointError::InvalidInput {
                reason: format!(
                    "unknown severity '{}' (expected one of: mild, moderate, severe, extreme)",
                    s
                ),
            })
    }
}
