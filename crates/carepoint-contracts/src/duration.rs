//! Symptom duration buckets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CarepointError, CarepointResult};

/// How long the user has had their symptoms.
///
/// The engine accepts a bucket on every request and condition definitions
/// may declare a `duration_hint`, but neither takes part in scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DurationBucket {
    #[serde(rename = "A few hours")]
    FewHours,
    #[serde(rename = "1 day")]
    OneDay,
    #[serde(rename = "2-7 days")]
    TwoToSevenDays,
    #[serde(rename = "1-4 weeks")]
    OneToFourWeeks,
    #[serde(rename = "More than a month")]
    OverAMonth,
}

impl DurationBucket {
    /// Every bucket, shortest first.
    pub const ALL: [DurationBucket; 5] = [
        DurationBucket::FewHours,
        DurationBucket::OneDay,
        DurationBucket::TwoToSevenDays,
        DurationBucket::OneToFourWeeks,
        DurationBucket::OverAMonth,
    ];

    /// The label shown to users and used on the wire.
    pub fn label(self) -> &'static str {
        match self {
            DurationBucket::FewHours => "A few hours",
            DurationBucket::OneDay => "1 day",
            DurationBucket::TwoToSevenDays => "2-7 days",
            DurationBucket::OneToFourWeeks => "1-4 weeks",
            DurationBucket::OverAMonth => "More than a month",
        }
    }
}

impl fmt::Display for DurationBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DurationBucket {
    type Err = CarepointError;

    /// Matches a bucket label case-insensitively.
    fn from_str(s: &str) -> CarepointResult<Self> {
        let wanted = s.trim();
        DurationBucket::ALL
            .into_iter()
            .find(|bucket| bucket.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CarepointError::InvalidInput {
                reason: format!(
                    "unknown duration '{}' (expected one of: {})",
                    s,
                    DurationBucket::ALL.map(DurationBucket::label).join(", ")
                ),
            })
    }
}
