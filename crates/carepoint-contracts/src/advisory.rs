//! Advisory banner types.
//!
//! The presentation layer shows exactly one advisory per assessment, chosen
//! from the result's `overall_urgent` flag.

use serde::{Deserialize, Serialize};

/// Shown with every assessment, whatever its outcome.
pub const DISCLAIMER: &str = "This tool is for information only and does not replace \
professional medical advice. For emergencies, call 911.";

/// Which banner the caller should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryLevel {
    /// An urgent condition surfaced with sufficient confidence.
    Emergency,
    /// Nothing urgent; suggest a routine consultation.
    Consultation,
}

/// Banner text and follow-up recommendations for one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub level: AdvisoryLevel,
    pub title: String,
    pub message: String,
    /// Ordered next steps, most important first.
    pub recommendations: Vec<String>,
}
