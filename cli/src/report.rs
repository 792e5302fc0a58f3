//! JSON report envelope and plain-text rendering for one assessment.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use carepoint_contracts::{Advisory, AssessmentRequest, AssessmentResult, DISCLAIMER};
use carepoint_core::advise;

/// Everything `carepoint assess --json` prints.
///
/// `assessment_id` and `generated_at` identify this run for log
/// correlation; the `result` itself is fully determined by `request`.
#[derive(Debug, Serialize)]
pub struct AssessmentReport {
    pub assessment_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub request: AssessmentRequest,
    pub result: AssessmentResult,
    pub advisory: Advisory,
    pub disclaimer: &'static str,
}

impl AssessmentReport {
    pub fn new(request: AssessmentRequest, result: AssessmentResult) -> Self {
        let advisory = advise(&result);
        Self {
            assessment_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            request,
            result,
            advisory,
            disclaimer: DISCLAIMER,
        }
    }

    /// Human-readable rendering, one line per item.
    pub fn render_text(&self) -> String {
        let mut out = Vec::new();

        let marker = if self.result.overall_urgent { "!!" } else { "!" };
        out.push(format!("[{}] {}", marker, self.advisory.title));
        out.push(format!("    {}", self.advisory.message));
        out.push(String::new());

        out.push("Your symptoms:".to_string());
        for symptom in &self.request.symptoms {
            out.push(format!("  - {}", symptom));
        }
        let severity = self
            .request
            .severity
            .map(|s| s.title().to_string())
            .unwrap_or_else(|| "not given".to_string());
        let duration = self
            .request
            .duration
            .map(|d| d.label().to_string())
            .unwrap_or_else(|| "not given".to_string());
        out.push(format!("Severity: {} | Duration: {}", severity, duration));
        out.push(String::new());

        out.push("Possible conditions:".to_string());
        if self.result.conditions.is_empty() {
            out.push("  (none: no symptoms were entered)".to_string());
        }
        for (i, condition) in self.result.conditions.iter().enumerate() {
            let urgent = if condition.is_urgent { "  [URGENT]" } else { "" };
            out.push(format!(
                "  {}. {} ({} confidence){}",
                i + 1,
                condition.name,
                condition.confidence,
                urgent
            ));
            out.push(format!("     {}", condition.description));
        }
        out.push(String::new());

        out.push("Recommendations:".to_string());
        for (i, recommendation) in self.advisory.recommendations.iter().enumerate() {
            out.push(format!("  {}. {}", i + 1, recommendation));
        }
        out.push(String::new());
        out.push(self.disclaimer.to_string());

        out.join("\n")
    }
}
