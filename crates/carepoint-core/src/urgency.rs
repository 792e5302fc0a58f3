//! Overall urgency and the advisory banner derived from it.

use carepoint_contracts::{
    advisory::{Advisory, AdvisoryLevel},
    assessment::{AssessmentResult, ConditionMatch},
};

/// True when any candidate is urgent at Moderate or High confidence.
pub fn is_overall_urgent(conditions: &[ConditionMatch]) -> bool {
    conditions
        .iter()
        .any(|c| c.is_urgent && c.confidence.is_actionable())
}

/// Pick the banner and next steps for a finished assessment.
pub fn advise(result: &AssessmentResult) -> Advisory {
    if result.overall_urgent {
        Advisory {
            level: AdvisoryLevel::Emergency,
            title: "Seek Immediate Medical Attention".to_string(),
            message: "One or more of your symptoms may indicate a serious condition.".to_string(),
            recommendations: vec![
                "Call 911 or your local emergency number now".to_string(),
                "Do not drive yourself to the hospital".to_string(),
                "Stay with someone until help arrives".to_string(),
            ],
        }
    } else {
        Advisory {
            level: AdvisoryLevel::Consultation,
            title: "Consider Medical Consultation".to_string(),
            message: "Your symptoms may benefit from medical evaluation.".to_string(),
            recommendations: vec![
                "Monitor your symptoms closely".to_string(),
                "Get plenty of rest and stay hydrated".to_string(),
                "Contact your healthcare provider if symptoms persist".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use carepoint_contracts::assessment::Confidence;

    use super::*;

    fn m(name: &str, confidence: Confidence, is_urgent: bool) -> ConditionMatch {
        ConditionMatch {
            name: name.to_string(),
            confidence,
            description: String::new(),
            is_urgent,
        }
    }

    #[test]
    fn urgent_at_moderate_or_high_escalates() {
        assert!(is_overall_urgent(&[m("Angina", Confidence::Moderate, true)]));
        assert!(is_overall_urgent(&[
            m("Cold", Confidence::High, false),
            m("Pneumonia", Confidence::High, true),
        ]));
    }

    #[test]
    fn urgent_at_low_does_not_escalate() {
        assert!(!is_overall_urgent(&[m("Angina", Confidence::Low, true)]));
    }

    #[test]
    fn non_urgent_never_escalates() {
        assert!(!is_overall_urgent(&[m("Migraine", Confidence::High, false)]));
        assert!(!is_overall_urgent(&[]));
    }

    #[test]
    fn advisory_follows_overall_flag() {
        let calm = AssessmentResult::default();
        let advisory = advise(&calm);
        assert_eq!(advisory.level, AdvisoryLevel::Consultation);
        assert_eq!(advisory.title, "Consider Medical Consultation");
        assert_eq!(advisory.recommendations.len(), 3);

        let urgent = AssessmentResult {
            conditions: vec![m("Angina", Confidence::High, true)],
            overall_urgent: true,
        };
        assert_eq!(advise(&urgent).level, AdvisoryLevel::Emergency);
    }
}
