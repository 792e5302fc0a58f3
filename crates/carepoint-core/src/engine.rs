//! The assessment pipeline.
//!
//!   Normalize → Score → Classify → Filter & Rank → Fallback → Urgency
//!
//! Every stage is a pure function of the request and the catalog. Nothing
//! is cached between calls, so the same request always produces the same
//! result and any number of threads may assess against one catalog.

use std::sync::Arc;

use tracing::{debug, info};

use carepoint_contracts::{
    assessment::{AssessmentRequest, AssessmentResult, ConditionMatch},
    error::CarepointResult,
    severity::Severity,
};

use crate::{
    confidence::classify,
    fallback::fallback_candidate,
    normalize::{normalize_symptoms, SymptomToken},
    rank::filter_and_rank,
    scoring::{score_condition, ScoredCandidate},
    traits::ConditionCatalog,
    urgency::is_overall_urgent,
    validate::validate_definitions,
};

/// Runs assessments against one validated, shared catalog.
///
/// Cloning is cheap; clones share the catalog.
#[derive(Clone)]
pub struct Assessor {
    catalog: Arc<dyn ConditionCatalog>,
}

impl std::fmt::Debug for Assessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assessor")
            .field("conditions", &self.catalog.conditions().len())
            .finish()
    }
}

impl Assessor {
    /// Validate `catalog` and build an assessor over it.
    ///
    /// Returns `CarepointError::CatalogInvalid` for the first definition that
    /// breaks a catalog invariant. This is the only fallible step: once an
    /// `Assessor` exists, every assessment succeeds.
    pub fn new(catalog: Arc<dyn ConditionCatalog>) -> CarepointResult<Self> {
        validate_definitions(catalog.conditions())?;
        debug!(conditions = catalog.conditions().len(), "assessor ready");
        Ok(Self { catalog })
    }

    /// The catalog this assessor scores against.
    pub fn catalog(&self) -> &dyn ConditionCatalog {
        self.catalog.as_ref()
    }

    /// Run the full pipeline for one request.
    pub fn assess(&self, request: &AssessmentRequest) -> AssessmentResult {
        assess(self.catalog.as_ref(), request)
    }

    /// Score and classify every catalog condition, without filtering.
    ///
    /// Candidates come back in declaration order. Useful for explaining why
    /// a condition did or did not surface.
    pub fn score_all(&self, request: &AssessmentRequest) -> Vec<ScoredCandidate<'_>> {
        let tokens = normalize_symptoms(&request.symptoms);
        score_all(self.catalog.as_ref(), &tokens, request.severity)
    }
}

/// Score and classify every definition in `catalog`, in declaration order.
pub fn score_all<'a>(
    catalog: &'a dyn ConditionCatalog,
    tokens: &[SymptomToken],
    severity: Option<Severity>,
) -> Vec<ScoredCandidate<'a>> {
    catalog
        .conditions()
        .iter()
        .map(|definition| {
            let scored = score_condition(definition, tokens, severity);
            ScoredCandidate {
                definition,
                score: scored.score,
                matches: scored.matches,
                confidence: classify(definition, scored.score, scored.matches),
            }
        })
        .collect()
}

/// Run the full pipeline for one request against `catalog`.
///
/// The catalog is assumed to have passed validation; [`Assessor::new`]
/// guarantees that. `request.duration` is accepted and logged but does not
/// influence the result.
pub fn assess(catalog: &dyn ConditionCatalog, request: &AssessmentRequest) -> AssessmentResult {
    let tokens = normalize_symptoms(&request.symptoms);

    if tokens.is_empty() {
        debug!("no symptoms supplied; returning empty assessment");
        return AssessmentResult::default();
    }

    let ranked = filter_and_rank(score_all(catalog, &tokens, request.severity));

    let conditions: Vec<ConditionMatch> = if ranked.is_empty() {
        // Non-empty input always yields exactly one fallback.
        fallback_candidate(&tokens).into_iter().collect()
    } else {
        ranked
            .into_iter()
            .map(|candidate| ConditionMatch {
                name: candidate.definition.name.clone(),
                confidence: candidate.confidence,
                description: candidate.definition.description.clone(),
                is_urgent: candidate.definition.is_urgent,
            })
            .collect()
    };

    let overall_urgent = is_overall_urgent(&conditions);

    info!(
        symptoms = tokens.len(),
        severity = ?request.severity,
        duration = ?request.duration,
        candidates = conditions.len(),
        top = conditions.first().map(|c| c.name.as_str()).unwrap_or("-"),
        overall_urgent,
        "assessment complete"
    );

    AssessmentResult {
        conditions,
        overall_urgent,
    }
}
