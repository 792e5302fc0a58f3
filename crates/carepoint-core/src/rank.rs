//! Eligibility filtering and ranking.

use tracing::debug;

use crate::scoring::ScoredCandidate;

/// Upper bound on the number of candidates returned to the caller.
pub const MAX_CANDIDATES: usize = 3;

/// A candidate survives only if it matched something, scored above zero,
/// and reached its definition's `min_match`.
pub fn is_eligible(candidate: &ScoredCandidate<'_>) -> bool {
    candidate.matches >= 1
        && candidate.score > 0.0
        && candidate.matches >= candidate.definition.min_match
}

/// Drop ineligible candidates, sort by score (highest first) and keep the
/// top [`MAX_CANDIDATES`].
///
/// The sort is stable: equal scores keep the order the candidates arrived
/// in, which is catalog declaration order.
pub fn filter_and_rank(candidates: Vec<ScoredCandidate<'_>>) -> Vec<ScoredCandidate<'_>> {
    let mut ranked: Vec<_> = candidates
        .into_iter()
        .filter(|candidate| {
            let keep = is_eligible(candidate);
            if !keep && candidate.matches > 0 {
                debug!(
                    condition = %candidate.definition.name,
                    score = candidate.score,
                    matches = candidate.matches,
                    min_match = candidate.definition.min_match,
                    "condition not eligible"
                );
            }
            keep
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(MAX_CANDIDATES);
    ranked
}
