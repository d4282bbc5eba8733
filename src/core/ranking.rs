// src/core/ranking.rs
use crate::core::types::{RankedTranslation, Translation};
use crate::fuzzy::Scorer;

/// Orders candidates by ascending distance of their text to `query`.
/// The sort is stable: candidates with equal scores keep their input order.
/// Complexity: one `distance` call per candidate plus O(n log n) comparisons.
pub fn rank_scored(scorer: &Scorer, query: &str, candidates: &[Translation]) -> Vec<RankedTranslation> {
    let mut ranked: Vec<RankedTranslation> = candidates
        .iter()
        .map(|candidate| RankedTranslation {
            distance: scorer.distance(query, &candidate.text),
            translation: candidate.clone(),
        })
        .collect();
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}

/// [`rank_scored`] with the default scorer, dropping the scores.
pub fn rank(query: &str, candidates: &[Translation]) -> Vec<Translation> {
    rank_scored(&Scorer::default(), query, candidates)
        .into_iter()
        .map(|ranked| ranked.translation)
        .collect()
}

/// The `count` best candidates for `query`.
pub fn closest(
    scorer: &Scorer,
    query: &str,
    candidates: &[Translation],
    count: usize,
) -> Vec<RankedTranslation> {
    let mut ranked = rank_scored(scorer, query, candidates);
    ranked.truncate(count);
    ranked
}
