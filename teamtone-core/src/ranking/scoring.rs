//! Weighted scoring: similarity plus a manufacturer rank bonus.

use crate::model::{FilamentRecord, ManufacturerRanks};

use super::matching::MatchResult;

/// Bonus points for a manufacturer. See [`ManufacturerRanks::bonus`].
pub fn manufacturer_bonus(ranks: &ManufacturerRanks, manufacturer: &str) -> f64 {
    ranks.bonus(manufacturer)
}

/// Similarity plus manufacturer bonus. Not clamped, so it can exceed 100.
pub fn weighted_score(ranks: &ManufacturerRanks, similarity: f64, manufacturer: &str) -> f64 {
    similarity + manufacturer_bonus(ranks, manufacturer)
}

/// Weighted score of a match.
pub fn match_score(ranks: &ManufacturerRanks, m: &MatchResult<'_>) -> f64 {
    weighted_score(ranks, m.similarity, &m.filament.manufacturer)
}

/// Best ranked-manufacturer match by weighted score.
///
/// Records equal to one in `exclude` and records from unranked manufacturers are
/// skipped. The first of several equal scores wins. Returns `None` when nothing is left.
pub fn best_weighted_match<'a>(
    ranks: &ManufacturerRanks,
    matches: &[MatchResult<'a>],
    exclude: &[&FilamentRecord],
) -> Option<MatchResult<'a>> {
    let mut best: Option<(MatchResult<'a>, f64)> = None;

    for m in matches {
        if is_excluded(exclude, m.filament) || !ranks.is_ranked(&m.filament.manufacturer) {
            continue;
        }
        let score = match_score(ranks, m);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((*m, score));
        }
    }

    best.map(|(m, _)| m)
}

/// Check if `filament` is value-equal to any record in `exclude`.
pub(crate) fn is_excluded(exclude: &[&FilamentRecord], filament: &FilamentRecord) -> bool {
    exclude.iter().any(|e| *e == filament)
}
