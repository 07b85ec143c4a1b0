//! Exact and nearest filament matching against a catalog.

use crate::catalog::FilamentCatalog;
use crate::color::{similarity_percentage, Color, Method};
use crate::error::Result;
use crate::model::{same_name, FilamentRecord};
use serde::Serialize;
use tracing::debug;

/// A catalog record paired with its similarity to the target, in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub filament: &'a FilamentRecord,
    pub similarity: f64,
}

impl<'a> MatchResult<'a> {
    pub fn new(filament: &'a FilamentRecord, similarity: f64) -> Self {
        Self {
            filament,
            similarity,
        }
    }
}

/// All records whose hex equals `target`, in catalog order.
pub fn exact_match(catalog: &FilamentCatalog, target: Color) -> Vec<&FilamentRecord> {
    catalog.iter().filter(|r| r.hex == target).collect()
}

/// [`exact_match`] for a raw hex string (`#` optional, any case).
pub fn exact_match_hex<'a>(
    catalog: &'a FilamentCatalog,
    hex: &str,
) -> Result<Vec<&'a FilamentRecord>> {
    Ok(exact_match(catalog, Color::parse(hex)?))
}

/// The `limit` most similar records under the default metric (CIE76).
///
/// See [`nearest_matches_by`].
pub fn nearest_matches<'a>(
    catalog: &'a FilamentCatalog,
    target: Color,
    limit: usize,
    manufacturer: Option<&str>,
) -> Vec<MatchResult<'a>> {
    nearest_matches_by(catalog, target, limit, manufacturer, Method::default())
}

/// The `limit` most similar records, most similar first.
///
/// `manufacturer` keeps only records whose manufacturer equals it (case-insensitive).
/// Ordering uses raw similarity only; equal similarities keep catalog order.
pub fn nearest_matches_by<'a>(
    catalog: &'a FilamentCatalog,
    target: Color,
    limit: usize,
    manufacturer: Option<&str>,
    method: Method,
) -> Vec<MatchResult<'a>> {
    let mut matches: Vec<MatchResult<'a>> = catalog
        .iter()
        .filter(|r| accepts(r, manufacturer))
        .map(|r| MatchResult::new(r, similarity_percentage(target, r.hex, method)))
        .collect();

    // Stable: ties stay in catalog order.
    matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    matches.truncate(limit);

    debug!(
        "{} nearest match(es) for {} using {}",
        matches.len(),
        target,
        method
    );
    matches
}

/// The single most similar record; the first one wins ties.
pub fn nearest_match<'a>(
    catalog: &'a FilamentCatalog,
    target: Color,
    manufacturer: Option<&str>,
) -> Option<MatchResult<'a>> {
    let mut best: Option<MatchResult<'a>> = None;
    for record in catalog.iter().filter(|r| accepts(r, manufacturer)) {
        let similarity = similarity_percentage(target, record.hex, Method::default());
        if best.map_or(true, |b| similarity > b.similarity) {
            best = Some(MatchResult::new(record, similarity));
        }
    }
    best
}

/// Manufacturer pre-filter: exact name equality, ignoring case.
fn accepts(record: &FilamentRecord, manufacturer: Option<&str>) -> bool {
    manufacturer.map_or(true, |m| same_name(&record.manufacturer, m))
}
