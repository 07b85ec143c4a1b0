//! Configuration constants and settings for matching.

use crate::color::Method;

/// Floating-point comparison epsilon for similarity scores.
pub const EPS: f64 = 0.0001;

/// Maximum number of exact matches displayed per color.
pub const MAX_SUGGESTIONS: usize = 3;

/// Number of similar matches displayed when there is no exact match.
pub const MIN_SUGGESTIONS: usize = 3;

/// Candidate pool size fetched before re-ranking by weighted score.
pub const NEAREST_POOL_LIMIT: usize = 50;

/// Bonus points per rank step: `(11 - rank) * RANK_MULTIPLIER`.
///
/// #1 gets +5.6 and #10 gets +0.56, a 5% spread, so a 95% similar #1 manufacturer
/// just beats a 100% similar #10 manufacturer.
pub const RANK_MULTIPLIER: f64 = 0.56;

/// Rank reported for manufacturers missing from the rank table.
pub const UNRANKED: u32 = 999;

/// Number of names in a manufacturer rank table.
pub const RANKED_MANUFACTURER_COUNT: usize = 10;

/// Delta E normalizer for similarity percentages (CIE76 and CIE94).
pub const MAX_DELTA_E: f64 = 100.0;

/// Largest RGB Euclidean distance, sqrt(3 * 255^2).
pub const MAX_RGB_DISTANCE: f64 = 441.67;

/// Approximate upper bound of the weighted RGB distance.
pub const MAX_WEIGHTED_RGB_DISTANCE: f64 = 765.0;

/// Settings for the suggestion pipeline.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Exact matches shown before backfilling.
    pub max_suggestions: usize,
    /// Similar matches shown when no exact match exists.
    pub min_suggestions: usize,
    /// Nearest-match pool size re-ranked by weighted score.
    pub pool_limit: usize,
    /// Similarity metric used for nearest matching.
    pub method: Method,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_suggestions: MAX_SUGGESTIONS,
            min_suggestions: MIN_SUGGESTIONS,
            pool_limit: NEAREST_POOL_LIMIT,
            method: Method::default(),
        }
    }
}

impl MatchConfig {
    /// Create a configuration using the given similarity method.
    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            ..Default::default()
        }
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }
}
