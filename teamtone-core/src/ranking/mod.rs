//! Ranking and matching engine.

mod matching;
mod scoring;
mod suggest;

pub use matching::{
    exact_match, exact_match_hex, nearest_match, nearest_matches, nearest_matches_by, MatchResult,
};
pub use scoring::{best_weighted_match, manufacturer_bonus, match_score, weighted_score};
pub use suggest::{
    link_backfill, match_team, rank_backfill, sort_by_weighted_score, suggest_for_color,
    weighted_backfill, ColorReport, ColorSuggestions, MatchKind, Pick, PickReason, TeamReport,
};
