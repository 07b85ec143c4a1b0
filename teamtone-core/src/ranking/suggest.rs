//! Top-pick composition: which filaments to suggest for one target color.
//!
//! The pipeline runs in stages, each a pure function over match lists:
//!
//! 1. Exact matches: show the first `max_suggestions` in catalog order.
//!    Otherwise fetch `pool_limit` nearest matches, re-sort them by weighted
//!    score and show the first `min_suggestions`.
//! 2. [`link_backfill`]: if nothing shown has a purchase link, append the first
//!    remaining candidate that does.
//! 3. If nothing shown comes from a ranked manufacturer, append one that does:
//!    [`rank_backfill`] (lowest rank) for exact matches, [`weighted_backfill`]
//!    (best weighted score) for similar matches.

use crate::catalog::FilamentCatalog;
use crate::color::{similarity_percentage, Color};
use crate::config::MatchConfig;
use crate::model::{FilamentRecord, ManufacturerRanks, TeamColorRecord};
use serde::Serialize;
use tracing::debug;

use super::matching::{exact_match, nearest_matches_by, MatchResult};
use super::scoring::{best_weighted_match, is_excluded, manufacturer_bonus, match_score};

/// Whether suggestions are exact hex matches or nearest colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Similar,
    /// The catalog had no candidates at all.
    None,
}

/// Why a filament was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PickReason {
    /// Among the top matches.
    Displayed,
    /// First remaining match with a purchase link.
    PurchaseLink,
    /// Best remaining match from a ranked manufacturer.
    TopManufacturer,
}

/// One suggested filament.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pick<'a> {
    pub filament: &'a FilamentRecord,
    pub similarity: f64,
    pub rank_bonus: f64,
    pub reason: PickReason,
}

/// Suggestions for one target color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorSuggestions<'a> {
    pub target: Color,
    pub kind: MatchKind,
    /// Number of exact matches in the catalog.
    pub exact_total: usize,
    pub picks: Vec<Pick<'a>>,
}

impl<'a> ColorSuggestions<'a> {
    /// Picks from the top-match window.
    pub fn displayed(&self) -> impl Iterator<Item = &Pick<'a>> {
        self.picks
            .iter()
            .filter(|p| p.reason == PickReason::Displayed)
    }

    /// Pick appended for the given reason, if any.
    pub fn backfill(&self, reason: PickReason) -> Option<&Pick<'a>> {
        self.picks.iter().find(|p| p.reason == reason)
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}

/// Suggestions for every color of a team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamReport<'a> {
    pub team: &'a str,
    pub league: &'a str,
    pub colors: Vec<ColorReport<'a>>,
}

/// Suggestions for one named team color.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorReport<'a> {
    pub name: &'a str,
    pub suggestions: ColorSuggestions<'a>,
}

/// Stable re-sort by weighted score, best first.
pub fn sort_by_weighted_score(ranks: &ManufacturerRanks, matches: &mut [MatchResult<'_>]) {
    matches.sort_by(|a, b| match_score(ranks, b).total_cmp(&match_score(ranks, a)));
}

/// First candidate with a purchase link, unless something displayed already has one.
///
/// Candidates equal to a displayed record are skipped.
pub fn link_backfill<'a>(
    displayed: &[&FilamentRecord],
    candidates: &[MatchResult<'a>],
) -> Option<MatchResult<'a>> {
    if displayed.iter().any(|f| f.has_link()) {
        return None;
    }
    candidates
        .iter()
        .find(|m| m.filament.has_link() && !is_excluded(displayed, m.filament))
        .copied()
}

/// Ranked candidate with the lowest rank, unless a ranked manufacturer is already displayed.
///
/// Similarity is ignored; the first of several equal ranks wins.
pub fn rank_backfill<'a>(
    ranks: &ManufacturerRanks,
    displayed: &[&FilamentRecord],
    candidates: &[MatchResult<'a>],
) -> Option<MatchResult<'a>> {
    if has_ranked(ranks, displayed) {
        return None;
    }
    candidates
        .iter()
        .filter(|m| {
            !is_excluded(displayed, m.filament) && ranks.is_ranked(&m.filament.manufacturer)
        })
        .min_by_key(|m| ranks.lookup_rank(&m.filament.manufacturer))
        .copied()
}

/// Best ranked candidate by weighted score, unless a ranked manufacturer is already displayed.
pub fn weighted_backfill<'a>(
    ranks: &ManufacturerRanks,
    displayed: &[&FilamentRecord],
    candidates: &[MatchResult<'a>],
) -> Option<MatchResult<'a>> {
    if has_ranked(ranks, displayed) {
        return None;
    }
    best_weighted_match(ranks, candidates, displayed)
}

fn has_ranked(ranks: &ManufacturerRanks, displayed: &[&FilamentRecord]) -> bool {
    displayed.iter().any(|f| ranks.is_ranked(&f.manufacturer))
}

/// Run the suggestion pipeline for one color.
pub fn suggest_for_color<'a>(
    catalog: &'a FilamentCatalog,
    ranks: &ManufacturerRanks,
    target: Color,
    config: &MatchConfig,
) -> ColorSuggestions<'a> {
    let exact: Vec<MatchResult<'a>> = exact_match(catalog, target)
        .into_iter()
        .map(|r| MatchResult::new(r, similarity_percentage(target, r.hex, config.method)))
        .collect();

    if !exact.is_empty() {
        let window = config.max_suggestions.min(exact.len());
        let (shown, rest) = exact.split_at(window);
        let mut builder = PickBuilder::new(ranks, shown);
        builder.push_backfill(link_backfill(&builder.displayed, rest), PickReason::PurchaseLink);
        builder.push_backfill(
            rank_backfill(ranks, &builder.displayed, &exact),
            PickReason::TopManufacturer,
        );
        debug!("{}: {} exact match(es)", target, exact.len());
        return builder.finish(target, MatchKind::Exact, exact.len());
    }

    let mut pool = nearest_matches_by(catalog, target, config.pool_limit, None, config.method);
    if pool.is_empty() {
        return ColorSuggestions {
            target,
            kind: MatchKind::None,
            exact_total: 0,
            picks: Vec::new(),
        };
    }
    sort_by_weighted_score(ranks, &mut pool);

    let window = config.min_suggestions.min(pool.len());
    let mut builder = PickBuilder::new(ranks, &pool[..window]);
    builder.push_backfill(link_backfill(&builder.displayed, &pool), PickReason::PurchaseLink);
    builder.push_backfill(
        weighted_backfill(ranks, &builder.displayed, &pool),
        PickReason::TopManufacturer,
    );
    debug!("{}: no exact match, {} candidate(s) scored", target, pool.len());
    builder.finish(target, MatchKind::Similar, 0)
}

/// Run the pipeline for each color of a team, in palette order.
pub fn match_team<'a>(
    team: &'a TeamColorRecord,
    catalog: &'a FilamentCatalog,
    ranks: &ManufacturerRanks,
    config: &MatchConfig,
) -> TeamReport<'a> {
    let colors = team
        .palette()
        .map(|(name, color)| ColorReport {
            name,
            suggestions: suggest_for_color(catalog, ranks, color, config),
        })
        .collect();

    TeamReport {
        team: &team.team,
        league: &team.league,
        colors,
    }
}

/// Accumulates picks and the displayed set used by later stages.
struct PickBuilder<'r, 'a> {
    ranks: &'r ManufacturerRanks,
    displayed: Vec<&'a FilamentRecord>,
    picks: Vec<Pick<'a>>,
}

impl<'r, 'a> PickBuilder<'r, 'a> {
    fn new(ranks: &'r ManufacturerRanks, shown: &[MatchResult<'a>]) -> Self {
        let mut builder = Self {
            ranks,
            displayed: Vec::with_capacity(shown.len() + 2),
            picks: Vec::with_capacity(shown.len() + 2),
        };
        for m in shown {
            builder.push(*m, PickReason::Displayed);
        }
        builder
    }

    fn push(&mut self, m: MatchResult<'a>, reason: PickReason) {
        self.displayed.push(m.filament);
        self.picks.push(Pick {
            filament: m.filament,
            similarity: m.similarity,
            rank_bonus: manufacturer_bonus(self.ranks, &m.filament.manufacturer),
            reason,
        });
    }

    fn push_backfill(&mut self, m: Option<MatchResult<'a>>, reason: PickReason) {
        if let Some(m) = m {
            self.push(m, reason);
        }
    }

    fn finish(self, target: Color, kind: MatchKind, exact_total: usize) -> ColorSuggestions<'a> {
        ColorSuggestions {
            target,
            kind,
            exact_total,
            picks: self.picks,
        }
    }
}
