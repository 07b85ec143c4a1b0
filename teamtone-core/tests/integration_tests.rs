//! Integration tests for catalog loading and the suggestion pipeline.
//!
//! The fixtures are a small on-disk catalog: a directory of per-manufacturer
//! filament files (including one skipped `_draft.json`), a directory of
//! per-league team files and a file-style rank table.

use pretty_assertions::assert_eq;
use std::path::Path;
use teamtone_core::{
    exact_match, load_catalogs, load_rank_table, match_team, nearest_matches, suggest_for_color,
    validate_catalogs, Catalogs, Color, FilamentCatalog, FilamentRecord, ManufacturerRanks,
    MatchConfig, MatchError, MatchKind, PickReason, TeamCatalog,
};

/// Fixture directory for integration tests
const FIXTURE_DIR: &str = "tests/fixtures";

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURE_DIR).join(name)
}

fn catalogs() -> Catalogs {
    load_catalogs(
        &fixture("filaments"),
        &fixture("teams"),
        Some(&fixture("ranks.json")),
    )
    .expect("fixtures load")
}

fn c(hex: &str) -> Color {
    Color::parse(hex).unwrap()
}

// ==================== Loading ====================

#[test]
fn test_filament_directory_loads_in_key_order() {
    let catalogs = catalogs();
    let keys: Vec<_> = catalogs
        .filaments
        .iter()
        .map(|r| format!("{} / {}", r.manufacturer, r.color_name))
        .collect();
    assert_eq!(
        keys,
        vec![
            "Atomic Filament / Candy Red",
            "Generic / Gold",
            "Generic / Purple",
            "Polymaker / Purple",
            "Polymaker / Red",
        ]
    );
    assert_eq!(catalogs.filaments.skipped(), 1);
}

#[test]
fn test_team_directory_merges_leagues() {
    let catalogs = catalogs();
    assert_eq!(catalogs.teams.leagues(), vec!["MLB", "NBA"]);
    let sox = catalogs.teams.get("boston red sox", None).unwrap();
    assert_eq!(sox.league, "MLB");
    assert_eq!(sox.hex, vec![c("#BD3039"), c("#0C2340")]);
}

#[test]
fn test_rank_table_file_names_normalize_to_default() {
    let ranks = load_rank_table(&fixture("ranks.json")).unwrap();
    assert_eq!(ranks, ManufacturerRanks::default());
    assert_eq!(ranks.lookup_rank("atomic filament"), 10);
}

#[test]
fn test_short_rank_table_is_rejected() {
    let err = load_rank_table(&fixture("short_ranks.json")).unwrap_err();
    assert!(matches!(
        err,
        MatchError::InvalidRankTable {
            expected: 10,
            count: 2
        }
    ));
}

#[test]
fn test_missing_catalog_path() {
    let err = FilamentCatalog::load(&fixture("does_not_exist")).unwrap_err();
    assert!(matches!(err, MatchError::CatalogNotFound { .. }));
}

#[test]
fn test_validation_reports_fixture_gaps() {
    let catalogs = catalogs();
    let result = validate_catalogs(&catalogs.filaments, &catalogs.teams, &catalogs.ranks);
    assert!(result.passed);
    assert!(result.errors.is_empty());
    // One skipped entry plus the eight ranked manufacturers the fixtures lack.
    assert_eq!(result.warnings.len(), 9);
}

// ==================== Two-record scenario ====================

fn two_records() -> FilamentCatalog {
    FilamentCatalog::from_records(vec![
        FilamentRecord::new("Polymaker", "PLA", "Red", c("#FF0000")),
        FilamentRecord::new("Atomic Filament", "PETG", "Candy Red", c("#FE0101")),
    ])
}

#[test]
fn test_exact_target_matches_only_polymaker() {
    let catalog = two_records();
    let exact = exact_match(&catalog, c("#FF0000"));
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].manufacturer, "Polymaker");
}

#[test]
fn test_near_target_ranks_then_reweights() {
    let catalog = two_records();
    let ranks = ManufacturerRanks::default();
    let target = c("#FF0100");

    assert!(exact_match(&catalog, target).is_empty());

    let nearest = nearest_matches(&catalog, target, 10, None);
    assert_eq!(nearest.len(), 2);
    assert_eq!(nearest[0].filament.manufacturer, "Polymaker");
    assert!((nearest[0].similarity - 99.9273).abs() < 0.001);
    assert!((nearest[1].similarity - 99.4501).abs() < 0.001);

    let s = suggest_for_color(&catalog, &ranks, target, &MatchConfig::default());
    assert_eq!(s.kind, MatchKind::Similar);
    let scores: Vec<_> = s.picks.iter().map(|p| p.similarity + p.rank_bonus).collect();
    assert!((scores[0] - 105.5273).abs() < 0.001);
    assert!((scores[1] - 100.0101).abs() < 0.001);
}

// ==================== Pipeline on fixtures ====================

#[test]
fn test_exact_single_match_has_no_backfill() {
    let catalogs = catalogs();
    let s = suggest_for_color(
        &catalogs.filaments,
        &catalogs.ranks,
        c("#FF0000"),
        &MatchConfig::default(),
    );
    assert_eq!(s.kind, MatchKind::Exact);
    assert_eq!(s.exact_total, 1);
    assert_eq!(s.picks.len(), 1);
    assert_eq!(s.picks[0].filament.color_name, "Red");
    assert_eq!(s.picks[0].filament.temps(), Some((210, 60)));
}

#[test]
fn test_similar_target_on_fixtures() {
    let catalogs = catalogs();
    let s = suggest_for_color(
        &catalogs.filaments,
        &catalogs.ranks,
        c("#FF0100"),
        &MatchConfig::default(),
    );
    let names: Vec<_> = s
        .picks
        .iter()
        .map(|p| (p.filament.manufacturer.as_str(), p.reason))
        .collect();
    // Atomic Filament carries a link and Polymaker is ranked, so nothing is appended.
    assert_eq!(
        names,
        vec![
            ("Polymaker", PickReason::Displayed),
            ("Atomic Filament", PickReason::Displayed),
            ("Generic", PickReason::Displayed),
        ]
    );
}

#[test]
fn test_lakers_report() {
    let catalogs = catalogs();
    let lakers = catalogs.teams.get("Los Angeles Lakers", Some("NBA")).unwrap();
    let report = match_team(lakers, &catalogs.filaments, &catalogs.ranks, &MatchConfig::default());

    assert_eq!(report.league, "NBA");
    let purple = &report.colors[0];
    assert_eq!(purple.name, "Purple");
    assert_eq!(purple.suggestions.kind, MatchKind::Exact);
    assert_eq!(purple.suggestions.picks[0].filament.manufacturer, "Polymaker");

    // Only Generic stocks the gold, and no ranked manufacturer matches it exactly.
    let gold = &report.colors[1];
    assert_eq!(gold.suggestions.kind, MatchKind::Exact);
    assert_eq!(gold.suggestions.picks.len(), 1);
    assert!(gold.suggestions.picks[0].filament.has_link());
}

#[test]
fn test_low_similarity_still_prefers_ranked() {
    let catalogs = catalogs();
    let celtics = catalogs.teams.get("Boston Celtics", None).unwrap();
    let report = match_team(celtics, &catalogs.filaments, &catalogs.ranks, &MatchConfig::default());

    let green = &report.colors[0].suggestions;
    assert_eq!(green.kind, MatchKind::Similar);
    let displayed: Vec<_> = green
        .displayed()
        .map(|p| format!("{} {}", p.filament.manufacturer, p.filament.color_name))
        .collect();
    assert_eq!(displayed, vec!["Generic Gold", "Polymaker Purple", "Polymaker Red"]);
}

#[test]
fn test_report_serializes_to_json() {
    let catalogs = catalogs();
    let lakers = catalogs.teams.get("Los Angeles Lakers", None).unwrap();
    let report = match_team(lakers, &catalogs.filaments, &catalogs.ranks, &MatchConfig::default());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["team"], "Los Angeles Lakers");
    assert_eq!(json["colors"][0]["suggestions"]["kind"], "exact");
    assert_eq!(json["colors"][0]["suggestions"]["target"], "#552583");
    assert_eq!(json["colors"][1]["suggestions"]["picks"][0]["reason"], "displayed");
    assert_eq!(
        json["colors"][1]["suggestions"]["picks"][0]["filament"]["color"],
        "Gold"
    );
}

#[test]
fn test_empty_team_catalog_is_not_an_error() {
    let teams = TeamCatalog::default();
    assert!(teams.get("Anyone", None).is_none());
    assert!(teams.leagues().is_empty());
}
