//! teamtone-core - Core library for matching sports team colors to 3D printing filaments.
//!
//! This library provides color conversion and similarity metrics, filament and team
//! catalogs, and the ranking pipeline that picks which filaments to suggest for each
//! team color.
//!
//! # Example
//!
//! ```no_run
//! use teamtone_core::{load_catalogs, match_team, MatchConfig};
//! use std::path::Path;
//!
//! let catalogs =
//!     load_catalogs(Path::new("data/filaments"), Path::new("data/teams"), None).unwrap();
//! let lakers = catalogs.teams.get("Los Angeles Lakers", Some("NBA")).unwrap();
//! let report = match_team(lakers, &catalogs.filaments, &catalogs.ranks, &MatchConfig::default());
//! println!("{} color(s)", report.colors.len());
//! ```

pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod model;
pub mod ranking;
pub mod validation;

// Re-exports for convenience
pub use catalog::{load_rank_table, FilamentCatalog, TeamCatalog};
pub use color::{similarity_percentage, similarity_percentage_hex, Color, Lab, Method};
pub use config::MatchConfig;
pub use error::{MatchError, Result};
pub use model::{FilamentRecord, ManufacturerRanks, TeamColorRecord};
pub use ranking::{
    best_weighted_match, exact_match, match_team, nearest_match, nearest_matches, suggest_for_color,
    weighted_score, ColorSuggestions, MatchKind, MatchResult, Pick, PickReason, TeamReport,
};
pub use validation::{validate_catalogs, ValidationResult};

/// Everything the suggestion pipeline reads, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    pub filaments: FilamentCatalog,
    pub teams: TeamCatalog,
    pub ranks: ManufacturerRanks,
}

/// Load the filament, team and rank catalogs.
///
/// This is the main high-level entry point:
/// 1. Load filaments and teams (file or directory)
/// 2. Load the rank table, or use the default one
/// 3. Validate the catalogs and log any warnings
///
/// Validation errors are logged but do not fail the load.
pub fn load_catalogs(
    filaments: &std::path::Path,
    teams: &std::path::Path,
    ranks: Option<&std::path::Path>,
) -> Result<Catalogs> {
    let filaments = FilamentCatalog::load(filaments)?;
    let teams = TeamCatalog::load(teams)?;
    let ranks = match ranks {
        Some(path) => load_rank_table(path)?,
        None => ManufacturerRanks::default(),
    };

    let validation = validate_catalogs(&filaments, &teams, &ranks);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    for error in &validation.errors {
        tracing::error!("{}", error);
    }

    Ok(Catalogs {
        filaments,
        teams,
        ranks,
    })
}
