//! Consistency checks across the filament, team and rank catalogs.

use crate::catalog::{FilamentCatalog, TeamCatalog};
use crate::model::ManufacturerRanks;
use serde::Serialize;
use std::collections::HashMap;

/// Validation result with warnings.
#[derive(Debug, Default, Serialize)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// Validate all catalogs together.
pub fn validate_catalogs(
    filaments: &FilamentCatalog,
    teams: &TeamCatalog,
    ranks: &ManufacturerRanks,
) -> ValidationResult {
    let mut result = ValidationResult::ok();
    result.merge(validate_filaments(filaments));
    result.merge(validate_teams(teams));

    if !filaments.is_empty() {
        let manufacturers = filaments.manufacturers();
        for (rank, name) in (1..).zip(ranks.names()) {
            if !manufacturers.iter().any(|m| ranks.lookup_rank(m) == rank) {
                result.add_warning(format!(
                    "Ranked manufacturer {} has no filaments in the catalog",
                    name
                ));
            }
        }
    }

    result
}

/// Validate the filament catalog on its own.
pub fn validate_filaments(filaments: &FilamentCatalog) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if filaments.is_empty() {
        result.add_warning("Filament catalog is empty");
        return result;
    }

    if filaments.skipped() > 0 {
        result.add_warning(format!(
            "{} filament(s) without a hex code were skipped",
            filaments.skipped()
        ));
    }

    // Same product listed twice with different colors
    let mut seen = HashMap::new();
    for record in filaments {
        let key = (
            record.manufacturer.to_lowercase(),
            record.material.to_lowercase(),
            record.color_name.to_lowercase(),
        );
        match seen.get(&key) {
            Some(hex) if *hex != record.hex => {
                result.add_warning(format!(
                    "{} / {} / {}: listed with both {} and {}",
                    record.manufacturer, record.material, record.color_name, hex, record.hex
                ));
            }
            Some(_) => {}
            None => {
                seen.insert(key, record.hex);
            }
        }
    }

    result
}

/// Validate the team catalog on its own.
pub fn validate_teams(teams: &TeamCatalog) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for team in teams.teams().iter().filter(|t| !t.is_well_formed()) {
        if team.colors.len() != team.hex.len() {
            result.add_error(format!(
                "{} / {}: {} color name(s) but {} hex code(s)",
                team.league,
                team.team,
                team.colors.len(),
                team.hex.len()
            ));
        } else {
            result.add_warning(format!("{} / {}: No colors defined", team.league, team.team));
        }
    }

    result
}
