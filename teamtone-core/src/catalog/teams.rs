//! Team color catalog.

use crate::color::Color;
use crate::error::{MatchError, Result};
use crate::model::{same_name, TeamColorRecord};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use super::loader::{parse_json, read_documents};

#[derive(Debug, Deserialize)]
struct RawTeam {
    #[serde(default)]
    colors: Vec<String>,
    #[serde(default)]
    hex: Vec<String>,
}

/// `{LEAGUE: {team: {colors, hex}}}`
type RawTeams = BTreeMap<String, BTreeMap<String, RawTeam>>;

/// In-memory team catalog, ordered by league then team name.
#[derive(Debug, Clone, Default)]
pub struct TeamCatalog {
    teams: Vec<TeamColorRecord>,
}

impl TeamCatalog {
    /// Build a catalog from records, keeping their order.
    pub fn from_records(teams: Vec<TeamColorRecord>) -> Self {
        Self { teams }
    }

    /// Load from a JSON file or a directory of per-league JSON files.
    pub fn load(path: &Path) -> Result<Self> {
        let mut merged = RawTeams::new();
        for (file, document) in read_documents::<RawTeams>(path)? {
            debug!("Merging {} league(s) from {}", document.len(), file.display());
            for (league, teams) in document {
                merged.entry(league.to_uppercase()).or_default().extend(teams);
            }
        }
        let catalog = Self::from_raw(merged)?;
        info!("Loaded {} team(s) from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parse a single JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: RawTeams = parse_json(content, Path::new("<string>"))?;
        let raw = raw
            .into_iter()
            .fold(RawTeams::new(), |mut acc, (league, teams)| {
                acc.entry(league.to_uppercase()).or_default().extend(teams);
                acc
            });
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawTeams) -> Result<Self> {
        let mut teams = Vec::new();
        for (league, league_teams) in raw {
            for (team, entry) in league_teams {
                let hex = entry
                    .hex
                    .iter()
                    .map(|h| Color::parse(h))
                    .collect::<Result<Vec<_>>>()
                    .map_err(|e| MatchError::InvalidEntry {
                        entry: format!("{} / {}", league, team),
                        message: e.to_string(),
                    })?;
                teams.push(TeamColorRecord::new(team, league.clone(), entry.colors, hex)?);
            }
        }
        Ok(Self { teams })
    }

    pub fn teams(&self) -> &[TeamColorRecord] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Find a team by exact name (case-insensitive), optionally within one league.
    pub fn get(&self, team: &str, league: Option<&str>) -> Option<&TeamColorRecord> {
        self.teams.iter().find(|t| {
            same_name(&t.team, team) && league.map_or(true, |l| same_name(&t.league, l))
        })
    }

    /// Teams whose name contains `term` (case-insensitive).
    pub fn search(&self, term: &str) -> Vec<&TeamColorRecord> {
        let term = term.to_lowercase();
        self.teams
            .iter()
            .filter(|t| t.team.to_lowercase().contains(&term))
            .collect()
    }

    /// All teams of a league, sorted by team name.
    pub fn by_league(&self, league: &str) -> Vec<&TeamColorRecord> {
        let mut teams: Vec<_> = self
            .teams
            .iter()
            .filter(|t| same_name(&t.league, league))
            .collect();
        teams.sort_by(|a, b| a.team.cmp(&b.team));
        teams
    }

    /// Distinct league names.
    pub fn leagues(&self) -> Vec<&str> {
        let mut leagues: Vec<&str> = Vec::new();
        for team in &self.teams {
            if !leagues.contains(&team.league.as_str()) {
                leagues.push(&team.league);
            }
        }
        leagues
    }
}
