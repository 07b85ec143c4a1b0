//! Manufacturer preference ranking.

use crate::config::{RANKED_MANUFACTURER_COUNT, RANK_MULTIPLIER, UNRANKED};
use crate::error::{MatchError, Result};
use serde::Serialize;

/// Default preference order, best first.
pub const DEFAULT_TOP_MANUFACTURERS: [&str; RANKED_MANUFACTURER_COUNT] = [
    "Polymaker",
    "Hatchbox",
    "Esun",
    "Prusament",
    "Sunlu",
    "Overture",
    "Matterhackers",
    "Colorfabb",
    "Eryone",
    "Atomic Filament",
];

/// Ordered table of the ten preferred manufacturers.
///
/// Rank is the 1-based position in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManufacturerRanks {
    names: Vec<String>,
    #[serde(skip)]
    lowered: Vec<String>,
}

impl Default for ManufacturerRanks {
    fn default() -> Self {
        Self::from_valid(
            DEFAULT_TOP_MANUFACTURERS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

impl ManufacturerRanks {
    /// Create a table from exactly ten names, best first.
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.len() != RANKED_MANUFACTURER_COUNT {
            return Err(MatchError::InvalidRankTable {
                expected: RANKED_MANUFACTURER_COUNT,
                count: names.len(),
            });
        }
        Ok(Self::from_valid(names))
    }

    /// Create a table from file-style entries such as `atomic_filament.yaml`.
    pub fn from_file_names<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            entries
                .into_iter()
                .map(|e| normalize_manufacturer_name(e.as_ref()))
                .collect(),
        )
    }

    fn from_valid(names: Vec<String>) -> Self {
        let lowered = names.iter().map(|n| n.to_lowercase()).collect();
        Self { names, lowered }
    }

    /// Names in rank order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Rank of a manufacturer, or [`UNRANKED`].
    ///
    /// Matching is case-insensitive and fuzzy in both directions: a table entry
    /// matches when either name contains the other, so "Polymaker PLA Pro" ranks
    /// as "Polymaker". An empty name is contained in every entry and therefore
    /// always gets rank 1.
    pub fn lookup_rank(&self, manufacturer: &str) -> u32 {
        let needle = manufacturer.to_lowercase();
        self.lowered
            .iter()
            .position(|top| needle.contains(top.as_str()) || top.contains(needle.as_str()))
            .map_or(UNRANKED, |i| i as u32 + 1)
    }

    /// Check if a manufacturer appears in the table.
    pub fn is_ranked(&self, manufacturer: &str) -> bool {
        self.lookup_rank(manufacturer) != UNRANKED
    }

    /// Bonus points: `(11 - rank) * 0.56`, or 0 when unranked.
    ///
    /// Rank 1 gets +5.6 and rank 10 gets +0.56.
    pub fn bonus(&self, manufacturer: &str) -> f64 {
        match self.lookup_rank(manufacturer) {
            UNRANKED => 0.0,
            rank => {
                let steps = (RANKED_MANUFACTURER_COUNT as u32 + 1).saturating_sub(rank);
                steps as f64 * RANK_MULTIPLIER
            }
        }
    }
}

/// Turn a file-style manufacturer entry into a display name.
///
/// Drops a `.yaml`/`.yml`/`.json` extension, maps `_` to spaces and title-cases
/// each word: `atomic_filament.yaml` becomes `Atomic Filament`.
pub fn normalize_manufacturer_name(entry: &str) -> String {
    let trimmed = entry.trim();
    let stem = [".yaml", ".yml", ".json"]
        .iter()
        .find_map(|ext| trimmed.strip_suffix(ext))
        .unwrap_or(trimmed);

    let mut out = String::with_capacity(stem.len());
    let mut prev_alpha = false;
    for ch in stem.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
