//! Team color record.

use crate::color::Color;
use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};

/// A team's official palette.
///
/// `colors[i]` names the color `hex[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamColorRecord {
    pub team: String,
    pub league: String,
    pub colors: Vec<String>,
    pub hex: Vec<Color>,
}

impl TeamColorRecord {
    /// Create a record, checking that names and hex codes line up.
    pub fn new(
        team: impl Into<String>,
        league: impl Into<String>,
        colors: Vec<String>,
        hex: Vec<Color>,
    ) -> Result<Self> {
        let team = team.into();
        if colors.len() != hex.len() {
            return Err(MatchError::MismatchedTeamColors {
                team,
                colors: colors.len(),
                hex: hex.len(),
            });
        }
        Ok(Self {
            team,
            league: league.into(),
            colors,
            hex,
        })
    }

    /// Iterate (color name, color) pairs in palette order.
    pub fn palette(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.colors
            .iter()
            .map(String::as_str)
            .zip(self.hex.iter().copied())
    }

    /// Check if the palette is non-empty and index-aligned.
    pub fn is_well_formed(&self) -> bool {
        !self.colors.is_empty() && self.colors.len() == self.hex.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_mismatched_lengths() {
        let err = TeamColorRecord::new(
            "Los Angeles Lakers",
            "NBA",
            vec!["Purple".into(), "Gold".into()],
            vec![Color::new(0x55, 0x25, 0x83)],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            MatchError::MismatchedTeamColors {
                colors: 2,
                hex: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_palette_pairs_in_order() {
        let team = TeamColorRecord::new(
            "Los Angeles Lakers",
            "NBA",
            vec!["Purple".into(), "Gold".into()],
            vec![Color::new(0x55, 0x25, 0x83), Color::new(0xFD, 0xB9, 0x27)],
        )
        .unwrap();
        let pairs: Vec<_> = team.palette().collect();
        assert_eq!(pairs[0], ("Purple", Color::new(0x55, 0x25, 0x83)));
        assert_eq!(pairs[1], ("Gold", Color::new(0xFD, 0xB9, 0x27)));
        assert!(team.is_well_formed());
    }
}
