//! Filament record: one manufacturer/material/color entry with its measured hex.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// A single filament color offered by a manufacturer.
///
/// Equality compares every field, so two records with the same names but
/// different hex values are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilamentRecord {
    /// Manufacturer name as it appears in the catalog.
    pub manufacturer: String,
    /// Material line (e.g. "PLA", "PolyLite_PLA").
    pub material: String,
    /// Vendor color name.
    #[serde(rename = "color")]
    pub color_name: String,
    /// Measured or published color.
    pub hex: Color,
    /// Where the hex value came from.
    #[serde(default)]
    pub source: String,
    /// Purchase link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Recommended hotend temperature in Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_hotend: Option<i32>,
    /// Recommended bed temperature in Celsius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_bed: Option<i32>,
}

impl FilamentRecord {
    /// Create a record with no source, link or temperatures.
    pub fn new(
        manufacturer: impl Into<String>,
        material: impl Into<String>,
        color_name: impl Into<String>,
        hex: Color,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            material: material.into(),
            color_name: color_name.into(),
            hex,
            source: String::new(),
            link: None,
            temp_hotend: None,
            temp_bed: None,
        }
    }

    /// Set the purchase link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the data source.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Set hotend and bed temperatures.
    pub fn with_temps(mut self, hotend: i32, bed: i32) -> Self {
        self.temp_hotend = Some(hotend);
        self.temp_bed = Some(bed);
        self
    }

    /// Check if this record has a non-empty purchase link.
    pub fn has_link(&self) -> bool {
        self.link.as_deref().is_some_and(|l| !l.is_empty())
    }

    /// Hotend and bed temperatures, only when both are known.
    pub fn temps(&self) -> Option<(i32, i32)> {
        self.temp_hotend.zip(self.temp_bed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Color {
        Color::new(255, 0, 0)
    }

    #[test]
    fn test_has_link() {
        let record = FilamentRecord::new("Polymaker", "PLA", "Red", red());
        assert!(!record.has_link());
        assert!(record.clone().with_link("https://example.com/red").has_link());
        assert!(!record.with_link("").has_link());
    }

    #[test]
    fn test_temps_require_both() {
        let mut record = FilamentRecord::new("Polymaker", "PLA", "Red", red());
        record.temp_hotend = Some(210);
        assert_eq!(record.temps(), None);
        let record = record.with_temps(210, 60);
        assert_eq!(record.temps(), Some((210, 60)));
    }

    #[test]
    fn test_value_equality_includes_hex() {
        let a = FilamentRecord::new("Polymaker", "PLA", "Red", red());
        let b = FilamentRecord::new("Polymaker", "PLA", "Red", Color::new(254, 0, 0));
        assert_ne!(a, b);
    }

    #[test]
    fn test_serde_field_names() {
        let record = FilamentRecord::new("Hatchbox", "PLA", "Blue", Color::new(0, 0, 255))
            .with_source("FilamentColors.xyz");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["color"], "Blue");
        assert_eq!(json["hex"], "#0000FF");
        assert!(json.get("link").is_none());
    }
}
