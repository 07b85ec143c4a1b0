//! Filament catalog: an immutable list of filament records plus lookups.

use crate::color::Color;
use crate::error::{MatchError, Result};
use crate::model::{same_name, FilamentRecord};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

use super::loader::{parse_json, read_documents};

/// One color entry in a manufacturer file.
#[derive(Debug, Default, Deserialize)]
struct RawFilamentEntry {
    #[serde(default)]
    hex: Option<String>,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    temp_hotend: Option<i32>,
    #[serde(default)]
    temp_bed: Option<i32>,
}

/// `{manufacturer: {material: {color: entry}}}`
type RawFilaments = BTreeMap<String, BTreeMap<String, BTreeMap<String, RawFilamentEntry>>>;

/// In-memory filament catalog.
///
/// Loaded catalogs iterate by manufacturer, then material, then color name (byte order).
/// Catalogs built with [`FilamentCatalog::from_records`] keep the given order.
#[derive(Debug, Clone, Default)]
pub struct FilamentCatalog {
    records: Vec<FilamentRecord>,
    /// Entries dropped at load time because they had no hex code.
    skipped: usize,
}

impl FilamentCatalog {
    /// Build a catalog from records, keeping their order.
    pub fn from_records(records: Vec<FilamentRecord>) -> Self {
        Self {
            records,
            skipped: 0,
        }
    }

    /// Load from a JSON file or a directory of per-manufacturer JSON files.
    pub fn load(path: &Path) -> Result<Self> {
        let mut merged = RawFilaments::new();
        for (file, document) in read_documents::<RawFilaments>(path)? {
            debug!("Merging {} manufacturer(s) from {}", document.len(), file.display());
            merge_raw(&mut merged, document);
        }
        let catalog = Self::from_raw(merged)?;
        info!(
            "Loaded {} filament(s) from {} ({} without hex skipped)",
            catalog.len(),
            path.display(),
            catalog.skipped
        );
        Ok(catalog)
    }

    /// Parse a single JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let raw: RawFilaments = parse_json(content, Path::new("<string>"))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawFilaments) -> Result<Self> {
        let mut records = Vec::new();
        let mut skipped = 0;

        for (manufacturer, materials) in raw {
            for (material, colors) in materials {
                for (color_name, entry) in colors {
                    let hex = match entry.hex.as_deref().map(str::trim) {
                        Some(h) if !h.is_empty() => h,
                        _ => {
                            debug!("No hex for {} {} {}", manufacturer, material, color_name);
                            skipped += 1;
                            continue;
                        }
                    };
                    let hex = Color::parse(hex).map_err(|e| MatchError::InvalidEntry {
                        entry: format!("{} / {} / {}", manufacturer, material, color_name),
                        message: e.to_string(),
                    })?;

                    records.push(FilamentRecord {
                        manufacturer: manufacturer.clone(),
                        material: material.clone(),
                        color_name,
                        hex,
                        source: entry.source.unwrap_or_default(),
                        link: entry.link,
                        temp_hotend: entry.temp_hotend,
                        temp_bed: entry.temp_bed,
                    });
                }
            }
        }

        Ok(Self { records, skipped })
    }

    /// All records in iteration order.
    pub fn records(&self) -> &[FilamentRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilamentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Entries skipped at load time for lacking a hex code.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Look up one filament by manufacturer, material and color name (case-insensitive).
    pub fn find(
        &self,
        manufacturer: &str,
        material: &str,
        color_name: &str,
    ) -> Option<&FilamentRecord> {
        self.records.iter().find(|r| {
            same_name(&r.manufacturer, manufacturer)
                && same_name(&r.material, material)
                && same_name(&r.color_name, color_name)
        })
    }

    /// Search color names by substring, optionally restricted to a manufacturer and/or material.
    pub fn search(
        &self,
        term: &str,
        manufacturer: Option<&str>,
        material: Option<&str>,
    ) -> Vec<&FilamentRecord> {
        let term = term.to_lowercase();
        self.records
            .iter()
            .filter(|r| manufacturer.map_or(true, |m| same_name(&r.manufacturer, m)))
            .filter(|r| material.map_or(true, |m| same_name(&r.material, m)))
            .filter(|r| r.color_name.to_lowercase().contains(&term))
            .collect()
    }

    /// All records for a manufacturer, optionally one material only.
    pub fn by_manufacturer(
        &self,
        manufacturer: &str,
        material: Option<&str>,
    ) -> Vec<&FilamentRecord> {
        self.search("", Some(manufacturer), material)
    }

    /// Distinct manufacturer names in iteration order.
    pub fn manufacturers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for record in &self.records {
            if !names.contains(&record.manufacturer.as_str()) {
                names.push(&record.manufacturer);
            }
        }
        names
    }

    /// Distinct materials of one manufacturer in iteration order, or of all
    /// manufacturers sorted alphabetically.
    pub fn materials(&self, manufacturer: Option<&str>) -> Vec<&str> {
        match manufacturer {
            Some(m) => {
                let mut names: Vec<&str> = Vec::new();
                for record in self.by_manufacturer(m, None) {
                    if !names.contains(&record.material.as_str()) {
                        names.push(&record.material);
                    }
                }
                names
            }
            None => {
                let mut names: Vec<&str> =
                    self.records.iter().map(|r| r.material.as_str()).collect();
                names.sort_unstable();
                names.dedup();
                names
            }
        }
    }
}

impl<'a> IntoIterator for &'a FilamentCatalog {
    type Item = &'a FilamentRecord;
    type IntoIter = std::slice::Iter<'a, FilamentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Merge a manufacturer document into the accumulated catalog, material by material.
fn merge_raw(into: &mut RawFilaments, document: RawFilaments) {
    for (manufacturer, materials) in document {
        let existing = into.entry(manufacturer).or_default();
        for (material, colors) in materials {
            existing.entry(material).or_default().extend(colors);
        }
    }
}
