//! JSON catalog loading from a single file or a directory of files.

use crate::error::{MatchError, Result};
use crate::model::ManufacturerRanks;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// List the catalog files at `path`.
///
/// A file is returned as is. For a directory, every `*.json` file whose name does not
/// start with `_` is returned, sorted by file name so merges are reproducible.
pub fn catalog_files(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(MatchError::CatalogNotFound {
            path: path.to_path_buf(),
        });
    }

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let file = entry?.path();
        let is_json = file.extension().is_some_and(|ext| ext == "json");
        let is_config = file
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('_'));
        if file.is_file() && is_json && !is_config {
            files.push(file);
        }
    }
    files.sort();
    Ok(files)
}

/// Parse one JSON document, attributing errors to `path`.
pub fn parse_json<T: DeserializeOwned>(content: &str, path: &Path) -> Result<T> {
    serde_json::from_str(content).map_err(|source| MatchError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse every catalog file at `path`.
pub fn read_documents<T: DeserializeOwned>(path: &Path) -> Result<Vec<(PathBuf, T)>> {
    let files = catalog_files(path)?;
    let mut documents = Vec::with_capacity(files.len());

    for file in files {
        let content = fs::read_to_string(&file)?;
        if content.trim().is_empty() {
            debug!("Skipping empty catalog file {}", file.display());
            continue;
        }
        let document = parse_json(&content, &file)?;
        debug!("Loaded {}", file.display());
        documents.push((file, document));
    }

    Ok(documents)
}

/// Rank table file layout.
#[derive(Debug, Deserialize)]
struct RankTableFile {
    top_manufacturers: Vec<String>,
}

/// Load a manufacturer rank table from `{"top_manufacturers": [...]}`.
pub fn load_rank_table(path: &Path) -> Result<ManufacturerRanks> {
    if !path.is_file() {
        return Err(MatchError::CatalogNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_rank_table(&content, path)
}

/// Parse a rank table document.
pub fn parse_rank_table(content: &str, path: &Path) -> Result<ManufacturerRanks> {
    let file: RankTableFile = parse_json(content, path)?;
    ManufacturerRanks::from_file_names(&file.top_manufacturers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_catalog_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("_config.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let files = catalog_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_catalog_files_missing_path() {
        let err = catalog_files(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, MatchError::CatalogNotFound { .. }));
    }

    #[test]
    fn test_read_documents_skips_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("empty.json"), "  \n").unwrap();
        fs::write(dir.path().join("one.json"), r#"{"k": 1}"#).unwrap();

        let docs: Vec<(PathBuf, BTreeMap<String, i32>)> = read_documents(dir.path()).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].1["k"], 1);
    }

    #[test]
    fn test_parse_json_error_names_file() {
        let err = parse_json::<BTreeMap<String, i32>>("{not json", Path::new("bad.json"))
            .unwrap_err();
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_parse_rank_table() {
        let json = r#"{"top_manufacturers": [
            "polymaker.yaml", "hatchbox.yaml", "esun.yaml", "prusament.yaml", "sunlu.yaml",
            "overture.yaml", "matterhackers.yaml", "colorfabb.yaml", "eryone.yaml",
            "atomic_filament.yaml"
        ]}"#;
        let ranks = parse_rank_table(json, Path::new("ranks.json")).unwrap();
        assert_eq!(ranks.lookup_rank("Atomic Filament"), 10);
    }

    #[test]
    fn test_parse_rank_table_wrong_count() {
        let json = r#"{"top_manufacturers": ["Polymaker", "Hatchbox"]}"#;
        let err = parse_rank_table(json, Path::new("ranks.json")).unwrap_err();
        assert!(matches!(err, MatchError::InvalidRankTable { count: 2, .. }));
    }
}
