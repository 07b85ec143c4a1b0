//! Error types for color matching and catalog loading.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the matcher.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Invalid hex color '{value}': {reason}")]
    InvalidHex { value: String, reason: String },

    #[error("Unknown similarity method: {name}")]
    UnknownMethod { name: String },

    #[error("Manufacturer rank table must list exactly {expected} names, got {count}")]
    InvalidRankTable { expected: usize, count: usize },

    #[error("Team '{team}' has {colors} color name(s) but {hex} hex code(s)")]
    MismatchedTeamColors {
        team: String,
        colors: usize,
        hex: usize,
    },

    #[error("Catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    #[error("Invalid catalog entry {entry}: {message}")]
    InvalidEntry { entry: String, message: String },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MatchError {
    /// Shorthand for a malformed hex value.
    pub(crate) fn invalid_hex(value: &str, reason: impl Into<String>) -> Self {
        MatchError::InvalidHex {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for matcher operations.
pub type Result<T> = std::result::Result<T, MatchError>;
