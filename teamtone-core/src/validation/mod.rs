//! Catalog validation.

mod validate;

pub use validate::{validate_catalogs, validate_filaments, validate_teams, ValidationResult};
