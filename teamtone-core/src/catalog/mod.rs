//! Filament and team catalogs, and their JSON loaders.

mod filaments;
mod loader;
mod teams;

pub use filaments::FilamentCatalog;
pub use loader::{catalog_files, load_rank_table, parse_rank_table};
pub use teams::TeamCatalog;
