//! Data model types for filament and team catalogs.

mod filament;
mod manufacturer;
mod team;

pub use filament::FilamentRecord;
pub use manufacturer::{
    normalize_manufacturer_name, ManufacturerRanks, DEFAULT_TOP_MANUFACTURERS,
};
pub use team::TeamColorRecord;

/// Case-insensitive name equality with full Unicode lowercase folding.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
