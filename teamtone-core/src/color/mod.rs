//! Color metric engine: hex parsing, CIELAB conversion and distance metrics.

mod hex;
mod lab;
mod metrics;

pub use hex::{hex_to_rgb, rgb_to_hex, Color};
pub use lab::{rgb_to_lab, Lab};
pub use metrics::{
    compare_colors, delta_e76, delta_e94, delta_e_description, euclidean_distance_rgb,
    find_closest_color, similarity_percentage, similarity_percentage_hex,
    weighted_rgb_distance, ClosestColor, ColorComparison, Method,
};
