//! Color distance metrics and similarity percentages.
//!
//! Delta E values (CIE76) read roughly as:
//! - 0-1: not perceptible to the human eye
//! - 1-2: perceptible through close observation
//! - 2-10: perceptible at a glance
//! - 11-49: more similar than opposite
//! - 50+: very different

use crate::config::{MAX_DELTA_E, MAX_RGB_DISTANCE, MAX_WEIGHTED_RGB_DISTANCE};
use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::hex::Color;

/// Distance metric used to compute a similarity percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Method {
    /// Euclidean distance in CIELAB.
    #[default]
    #[serde(rename = "delta_e_cie76")]
    DeltaE76,
    /// CIE94 graphic-arts weighting.
    #[serde(rename = "delta_e_cie94")]
    DeltaE94,
    /// Euclidean distance in raw RGB.
    #[serde(rename = "rgb")]
    Rgb,
    /// Red-mean weighted RGB distance.
    #[serde(rename = "weighted_rgb")]
    WeightedRgb,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::DeltaE76,
        Method::DeltaE94,
        Method::Rgb,
        Method::WeightedRgb,
    ];

    /// Method name as accepted by [`Method::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::DeltaE76 => "delta_e_cie76",
            Method::DeltaE94 => "delta_e_cie94",
            Method::Rgb => "rgb",
            Method::WeightedRgb => "weighted_rgb",
        }
    }

    /// Distance treated as 0% similarity.
    pub fn max_distance(&self) -> f64 {
        match self {
            Method::DeltaE76 | Method::DeltaE94 => MAX_DELTA_E,
            Method::Rgb => MAX_RGB_DISTANCE,
            Method::WeightedRgb => MAX_WEIGHTED_RGB_DISTANCE,
        }
    }

    /// Distance between two colors under this metric.
    pub fn distance(&self, a: Color, b: Color) -> f64 {
        match self {
            Method::DeltaE76 => delta_e76(a, b),
            Method::DeltaE94 => delta_e94(a, b),
            Method::Rgb => euclidean_distance_rgb(a, b),
            Method::WeightedRgb => weighted_rgb_distance(a, b),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "delta_e_cie76" => Ok(Method::DeltaE76),
            "delta_e_cie94" => Ok(Method::DeltaE94),
            "rgb" => Ok(Method::Rgb),
            "weighted_rgb" => Ok(Method::WeightedRgb),
            other => Err(MatchError::UnknownMethod {
                name: other.to_string(),
            }),
        }
    }
}

/// Euclidean distance in RGB space, 0 to about 441.67.
pub fn euclidean_distance_rgb(a: Color, b: Color) -> f64 {
    let dr = b.r as f64 - a.r as f64;
    let dg = b.g as f64 - a.g as f64;
    let db = b.b as f64 - a.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// RGB distance weighted by the mean red level of the pair.
pub fn weighted_rgb_distance(a: Color, b: Color) -> f64 {
    let r_mean = (a.r as f64 + b.r as f64) / 2.0;
    let dr = b.r as f64 - a.r as f64;
    let dg = b.g as f64 - a.g as f64;
    let db = b.b as f64 - a.b as f64;

    let weight_r = 2.0 + r_mean / 256.0;
    let weight_g = 4.0;
    let weight_b = 2.0 + (255.0 - r_mean) / 256.0;

    (weight_r * dr * dr + weight_g * dg * dg + weight_b * db * db).sqrt()
}

/// Delta E (CIE76): Euclidean distance in CIELAB.
pub fn delta_e76(a: Color, b: Color) -> f64 {
    let lab1 = a.to_lab();
    let lab2 = b.to_lab();

    let dl = lab2.l - lab1.l;
    let da = lab2.a - lab1.a;
    let db = lab2.b - lab1.b;
    (dl * dl + da * da + db * db).sqrt()
}

/// Delta E (CIE94) with graphic-arts constants. Chroma weights use the first color.
pub fn delta_e94(a: Color, b: Color) -> f64 {
    const K_L: f64 = 1.0;
    const K_C: f64 = 1.0;
    const K_H: f64 = 1.0;
    const K1: f64 = 0.045;
    const K2: f64 = 0.015;

    let lab1 = a.to_lab();
    let lab2 = b.to_lab();

    let dl = lab1.l - lab2.l;
    let c1 = lab1.chroma();
    let c2 = lab2.chroma();
    let dc = c1 - c2;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    // Rounding can push the radicand slightly negative.
    let dh = (da * da + db * db - dc * dc).max(0.0).sqrt();

    let sl = 1.0;
    let sc = 1.0 + K1 * c1;
    let sh = 1.0 + K2 * c1;

    let l_term = dl / (K_L * sl);
    let c_term = dc / (K_C * sc);
    let h_term = dh / (K_H * sh);
    (l_term * l_term + c_term * c_term + h_term * h_term).sqrt()
}

/// Similarity in [0, 100]; 100 means identical.
pub fn similarity_percentage(a: Color, b: Color, method: Method) -> f64 {
    let distance = method.distance(a, b);
    (100.0 * (1.0 - distance / method.max_distance())).max(0.0)
}

/// String-level similarity: parses both hex values and the method name.
pub fn similarity_percentage_hex(hex1: &str, hex2: &str, method: &str) -> Result<f64> {
    let method = Method::from_str(method)?;
    Ok(similarity_percentage(
        Color::parse(hex1)?,
        Color::parse(hex2)?,
        method,
    ))
}

/// All metrics for a pair of colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorComparison {
    pub rgb_distance: f64,
    pub weighted_rgb_distance: f64,
    pub delta_e_cie76: f64,
    pub delta_e_cie94: f64,
    /// Similarity under the default method.
    pub similarity_percentage: f64,
}

/// Compare two colors with every metric.
pub fn compare_colors(a: Color, b: Color) -> ColorComparison {
    ColorComparison {
        rgb_distance: euclidean_distance_rgb(a, b),
        weighted_rgb_distance: weighted_rgb_distance(a, b),
        delta_e_cie76: delta_e76(a, b),
        delta_e_cie94: delta_e94(a, b),
        similarity_percentage: similarity_percentage(a, b, Method::default()),
    }
}

/// Human-readable perceptibility band for a delta E value.
pub fn delta_e_description(delta_e: f64) -> &'static str {
    if delta_e <= 1.0 {
        "not perceptible to the human eye"
    } else if delta_e <= 2.0 {
        "perceptible through close observation"
    } else if delta_e <= 10.0 {
        "perceptible at a glance"
    } else if delta_e < 50.0 {
        "more similar than opposite"
    } else {
        "very different"
    }
}

/// Closest named color found by [`find_closest_color`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestColor<'a> {
    pub name: &'a str,
    pub color: Color,
    pub similarity: f64,
}

/// Find the most similar color in a named list (default method).
///
/// The first candidate with the highest similarity wins ties.
pub fn find_closest_color<'a, I>(target: Color, candidates: I) -> Option<ClosestColor<'a>>
where
    I: IntoIterator<Item = (&'a str, Color)>,
{
    let mut best: Option<ClosestColor<'a>> = None;

    for (name, color) in candidates {
        let similarity = similarity_percentage(target, color, Method::default());
        if best.map_or(true, |b| similarity > b.similarity) {
            best = Some(ClosestColor {
                name,
                color,
                similarity,
            });
        }
    }

    best
}
