//! CIELAB (L*a*b*) conversion from sRGB under the D65 illuminant.
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis
//! - b*: Blue-yellow axis

use serde::Serialize;

/// sRGB to XYZ matrix (D65).
const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// D65 reference white.
const D65_WHITE: [f64; 3] = [0.95047, 1.00000, 1.08883];

/// CIELAB color coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma, sqrt(a^2 + b^2).
    #[inline]
    pub fn chroma(&self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    /// Check if approximately equal to another Lab color.
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// Decode an sRGB channel in [0, 1] to linear light.
#[inline]
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Lab forward function f(t).
#[inline]
fn lab_f(t: f64) -> f64 {
    const DELTA: f64 = 6.0 / 29.0;
    const DELTA_CUBED: f64 = DELTA * DELTA * DELTA;

    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

/// Convert 8-bit sRGB to CIELAB.
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
    let rgb = [
        srgb_to_linear(r as f64 / 255.0),
        srgb_to_linear(g as f64 / 255.0),
        srgb_to_linear(b as f64 / 255.0),
    ];

    let mut xyz = [0.0; 3];
    for (out, (row, white)) in xyz.iter_mut().zip(SRGB_TO_XYZ.iter().zip(D65_WHITE)) {
        *out = (row[0] * rgb[0] + row[1] * rgb[1] + row[2] * rgb[2]) / white;
    }

    let fx = lab_f(xyz[0]);
    let fy = lab_f(xyz[1]);
    let fz = lab_f(xyz[2]);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}
