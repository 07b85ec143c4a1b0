//! 24-bit RGB colors and hex string conversion.

use crate::error::{MatchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::lab::{rgb_to_lab, Lab};

/// An immutable 24-bit RGB color.
///
/// Parsed from `RRGGBB` or `#RRGGBB` in any case; always printed as uppercase `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex string, with or without a leading `#`.
    pub fn parse(hex: &str) -> Result<Self> {
        let (r, g, b) = hex_to_rgb(hex)?;
        Ok(Self::new(r, g, b))
    }

    /// Channels as a tuple.
    #[inline]
    pub const fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Canonical uppercase `#RRGGBB` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Convert to CIELAB (D65).
    pub fn to_lab(&self) -> Lab {
        rgb_to_lab(self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = MatchError;

    fn try_from(value: String) -> Result<Self> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Parse a hex color string into RGB channels.
///
/// Accepts exactly six hex digits, optionally preceded by `#`. Surrounding whitespace is ignored.
pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8)> {
    let digits = hex.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(MatchError::invalid_hex(
            hex,
            format!("non-hex character '{}'", bad),
        ));
    }
    if digits.len() != 6 {
        return Err(MatchError::invalid_hex(
            hex,
            format!("expected 6 hex digits, got {}", digits.len()),
        ));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|e| MatchError::invalid_hex(hex, e.to_string()))
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// Format RGB channels as a lowercase `#rrggbb` string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== hex_to_rgb tests ====================

    #[test]
    fn test_hex_to_rgb_with_hash() {
        assert_eq!(hex_to_rgb("#552583").unwrap(), (0x55, 0x25, 0x83));
    }

    #[test]
    fn test_hex_to_rgb_without_hash_lowercase() {
        assert_eq!(hex_to_rgb("fdb927").unwrap(), (0xFD, 0xB9, 0x27));
    }

    #[test]
    fn test_hex_to_rgb_trims_whitespace() {
        assert_eq!(hex_to_rgb("  #007A33 ").unwrap(), (0x00, 0x7A, 0x33));
    }

    #[test]
    fn test_hex_to_rgb_wrong_length() {
        let err = hex_to_rgb("#FFF").unwrap_err();
        assert!(matches!(err, MatchError::InvalidHex { .. }));
        assert!(err.to_string().contains("expected 6 hex digits"));

        assert!(hex_to_rgb("#FFFFFFF").is_err());
        assert!(hex_to_rgb("").is_err());
        assert!(hex_to_rgb("#").is_err());
    }

    #[test]
    fn test_hex_to_rgb_non_hex_characters() {
        let err = hex_to_rgb("#GG0000").unwrap_err();
        assert!(err.to_string().contains("non-hex character 'G'"));
        assert!(hex_to_rgb("#12345é").is_err());
        assert!(hex_to_rgb("##123456").is_err());
    }

    // ==================== rgb_to_hex tests ====================

    #[test]
    fn test_rgb_to_hex_lowercase() {
        assert_eq!(rgb_to_hex(0xAB, 0xCD, 0xEF), "#abcdef");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
    }

    #[test]
    fn test_hex_round_trip() {
        for r in 0..=255u8 {
            let g = 255 - r;
            let b = r.wrapping_mul(7);
            assert_eq!(hex_to_rgb(&rgb_to_hex(r, g, b)).unwrap(), (r, g, b));
        }
    }

    // ==================== Color tests ====================

    #[test]
    fn test_color_display_is_uppercase() {
        let color = Color::parse("#fdb927").unwrap();
        assert_eq!(color.to_string(), "#FDB927");
        assert_eq!(color.to_hex(), "#FDB927");
    }

    #[test]
    fn test_color_equality_ignores_input_case() {
        let a: Color = "#ff0000".parse().unwrap();
        let b: Color = "FF0000".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_color_serde() {
        let color: Color = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(color, Color::new(0, 255, 0));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#00FF00\"");
        assert!(serde_json::from_str::<Color>("\"#00ff0\"").is_err());
    }
}
