// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PictogramError;

/// Color type for fill and stroke styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Pictogram navy, the default figure fill.
    pub const PICTOGRAM: Color = Color(0x03, 0x21, 0x64);
    /// White color.
    pub const WHITE: Color = Color(255, 255, 255);
    /// Black color.
    pub const BLACK: Color = Color(0, 0, 0);
    /// Green, used for left-side keypoints.
    pub const GREEN: Color = Color(0, 128, 0);
    /// Orange, used for right-side keypoints.
    pub const ORANGE: Color = Color(255, 165, 0);

    /// Create a new color from RGB values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    /// Parse a `#rrggbb` or `#rgb` hex string. The leading `#` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`PictogramError::ConfigError`] for malformed input.
    pub fn from_hex(hex: &str) -> Result<Self, PictogramError> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || PictogramError::ConfigError(format!("invalid hex color '{hex}'"));

        if !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Self(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&digits[i..=i]).map(|v| v * 17);
                Ok(Self(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Opaque RGBA pixel for raster surfaces.
    #[must_use]
    pub const fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.0, self.1, self.2, 255])
    }

    /// Pack as `0x00RRGGBB`.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        ((self.0 as u32) << 16) | ((self.1 as u32) << 8) | self.2 as u32
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = PictogramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#032164").unwrap(), Color::PICTOGRAM);
        assert_eq!(Color::from_hex("ffffff").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("#f80").unwrap(), Color(255, 136, 0));
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        assert_eq!(Color::PICTOGRAM.to_string(), "#032164");
        assert_eq!("#032164".parse::<Color>().unwrap(), Color::PICTOGRAM);
    }

    #[test]
    fn test_to_u32() {
        assert_eq!(Color(0x12, 0x34, 0x56).to_u32(), 0x0012_3456);
    }
}
