use core::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// An RGB color.
///
/// Serialized as a `#RRGGBB` hex string for IPC friendliness; the TSV
/// persistence format uses the same textual form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    rgb: u32,
}

/// Errors that can occur when parsing a color from text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color text")]
    Empty,
    #[error("color hex must have exactly 6 digits (`#RRGGBB`)")]
    BadHexLength,
    #[error("invalid hex digit in color")]
    BadHexDigit,
    #[error("unrecognized color name")]
    UnknownName,
}

/// Color names accepted by [`Color::parse`], with their SVG values.
///
/// A small fixed table; hex is the canonical textual form and the only one
/// ever produced on output.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("blue", 0x0000FF),
    ("brown", 0xA52A2A),
    ("cyan", 0x00FFFF),
    ("darkblue", 0x00008B),
    ("darkgray", 0xA9A9A9),
    ("darkgreen", 0x006400),
    ("darkred", 0x8B0000),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("grey", 0x808080),
    ("lime", 0x00FF00),
    ("magenta", 0xFF00FF),
    ("maroon", 0x800000),
    ("navy", 0x000080),
    ("olive", 0x808000),
    ("orange", 0xFFA500),
    ("pink", 0xFFC0CB),
    ("purple", 0x800080),
    ("red", 0xFF0000),
    ("silver", 0xC0C0C0),
    ("teal", 0x008080),
    ("white", 0xFFFFFF),
    ("yellow", 0xFFFF00),
];

impl Color {
    /// Construct from 8-bit channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            rgb: ((r as u32) << 16) | ((g as u32) << 8) | (b as u32),
        }
    }

    /// Construct from a packed `0xRRGGBB` value. High bits are ignored.
    #[inline]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self {
            rgb: rgb & 0x00FF_FFFF,
        }
    }

    pub const fn black() -> Self {
        Self { rgb: 0x000000 }
    }

    pub const fn white() -> Self {
        Self { rgb: 0xFFFFFF }
    }

    /// Packed `0xRRGGBB` value.
    #[inline]
    pub const fn rgb_u32(self) -> u32 {
        self.rgb
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.rgb >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.rgb >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.rgb as u8
    }

    /// Parse a color from text: `#RRGGBB` hex (any case) or a name from the
    /// fixed table ([`NAMED_COLORS`]).
    pub fn parse(text: &str) -> Result<Self, ColorParseError> {
        let s = text.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 {
                return Err(ColorParseError::BadHexLength);
            }
            let rgb =
                u32::from_str_radix(hex, 16).map_err(|_| ColorParseError::BadHexDigit)?;
            return Ok(Self { rgb });
        }

        NAMED_COLORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, rgb)| Self { rgb })
            .ok_or(ColorParseError::UnknownName)
    }

    fn to_hex(self) -> String {
        format!("#{:06X}", self.rgb)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(D::Error::custom)
    }
}
