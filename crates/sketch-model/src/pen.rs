use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Outline style of a rectangle's pen.
///
/// The numeric codes are the persisted/editor-facing form. Codes outside the
/// named set are preserved verbatim in [`PenStyle::Unknown`] and rendered
/// with the `PenStyle(<n>)` fallback label.
///
/// Construct from raw codes with [`PenStyle::from_code`], which canonicalizes
/// known codes to their named variant; `Unknown` never shadows a named style.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PenStyle {
    NoPen,
    Solid,
    Dash,
    Dot,
    DashDot,
    DashDotDot,
    Unknown(i32),
}

/// Canonical names for the named styles, in code order.
///
/// This table is the single source for both rendering and parsing; the codes
/// are the array indices.
const CANONICAL_NAMES: [&str; 6] = [
    "NoPen",
    "SolidLine",
    "DashLine",
    "DotLine",
    "DashDotLine",
    "DashDotDotLine",
];

impl PenStyle {
    /// The named styles, in code order. Intended for editor dropdowns.
    pub const ALL: [PenStyle; 6] = [
        PenStyle::NoPen,
        PenStyle::Solid,
        PenStyle::Dash,
        PenStyle::Dot,
        PenStyle::DashDot,
        PenStyle::DashDotDot,
    ];

    /// Map a raw code to a style. Any integer is accepted; codes outside the
    /// named set are preserved as [`PenStyle::Unknown`].
    pub const fn from_code(code: i32) -> Self {
        match code {
            0 => PenStyle::NoPen,
            1 => PenStyle::Solid,
            2 => PenStyle::Dash,
            3 => PenStyle::Dot,
            4 => PenStyle::DashDot,
            5 => PenStyle::DashDotDot,
            other => PenStyle::Unknown(other),
        }
    }

    /// The style's numeric code.
    pub const fn code(self) -> i32 {
        match self {
            PenStyle::NoPen => 0,
            PenStyle::Solid => 1,
            PenStyle::Dash => 2,
            PenStyle::Dot => 3,
            PenStyle::DashDot => 4,
            PenStyle::DashDotDot => 5,
            PenStyle::Unknown(code) => code,
        }
    }

    /// Canonical name for a named style; `None` for [`PenStyle::Unknown`].
    pub fn canonical_name(self) -> Option<&'static str> {
        match self {
            PenStyle::Unknown(_) => None,
            named => CANONICAL_NAMES.get(named.code() as usize).copied(),
        }
    }

    /// Decode a style from text, trying in priority order:
    ///
    /// 1. plain integer text (the numeric code),
    /// 2. the `PenStyle(<n>)` wrapped form produced for unknown codes,
    /// 3. a canonical name (exact match against the fixed name table).
    ///
    /// Anything else is `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let s = text.trim();

        if let Ok(code) = s.parse::<i32>() {
            return Some(Self::from_code(code));
        }

        if let Some(inner) = s.strip_prefix("PenStyle(").and_then(|rest| rest.strip_suffix(')')) {
            return inner.trim().parse::<i32>().ok().map(Self::from_code);
        }

        CANONICAL_NAMES
            .iter()
            .position(|name| *name == s)
            .map(|code| Self::from_code(code as i32))
    }
}

impl Default for PenStyle {
    fn default() -> Self {
        PenStyle::Solid
    }
}

impl fmt::Display for PenStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.canonical_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "PenStyle({})", self.code()),
        }
    }
}

impl Serialize for PenStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.code())
    }
}

impl<'de> Deserialize<'de> for PenStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = i32::deserialize(deserializer)?;
        Ok(PenStyle::from_code(code))
    }
}
