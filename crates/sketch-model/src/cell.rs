use serde::{Deserialize, Serialize};

use crate::Color;

/// Query mode for [`crate::RectTable::cell`].
///
/// - `Edit`: the field's native typed value, for editors and programmatic
///   consumers.
/// - `Display`: a human-readable rendering.
/// - `Decoration`: an iconographic accessory; only the color column has one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Edit,
    Display,
    Decoration,
}

/// Result of a role-keyed cell query.
///
/// The enum uses an explicit `{type, value}` tagged layout for stable IPC.
/// Out-of-range coordinates and unsupported roles yield [`CellData::Empty`];
/// queries never panic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellData {
    /// No data: out-of-range coordinates or an unsupported role.
    Empty,
    /// Native color value (edit role, color column).
    Color(Color),
    /// Native integer value (edit role; the style column yields its raw code).
    Int(i32),
    /// Human-readable text (display role).
    Text(String),
    /// Solid-color swatch (decoration role, color column only).
    Swatch(Swatch),
}

impl Default for CellData {
    fn default() -> Self {
        CellData::Empty
    }
}

impl CellData {
    /// Returns true if the query produced no data.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellData::Empty)
    }
}

/// A fixed-size solid-color swatch, the color column's decoration.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub color: Color,
}

impl Swatch {
    /// Edge length of the square swatch, in pixels.
    pub const SIZE: u32 = 32;

    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    /// Expand to opaque RGBA8 pixel data (`SIZE × SIZE × 4` bytes,
    /// row-major), ready for a view layer to upload or blit.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let pixel = [self.color.red(), self.color.green(), self.color.blue(), 0xFF];
        let count = (Self::SIZE * Self::SIZE) as usize;
        let mut data = Vec::with_capacity(count * 4);
        for _ in 0..count {
            data.extend_from_slice(&pixel);
        }
        data
    }
}

/// Value payload accepted by [`crate::RectTable::set_cell`].
///
/// The color column takes `Color` or `Text` (hex or a known color name); the
/// style and numeric columns take `Int`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditValue {
    Color(Color),
    Int(i32),
    Text(String),
}

impl From<Color> for EditValue {
    fn from(value: Color) -> Self {
        EditValue::Color(value)
    }
}

impl From<i32> for EditValue {
    fn from(value: i32) -> Self {
        EditValue::Int(value)
    }
}

impl From<String> for EditValue {
    fn from(value: String) -> Self {
        EditValue::Text(value)
    }
}

impl From<&str> for EditValue {
    fn from(value: &str) -> Self {
        EditValue::Text(value.to_string())
    }
}
