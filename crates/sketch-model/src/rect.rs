use serde::{Deserialize, Serialize};

use crate::{Color, PenStyle};

/// A rectangle drawing primitive: pen attributes plus integer geometry.
///
/// Every field is always populated; equality (and therefore the table's
/// changed-cell detection) is field-wise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub pen_color: Color,
    pub pen_style: PenStyle,
    pub pen_width: i32,
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(
        pen_color: Color,
        pen_style: PenStyle,
        pen_width: i32,
        left: i32,
        top: i32,
        width: i32,
        height: i32,
    ) -> Self {
        Self {
            pen_color,
            pen_style,
            pen_width,
            left,
            top,
            width,
            height,
        }
    }
}

impl Default for Rect {
    fn default() -> Self {
        RectDefaults::default().rect()
    }
}

/// Field values used when the table materializes default rows.
///
/// The stock values (black solid 1px pen, 10×10 at the origin) match the
/// historical defaults but carry no semantic weight; override individual
/// fields with struct update syntax off [`RectDefaults::default`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectDefaults {
    pub pen_color: Color,
    pub pen_style: PenStyle,
    pub pen_width: i32,
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for RectDefaults {
    fn default() -> Self {
        Self {
            pen_color: Color::black(),
            pen_style: PenStyle::Solid,
            pen_width: 1,
            left: 0,
            top: 0,
            width: 10,
            height: 10,
        }
    }
}

impl RectDefaults {
    /// Materialize a default row.
    pub const fn rect(&self) -> Rect {
        Rect {
            pen_color: self.pen_color,
            pen_style: self.pen_style,
            pen_width: self.pen_width,
            left: self.left,
            top: self.top,
            width: self.width,
            height: self.height,
        }
    }
}
