//! Style values: colors, fills, strokes and fonts.
//!
//! Styles only know how to render themselves as attribute fragments. A
//! transparent fill still renders `fill="transparent"`; a stroke with a
//! negative width is the "no stroke" sentinel and renders nothing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::markup::{attribute, text_attribute};

/// Fixed color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Transparent,
    Aqua,
    Black,
    Blue,
    Brown,
    Cyan,
    Fuchsia,
    Green,
    Lime,
    Magenta,
    Orange,
    Purple,
    Red,
    Silver,
    White,
    Yellow,
}

impl NamedColor {
    /// RGB channels of the palette entry; `None` for `Transparent`.
    pub fn rgb(self) -> Option<(u8, u8, u8)> {
        let rgb = match self {
            NamedColor::Transparent => return None,
            NamedColor::Aqua | NamedColor::Cyan => (0, 255, 255),
            NamedColor::Black => (0, 0, 0),
            NamedColor::Blue => (0, 0, 255),
            NamedColor::Brown => (165, 42, 42),
            NamedColor::Fuchsia | NamedColor::Magenta => (255, 0, 255),
            NamedColor::Green => (0, 128, 0),
            NamedColor::Lime => (0, 255, 0),
            NamedColor::Orange => (255, 165, 0),
            NamedColor::Purple => (128, 0, 128),
            NamedColor::Red => (255, 0, 0),
            NamedColor::Silver => (192, 192, 192),
            NamedColor::White => (255, 255, 255),
            NamedColor::Yellow => (255, 255, 0),
        };
        Some(rgb)
    }
}

/// Either transparent or an opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Transparent,
    Rgb(u8, u8, u8),
}

impl Color {
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color::Rgb(red, green, blue)
    }

    pub fn transparent() -> Self {
        Color::Transparent
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, Color::Transparent)
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        match named.rgb() {
            Some((r, g, b)) => Color::Rgb(r, g, b),
            None => Color::Transparent,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Transparent => write!(f, "transparent"),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
        }
    }
}

/// Interior paint of a shape.
///
/// Transparent is written out as `fill="transparent"`; a missing `fill`
/// attribute paints black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fill {
    pub color: Color,
}

impl Fill {
    pub fn new(color: impl Into<Color>) -> Self {
        Self {
            color: color.into(),
        }
    }

    pub fn to_svg(&self) -> String {
        attribute("fill", self.color)
    }
}

impl From<Color> for Fill {
    fn from(color: Color) -> Self {
        Fill::new(color)
    }
}

impl From<NamedColor> for Fill {
    fn from(named: NamedColor) -> Self {
        Fill::new(named)
    }
}

/// Outline of a shape. A negative width means "no stroke".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f64,
    pub color: Color,
    pub non_scaling: bool,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::none()
    }
}

impl Stroke {
    pub fn new(width: f64, color: impl Into<Color>) -> Self {
        Self {
            width,
            color: color.into(),
            non_scaling: false,
        }
    }

    /// The "no stroke" sentinel.
    pub fn none() -> Self {
        Self::new(-1.0, Color::Transparent)
    }

    /// Keeps the stroke width constant regardless of the viewBox scale.
    pub fn non_scaling(mut self) -> Self {
        self.non_scaling = true;
        self
    }

    pub fn is_none(&self) -> bool {
        self.width < 0.0
    }

    pub fn to_svg(&self) -> String {
        if self.is_none() {
            return String::new();
        }
        let mut s = attribute("stroke-width", self.width);
        s.push_str(&attribute("stroke", self.color));
        if self.non_scaling {
            s.push_str(&attribute("vector-effect", "non-scaling-stroke"));
        }
        s
    }
}

/// Font used by text elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: f64,
    pub family: String,
}

impl Default for Font {
    fn default() -> Self {
        Self::new(12.0, "Verdana")
    }
}

impl Font {
    pub fn new(size: f64, family: impl Into<String>) -> Self {
        Self {
            size,
            family: family.into(),
        }
    }

    pub fn to_svg(&self) -> String {
        let mut s = attribute("font-size", self.size);
        s.push_str(&text_attribute("font-family", &self.family));
        s
    }
}
