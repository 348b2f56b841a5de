//! Document layout and user-space to device-space transformation.
//!
//! A [`Layout`] describes the target canvas: its dimensions, which corner the
//! user-space origin is anchored to, a uniform scale and an origin offset.
//!
//! The transform is a standalone toolkit. Shapes are serialized in whatever
//! space their geometry was given in; callers that want device coordinates
//! transform points before building shapes.
//!
//! ```text
//! x' = width  - (x + off.x) * scale   // origin on the right
//! x' = (off.x + x) * scale            // origin on the left
//! y' = height - (y + off.y) * scale   // origin on the bottom
//! y' = (off.y + y) * scale            // origin on the top
//! ```

use serde::{Deserialize, Serialize};

use crate::geometry::{Dimensions, Point};

/// Corner the user-space origin is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    TopLeft,
    #[default]
    BottomLeft,
    TopRight,
    BottomRight,
}

impl Origin {
    /// True when x grows leftwards from the right edge.
    pub fn is_right(self) -> bool {
        matches!(self, Origin::TopRight | Origin::BottomRight)
    }

    /// True when y grows upwards from the bottom edge.
    pub fn is_bottom(self) -> bool {
        matches!(self, Origin::BottomLeft | Origin::BottomRight)
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TopLeft => write!(f, "top_left"),
            Self::BottomLeft => write!(f, "bottom_left"),
            Self::TopRight => write!(f, "top_right"),
            Self::BottomRight => write!(f, "bottom_right"),
        }
    }
}

/// Dimensions, origin convention, scale and offset of a document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub dimensions: Dimensions,
    pub origin: Origin,
    pub scale: f64,
    pub origin_offset: Point,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::new(400.0, 300.0),
            origin: Origin::BottomLeft,
            scale: 1.0,
            origin_offset: Point::new(0.0, 0.0),
        }
    }
}

impl Layout {
    pub fn new(dimensions: Dimensions, origin: Origin, scale: f64, origin_offset: Point) -> Self {
        Self {
            dimensions,
            origin,
            scale,
            origin_offset,
        }
    }

    /// Converts a user-space x coordinate to device space.
    pub fn transform_x(&self, x: f64) -> f64 {
        if self.origin.is_right() {
            self.dimensions.width - (x + self.origin_offset.x) * self.scale
        } else {
            (self.origin_offset.x + x) * self.scale
        }
    }

    /// Converts a user-space y coordinate to device space.
    pub fn transform_y(&self, y: f64) -> f64 {
        if self.origin.is_bottom() {
            self.dimensions.height - (y + self.origin_offset.y) * self.scale
        } else {
            (self.origin_offset.y + y) * self.scale
        }
    }

    /// Scales a length. Lengths are not positions, so the origin is ignored.
    pub fn transform_scale(&self, length: f64) -> f64 {
        length * self.scale
    }

    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(self.transform_x(p.x), self.transform_y(p.y))
    }
}
