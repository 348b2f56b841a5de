use serde::{Deserialize, Serialize};

use svgkit_core::{Point, Rect};

use super::{ShapeKind, SvgShape};
use crate::markup::{attribute, elem_end, elem_start, escape};
use crate::style::{Fill, Font, Stroke};

/// A run of text anchored at `origin`.
///
/// Glyph metrics are not computed, so the bounding box is the zero-size
/// rect at the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub origin: Point,
    pub content: String,
    pub fill: Fill,
    pub font: Font,
    pub stroke: Stroke,
}

impl Text {
    pub fn new(origin: Point, content: impl Into<String>) -> Self {
        Self {
            origin,
            content: content.into(),
            fill: Fill::default(),
            font: Font::default(),
            stroke: Stroke::default(),
        }
    }

    pub fn with_fill(mut self, fill: impl Into<Fill>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }
}

impl SvgShape for Text {
    fn to_svg(&self) -> String {
        let mut s = elem_start("text");
        s.push_str(&attribute("x", self.origin.x));
        s.push_str(&attribute("y", self.origin.y));
        s.push_str(&self.fill.to_svg());
        s.push_str(&self.stroke.to_svg());
        s.push_str(&self.font.to_svg());
        s.push('>');
        s.push_str(&escape(&self.content));
        s.push_str(&elem_end("text"));
        s
    }

    fn translate(&mut self, offset: Point) {
        self.origin.offset(offset);
    }

    fn bounding_box(&self) -> Rect {
        Rect::from_point(self.origin)
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Text
    }
}
