use serde::{Deserialize, Serialize};

use svgkit_core::{Point, Rect};

use super::{ShapeKind, SvgShape};
use crate::markup::{attribute, elem_start, empty_elem_end};
use crate::style::{Fill, Stroke};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Corner with the smallest coordinates.
    pub corner: Point,
    pub width: f64,
    pub height: f64,
    pub fill: Fill,
    pub stroke: Stroke,
}

impl Rectangle {
    pub fn new(corner: Point, width: f64, height: f64) -> Self {
        Self {
            corner,
            width,
            height,
            fill: Fill::default(),
            stroke: Stroke::default(),
        }
    }

    pub fn with_fill(mut self, fill: impl Into<Fill>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }
}

impl SvgShape for Rectangle {
    fn to_svg(&self) -> String {
        let mut s = elem_start("rect");
        s.push_str(&attribute("x", self.corner.x));
        s.push_str(&attribute("y", self.corner.y));
        s.push_str(&attribute("width", self.width));
        s.push_str(&attribute("height", self.height));
        s.push_str(&self.fill.to_svg());
        s.push_str(&self.stroke.to_svg());
        s.push_str(empty_elem_end());
        s
    }

    fn translate(&mut self, offset: Point) {
        self.corner.offset(offset);
    }

    fn bounding_box(&self) -> Rect {
        Rect::at(self.corner, self.width, self.height)
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }
}
