use serde::{Deserialize, Serialize};

use svgkit_core::{Point, Rect};

use super::{ShapeKind, SvgShape};
use crate::markup::{attribute, elem_start, empty_elem_end};
use crate::style::Stroke;

/// A straight segment. Lines have no interior, so no fill is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point,
    pub end: Point,
    pub stroke: Stroke,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            stroke: Stroke::default(),
        }
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }
}

impl SvgShape for Line {
    fn to_svg(&self) -> String {
        let mut s = elem_start("line");
        s.push_str(&attribute("x1", self.start.x));
        s.push_str(&attribute("y1", self.start.y));
        s.push_str(&attribute("x2", self.end.x));
        s.push_str(&attribute("y2", self.end.y));
        s.push_str(&self.stroke.to_svg());
        s.push_str(empty_elem_end());
        s
    }

    fn translate(&mut self, offset: Point) {
        self.start.offset(offset);
        self.end.offset(offset);
    }

    fn bounding_box(&self) -> Rect {
        let mut rect = Rect::from_point(self.start);
        rect.include(self.end);
        rect
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }
}
