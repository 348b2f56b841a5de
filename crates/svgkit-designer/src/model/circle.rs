use serde::{Deserialize, Serialize};

use svgkit_core::{Point, Rect};

use super::{ShapeKind, SvgShape};
use crate::markup::{attribute, elem_start, empty_elem_end};
use crate::style::{Fill, Stroke};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
    pub fill: Fill,
    pub stroke: Stroke,
}

impl Circle {
    /// Builds a circle from its center and diameter.
    pub fn new(center: Point, diameter: f64) -> Self {
        Self {
            center,
            radius: diameter / 2.0,
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

impl SvgShape for Circle {
    fn to_svg(&self) -> String {
        let mut s = elem_start("circle");
        s.push_str(&attribute("cx", self.center.x));
        s.push_str(&attribute("cy", self.center.y));
        s.push_str(&attribute("r", self.radius));
        s.push_str(&self.fill.to_svg());
        s.push_str(&self.stroke.to_svg());
        s.push_str(empty_elem_end());
        s
    }

    fn translate(&mut self, offset: Point) {
        self.center.offset(offset);
    }

    fn bounding_box(&self) -> Rect {
        let diameter = self.radius * 2.0;
        Rect::at(
            Point::new(self.center.x - self.radius, self.center.y - self.radius),
            diameter,
            diameter,
        )
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }
}
