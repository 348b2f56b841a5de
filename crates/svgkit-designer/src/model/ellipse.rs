use serde::{Deserialize, Serialize};

use svgkit_core::{Point, Rect};

use super::{ShapeKind, SvgShape};
use crate::markup::{attribute, elem_start, empty_elem_end};
use crate::style::{Fill, Stroke};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
    pub fill: Fill,
    pub stroke: Stroke,
}

impl Ellipse {
    /// Builds an ellipse from its center and full width/height.
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        Self {
            center,
            radius_x: width / 2.0,
            radius_y: height / 2.0,
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

impl SvgShape for Ellipse {
    fn to_svg(&self) -> String {
        let mut s = elem_start("ellipse");
        s.push_str(&attribute("cx", self.center.x));
        s.push_str(&attribute("cy", self.center.y));
        s.push_str(&attribute("rx", self.radius_x));
        s.push_str(&attribute("ry", self.radius_y));
        s.push_str(&self.fill.to_svg());
        s.push_str(&self.stroke.to_svg());
        s.push_str(empty_elem_end());
        s
    }

    fn translate(&mut self, offset: Point) {
        self.center.offset(offset);
    }

    fn bounding_box(&self) -> Rect {
        Rect::at(
            Point::new(self.center.x - self.radius_x, self.center.y - self.radius_y),
            self.radius_x * 2.0,
            self.radius_y * 2.0,
        )
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }
}
