use serde::{Deserialize, Serialize};

use svgkit_core::{Point, Rect};

use super::{ShapeKind, SvgShape};
use crate::markup::{elem_start, empty_elem_end, points_attribute};
use crate::style::{Fill, Stroke};

/// Closed outline through an append-only list of points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
    pub fill: Fill,
    pub stroke: Stroke,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, fill: impl Into<Fill>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_points<I, P>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        self.points.extend(points.into_iter().map(Into::into));
        self
    }

    pub fn add_point(&mut self, p: impl Into<Point>) -> &mut Self {
        self.points.push(p.into());
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl SvgShape for Polygon {
    fn to_svg(&self) -> String {
        let mut s = elem_start("polygon");
        s.push_str(&points_attribute(&self.points));
        s.push_str(&self.fill.to_svg());
        s.push_str(&self.stroke.to_svg());
        s.push_str(empty_elem_end());
        s
    }

    fn translate(&mut self, offset: Point) {
        for p in &mut self.points {
            p.offset(offset);
        }
    }

    fn bounding_box(&self) -> Rect {
        Rect::enclosing(&self.points).unwrap_or_default()
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }
}
