use serde::{Deserialize, Serialize};

use svgkit_core::{Point, Rect};

use super::{ShapeKind, SvgShape};
use crate::markup::{elem_start, empty_elem_end, points_attribute};
use crate::style::{Fill, Stroke};

/// Open chain of segments; unlike [`super::Polygon`] it is not closed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Point>,
    pub fill: Fill,
    pub stroke: Stroke,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Point>, fill: impl Into<Fill>, stroke: Stroke) -> Self {
        Self {
            points,
            fill: fill.into(),
            stroke,
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

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl SvgShape for Polyline {
    fn to_svg(&self) -> String {
        let mut s = elem_start("polyline");
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
        ShapeKind::Polyline
    }
}
