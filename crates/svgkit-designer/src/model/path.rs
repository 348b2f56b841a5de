use serde::{Deserialize, Serialize};

use svgkit_core::{Point, Rect};

use super::{ShapeKind, SvgShape};
use crate::markup::{elem_start, empty_elem_end, push_coordinates};
use crate::style::{Fill, Stroke};

/// A set of straight-segment subpaths, each closed on output and filled
/// with the even-odd rule so inner subpaths punch holes.
///
/// A path always has at least one subpath; points are appended to the last
/// one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    subpaths: Vec<Vec<Point>>,
    pub fill: Fill,
    pub stroke: Stroke,
}

impl Default for Path {
    fn default() -> Self {
        Self {
            subpaths: vec![Vec::new()],
            fill: Fill::default(),
            stroke: Stroke::default(),
        }
    }
}

impl Path {
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

    pub fn add_point(&mut self, p: impl Into<Point>) -> &mut Self {
        let p = p.into();
        match self.subpaths.last_mut() {
            Some(last) => last.push(p),
            None => self.subpaths.push(vec![p]),
        }
        self
    }

    /// Opens a new subpath unless the current one is still empty.
    pub fn start_new_subpath(&mut self) -> &mut Self {
        if self.subpaths.last().map_or(true, |last| !last.is_empty()) {
            self.subpaths.push(Vec::new());
        }
        self
    }

    pub fn subpaths(&self) -> &[Vec<Point>] {
        &self.subpaths
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(Vec::is_empty)
    }

    /// Path data: `Mx,y x,y ... z ` per non-empty subpath.
    pub fn data(&self) -> String {
        let mut d = String::new();
        for subpath in self.subpaths.iter().filter(|s| !s.is_empty()) {
            d.push('M');
            push_coordinates(&mut d, subpath);
            d.push_str("z ");
        }
        d
    }
}

impl SvgShape for Path {
    fn to_svg(&self) -> String {
        let mut s = elem_start("path");
        s.push_str(&format!("d=\"{}\" ", self.data()));
        s.push_str("fill-rule=\"evenodd\" ");
        s.push_str(&self.fill.to_svg());
        s.push_str(&self.stroke.to_svg());
        s.push_str(empty_elem_end());
        s
    }

    fn translate(&mut self, offset: Point) {
        for p in self.subpaths.iter_mut().flatten() {
            p.offset(offset);
        }
    }

    /// Zero rect when no point has been added yet.
    fn bounding_box(&self) -> Rect {
        Rect::enclosing(self.subpaths.iter().flatten()).unwrap_or_default()
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Path
    }
}
