//! Geometry primitives and bounding-box aggregation.
//!
//! Every bounding box in svgkit, from a single shape up to a whole document
//! region, is built by repeated application of [`Rect::include`].

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// A point in user space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shifts the point in place by `offset`.
    pub fn offset(&mut self, offset: Point) {
        self.x += offset.x;
        self.y += offset.y;
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.offset(rhs);
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Uses the same value for both axes.
    pub fn uniform(combined: f64) -> Self {
        Self::new(combined, combined)
    }
}

/// Axis-aligned bounding box.
///
/// A freshly constructed rect is degenerate at the origin. Inclusion only
/// ever widens it, and the order of inclusion does not affect the result.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min_pt: Point,
    pub max_pt: Point,
}

impl Rect {
    /// The degenerate rect at the origin.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Rect spanning from `corner` to `corner + (width, height)`.
    ///
    /// Negative extents are accepted; the corners are reordered so that
    /// `min_pt <= max_pt` on both axes.
    pub fn at(corner: Point, width: f64, height: f64) -> Self {
        let far = Point::new(corner.x + width, corner.y + height);
        Self {
            min_pt: Point::new(corner.x.min(far.x), corner.y.min(far.y)),
            max_pt: Point::new(corner.x.max(far.x), corner.y.max(far.y)),
        }
    }

    /// Zero-size rect sitting on `p`.
    pub fn from_point(p: Point) -> Self {
        Self::at(p, 0.0, 0.0)
    }

    pub fn width(&self) -> f64 {
        self.max_pt.x - self.min_pt.x
    }

    pub fn height(&self) -> f64 {
        self.max_pt.y - self.min_pt.y
    }

    /// Widens the rect minimally so that it covers `p`.
    pub fn include(&mut self, p: Point) {
        if p.x < self.min_pt.x {
            self.min_pt.x = p.x;
        }
        if p.y < self.min_pt.y {
            self.min_pt.y = p.y;
        }
        if p.x > self.max_pt.x {
            self.max_pt.x = p.x;
        }
        if p.y > self.max_pt.y {
            self.max_pt.y = p.y;
        }
    }

    /// Widens the rect so that it covers both corners of `other`.
    pub fn include_rect(&mut self, other: &Rect) {
        self.include(other.min_pt);
        self.include(other.max_pt);
    }

    /// Returns the rect shifted by `offset`.
    pub fn translated(&self, offset: Point) -> Rect {
        Rect {
            min_pt: self.min_pt + offset,
            max_pt: self.max_pt + offset,
        }
    }

    /// Bounding box of a point sequence, seeded from its first point.
    ///
    /// Returns `None` for an empty sequence.
    pub fn enclosing<'a, I>(points: I) -> Option<Rect>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut rect = Rect::from_point(first);
        for p in iter {
            rect.include(*p);
        }
        Some(rect)
    }
}

/// Per-axis minimum of `points`; the result need not be one of the inputs.
pub fn min_point(points: &[Point]) -> Option<Point> {
    let (first, rest) = points.split_first()?;
    Some(rest.iter().fold(*first, |acc, p| {
        Point::new(acc.x.min(p.x), acc.y.min(p.y))
    }))
}

/// Per-axis maximum of `points`; the result need not be one of the inputs.
pub fn max_point(points: &[Point]) -> Option<Point> {
    let (first, rest) = points.split_first()?;
    Some(rest.iter().fold(*first, |acc, p| {
        Point::new(acc.x.max(p.x), acc.y.max(p.y))
    }))
}
