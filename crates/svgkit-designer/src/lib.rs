//! # svgkit Designer
//!
//! Builds SVG documents out of typed primitives.
//!
//! ## Components
//!
//! - **Styles**: [`Color`], [`Fill`], [`Stroke`] and [`Font`] render
//!   themselves as attribute fragments.
//! - **Shapes**: circles, ellipses, rectangles, lines, polygons, polylines,
//!   multi-subpath paths and text, all implementing [`SvgShape`] and
//!   collected in the closed [`Shape`] enum.
//! - **Document**: accumulates rendered shapes and the union of their
//!   bounding boxes, then emits a document whose viewBox bounds exactly
//!   what was drawn.
//! - **Chart**: a line chart composed from polylines and circles.
//!
//! ## Usage
//!
//! ```rust
//! use svgkit_core::{Layout, Point};
//! use svgkit_designer::{Circle, Document, NamedColor, Stroke};
//!
//! let mut doc = Document::new("scene.svg", Layout::default());
//! doc.append(
//!     &Circle::new(Point::new(50.0, 50.0), 40.0)
//!         .with_fill(NamedColor::Red)
//!         .with_stroke(Stroke::new(1.0, NamedColor::Black)),
//! );
//! let svg = doc.to_svg();
//! assert!(svg.contains("<circle"));
//! ```

pub mod chart;
pub mod document;
pub mod markup;
pub mod model;
pub mod style;

pub use chart::LineChart;
pub use document::{Document, DEFAULT_UNIT};
pub use model::{
    Circle, Ellipse, Line, Path, Polygon, Polyline, Rectangle, Shape, ShapeKind, SvgShape, Text,
};
pub use style::{Color, Fill, Font, NamedColor, Stroke};
