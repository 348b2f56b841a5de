use serde::{Deserialize, Serialize};

use svgkit_core::{Point, Rect};

mod circle;
mod ellipse;
mod line;
mod path;
mod polygon;
mod polyline;
mod rectangle;
mod text;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use line::Line;
pub use path::Path;
pub use polygon::Polygon;
pub use polyline::Polyline;
pub use rectangle::Rectangle;
pub use text::Text;

use crate::chart::LineChart;

/// Contract shared by every drawable primitive.
pub trait SvgShape {
    /// Renders one element fragment.
    fn to_svg(&self) -> String;

    /// Shifts all geometry in place.
    fn translate(&mut self, offset: Point);

    /// Axis-aligned bounding box of the current geometry.
    fn bounding_box(&self) -> Rect;

    fn kind(&self) -> ShapeKind;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Ellipse,
    Rectangle,
    Line,
    Polygon,
    Polyline,
    Path,
    Text,
    LineChart,
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Rectangle => "rect",
            Self::Line => "line",
            Self::Polygon => "polygon",
            Self::Polyline => "polyline",
            Self::Path => "path",
            Self::Text => "text",
            Self::LineChart => "line-chart",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Ellipse(Ellipse),
    Rectangle(Rectangle),
    Line(Line),
    Polygon(Polygon),
    Polyline(Polyline),
    Path(Path),
    Text(Text),
    LineChart(LineChart),
}

impl SvgShape for Shape {
    fn to_svg(&self) -> String {
        match self {
            Shape::Circle(s) => s.to_svg(),
            Shape::Ellipse(s) => s.to_svg(),
            Shape::Rectangle(s) => s.to_svg(),
            Shape::Line(s) => s.to_svg(),
            Shape::Polygon(s) => s.to_svg(),
            Shape::Polyline(s) => s.to_svg(),
            Shape::Path(s) => s.to_svg(),
            Shape::Text(s) => s.to_svg(),
            Shape::LineChart(s) => s.to_svg(),
        }
    }

    fn translate(&mut self, offset: Point) {
        match self {
            Shape::Circle(s) => s.translate(offset),
            Shape::Ellipse(s) => s.translate(offset),
            Shape::Rectangle(s) => s.translate(offset),
            Shape::Line(s) => s.translate(offset),
            Shape::Polygon(s) => s.translate(offset),
            Shape::Polyline(s) => s.translate(offset),
            Shape::Path(s) => s.translate(offset),
            Shape::Text(s) => s.translate(offset),
            Shape::LineChart(s) => s.translate(offset),
        }
    }

    fn bounding_box(&self) -> Rect {
        match self {
            Shape::Circle(s) => s.bounding_box(),
            Shape::Ellipse(s) => s.bounding_box(),
            Shape::Rectangle(s) => s.bounding_box(),
            Shape::Line(s) => s.bounding_box(),
            Shape::Polygon(s) => s.bounding_box(),
            Shape::Polyline(s) => s.bounding_box(),
            Shape::Path(s) => s.bounding_box(),
            Shape::Text(s) => s.bounding_box(),
            Shape::LineChart(s) => s.bounding_box(),
        }
    }

    fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Ellipse(_) => ShapeKind::Ellipse,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Polygon(_) => ShapeKind::Polygon,
            Shape::Polyline(_) => ShapeKind::Polyline,
            Shape::Path(_) => ShapeKind::Path,
            Shape::Text(_) => ShapeKind::Text,
            Shape::LineChart(_) => ShapeKind::LineChart,
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Shape {
                fn from(s: $variant) -> Self {
                    Shape::$variant(s)
                }
            }
        )*
    };
}

impl_from_variant!(Circle, Ellipse, Rectangle, Line, Polygon, Polyline, Path, Text, LineChart);
