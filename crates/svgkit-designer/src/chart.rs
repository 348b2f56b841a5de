//! Line chart built from the basic primitives.
//!
//! Each data series is a [`Polyline`] shifted by the chart margin, with a
//! small black dot on every data point. An L-shaped axis 10% larger than
//! the data extent is drawn underneath.

use serde::{Deserialize, Serialize};

use svgkit_core::{max_point, min_point, Dimensions, Point, Rect, Result, SvgError};

use crate::model::{Circle, Polyline, ShapeKind, SvgShape};
use crate::style::{Color, NamedColor, Stroke};

const AXIS_OVERSHOOT: f64 = 1.1;
const DOT_DIAMETER_RATIO: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub margin: Dimensions,
    /// Carried along with the chart but not used when rendering.
    pub scale: f64,
    pub axis_stroke: Stroke,
    polylines: Vec<Polyline>,
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new(Dimensions::default(), 1.0, Stroke::new(0.5, NamedColor::Purple))
    }
}

impl LineChart {
    pub fn new(margin: Dimensions, scale: f64, axis_stroke: Stroke) -> Self {
        Self {
            margin,
            scale,
            axis_stroke,
            polylines: Vec::new(),
        }
    }

    /// Adds a data series. Empty series are ignored.
    pub fn polyline(&mut self, polyline: Polyline) -> &mut Self {
        if !polyline.is_empty() {
            self.polylines.push(polyline);
        }
        self
    }

    pub fn polylines(&self) -> &[Polyline] {
        &self.polylines
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }

    /// Extent of every data point across all series.
    pub fn data_dimensions(&self) -> Result<Dimensions> {
        let points: Vec<Point> = self
            .polylines
            .iter()
            .flat_map(|p| p.points().iter().copied())
            .collect();
        let min = min_point(&points)
            .ok_or_else(|| SvgError::absent("minimum point of an empty chart"))?;
        let max = max_point(&points)
            .ok_or_else(|| SvgError::absent("maximum point of an empty chart"))?;
        Ok(Dimensions::new(max.x - min.x, max.y - min.y))
    }

    fn margin_offset(&self) -> Point {
        Point::new(self.margin.width, self.margin.height)
    }

    fn series_svg(&self, polyline: &Polyline, dims: Dimensions) -> String {
        let mut shifted = polyline.clone();
        shifted.translate(self.margin_offset());

        let mut s = shifted.to_svg();
        let diameter = dims.height / DOT_DIAMETER_RATIO;
        for p in shifted.points() {
            s.push_str(&Circle::new(*p, diameter).with_fill(NamedColor::Black).to_svg());
        }
        s
    }

    fn axis_svg(&self, dims: Dimensions) -> String {
        let width = dims.width * AXIS_OVERSHOOT;
        let height = dims.height * AXIS_OVERSHOOT;
        let (mx, my) = (self.margin.width, self.margin.height);

        Polyline::new()
            .with_fill(Color::Transparent)
            .with_stroke(self.axis_stroke)
            .with_points([(mx, my + height), (mx, my), (mx + width, my)])
            .to_svg()
    }
}

impl SvgShape for LineChart {
    fn to_svg(&self) -> String {
        let dims = match self.data_dimensions() {
            Ok(dims) => dims,
            Err(_) => return String::new(),
        };

        let mut s: String = self
            .polylines
            .iter()
            .map(|p| self.series_svg(p, dims))
            .collect();
        s.push_str(&self.axis_svg(dims));
        s
    }

    fn translate(&mut self, offset: Point) {
        for p in &mut self.polylines {
            p.translate(offset);
        }
    }

    /// Charts do not contribute to the document region.
    fn bounding_box(&self) -> Rect {
        Rect::zero()
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::LineChart
    }
}
