//! Demonstration scene drawn by the `svgkit` binary.
//!
//! Uses every shape kind once. Shapes are placed in user space and mapped
//! to device space through the layout before they are built, since
//! documents never transform geometry themselves.

use svgkit_core::{Dimensions, Layout, Point};
use svgkit_designer::{
    Circle, Color, Document, Ellipse, Font, Line, LineChart, NamedColor, Path, Polygon, Polyline,
    Rectangle, Shape, Stroke, Text,
};

/// Builds the demonstration shapes for `layout`.
pub fn scene(layout: &Layout) -> Vec<Shape> {
    let pt = |x: f64, y: f64| layout.transform_point(Point::new(x, y));
    let len = |l: f64| layout.transform_scale(l);
    let outline = Stroke::new(len(1.0), NamedColor::Black);

    let mut shapes: Vec<Shape> = Vec::new();

    shapes.push(
        Rectangle::new(pt(10.0, 290.0), len(380.0), len(280.0))
            .with_fill(Color::rgb(250, 250, 240))
            .with_stroke(Stroke::new(len(0.5), NamedColor::Silver))
            .into(),
    );

    shapes.push(
        Circle::new(pt(80.0, 220.0), len(80.0))
            .with_fill(NamedColor::Red)
            .with_stroke(outline)
            .into(),
    );

    shapes.push(
        Ellipse::new(pt(220.0, 220.0), len(140.0), len(60.0))
            .with_fill(NamedColor::Orange)
            .with_stroke(outline)
            .into(),
    );

    shapes.push(
        Polygon::new()
            .with_fill(NamedColor::Lime)
            .with_stroke(outline)
            .with_points([pt(320.0, 260.0), pt(370.0, 180.0), pt(270.0, 180.0)])
            .into(),
    );

    let mut frame = Path::new()
        .with_fill(NamedColor::Blue)
        .with_stroke(outline);
    frame
        .add_point(pt(40.0, 140.0))
        .add_point(pt(140.0, 140.0))
        .add_point(pt(140.0, 40.0))
        .add_point(pt(40.0, 40.0));
    frame.start_new_subpath();
    frame
        .add_point(pt(65.0, 115.0))
        .add_point(pt(115.0, 115.0))
        .add_point(pt(115.0, 65.0))
        .add_point(pt(65.0, 65.0));
    shapes.push(frame.into());

    shapes.push(
        Polyline::new()
            .with_stroke(Stroke::new(len(2.0), NamedColor::Purple).non_scaling())
            .with_points([
                pt(170.0, 40.0),
                pt(200.0, 120.0),
                pt(230.0, 60.0),
                pt(260.0, 140.0),
            ])
            .into(),
    );

    shapes.push(
        Line::new(pt(280.0, 40.0), pt(380.0, 140.0))
            .with_stroke(Stroke::new(len(3.0), NamedColor::Brown))
            .into(),
    );

    shapes.push(
        Text::new(pt(20.0, 20.0), "svgkit")
            .with_fill(NamedColor::Black)
            .with_font(Font::new(len(14.0), "Verdana"))
            .into(),
    );

    let mut chart = LineChart::new(
        Dimensions::new(len(290.0), len(150.0)),
        layout.scale,
        Stroke::new(len(0.5), NamedColor::Purple),
    );
    chart.polyline(
        Polyline::new()
            .with_stroke(Stroke::new(len(1.0), NamedColor::Green))
            .with_points([(0.0, len(20.0)), (len(30.0), 0.0), (len(60.0), len(10.0))]),
    );
    shapes.push(chart.into());

    shapes
}

/// Appends the demonstration scene to `doc`.
pub fn draw(doc: &mut Document) {
    let layout = *doc.layout();
    for shape in scene(&layout) {
        doc.append(&shape);
    }
}
