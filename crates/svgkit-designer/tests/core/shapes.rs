use svgkit_core::{Point, Rect};
use svgkit_designer::{
    Circle, Color, Ellipse, Font, Line, NamedColor, Path, Polygon, Polyline, Rectangle, Shape,
    ShapeKind, Stroke, SvgShape, Text,
};

#[test]
fn test_circle_svg_and_bounds() {
    let circle = Circle::new(Point::new(10.0, 20.0), 8.0)
        .with_fill(NamedColor::Red)
        .with_stroke(Stroke::new(1.0, NamedColor::Black));
    assert_eq!(
        circle.to_svg(),
        "\t<circle cx=\"10\" cy=\"20\" r=\"4\" fill=\"rgb(255,0,0)\" \
         stroke-width=\"1\" stroke=\"rgb(0,0,0)\" />\n"
    );
    let bbox = circle.bounding_box();
    assert_eq!(bbox.min_pt, Point::new(6.0, 16.0));
    assert_eq!(bbox.max_pt, Point::new(14.0, 24.0));
}

#[test]
fn test_ellipse_svg_and_bounds() {
    let ellipse = Ellipse::new(Point::new(10.0, 10.0), 10.0, 6.0);
    assert_eq!(
        ellipse.to_svg(),
        "\t<ellipse cx=\"10\" cy=\"10\" rx=\"5\" ry=\"3\" fill=\"transparent\" />\n"
    );
    let bbox = ellipse.bounding_box();
    assert_eq!(bbox.min_pt, Point::new(5.0, 7.0));
    assert_eq!(bbox.max_pt, Point::new(15.0, 13.0));
}

#[test]
fn test_rectangle_bounds_are_itself() {
    let rect = Rectangle::new(Point::new(2.0, 3.0), 4.0, 5.0).with_fill(Color::rgb(1, 2, 3));
    assert_eq!(
        rect.to_svg(),
        "\t<rect x=\"2\" y=\"3\" width=\"4\" height=\"5\" fill=\"rgb(1,2,3)\" />\n"
    );
    assert_eq!(rect.bounding_box(), Rect::at(Point::new(2.0, 3.0), 4.0, 5.0));
}

#[test]
fn test_line_has_no_fill() {
    let line = Line::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0))
        .with_stroke(Stroke::new(2.0, NamedColor::Green));
    assert_eq!(
        line.to_svg(),
        "\t<line x1=\"0\" y1=\"0\" x2=\"3\" y2=\"4\" stroke-width=\"2\" stroke=\"rgb(0,128,0)\" />\n"
    );
}

#[test]
fn test_line_bounds_either_ordering() {
    let forward = Line::new(Point::new(1.0, 9.0), Point::new(7.0, 2.0));
    let backward = Line::new(Point::new(7.0, 2.0), Point::new(1.0, 9.0));
    let expected = Rect {
        min_pt: Point::new(1.0, 2.0),
        max_pt: Point::new(7.0, 9.0),
    };
    assert_eq!(forward.bounding_box(), expected);
    assert_eq!(backward.bounding_box(), expected);
}

#[test]
fn test_polygon_points() {
    let mut polygon = Polygon::new().with_fill(NamedColor::Yellow);
    polygon
        .add_point((0.0, 0.0))
        .add_point((4.0, 0.0))
        .add_point((2.0, 3.5));
    assert_eq!(
        polygon.to_svg(),
        "\t<polygon points=\"0,0 4,0 2,3.5 \" fill=\"rgb(255,255,0)\" />\n"
    );
    assert_eq!(polygon.points().len(), 3);
    let bbox = polygon.bounding_box();
    assert_eq!(bbox.min_pt, Point::new(0.0, 0.0));
    assert_eq!(bbox.max_pt, Point::new(4.0, 3.5));
}

#[test]
fn test_empty_polygon() {
    let polygon = Polygon::new();
    assert_eq!(polygon.bounding_box(), Rect::zero());
    assert_eq!(
        polygon.to_svg(),
        "\t<polygon points=\"\" fill=\"transparent\" />\n"
    );
}

#[test]
fn test_polygon_bounds_exclude_origin() {
    let polygon = Polygon::new().with_points([(5.0, 5.0), (10.0, 7.0)]);
    let bbox = polygon.bounding_box();
    assert_eq!(bbox.min_pt, Point::new(5.0, 5.0));
    assert_eq!(bbox.max_pt, Point::new(10.0, 7.0));
}

#[test]
fn test_polyline() {
    let polyline = Polyline::from_points(
        vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)],
        Color::Transparent,
        Stroke::new(0.5, NamedColor::Purple).non_scaling(),
    );
    assert_eq!(
        polyline.to_svg(),
        "\t<polyline points=\"0,0 1,1 \" fill=\"transparent\" stroke-width=\"0.5\" \
         stroke=\"rgb(128,0,128)\" vector-effect=\"non-scaling-stroke\" />\n"
    );
    assert_eq!(Polyline::new().bounding_box(), Rect::zero());
}

#[test]
fn test_path_single_subpath() {
    let mut path = Path::new();
    path.add_point((0.0, 0.0))
        .add_point((10.0, 0.0))
        .add_point((10.0, 10.0));
    assert_eq!(
        path.to_svg(),
        "\t<path d=\"M0,0 10,0 10,10 z \" fill-rule=\"evenodd\" fill=\"transparent\" />\n"
    );
    assert_eq!(
        path.bounding_box(),
        Rect {
            min_pt: Point::new(0.0, 0.0),
            max_pt: Point::new(10.0, 10.0),
        }
    );
}

#[test]
fn test_path_multiple_subpaths() {
    let mut path = Path::new().with_fill(NamedColor::Blue);
    path.add_point((0.0, 0.0))
        .add_point((10.0, 0.0))
        .add_point((10.0, 10.0))
        .add_point((0.0, 10.0));
    path.start_new_subpath();
    path.add_point((2.0, 2.0))
        .add_point((8.0, 2.0))
        .add_point((8.0, 8.0));

    assert_eq!(
        path.data(),
        "M0,0 10,0 10,10 0,10 z M2,2 8,2 8,8 z "
    );
    assert_eq!(path.subpaths().len(), 2);
}

#[test]
fn test_empty_path_is_guarded() {
    let mut path = Path::new();
    path.start_new_subpath();
    assert_eq!(path.bounding_box(), Rect::zero());
    assert_eq!(
        path.to_svg(),
        "\t<path d=\"\" fill-rule=\"evenodd\" fill=\"transparent\" />\n"
    );
}

#[test]
fn test_path_bounds_seeded_from_first_point() {
    let mut path = Path::new();
    path.add_point((5.0, 6.0)).add_point((7.0, 9.0));
    let bbox = path.bounding_box();
    assert_eq!(bbox.min_pt, Point::new(5.0, 6.0));
    assert_eq!(bbox.max_pt, Point::new(7.0, 9.0));
}

#[test]
fn test_text() {
    let text = Text::new(Point::new(5.0, 10.0), "Hello")
        .with_fill(NamedColor::Silver)
        .with_font(Font::new(10.0, "Verdana"));
    assert_eq!(
        text.to_svg(),
        "\t<text x=\"5\" y=\"10\" fill=\"rgb(192,192,192)\" font-size=\"10\" \
         font-family=\"Verdana\" >Hello</text>\n"
    );
    assert_eq!(text.bounding_box(), Rect::from_point(Point::new(5.0, 10.0)));
}

#[test]
fn test_text_content_escaped() {
    let text = Text::new(Point::new(0.0, 0.0), "a < b & c");
    assert!(text.to_svg().contains(">a &lt; b &amp; c</text>"));
}

#[test]
fn test_translate_composes() {
    let mut a = Circle::new(Point::new(1.0, 1.0), 2.0);
    a.translate(Point::new(2.0, 3.0));
    a.translate(Point::new(-1.0, 4.0));

    let mut b = Circle::new(Point::new(1.0, 1.0), 2.0);
    b.translate(Point::new(1.0, 7.0));

    assert_eq!(a, b);
}

#[test]
fn test_shape_enum_dispatch() {
    let shapes: Vec<Shape> = vec![
        Circle::new(Point::new(0.0, 0.0), 2.0).into(),
        Ellipse::new(Point::new(0.0, 0.0), 2.0, 4.0).into(),
        Rectangle::new(Point::new(0.0, 0.0), 1.0, 1.0).into(),
        Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)).into(),
        Polygon::new().into(),
        Polyline::new().into(),
        Path::new().into(),
        Text::new(Point::new(0.0, 0.0), "t").into(),
    ];
    let kinds: Vec<ShapeKind> = shapes.iter().map(SvgShape::kind).collect();
    assert_eq!(
        kinds,
        vec![
            ShapeKind::Circle,
            ShapeKind::Ellipse,
            ShapeKind::Rectangle,
            ShapeKind::Line,
            ShapeKind::Polygon,
            ShapeKind::Polyline,
            ShapeKind::Path,
            ShapeKind::Text,
        ]
    );
    for shape in &shapes {
        let svg = shape.to_svg();
        assert!(svg.starts_with(&format!("\t<{} ", shape.kind())));
    }
}

#[test]
fn test_transparent_fill_is_rendered_not_omitted() {
    let polyline = Polyline::new()
        .with_stroke(Stroke::new(1.0, NamedColor::Black))
        .with_points([(0.0, 0.0), (4.0, 2.0)]);
    assert_eq!(
        polyline.to_svg(),
        "\t<polyline points=\"0,0 4,2 \" fill=\"transparent\" \
         stroke-width=\"1\" stroke=\"rgb(0,0,0)\" />\n"
    );
}

#[test]
fn test_negative_extents_keep_bounds_ordered() {
    let rect = Rectangle::new(Point::new(10.0, 10.0), -4.0, -6.0);
    let bbox = rect.bounding_box();
    assert_eq!(bbox.min_pt, Point::new(6.0, 4.0));
    assert_eq!(bbox.max_pt, Point::new(10.0, 10.0));

    let circle = Circle::new(Point::new(0.0, 0.0), -4.0);
    let bbox = circle.bounding_box();
    assert!(bbox.min_pt.x <= bbox.max_pt.x);
    assert!(bbox.min_pt.y <= bbox.max_pt.y);
    assert_eq!(bbox.width(), 4.0);
}
