use svgkit_core::Point;
use svgkit_designer::{Color, NamedColor, Path, Shape, Stroke, SvgShape};

#[test]
fn test_shape_json_preserves_rendering() {
    let mut path = Path::new()
        .with_fill(NamedColor::Orange)
        .with_stroke(Stroke::new(1.0, Color::rgb(10, 20, 30)));
    path.add_point((0.0, 0.0)).add_point((4.0, 0.0)).add_point((4.0, 4.0));
    path.start_new_subpath();
    path.add_point(Point::new(1.0, 1.0)).add_point((2.0, 1.0));
    let shape = Shape::from(path);

    let json = serde_json::to_string(&shape).unwrap();
    let back: Shape = serde_json::from_str(&json).unwrap();

    assert_eq!(back, shape);
    assert_eq!(back.to_svg(), shape.to_svg());
}

#[test]
fn test_color_json_form() {
    assert_eq!(
        serde_json::to_string(&Color::Transparent).unwrap(),
        "\"transparent\""
    );
    assert_eq!(
        serde_json::to_string(&Color::rgb(1, 2, 3)).unwrap(),
        "{\"rgb\":[1,2,3]}"
    );
    let named: NamedColor = serde_json::from_str("\"fuchsia\"").unwrap();
    assert_eq!(Color::from(named), Color::rgb(255, 0, 255));
}
