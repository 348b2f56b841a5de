//! Low-level SVG markup fragments.
//!
//! Every attribute is emitted as `name="value" ` (note the trailing space),
//! elements open with a tab and self-closing elements end with `/>\n`.
//! Numbers use `f64`'s `Display`, the shortest representation that
//! round-trips (`10`, `0.5`, `-2.25`).

use std::borrow::Cow;
use std::fmt::Display;

use svgkit_core::Point;

/// Renders `name="value" `.
pub fn attribute(name: &str, value: impl Display) -> String {
    format!("{}=\"{}\" ", name, value)
}

/// Renders `name="value<unit>" `. The unit is appended verbatim.
pub fn attribute_with_unit(name: &str, value: impl Display, unit: &str) -> String {
    format!("{}=\"{}{}\" ", name, value, unit)
}

/// Renders a string attribute, escaping markup-significant characters.
pub fn text_attribute(name: &str, value: &str) -> String {
    attribute(name, escape(value))
}

pub fn elem_start(name: &str) -> String {
    format!("\t<{} ", name)
}

pub fn elem_end(name: &str) -> String {
    format!("</{}>\n", name)
}

pub fn empty_elem_end() -> &'static str {
    "/>\n"
}

/// Renders a `points="x,y x,y " ` list.
pub fn points_attribute(points: &[Point]) -> String {
    let mut s = String::from("points=\"");
    push_coordinates(&mut s, points);
    s.push_str("\" ");
    s
}

/// Appends `x,y ` for each point.
pub fn push_coordinates(out: &mut String, points: &[Point]) {
    for p in points {
        out.push_str(&format!("{},{} ", p.x, p.y));
    }
}

/// Escapes `&`, `<`, `>` and `"` so text stays well-formed inside markup.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
