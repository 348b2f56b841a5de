use svgkit_core::{Layout, Point};
use svgkit_designer::{Circle, Document, NamedColor, Stroke};
use tempfile::TempDir;

fn sample(path: impl Into<std::path::PathBuf>) -> Document {
    let mut doc = Document::new(path, Layout::default());
    doc.append(
        &Circle::new(Point::new(50.0, 50.0), 40.0)
            .with_fill(NamedColor::Lime)
            .with_stroke(Stroke::new(2.0, NamedColor::Black)),
    );
    doc
}

#[test]
fn test_save_writes_serialized_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("circle.svg");
    let doc = sample(&path);

    doc.save().unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, doc.to_svg());
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.svg");
    std::fs::write(&path, "stale contents that are much longer than needed").unwrap();

    let doc = Document::new(&path, Layout::default());
    doc.save().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), doc.to_svg());
}

#[test]
fn test_save_to_explicit_path() {
    let dir = TempDir::new().unwrap();
    let doc = sample(dir.path().join("unused.svg"));
    let target = dir.path().join("explicit.svg");

    doc.save_to(&target).unwrap();

    assert!(target.exists());
    assert!(!dir.path().join("unused.svg").exists());
}

#[test]
fn test_save_reports_unwritable_target() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("nested").join("out.svg");
    let doc = sample(&path);

    let err = doc.save().unwrap_err();
    assert!(err.is_io_error());
    assert!(err.to_string().contains("out.svg"));
}

#[test]
fn test_save_is_repeatable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("again.svg");
    let doc = sample(&path);

    doc.save().unwrap();
    let first = std::fs::read_to_string(&path).unwrap();
    doc.save().unwrap();
    let second = std::fs::read_to_string(&path).unwrap();
    assert_eq!(first, second);
}
