//! SVG document assembly.
//!
//! A [`Document`] is an append-only log: every appended shape is rendered
//! immediately and its bounding box is folded into the running `region`.
//! Shapes themselves are not retained. The root element's size and viewBox
//! are derived from the region when the document is serialized.
//!
//! The document's [`Layout`] is carried for callers that want to transform
//! coordinates before building shapes; it is not applied to appended
//! geometry.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use svgkit_core::{Layout, Rect, Result, SvgError};

use crate::markup::{attribute, attribute_with_unit, elem_end};
use crate::model::SvgShape;

/// Length unit appended to the root `width`/`height` attributes.
pub const DEFAULT_UNIT: &str = "px";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" standalone=\"no\" ?>\n";
const DOCTYPE: &str = "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \
                       \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n";
const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone)]
pub struct Document {
    file_name: PathBuf,
    layout: Layout,
    unit: String,
    body: String,
    region: Rect,
    shape_count: usize,
}

impl Document {
    pub fn new(file_name: impl Into<PathBuf>, layout: Layout) -> Self {
        Self {
            file_name: file_name.into(),
            layout,
            unit: DEFAULT_UNIT.to_string(),
            body: String::new(),
            region: Rect::zero(),
            shape_count: 0,
        }
    }

    /// Replaces the length unit suffix (appended verbatim).
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn file_name(&self) -> &Path {
        &self.file_name
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Union of the bounding boxes of every appended shape, seeded at the
    /// origin.
    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn shape_count(&self) -> usize {
        self.shape_count
    }

    pub fn is_empty(&self) -> bool {
        self.shape_count == 0
    }

    /// Renders `shape` into the body and grows the region to cover it.
    pub fn append<S: SvgShape + ?Sized>(&mut self, shape: &S) -> &mut Self {
        let bbox = shape.bounding_box();
        tracing::trace!(
            kind = %shape.kind(),
            min_x = bbox.min_pt.x,
            min_y = bbox.min_pt.y,
            max_x = bbox.max_pt.x,
            max_y = bbox.max_pt.y,
            "Appending shape"
        );
        self.body.push_str(&shape.to_svg());
        self.region.include_rect(&bbox);
        self.shape_count += 1;
        self
    }

    /// Complete document text. Does not modify the document.
    pub fn to_svg(&self) -> String {
        let width = self.region.width();
        let height = self.region.height();
        let view_box = format!(
            "{} {} {} {}",
            self.region.min_pt.x, self.region.min_pt.y, width, height
        );

        let mut s = String::with_capacity(self.body.len() + 256);
        s.push_str(XML_DECLARATION);
        s.push_str(DOCTYPE);
        s.push_str("<svg ");
        s.push_str(&attribute_with_unit("width", width, &self.unit));
        s.push_str(&attribute_with_unit("height", height, &self.unit));
        s.push_str(&attribute("xmlns", SVG_NAMESPACE));
        s.push_str(&attribute("viewBox", view_box));
        s.push_str(&attribute("version", "1.1"));
        s.push_str(">\n");
        s.push_str(&self.body);
        s.push_str(&elem_end("svg"));
        s
    }

    /// Writes the document to its configured file name.
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.file_name)
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let svg = self.to_svg();

        let result = File::create(path).and_then(|file| {
            let mut writer = BufWriter::new(file);
            writer.write_all(svg.as_bytes())?;
            writer.flush()
        });

        match result {
            Ok(()) => {
                tracing::info!(
                    path = %path.display(),
                    shapes = self.shape_count,
                    bytes = svg.len(),
                    "Saved SVG document"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to save SVG document");
                Err(SvgError::io(path, e))
            }
        }
    }
}
