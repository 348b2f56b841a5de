//! # svgkit
//!
//! Renders scenes of geometric primitives into SVG documents whose viewBox
//! exactly bounds the drawn content.
//!
//! ## Architecture
//!
//! svgkit is organized as a workspace with multiple crates:
//!
//! 1. **svgkit-core** - Geometry, bounding-box aggregation, layout transform, errors
//! 2. **svgkit-designer** - Styles, shapes, document assembly, line charts
//! 3. **svgkit-settings** - JSON/TOML configuration
//! 4. **svgkit** - The `svgkit` binary that ties them together

pub mod demo;

pub use svgkit_core::{
    max_point, min_point, Dimensions, Layout, Origin, Point, Rect, Result, SvgError,
};
pub use svgkit_designer::{
    Circle, Color, Document, Ellipse, Fill, Font, Line, LineChart, NamedColor, Path, Polygon,
    Polyline, Rectangle, Shape, ShapeKind, Stroke, SvgShape, Text,
};
pub use svgkit_settings::{Config, LayoutSettings, OutputSettings};

use tracing_subscriber::EnvFilter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Environment variable that switches log output to JSON lines
pub const LOG_FORMAT_ENV: &str = "SVGKIT_LOG_FORMAT";

/// Builds the log filter from `RUST_LOG` style directives, falling back to
/// INFO when none are set or they fail to parse.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so stdout stays free for document text
/// - RUST_LOG environment variable support
/// - JSON output when `SVGKIT_LOG_FORMAT=json`
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let env_filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok());
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true),
            )
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
