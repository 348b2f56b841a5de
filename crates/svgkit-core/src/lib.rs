//! # svgkit Core
//!
//! Core types for svgkit: geometry primitives with bounding-box
//! aggregation, the document layout with its coordinate transform, and
//! the shared error type.

pub mod error;
pub mod geometry;
pub mod layout;

pub use error::{Result, SvgError};
pub use geometry::{max_point, min_point, Dimensions, Point, Rect};
pub use layout::{Layout, Origin};
