//! svgkit Settings Crate
//!
//! Handles loading, validating and saving svgkit configuration.

pub mod config;

pub use config::{Config, LayoutSettings, OutputSettings};
