//! Pillbox engine crate.
//!
//! This crate owns the renderer-agnostic pieces used by higher layers:
//! geometry, paint, the draw stream, text measurement, and the SVG / PNG
//! backends that turn a draw stream into an image.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
