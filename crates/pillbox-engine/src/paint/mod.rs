//! Paint model shared between UI and renderers.
//!
//! Captions only ever fill with solid colors, so the color type is the whole
//! paint model. Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
