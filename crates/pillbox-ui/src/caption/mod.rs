//! Caption bubble core.
//!
//! Two pure stages run once per render:
//!
//! 1. [`corners::decide`] maps line character counts and an alignment to a
//!    per-line [`LineRounding`]: which corners are rounded and which concave
//!    accents are needed where neighbouring lines differ in width.
//! 2. [`shape::line_shapes`] turns one line's rounding, its laid-out rect,
//!    a radius and a fill into the pill and accent shapes to draw.
//!
//! Nothing here holds state; every call recomputes from its arguments.

pub mod corners;
pub mod shape;

pub use corners::{decide, decide_lengths, Accent, AccentSet, CornerSet, LineRounding, Side, TextAlign};
pub use shape::{line_shapes, shared_radius, AccentShape, LineShapes, PillShape};
