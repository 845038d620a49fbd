//! Font loading and text measurement.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem, LINE_HEIGHT_EM};
