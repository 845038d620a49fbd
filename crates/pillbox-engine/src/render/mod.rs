//! Render backends.
//!
//! Backends consume `scene` draw streams in paint order. They carry no
//! decision logic: every shape arrives fully described (rect, radii, fill).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The SVG user space is the logical pixel space; rasterization scales it.

mod error;
pub mod raster;
pub mod shapes;
mod svg;

pub use error::RenderError;
pub use svg::SvgRenderer;
