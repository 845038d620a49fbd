use thiserror::Error;

/// Errors raised by the raster backend.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The generated document was rejected by the SVG parser.
    #[error("SVG parsing error: {0}")]
    Parse(String),

    /// The requested output size cannot be allocated.
    #[error("invalid raster size {width}x{height} at scale {scale}")]
    Size { width: f32, height: f32, scale: f32 },

    /// PNG encoding failed.
    #[error("image encoding error: {0}")]
    Encode(#[from] image::ImageError),
}
