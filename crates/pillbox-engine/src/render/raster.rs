//! CPU rasterization of SVG documents using resvg.
//!
//! Text is shaped against the system font database, so the PNG shows the
//! requested family whenever it is installed and a fallback face otherwise.

use std::io::Cursor;

use resvg::{tiny_skia, usvg};

use super::RenderError;

/// Rasterizes `svg` at `scale` device pixels per logical pixel and encodes it as PNG.
pub fn rasterize_png(svg: &str, scale: f32) -> Result<Vec<u8>, RenderError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options).map_err(|e| RenderError::Parse(e.to_string()))?;

    let size = tree.size();
    let invalid = || RenderError::Size { width: size.width(), height: size.height(), scale };
    if !scale.is_finite() || scale <= 0.0 {
        return Err(invalid());
    }
    let px = size.to_int_size().scale_by(scale).ok_or_else(invalid)?;
    let mut pixmap = tiny_skia::Pixmap::new(px.width(), px.height()).ok_or_else(invalid)?;

    resvg::render(&tree, tiny_skia::Transform::from_scale(scale, scale), &mut pixmap.as_mut());

    let image = image::RgbaImage::from_raw(px.width(), px.height(), unpremultiply_alpha(pixmap.data()))
        .ok_or_else(invalid)?;
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, image::ImageFormat::Png)?;

    log::debug!("raster: {}x{} px png ({} bytes)", px.width(), px.height(), out.get_ref().len());
    Ok(out.into_inner())
}

/// tiny-skia produces premultiplied pixels; PNG stores straight alpha.
fn unpremultiply_alpha(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());
    for chunk in data.chunks_exact(4) {
        let a = chunk[3];
        if a == 0 {
            result.extend_from_slice(&[0, 0, 0, 0]);
        } else {
            let f = 255.0 / a as f32;
            let c = |v: u8| (v as f32 * f).round().min(255.0) as u8;
            result.extend_from_slice(&[c(chunk[0]), c(chunk[1]), c(chunk[2]), a]);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="2" viewBox="0 0 4 2"><rect width="4" height="2" fill="#ff0000"/></svg>"##;

    #[test]
    fn unpremultiply_restores_straight_channels() {
        assert_eq!(unpremultiply_alpha(&[64, 0, 32, 128]), vec![128, 0, 64, 128]);
        assert_eq!(unpremultiply_alpha(&[9, 9, 9, 0]), vec![0, 0, 0, 0]);
    }

    #[test]
    fn png_has_scaled_dimensions() {
        let png = rasterize_png(SQUARE, 2.0).unwrap();
        assert_eq!(&png[1..4], b"PNG");
        let decoded = image::load_from_memory_with_format(&png, image::ImageFormat::Png).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 4));
    }

    #[test]
    fn non_positive_scale_is_rejected() {
        assert!(matches!(rasterize_png(SQUARE, 0.0), Err(RenderError::Size { .. })));
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        assert!(matches!(rasterize_png("<svg", 1.0), Err(RenderError::Parse(_))));
    }
}
