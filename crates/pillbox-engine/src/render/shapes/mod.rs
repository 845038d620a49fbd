//! Per-shape SVG writers.

pub mod fillet;
pub mod rounded_rect;
pub mod text;

use crate::paint::Color;

/// Formats a coordinate with at most two decimals and no trailing zeros.
pub fn num(v: f32) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-0" => "0".to_string(),
        s => s.to_string(),
    }
}

/// ` fill="#rrggbb"` plus ` fill-opacity` when the color is translucent.
pub fn fill_attrs(color: Color) -> String {
    let hex = color.to_hex_rgb();
    if color.is_opaque() {
        format!(r#" fill="{hex}""#)
    } else {
        format!(r#" fill="{hex}" fill-opacity="{}""#, num(color.a))
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn num_trims() {
        assert_eq!(num(3.0), "3");
        assert_eq!(num(2.5), "2.5");
        assert_eq!(num(1.234), "1.23");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(-4.1), "-4.1");
    }

    #[test]
    fn translucent_fill_carries_opacity() {
        assert_eq!(fill_attrs(Color::white()), r##" fill="#ffffff""##);
        let half = Color::from_srgb_u8(255, 0, 0, 128);
        assert_eq!(fill_attrs(half), r##" fill="#ff0000" fill-opacity="0.5""##);
    }

    #[test]
    fn escape() {
        assert_eq!(escape_xml(r#"a<b & "c">"#), "a&lt;b &amp; &quot;c&quot;&gt;");
    }
}
