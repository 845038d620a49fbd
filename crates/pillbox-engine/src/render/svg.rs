use std::fmt::Write as _;

use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::shapes::{self, num};

/// Serializes a draw stream into a standalone SVG document.
///
/// The output buffer is owned by the renderer and reused across calls.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    buf: String,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes every item of `draw_list` in paint order into an SVG document
    /// of `viewport` logical pixels, optionally over a solid `background`.
    ///
    /// The returned slice is valid until the next call to `render`.
    pub fn render(&mut self, draw_list: &mut DrawList, viewport: Vec2, background: Option<Color>) -> &str {
        self.buf.clear();
        let (w, h) = (num(viewport.x.max(0.0)), num(viewport.y.max(0.0)));
        let _ = writeln!(
            self.buf,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );

        if let Some(bg) = background.filter(|c| c.a > 0.0) {
            let _ = writeln!(self.buf, r#"<rect width="{w}" height="{h}"{}/>"#, shapes::fill_attrs(bg));
        }

        let mut count = 0usize;
        for item in draw_list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::RoundedRect(cmd) => shapes::rounded_rect::write(&mut self.buf, cmd),
                DrawCmd::Fillet(cmd) => shapes::fillet::write(&mut self.buf, cmd),
                DrawCmd::Text(cmd) => shapes::text::write(&mut self.buf, cmd),
            }
            count += 1;
        }

        self.buf.push_str("</svg>\n");
        log::debug!("svg: wrote {count} draw items into {w}x{h} document");
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, Rect};
    use crate::scene::shapes::TextCmd;
    use crate::scene::ZIndex;

    #[test]
    fn empty_list_is_a_bare_document() {
        let mut list = DrawList::new();
        let svg = SvgRenderer::new().render(&mut list, Vec2::new(100.0, 50.0), None).to_string();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 100 50""#));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn background_precedes_shapes_and_text_follows_pills() {
        let mut list = DrawList::new();
        list.push_text(ZIndex::TEXT, TextCmd {
            text: "hi".into(),
            family: None,
            size: 10.0,
            color: Color::black(),
            origin: Vec2::new(1.0, 1.0),
            extent: Vec2::new(11.0, 12.0),
            baseline: 9.0,
        });
        list.push_rounded_rect(ZIndex::BACKGROUND, Rect::new(0.0, 0.0, 20.0, 14.0), CornerRadii::all(3.0), Color::white());

        let svg = SvgRenderer::new()
            .render(&mut list, Vec2::new(20.0, 14.0), Some(Color::from_srgb_u8(0xd2, 0xd9, 0xd4, 255)))
            .to_string();

        let bg = svg.find("<rect").unwrap();
        let pill = svg.find("<path").unwrap();
        let text = svg.find("<text").unwrap();
        assert!(bg < pill && pill < text);
        assert!(svg.contains("#d2d9d4"));
    }

    #[test]
    fn renderer_buffer_is_reset_between_calls() {
        let mut renderer = SvgRenderer::new();
        let mut list = DrawList::new();
        list.push_rounded_rect(ZIndex::BACKGROUND, Rect::new(0.0, 0.0, 4.0, 4.0), CornerRadii::zero(), Color::white());
        let first = renderer.render(&mut list, Vec2::new(4.0, 4.0), None).to_string();
        let second = renderer.render(&mut list, Vec2::new(4.0, 4.0), None).to_string();
        assert_eq!(first, second);
    }
}
