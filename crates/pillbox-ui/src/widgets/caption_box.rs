use pillbox_engine::coords::{Rect, Vec2};
use pillbox_engine::paint::Color;
use pillbox_engine::text::FontId;

use crate::caption::{decide, line_shapes, shared_radius, LineRounding, TextAlign};
use crate::constraints::{Constraints, Edges, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Widget;

// ── CaptionStyle ──────────────────────────────────────────────────────────

/// Visual settings shared by every line of a caption.
///
/// `corner_radius` and `padding` are in em and scale with `font_size`.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionStyle {
    pub font: Option<FontId>,
    /// Family name written into rendered text; measurement uses `font`.
    pub font_family: Option<String>,
    pub font_size: f32,
    pub bg_color: Color,
    pub text_color: Color,
    pub corner_radius: f32,
    pub padding: Edges,
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font: None,
            font_family: None,
            font_size: 16.0,
            bg_color: Color::white(),
            text_color: Color::black(),
            corner_radius: 0.15,
            padding: Edges::symmetric(0.15, 0.4),
        }
    }
}

impl CaptionStyle {
    fn padding_px(&self) -> Edges {
        self.padding.scaled(self.font_size)
    }

    fn radius_px(&self) -> f32 {
        self.corner_radius * self.font_size
    }
}

// ── CaptionBox ────────────────────────────────────────────────────────────

/// A stack of caption lines, each on its own pill-shaped background.
///
/// Lines keep their natural width and are placed by `align`. Corners between
/// lines of different width are squared off and bridged with concave
/// accents so the stack reads as one continuous bubble.
///
/// # Example
/// ```rust,ignore
/// CaptionBox::new(["Align Left", "with two lines", "Third Line"])
///     .align(TextAlign::Left)
///     .bg_color(Color::from_srgb_u8(255, 0, 0, 255))
/// ```
pub struct CaptionBox {
    lines: Vec<String>,
    align: Option<TextAlign>,
    style: CaptionStyle,
}

impl CaptionBox {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            align: None,
            style: CaptionStyle::default(),
        }
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    pub fn style(mut self, style: CaptionStyle) -> Self {
        self.style = style;
        self
    }

    pub fn font(mut self, font: FontId) -> Self {
        self.style.font = Some(font);
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.style.font_family = Some(family.into());
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.style.font_size = size;
        self
    }

    pub fn bg_color(mut self, color: Color) -> Self {
        self.style.bg_color = color;
        self
    }

    pub fn text_color(mut self, color: Color) -> Self {
        self.style.text_color = color;
        self
    }

    /// Corner radius in em.
    pub fn corner_radius(mut self, em: f32) -> Self {
        self.style.corner_radius = em;
        self
    }

    /// Line padding in em.
    pub fn padding(mut self, em: Edges) -> Self {
        self.style.padding = em;
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn alignment(&self) -> Option<TextAlign> {
        self.align
    }

    /// Corner decision for every line, in line order.
    pub fn roundings(&self) -> Vec<LineRounding> {
        decide(&self.lines, self.align)
    }

    fn line_sizes(&self, ctx: &LayoutCtx) -> Vec<Vec2> {
        let pad = self.style.padding_px();
        self.lines
            .iter()
            .map(|line| {
                let text = ctx.fonts.measure_line(line, self.style.font, self.style.font_size);
                Vec2::new(text.x + pad.h(), text.y + pad.v())
            })
            .collect()
    }

    fn line_x(&self, rect: Rect, width: f32) -> f32 {
        match self.align {
            Some(TextAlign::Left) => rect.left(),
            Some(TextAlign::Right) => rect.right() - width,
            Some(TextAlign::Center) | None => rect.left() + (rect.size.x - width) * 0.5,
        }
    }
}

impl Widget for CaptionBox {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let sizes = self.line_sizes(ctx);
        let width = sizes.iter().fold(0.0_f32, |w, s| w.max(s.x));
        let height = sizes.iter().map(|s| s.y).sum();
        constraints.constrain(Vec2::new(width, height))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if self.lines.is_empty() {
            log::warn!("caption with no lines, nothing to paint");
            return;
        }

        let ctx = painter.layout_ctx();
        let sizes = self.line_sizes(&ctx);
        let roundings = self.roundings();
        let pad = self.style.padding_px();
        // Every line shares one radius so accent offsets match across lines.
        let radius = shared_radius(self.style.radius_px(), sizes.iter().copied());

        let mut y = rect.top();
        for ((line, size), rounding) in self.lines.iter().zip(&sizes).zip(&roundings) {
            let line_rect = Rect::new(self.line_x(rect, size.x), y, size.x, size.y);
            let shapes = line_shapes(line_rect, rounding, radius, self.style.bg_color);

            painter.fill_rounded_rect(shapes.pill.rect, shapes.pill.radii, shapes.pill.fill);
            for accent in &shapes.accents {
                painter.fill_fillet(accent.rect, accent.radii, accent.fill);
            }
            painter.text(
                line.as_str(),
                self.style.font,
                self.style.font_family.as_deref(),
                self.style.font_size,
                self.style.text_color,
                Vec2::new(line_rect.left() + pad.left, line_rect.top() + pad.top),
            );

            y += size.y;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caption::Accent;
    use crate::scene::UiScene;
    use pillbox_engine::scene::DrawCmd;

    fn lines_rects(ui: &mut UiScene, caption: CaptionBox) -> (Vec2, Vec<Rect>) {
        let (size, list) = ui.frame_fit(caption.into());
        let rects = list
            .items()
            .iter()
            .filter_map(|item| match &item.cmd {
                DrawCmd::RoundedRect(r) => Some(r.rect),
                _ => None,
            })
            .collect();
        (size, rects)
    }

    #[test]
    fn measure_stacks_lines_at_widest_width() {
        let ui = UiScene::new();
        let ctx = LayoutCtx { fonts: &ui.font_system };
        // 10px font: 5.5px per char, 12px line box, padding 1.5 / 4.
        let caption = CaptionBox::new(["abcd", "ab"]).font_size(10.0);
        let size = caption.measure(Constraints::unbounded(), &ctx);
        assert!((size.x - (22.0 + 8.0)).abs() < 1e-4);
        assert!((size.y - 2.0 * (12.0 + 3.0)).abs() < 1e-4);
    }

    #[test]
    fn lines_follow_alignment() {
        let mut ui = UiScene::new();
        let left = CaptionBox::new(["abcd", "ab"]).font_size(10.0).align(TextAlign::Left);
        let (_, rects) = lines_rects(&mut ui, left);
        assert_eq!(rects.len(), 2);
        assert!((rects[0].left() - rects[1].left()).abs() < 1e-4);

        let right = CaptionBox::new(["abcd", "ab"]).font_size(10.0).align(TextAlign::Right);
        let (_, rects) = lines_rects(&mut ui, right);
        assert!((rects[0].right() - rects[1].right()).abs() < 1e-4);

        let center = CaptionBox::new(["abcd", "ab"]).font_size(10.0);
        let (size, rects) = lines_rects(&mut ui, center);
        let mid = size.x * 0.5;
        assert!((rects[1].left() + rects[1].size.x * 0.5 - mid).abs() < 1e-4);
    }

    #[test]
    fn lines_are_stacked_without_gaps() {
        let mut ui = UiScene::new();
        let (_, rects) = lines_rects(&mut ui, CaptionBox::new(["a", "bb", "c"]).font_size(10.0));
        assert!((rects[0].bottom() - rects[1].top()).abs() < 1e-4);
        assert!((rects[1].bottom() - rects[2].top()).abs() < 1e-4);
    }

    #[test]
    fn paints_accents_and_text() {
        let mut ui = UiScene::new();
        let caption = CaptionBox::new(["Align Left", "with two lines", "Third Line"])
            .font_size(10.0)
            .align(TextAlign::Left);
        let accents: usize = caption.roundings().iter().map(|r| r.accents.len()).sum();
        assert!(accents > 0);

        let (_, list) = ui.frame_fit(caption.into());
        let fillets = list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Fillet(_))).count();
        let texts = list.items().iter().filter(|i| matches!(i.cmd, DrawCmd::Text(_))).count();
        assert_eq!(fillets, accents);
        assert_eq!(texts, 3);
    }

    #[test]
    fn roundings_match_decision_engine() {
        let caption = CaptionBox::new(["Align Left", "with two lines", "Third Line"]).align(TextAlign::Left);
        let r = caption.roundings();
        assert!(r[0].accents.contains(Accent::BottomRight));
        // Interior line: the flush left edge stays square.
        assert!(!r[1].corners.top_left);
        assert!(r[1].corners.top_right);
        assert!(r[2].accents.contains(Accent::TopRight));

        // A wider last line is not overridden, so it rounds its top-left.
        let two = CaptionBox::new(["Align Left", "with two lines"]).align(TextAlign::Left).roundings();
        assert!(two[1].corners.top_left);
    }

    #[test]
    fn empty_caption_paints_nothing() {
        let mut ui = UiScene::new();
        let (size, list) = ui.frame_fit(CaptionBox::new(Vec::<String>::new()).into());
        assert_eq!(size, Vec2::zero());
        assert!(list.is_empty());
    }

    #[test]
    fn text_sits_inside_padding() {
        let mut ui = UiScene::new();
        let (_, list) = ui.frame_fit(CaptionBox::new(["ab"]).font_size(10.0).into());
        let text = list
            .items()
            .iter()
            .find_map(|i| match &i.cmd {
                DrawCmd::Text(t) => Some(t.clone()),
                _ => None,
            })
            .expect("text item");
        assert!((text.origin.x - 4.0).abs() < 1e-4);
        assert!((text.origin.y - 1.5).abs() < 1e-4);
    }

    #[test]
    fn narrow_line_limits_radius_for_whole_caption() {
        let mut ui = UiScene::new();
        // 10px font: the empty line is 8 x 15, so the shared radius is 4.
        let caption = CaptionBox::new(["aaaa", "", "aaaa"])
            .font_size(10.0)
            .corner_radius(1.2)
            .align(TextAlign::Center);
        let (_, list) = ui.frame_fit(caption.into());

        let mut radii = Vec::new();
        for item in list.items() {
            match &item.cmd {
                DrawCmd::RoundedRect(r) => {
                    let c = r.radii;
                    radii.extend([c.top_left, c.top_right, c.bottom_right, c.bottom_left].into_iter().filter(|v| *v > 0.0));
                }
                DrawCmd::Fillet(f) => radii.push(f.rect.size.x),
                DrawCmd::Text(_) => {}
            }
        }
        assert!(!radii.is_empty());
        assert!(radii.iter().all(|r| (r - 4.0).abs() < 1e-4), "{radii:?}");
    }
}
