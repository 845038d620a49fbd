use pillbox_engine::coords::{CornerRadii, Rect, Vec2};
use pillbox_engine::paint::Color;
use pillbox_engine::scene::shapes::TextCmd;
use pillbox_engine::scene::{DrawList, ZIndex};
use pillbox_engine::text::{FontId, FontSystem};

use crate::constraints::LayoutCtx;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList`. Backgrounds land on
/// [`ZIndex::BACKGROUND`] and text on [`ZIndex::TEXT`], so a line's text is
/// never covered by a neighbour's accent regardless of paint order.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList, font_system: &'a FontSystem) -> Self {
        Self { draw_list, font_system }
    }

    /// Returns a [`LayoutCtx`] borrowing this painter's font system.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx<'a> {
        LayoutCtx { fonts: self.font_system }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Rounded rectangle with per-corner radii. Zero radii give square corners.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radii: CornerRadii, fill: Color) {
        self.draw_list.push_rounded_rect(ZIndex::BACKGROUND, rect, radii, fill);
    }

    /// Concave fillet: `rect` minus the rounded rectangle `(rect, radii)`.
    pub fn fill_fillet(&mut self, rect: Rect, radii: CornerRadii, fill: Color) {
        self.draw_list.push_fillet(ZIndex::BACKGROUND, rect, radii, fill);
    }

    /// One line of text with its line box's top-left at `origin`.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: Option<FontId>,
        family: Option<&str>,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        let text = text.into();
        let extent = self.font_system.measure_line(&text, font, size);
        let baseline = self.font_system.baseline(font, size);
        self.draw_list.push_text(ZIndex::TEXT, TextCmd {
            text,
            family: family.map(str::to_string),
            size,
            color,
            origin,
            extent,
            baseline,
        });
    }
}
