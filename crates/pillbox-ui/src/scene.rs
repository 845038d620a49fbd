use pillbox_engine::coords::{Rect, Vec2};
use pillbox_engine::scene::DrawList;
use pillbox_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Element;

// ── UiScene ───────────────────────────────────────────────────────────────

/// Owns the resources shared across renders: loaded fonts and the draw list
/// that each [`frame`](Self::frame) call repopulates.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let (size, draw_list) = ui.frame_fit(
///     CaptionBox::new(["Align Left", "with two lines"]).align(TextAlign::Left).into(),
/// );
/// let svg = SvgRenderer::new().render(draw_list, size, None).to_string();
/// ```
pub struct UiScene {
    pub font_system: FontSystem,
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new(), draw_list: DrawList::new() }
    }

    /// Load a TrueType / OpenType font used for text measurement.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Measures the root under `viewport` and paints it filling the viewport.
    ///
    /// The returned list is valid until the next call.
    pub fn frame(&mut self, root: Element, viewport: Vec2) -> &mut DrawList {
        self.draw_list.clear();
        let ctx = LayoutCtx { fonts: &self.font_system };
        // Pre-pass so children resolve their natural sizes; the root always
        // occupies the full viewport.
        let _ = root.measure(Constraints::loose(viewport), &ctx);
        self.paint_root(&root, Rect::new(0.0, 0.0, viewport.x, viewport.y));
        &mut self.draw_list
    }

    /// Lays out the root at its natural size and paints it.
    ///
    /// Returns that size alongside the draw list.
    pub fn frame_fit(&mut self, root: Element) -> (Vec2, &mut DrawList) {
        self.draw_list.clear();
        let ctx = LayoutCtx { fonts: &self.font_system };
        let size = root.measure(Constraints::unbounded(), &ctx);
        self.paint_root(&root, Rect::from_origin_size(Vec2::zero(), size));
        log::debug!("frame_fit: {}x{} with {} draw items", size.x, size.y, self.draw_list.len());
        (size, &mut self.draw_list)
    }

    fn paint_root(&mut self, root: &Element, rect: Rect) {
        let mut painter = Painter::new(&mut self.draw_list, &self.font_system);
        root.paint(&mut painter, rect);
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
