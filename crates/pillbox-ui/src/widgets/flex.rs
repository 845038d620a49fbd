use pillbox_engine::coords::{CornerRadii, Rect, Vec2};
use pillbox_engine::paint::Color;

use crate::constraints::{inset_rect, Constraints, Edges, LayoutCtx};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

// ── Align ─────────────────────────────────────────────────────────────────

/// Cross-axis placement of children inside a [`Column`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

// ── Column ────────────────────────────────────────────────────────────────

/// Vertical stack. Children keep their natural width and are placed by
/// `cross_align`; `spacing` separates consecutive children.
///
/// # Example
/// ```rust,ignore
/// Column::new()
///     .padding_all(25.6)
///     .spacing(12.8)
///     .background(Color::from_srgb_u8(0xd2, 0xd9, 0xd4, 255))
///     .child(CaptionBox::new(["short1", "short"]).align(TextAlign::Center))
/// ```
pub struct Column {
    children: Vec<Element>,
    spacing: f32,
    padding: Edges,
    cross_align: Align,
    background: Option<Color>,
}

impl Column {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            spacing: 0.0,
            padding: Edges::default(),
            cross_align: Align::Center,
            background: None,
        }
    }

    pub fn spacing(mut self, v: f32) -> Self {
        self.spacing = v;
        self
    }

    pub fn padding_all(mut self, v: f32) -> Self {
        self.padding = Edges::all(v);
        self
    }

    pub fn cross_align(mut self, align: Align) -> Self {
        self.cross_align = align;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    fn child_x(&self, inner: Rect, child_w: f32) -> f32 {
        match self.cross_align {
            Align::Start => inner.origin.x,
            Align::Center => inner.origin.x + (inner.size.x - child_w) * 0.5,
            Align::End => inner.origin.x + (inner.size.x - child_w),
        }
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Column {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let child_c = constraints.shrink(self.padding);

        let mut total_h = self.padding.v();
        let mut max_child_w: f32 = 0.0;
        for (i, child) in self.children.iter().enumerate() {
            let s = child.measure(child_c, ctx);
            total_h += s.y;
            if i + 1 < self.children.len() {
                total_h += self.spacing;
            }
            max_child_w = max_child_w.max(s.x);
        }

        constraints.constrain(Vec2::new(max_child_w + self.padding.h(), total_h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if let Some(bg) = self.background {
            painter.fill_rounded_rect(rect, CornerRadii::zero(), bg);
        }

        let ctx = painter.layout_ctx();
        let inner = inset_rect(rect, self.padding);
        let child_c = Constraints::loose(inner.size);

        let mut y = inner.origin.y;
        for child in &self.children {
            let s = child.measure(child_c, &ctx);
            let x = self.child_x(inner, s.x);
            child.paint(painter, Rect::new(x, y, s.x, s.y));
            y += s.y + self.spacing;
        }
    }
}
