use crate::coords::{CornerRadii, Rect};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Rounded rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub fill: Color,
}

impl RoundedRectCmd {
    #[inline]
    pub fn new(rect: Rect, radii: CornerRadii, fill: Color) -> Self {
        Self { rect, radii, fill }
    }
}

impl DrawList {
    /// Records a rounded rectangle with per-corner radii.
    #[inline]
    pub fn push_rounded_rect(&mut self, z: ZIndex, rect: Rect, radii: CornerRadii, fill: Color) {
        self.push(z, DrawCmd::RoundedRect(RoundedRectCmd::new(rect, radii, fill)));
    }
}
