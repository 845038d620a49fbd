use super::Vec2;

/// Per-corner radii for a rounded rectangle (logical pixels).
///
/// Corners follow CSS shorthand order: top-left, top-right, bottom-right, bottom-left.
/// Negative values are treated as zero.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self::new(r, r, r, r)
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Clamps every radius into `[0, min(w, h) / 2]` so adjacent arcs never overlap.
    #[must_use]
    pub fn clamped_to(self, size: Vec2) -> Self {
        let max = (size.x.min(size.y) * 0.5).max(0.0);
        let c = |r: f32| if r.is_finite() { r.clamp(0.0, max) } else { 0.0 };
        Self::new(c(self.top_left), c(self.top_right), c(self.bottom_right), c(self.bottom_left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_to_half_shorter_side() {
        let r = CornerRadii::new(10.0, 2.0, -1.0, f32::NAN).clamped_to(Vec2::new(40.0, 8.0));
        assert_eq!(r, CornerRadii::new(4.0, 2.0, 0.0, 0.0));
    }

}
