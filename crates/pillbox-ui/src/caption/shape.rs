use pillbox_engine::coords::{CornerRadii, Rect, Vec2};
use pillbox_engine::paint::Color;

use super::corners::{Accent, LineRounding};

/// The line's background rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct PillShape {
    pub rect: Rect,
    /// Top-left, top-right, bottom-right, bottom-left.
    pub radii: CornerRadii,
    pub fill: Color,
}

/// A concave fillet beside a square corner.
///
/// The painted area is `rect` minus the rounded rectangle `(rect, radii)`.
/// Only the corners facing away from the line are rounded; the edge that
/// touches the line stays flush against it.
#[derive(Debug, Clone, PartialEq)]
pub struct AccentShape {
    pub accent: Accent,
    pub rect: Rect,
    pub radii: CornerRadii,
    pub fill: Color,
}

/// Everything one caption line draws behind its text.
#[derive(Debug, Clone, PartialEq)]
pub struct LineShapes {
    pub pill: PillShape,
    pub accents: Vec<AccentShape>,
}

/// Builds the pill and accent shapes for one laid-out line.
///
/// `radius` is clamped to half of the line's shorter side, the same limit a
/// rounded-rect renderer applies, so each accent sits exactly one effective
/// radius outside the line edge. A non-positive radius yields square corners
/// and no accents.
pub fn line_shapes(rect: Rect, rounding: &LineRounding, radius: f32, fill: Color) -> LineShapes {
    let r = effective_radius(rect, radius);
    let pill = PillShape { rect, radii: rounding.corners.radii(r), fill };

    let accents = if r > 0.0 {
        rounding
            .accents
            .iter()
            .map(|accent| accent_shape(rect, accent, r, fill))
            .collect()
    } else {
        Vec::new()
    };

    LineShapes { pill, accents }
}

/// One radius for every line of a caption: `radius` limited to half the
/// shorter side of the smallest line, so all pills and accent offsets agree.
pub fn shared_radius<I>(radius: f32, line_sizes: I) -> f32
where
    I: IntoIterator<Item = Vec2>,
{
    if !radius.is_finite() {
        return 0.0;
    }
    line_sizes
        .into_iter()
        .map(|s| s.x.min(s.y) * 0.5)
        .fold(radius, f32::min)
        .max(0.0)
}

fn effective_radius(rect: Rect, radius: f32) -> f32 {
    if !radius.is_finite() || rect.is_empty() {
        return 0.0;
    }
    radius.clamp(0.0, rect.size.x.min(rect.size.y) * 0.5)
}

fn accent_shape(line: Rect, accent: Accent, r: f32, fill: Color) -> AccentShape {
    let (left_x, right_x) = (line.left() - r, line.right());
    let (top, bottom, h) = (line.top(), line.bottom(), line.size.y);

    let (rect, radii) = match accent {
        Accent::TopLeft => (Rect::new(left_x, top, r, r), CornerRadii::new(0.0, r, 0.0, 0.0)),
        Accent::BottomLeft => (Rect::new(left_x, bottom - r, r, r), CornerRadii::new(0.0, 0.0, r, 0.0)),
        Accent::TopRight => (Rect::new(right_x, top, r, r), CornerRadii::new(r, 0.0, 0.0, 0.0)),
        Accent::BottomRight => (Rect::new(right_x, bottom - r, r, r), CornerRadii::new(0.0, 0.0, 0.0, r)),
        Accent::LeftMerged => (Rect::new(left_x, top, r, h), CornerRadii::new(0.0, r, r, 0.0)),
        Accent::RightMerged => (Rect::new(right_x, top, r, h), CornerRadii::new(r, 0.0, 0.0, r)),
    };

    AccentShape { accent, rect, radii, fill }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caption::corners::{decide, CornerSet, TextAlign};

    const LINE: Rect = Rect::new(100.0, 50.0, 80.0, 30.0);

    fn rounding(corners: CornerSet, accents: &[Accent], align: TextAlign) -> LineRounding {
        // Find a real decision with the wanted accents rather than hand-building one.
        let candidates: [&[&str]; 4] = [&["aaaa", "aa"], &["aa", "aaaa"], &["aaaa", "aa", "aaaa"], &["aa", "aa"]];
        for lines in candidates {
            for r in decide(lines, Some(align)) {
                if r.corners == corners && r.accents.as_slice() == accents {
                    return r;
                }
            }
        }
        panic!("no decision with {corners:?} / {accents:?}");
    }

    #[test]
    fn pill_radii_follow_corner_flags() {
        let lines = ["Align Left", "with two lines", "Third Line"];
        let decisions = decide(&lines, Some(TextAlign::Left));
        let shapes = line_shapes(LINE, &decisions[1], 6.0, Color::white());
        assert_eq!(shapes.pill.rect, LINE);
        assert_eq!(shapes.pill.radii, CornerRadii::new(0.0, 6.0, 6.0, 0.0));
        assert!(shapes.accents.is_empty());
    }

    #[test]
    fn accent_offset_equals_radius() {
        let r = rounding(
            CornerSet { top_left: false, top_right: false, bottom_right: true, bottom_left: true },
            &[Accent::TopLeft, Accent::TopRight],
            TextAlign::Center,
        );
        let shapes = line_shapes(LINE, &r, 6.0, Color::white());
        let [left, right] = shapes.accents.as_slice() else { panic!("expected two accents") };

        assert_eq!(left.accent, Accent::TopLeft);
        assert_eq!(left.rect, Rect::new(94.0, 50.0, 6.0, 6.0));
        assert_eq!(left.radii, CornerRadii::new(0.0, 6.0, 0.0, 0.0));
        assert_eq!(left.rect.right(), LINE.left());

        assert_eq!(right.accent, Accent::TopRight);
        assert_eq!(right.rect, Rect::new(180.0, 50.0, 6.0, 6.0));
        assert_eq!(right.radii, CornerRadii::new(6.0, 0.0, 0.0, 0.0));
        assert_eq!(right.rect.left(), LINE.right());
    }

    #[test]
    fn bottom_accents_hug_the_bottom_edge() {
        let r = rounding(
            CornerSet { top_left: true, top_right: true, bottom_right: false, bottom_left: false },
            &[Accent::BottomLeft, Accent::BottomRight],
            TextAlign::Center,
        );
        let shapes = line_shapes(LINE, &r, 4.0, Color::white());
        assert_eq!(shapes.accents[0].rect, Rect::new(96.0, 76.0, 4.0, 4.0));
        assert_eq!(shapes.accents[0].radii, CornerRadii::new(0.0, 0.0, 4.0, 0.0));
        assert_eq!(shapes.accents[1].rect, Rect::new(180.0, 76.0, 4.0, 4.0));
        assert_eq!(shapes.accents[1].radii, CornerRadii::new(0.0, 0.0, 0.0, 4.0));
    }

    #[test]
    fn merged_accents_span_full_height() {
        let decisions = decide(&["Align Center", "short", "Third Line"], Some(TextAlign::Center));
        let shapes = line_shapes(LINE, &decisions[1], 5.0, Color::white());
        assert_eq!(shapes.pill.radii, CornerRadii::zero());

        let left = &shapes.accents[0];
        assert_eq!(left.accent, Accent::LeftMerged);
        assert_eq!(left.rect, Rect::new(95.0, 50.0, 5.0, 30.0));
        assert_eq!(left.radii, CornerRadii::new(0.0, 5.0, 5.0, 0.0));

        let right = &shapes.accents[1];
        assert_eq!(right.accent, Accent::RightMerged);
        assert_eq!(right.rect, Rect::new(180.0, 50.0, 5.0, 30.0));
        assert_eq!(right.radii, CornerRadii::new(5.0, 0.0, 0.0, 5.0));
    }

    #[test]
    fn accents_share_the_line_fill() {
        let fill = Color::from_srgb_u8(0xff, 0x68, 0x3e, 255);
        let decisions = decide(&["Align Right", "with two lines", "Third Line"], Some(TextAlign::Right));
        for d in &decisions {
            let shapes = line_shapes(LINE, d, 5.0, fill);
            assert_eq!(shapes.pill.fill, fill);
            assert!(shapes.accents.iter().all(|a| a.fill == fill));
        }
    }

    #[test]
    fn radius_clamped_to_half_line_height() {
        let decisions = decide(&["abc", "xyz"], Some(TextAlign::Center));
        let shapes = line_shapes(LINE, &decisions[1], 100.0, Color::white());
        assert_eq!(shapes.pill.radii, CornerRadii::new(0.0, 0.0, 15.0, 15.0));
        assert!(shapes.accents.iter().all(|a| a.rect.size == Vec2::new(15.0, 15.0)));
    }

    #[test]
    fn zero_radius_draws_square_pill_only() {
        let decisions = decide(&["abc", "xyz"], Some(TextAlign::Center));
        for radius in [0.0, -2.0, f32::NAN] {
            let shapes = line_shapes(LINE, &decisions[0], radius, Color::white());
            assert_eq!(shapes.pill.radii, CornerRadii::zero());
            assert!(shapes.accents.is_empty());
        }
    }

    #[test]
    fn shared_radius_follows_the_smallest_line() {
        let sizes = [Vec2::new(80.0, 30.0), Vec2::new(8.0, 30.0), Vec2::new(80.0, 30.0)];
        assert_eq!(shared_radius(12.0, sizes), 4.0);
        assert_eq!(shared_radius(3.0, sizes), 3.0);
        assert_eq!(shared_radius(f32::NAN, sizes), 0.0);
        assert_eq!(shared_radius(-1.0, sizes), 0.0);
    }
}
