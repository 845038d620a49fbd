use std::fmt::Write as _;

use crate::coords::Vec2;
use crate::scene::shapes::FilletCmd;

use super::{fill_attrs, num};

/// Cubic Bezier handle length for a quarter circle, as a fraction of the radius.
const KAPPA: f32 = 0.552_284_8;

/// SVG path data for the concave slivers of a fillet box.
///
/// For each rounded corner the sliver is bounded by the box corner itself
/// and a quarter circle centered `r` inward on both axes. Radii are limited
/// to the box's shorter side, so a square box may be filleted by its full size.
pub fn path_data(cmd: &FilletCmd) -> String {
    let rect = cmd.rect;
    let limit = rect.size.x.min(rect.size.y).max(0.0);
    let corners = [
        // (corner point, inward x, inward y, radius)
        (Vec2::new(rect.left(), rect.top()), 1.0, 1.0, cmd.radii.top_left),
        (Vec2::new(rect.right(), rect.top()), -1.0, 1.0, cmd.radii.top_right),
        (Vec2::new(rect.right(), rect.bottom()), -1.0, -1.0, cmd.radii.bottom_right),
        (Vec2::new(rect.left(), rect.bottom()), 1.0, -1.0, cmd.radii.bottom_left),
    ];

    let mut d = String::new();
    for (p, sx, sy, r) in corners {
        let r = if r.is_finite() { r.clamp(0.0, limit) } else { 0.0 };
        if r <= 0.0 {
            continue;
        }
        let a1 = Vec2::new(p.x + sx * r, p.y);
        let a2 = Vec2::new(p.x, p.y + sy * r);
        let c1 = a2.lerp(p, KAPPA);
        let c2 = a1.lerp(p, KAPPA);
        if !d.is_empty() {
            d.push(' ');
        }
        let _ = write!(
            d,
            "M{} {} L{} {} L{} {} C{} {} {} {} {} {} Z",
            num(a1.x), num(a1.y),
            num(p.x), num(p.y),
            num(a2.x), num(a2.y),
            num(c1.x), num(c1.y),
            num(c2.x), num(c2.y),
            num(a1.x), num(a1.y),
        );
    }
    d
}

pub(crate) fn write(out: &mut String, cmd: &FilletCmd) {
    if cmd.rect.is_empty() || !cmd.rect.is_finite() || cmd.fill.a <= 0.0 {
        return;
    }
    let d = path_data(cmd);
    if d.is_empty() {
        return;
    }
    let _ = writeln!(out, r#"<path d="{d}"{}/>"#, fill_attrs(cmd.fill));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, Rect};
    use crate::paint::Color;

    fn fillet(rect: Rect, radii: CornerRadii) -> FilletCmd {
        FilletCmd::new(rect, radii, Color::white())
    }

    #[test]
    fn single_corner_spans_full_box() {
        // Box left of a line whose top-left corner sits at (10, 0).
        let cmd = fillet(Rect::new(8.0, 0.0, 2.0, 2.0), CornerRadii::new(0.0, 2.0, 0.0, 0.0));
        let d = path_data(&cmd);
        assert!(d.starts_with("M8 0 L10 0 L10 2 C"));
        assert!(d.ends_with("8 0 Z"));
        assert_eq!(d.matches('M').count(), 1);
    }

    #[test]
    fn strip_with_two_corners_emits_two_slivers() {
        let cmd = fillet(Rect::new(0.0, 0.0, 2.0, 10.0), CornerRadii::new(0.0, 2.0, 2.0, 0.0));
        let d = path_data(&cmd);
        assert_eq!(d.matches('M').count(), 2);
        assert!(d.contains("L2 0"));
        assert!(d.contains("L2 10"));
    }

    #[test]
    fn no_rounded_corner_means_no_path() {
        let cmd = fillet(Rect::new(0.0, 0.0, 2.0, 2.0), CornerRadii::zero());
        assert!(path_data(&cmd).is_empty());
        let mut out = String::new();
        write(&mut out, &cmd);
        assert!(out.is_empty());
    }
}
