use std::fmt::Write as _;

use crate::coords::{CornerRadii, Rect};
use crate::scene::shapes::RoundedRectCmd;

use super::{fill_attrs, num};

/// SVG path data for a rectangle with per-corner radii.
///
/// The outline runs clockwise from the end of the top-left arc; radii are
/// clamped to half the shorter side first. Zero radii produce sharp corners.
pub fn path_data(rect: Rect, radii: CornerRadii) -> String {
    let CornerRadii { top_left: tl, top_right: tr, bottom_right: br, bottom_left: bl } =
        radii.clamped_to(rect.size);
    let (x0, y0, x1, y1) = (rect.left(), rect.top(), rect.right(), rect.bottom());

    let mut d = String::new();
    let _ = write!(d, "M{} {}", num(x0 + tl), num(y0));
    let _ = write!(d, " H{}", num(x1 - tr));
    arc(&mut d, tr, x1, y0 + tr);
    let _ = write!(d, " V{}", num(y1 - br));
    arc(&mut d, br, x1 - br, y1);
    let _ = write!(d, " H{}", num(x0 + bl));
    arc(&mut d, bl, x0, y1 - bl);
    let _ = write!(d, " V{}", num(y0 + tl));
    arc(&mut d, tl, x0 + tl, y0);
    d.push_str(" Z");
    d
}

fn arc(d: &mut String, r: f32, x: f32, y: f32) {
    if r > 0.0 {
        let _ = write!(d, " A{r} {r} 0 0 1 {} {}", num(x), num(y), r = num(r));
    }
}

pub(crate) fn write(out: &mut String, cmd: &RoundedRectCmd) {
    if cmd.rect.is_empty() || !cmd.rect.is_finite() || cmd.fill.a <= 0.0 {
        return;
    }
    let _ = writeln!(out, r#"<path d="{}"{}/>"#, path_data(cmd.rect, cmd.radii), fill_attrs(cmd.fill));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_corners_have_no_arcs() {
        let d = path_data(Rect::new(0.0, 0.0, 10.0, 4.0), CornerRadii::zero());
        assert_eq!(d, "M0 0 H10 V4 H0 V0 Z");
    }

    #[test]
    fn only_rounded_corners_get_arcs() {
        let d = path_data(Rect::new(0.0, 0.0, 10.0, 4.0), CornerRadii::new(0.0, 2.0, 0.0, 0.0));
        assert_eq!(d, "M0 0 H8 A2 2 0 0 1 10 2 V4 H0 V0 Z");
    }

    #[test]
    fn radii_are_clamped_to_half_height() {
        let d = path_data(Rect::new(0.0, 0.0, 10.0, 4.0), CornerRadii::all(5.0));
        assert_eq!(d.matches(" A2 2 ").count(), 4);
    }
}
