use crate::coords::{CornerRadii, Rect};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Concave fillet draw payload.
///
/// The filled area is `rect` minus the rounded rectangle `(rect, radii)`:
/// every rounded corner of the box leaves a concave sliver behind, and only
/// those slivers are painted. A box with one corner rounded by its full
/// side length produces a single quarter-circle fillet; a tall strip with
/// two rounded corners produces one at each end.
#[derive(Debug, Clone, PartialEq)]
pub struct FilletCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub fill: Color,
}

impl FilletCmd {
    #[inline]
    pub fn new(rect: Rect, radii: CornerRadii, fill: Color) -> Self {
        Self { rect, radii, fill }
    }
}

impl DrawList {
    /// Records a concave fillet.
    #[inline]
    pub fn push_fillet(&mut self, z: ZIndex, rect: Rect, radii: CornerRadii, fill: Color) {
        self.push(z, DrawCmd::Fillet(FilletCmd::new(rect, radii, fill)));
    }
}
