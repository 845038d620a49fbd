use core::cmp::Ordering;

use super::ZIndex;

/// Paint position of a draw item.
///
/// Caption pills and fillets share [`ZIndex::BACKGROUND`] and text sits on
/// [`ZIndex::TEXT`], so within a layer `order` keeps the push order: a
/// line's fillets land on top of the pill pushed before them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

impl Ord for SortKey {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        (self.z, self.order).cmp(&(other.z, other.order))
    }
}

impl PartialOrd for SortKey {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_layer_beats_later_background() {
        let text = SortKey::new(ZIndex::TEXT, 0);
        let fillet = SortKey::new(ZIndex::BACKGROUND, 7);
        let pill = SortKey::new(ZIndex::BACKGROUND, 6);
        assert!(pill < fillet);
        assert!(fillet < text);
    }
}
