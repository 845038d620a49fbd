/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Layer for caption backgrounds (pills and their fillets).
    pub const BACKGROUND: ZIndex = ZIndex(0);
    /// Layer for caption text, always above every background.
    pub const TEXT: ZIndex = ZIndex(1);
}
