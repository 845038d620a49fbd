pub(crate) mod fillet;
pub(crate) mod rounded_rect;
pub(crate) mod text;

pub use fillet::FilletCmd;
pub use rounded_rect::RoundedRectCmd;
pub use text::TextCmd;
