//! Pillbox UI: caption corner decisions, shape building and the widgets
//! that lay captions out on top of `pillbox-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use pillbox_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let root = Column::new()
//!     .spacing(12.8)
//!     .padding_all(25.6)
//!     .background(Color::from_srgb_u8(0xd2, 0xd9, 0xd4, 0xff))
//!     .child(
//!         CaptionBox::new(["Align Left", "with two lines", "Third Line"])
//!             .align(TextAlign::Left)
//!             .font_size(64.0)
//!             .bg_color(Color::from_srgb_u8(255, 0, 0, 255)),
//!     );
//! let (size, draw_list) = scene.frame_fit(root.into());
//! let svg = SvgRenderer::new().render(draw_list, size, None).to_string();
//! ```
//!
//! # Using the decision engine directly
//!
//! ```rust
//! use pillbox_ui::caption::{decide, Accent, TextAlign};
//!
//! let lines = ["Align Left", "with two lines", "Third Line"];
//! let rounding = decide(&lines, Some(TextAlign::Left));
//! assert!(rounding[0].accents.contains(Accent::BottomRight));
//! // The interior line keeps its flush left edge square.
//! assert!(!rounding[1].corners.top_left);
//! assert!(rounding[1].corners.top_right);
//! ```

pub mod caption;
pub mod constraints;
pub mod dsl;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to build captions and custom widgets.
pub mod prelude {
    pub use crate::caption::{decide, line_shapes, Accent, CornerSet, LineRounding, TextAlign};
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        caption_box::{CaptionBox, CaptionStyle},
        flex::{Align, Column},
    };

    // Engine primitives.
    pub use pillbox_engine::coords::{CornerRadii, Rect, Vec2};
    pub use pillbox_engine::paint::Color;
    pub use pillbox_engine::render::SvgRenderer;
    pub use pillbox_engine::text::FontId;

    // DSL
    pub use crate::dsl::{BuildError, DslBindings, DslDocument, DslLoader, ParseError};
}
