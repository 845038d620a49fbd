//! Builds widget trees from `.mkml` caption documents.
//!
//! ## Format
//!
//! ```mkml
//! import "intro.mkml" as Intro
//!
//! Column {
//!     gap: 12.8  padding: 25.6  bg: #d2d9d4  align: center
//!     Intro
//!     Caption {
//!         align: left  bg: red  font_size: 64  font_family: "Arial"
//!         Line "Align Left"
//!         Line "with two lines"
//!     }
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pillbox_ui::dsl::{DslBindings, DslLoader};
//!
//! let mut loader = DslLoader::new();
//! loader.parse_and_register("Intro", include_str!("../ui/intro.mkml"))?;
//!
//! let bindings = DslBindings::new().with_default_font(font_id);
//! let doc = loader.parse(include_str!("../ui/main.mkml"))?;
//! let root = loader.build(&doc, &bindings)?;
//! let (size, draw_list) = ui_scene.frame_fit(root);
//! ```

pub mod builder;
pub mod error;

pub use builder::{DslBindings, DslLoader};
pub use error::BuildError;
pub use pillbox_mkml::{parse_str, DslDocument, ParseError};
