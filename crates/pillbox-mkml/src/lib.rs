//! Lexer, parser, and AST for pillbox caption documents (`.mkml`).
//!
//! This crate is dependency-free so editors and linters can parse caption
//! documents without pulling in any render code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `DslDocument`, `Node`, `Prop`, `Value`, `Import` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use pillbox_mkml::parse_str;
//!
//! let src = r#"
//!     Caption {
//!         align: left
//!         bg: #ff0000
//!         Line "Align Left"
//!         Line "with two lines"
//!     }
//! "#;
//!
//! let doc = parse_str(src).unwrap();
//! assert_eq!(doc.root.widget, "Caption");
//! assert_eq!(doc.root.children.len(), 2);
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

pub use ast::{DslDocument, Node, Value};
pub use error::ParseError;
pub use parser::parse_str;
