use std::fmt;

use pillbox_mkml::ParseError;

/// Error produced while turning a `.mkml` source into a widget tree.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// The source failed to parse.
    Parse(ParseError),
    /// A node name that is neither a built-in widget nor a registered alias.
    UnknownWidget { name: String, line: usize },
    /// A `Caption` without any `Line` children.
    EmptyCaption { line: usize },
    /// An `align` value outside the accepted keywords.
    InvalidAlign { value: String, line: usize },
    /// A color property that is neither a literal nor a known name.
    InvalidColor { key: String, line: usize },
    /// An imported component could not be read or parsed.
    Import { path: String, message: String },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::UnknownWidget { name, line } => {
                write!(f, "line {line}: unknown widget `{name}` (no registered component with that name)")
            }
            Self::EmptyCaption { line } => write!(f, "line {line}: Caption needs at least one Line"),
            Self::InvalidAlign { value, line } => {
                write!(f, "line {line}: invalid align `{value}`")
            }
            Self::InvalidColor { key, line } => {
                write!(f, "line {line}: `{key}` is not a color literal or color name")
            }
            Self::Import { path, message } => write!(f, "import {path:?}: {message}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for BuildError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}
