use std::fmt;

/// Why a caption document could not be read, and where.
///
/// `line` and `col` are 1-based and point at the token that stopped the
/// parser, e.g. the `{` of a `Caption` that is never closed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub col: usize,
}

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>, line: usize, col: usize) -> Self {
        Self { message: msg.into(), line, col }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "caption document {}:{}: {}", self.line, self.col, self.message)
    }
}

impl std::error::Error for ParseError {}
