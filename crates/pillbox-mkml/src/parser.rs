use std::iter::Peekable;
use std::vec::IntoIter;

use crate::ast::{DslDocument, Import, Node, Prop, Value};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

/// One entry inside a `{ ... }` block.
enum Item {
    Prop(Prop),
    Child(Node),
}

/// Recursive-descent parser over a token stream.
///
/// Grammar:
///
/// ```text
/// document := import* node EOF
/// import   := "import" STR "as" IDENT
/// node     := IDENT STR? ( "{" item* "}" )?
/// item     := IDENT ":" value | node
/// value    := STR | NUMBER | COLOR | IDENT
/// ```
pub struct Parser {
    tokens: Peekable<IntoIter<TokenWithPos>>,
    /// Position reported once the stream is exhausted.
    end: (usize, usize),
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        let end = tokens.last().map_or((1, 1), |t| (t.line, t.col));
        Self { tokens: tokens.into_iter().peekable(), end }
    }

    pub fn parse_document(mut self) -> Result<DslDocument, ParseError> {
        let mut imports = Vec::new();
        while self.at(&Token::Import) {
            self.bump();
            let path = self.string()?;
            self.expect(&Token::As)?;
            let alias = self.ident()?;
            imports.push(Import { path, alias });
        }

        let root = self.node()?;
        match self.peek().clone() {
            Token::Eof => Ok(DslDocument { imports, root }),
            tok => Err(self.error(format!("unexpected {tok:?} after the root node"))),
        }
    }

    // ── grammar ───────────────────────────────────────────────────────────

    fn node(&mut self) -> Result<Node, ParseError> {
        let line = self.pos().0;
        let widget = self.ident()?;
        self.node_rest(widget, line)
    }

    /// Optional inline content and block of a node whose name is consumed.
    fn node_rest(&mut self, widget: String, line: usize) -> Result<Node, ParseError> {
        let content = match self.peek() {
            Token::Str(_) => Some(self.string()?),
            _ => None,
        };

        let mut node = Node { widget, content, props: Vec::new(), children: Vec::new(), line };
        if !self.at(&Token::LBrace) {
            return Ok(node);
        }
        self.bump();

        loop {
            match self.peek() {
                Token::RBrace => {
                    self.bump();
                    return Ok(node);
                }
                Token::Eof => return Err(self.error("unclosed '{' block")),
                _ => match self.item()? {
                    Item::Prop(p) => node.props.push(p),
                    Item::Child(c) => node.children.push(c),
                },
            }
        }
    }

    /// `IDENT ":"` starts a property; any other `IDENT` starts a child node.
    fn item(&mut self) -> Result<Item, ParseError> {
        let line = self.pos().0;
        let name = match self.peek().clone() {
            Token::Ident(s) => s,
            tok => {
                return Err(self.error(format!(
                    "unexpected {tok:?} inside block, expected a property (key: value) or a node name"
                )));
            }
        };
        self.bump();

        if !self.at(&Token::Colon) {
            return self.node_rest(name, line).map(Item::Child);
        }
        self.bump();

        let value = match self.peek().clone() {
            Token::Str(s) => Value::Str(s),
            Token::Number(n) => Value::Number(n),
            Token::Color(c) => Value::Color(c),
            Token::Ident(s) => Value::Ident(s),
            tok => return Err(self.error(format!("expected a value, got {tok:?}"))),
        };
        self.bump();
        Ok(Item::Prop(Prop { key: name, value }))
    }

    // ── token helpers ─────────────────────────────────────────────────────

    fn peek(&mut self) -> &Token {
        self.tokens.peek().map_or(&Token::Eof, |t| &t.token)
    }

    fn at(&mut self, token: &Token) -> bool {
        self.peek() == token
    }

    fn pos(&mut self) -> (usize, usize) {
        let end = self.end;
        self.tokens.peek().map_or(end, |t| (t.line, t.col))
    }

    fn bump(&mut self) {
        self.tokens.next();
    }

    fn error(&mut self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.pos();
        ParseError::new(msg, line, col)
    }

    fn expect(&mut self, token: &Token) -> Result<(), ParseError> {
        if self.at(token) {
            self.bump();
            Ok(())
        } else {
            let got = self.peek().clone();
            Err(self.error(format!("expected {token:?}, got {got:?}")))
        }
    }

    fn ident(&mut self) -> Result<String, ParseError> {
        match self.peek().clone() {
            Token::Ident(s) => {
                self.bump();
                Ok(s)
            }
            tok => Err(self.error(format!("expected identifier, got {tok:?}"))),
        }
    }

    fn string(&mut self) -> Result<String, ParseError> {
        match self.peek().clone() {
            Token::Str(s) => {
                self.bump();
                Ok(s)
            }
            tok => Err(self.error(format!("expected string, got {tok:?}"))),
        }
    }
}

/// Parse a `.mkml` source string into a [`DslDocument`].
pub fn parse_str(src: &str) -> Result<DslDocument, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_document()
}
