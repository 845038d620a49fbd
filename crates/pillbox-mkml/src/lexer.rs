use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Ident(String),
    Str(String),
    Number(f32),
    /// Color literal: `[r, g, b, a]` straight-alpha bytes.
    Color([u8; 4]),
    // Punctuation
    Colon,
    LBrace,
    RBrace,
    // Keywords
    Import,
    As,
    // Sentinel
    Eof,
}

/// A token with the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace_and_comments();
            let (line, col) = (self.line, self.col);
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, line, col });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::new(msg, self.line, self.col)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            if self.rest().starts_with("//") {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            } else if self.rest().starts_with("/*") {
                self.advance();
                self.advance();
                while !self.rest().starts_with("*/") {
                    if self.advance().is_none() {
                        // Unterminated: the Eof token ends the stream.
                        return;
                    }
                }
                self.advance();
                self.advance();
            } else {
                break;
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let Some(ch) = self.peek() else {
            return Ok(Token::Eof);
        };

        match ch {
            ':' => { self.advance(); Ok(Token::Colon) }
            '{' => { self.advance(); Ok(Token::LBrace) }
            '}' => { self.advance(); Ok(Token::RBrace) }
            '"' => self.lex_string(),
            '#' => self.lex_color(),
            c if c.is_ascii_digit() || c == '-' || c == '.' => self.lex_number(),
            c if c.is_alphabetic() || c == '_' => Ok(self.lex_ident_or_keyword()),
            other => Err(self.err(format!("unexpected character {:?}", other))),
        }
    }

    fn lex_string(&mut self) -> Result<Token, ParseError> {
        self.advance(); // opening `"`
        let mut s = String::new();
        loop {
            match self.advance() {
                None => return Err(self.err("unterminated string literal")),
                Some('"') => break,
                Some('\\') => match self.advance() {
                    Some('n') => s.push('\n'),
                    Some('t') => s.push('\t'),
                    Some(c) => s.push(c),
                    None => return Err(self.err("unterminated escape sequence")),
                },
                Some(c) => s.push(c),
            }
        }
        Ok(Token::Str(s))
    }

    fn lex_color(&mut self) -> Result<Token, ParseError> {
        self.advance(); // `#`
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric()) {
            self.advance();
        }
        let hex = &self.src[start..self.pos];
        parse_hex_color(hex).map(Token::Color).ok_or_else(|| {
            self.err(format!("color literal must be #rgb, #rrggbb or #rrggbbaa, got #{hex}"))
        })
    }

    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit() || c == '.') {
            self.advance();
        }
        let s = &self.src[start..self.pos];
        s.parse::<f32>()
            .map(Token::Number)
            .map_err(|_| self.err(format!("invalid number {:?}", s)))
    }

    fn lex_ident_or_keyword(&mut self) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_' || c == '-') {
            self.advance();
        }
        match &self.src[start..self.pos] {
            "import" => Token::Import,
            "as" => Token::As,
            word => Token::Ident(word.to_string()),
        }
    }
}

fn parse_hex_color(hex: &str) -> Option<[u8; 4]> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    match hex.len() {
        3 => Some([nibble(0)?, nibble(1)?, nibble(2)?, 255]),
        6 => Some([byte(0)?, byte(2)?, byte(4)?, 255]),
        8 => Some([byte(0)?, byte(2)?, byte(4)?, byte(6)?]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(src: &str) -> Vec<Token> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn punctuation_and_literals() {
        assert_eq!(
            tokens(r#"Caption { corner_radius: 0.15 Line "a" }"#),
            vec![
                Token::Ident("Caption".into()),
                Token::LBrace,
                Token::Ident("corner_radius".into()),
                Token::Colon,
                Token::Number(0.15),
                Token::Ident("Line".into()),
                Token::Str("a".into()),
                Token::RBrace,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn colors() {
        assert_eq!(tokens("#FF683E")[0], Token::Color([0xff, 0x68, 0x3e, 0xff]));
        assert_eq!(tokens("#fff")[0], Token::Color([255, 255, 255, 255]));
        assert_eq!(tokens("#00000080")[0], Token::Color([0, 0, 0, 0x80]));
    }

    #[test]
    fn positions_track_lines_and_columns() {
        let toks = Lexer::new("Column {\n  gap: 8\n}").tokenize().unwrap();
        let gap = &toks[2];
        assert_eq!(gap.token, Token::Ident("gap".into()));
        assert_eq!((gap.line, gap.col), (2, 3));
        let close = &toks[5];
        assert_eq!((close.line, close.col), (3, 1));
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(tokens("// a\n/* b */ x"), vec![Token::Ident("x".into()), Token::Eof]);
    }

    #[test]
    fn unicode_string_content() {
        assert_eq!(tokens(r#""héllo \"x\"""#)[0], Token::Str("héllo \"x\"".into()));
    }

    #[test]
    fn bad_color_reports_position() {
        let err = Lexer::new("Caption {\n bg: #xyz }").tokenize().unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.message.contains("#xyz"));
    }

    #[test]
    fn unexpected_character() {
        assert!(Lexer::new("Caption ; ").tokenize().is_err());
    }
}
