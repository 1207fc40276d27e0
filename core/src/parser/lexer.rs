//! Tokenizer.
//!
//! Raw token kinds come from `logos`; [`Lexer`] wraps it into a lazy stream of
//! [`Lexeme`]s that carry the source text, byte span and line/column of each
//! token, and ends with a single [`Token::Eof`].

use core::fmt;

use logos::Logos;

use super::error::SyntaxError;
use super::syntax::{BinaryOp, Position, Span};

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"[0-9]+(\.[0-9]*)?", number)]
    #[regex(r"\.[0-9]+", number)]
    Number(f64),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", qualified_name)]
    Name,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
}

fn ident_len(s: &str) -> usize {
    s.bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count()
}

/// Extends a plain name over any `.segment` parts (`math.Log`).
fn qualified_name(lex: &mut logos::Lexer<RawToken>) {
    let rest = lex.remainder();
    let mut len = 0;
    loop {
        let bytes = rest[len..].as_bytes();
        match bytes {
            [b'.', first, ..] if first.is_ascii_alphabetic() || *first == b'_' => {
                len += 1 + ident_len(&rest[len + 1..]);
            }
            _ => break,
        }
    }
    lex.bump(len);
}

/// Consumes an optional exponent and converts the literal.
fn number(lex: &mut logos::Lexer<RawToken>) -> Option<f64> {
    let rest = lex.remainder().as_bytes();
    if let [b'e' | b'E', tail @ ..] = rest {
        let sign = usize::from(matches!(tail.first(), Some(b'+' | b'-')));
        let digits = tail[sign..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits > 0 {
            lex.bump(1 + sign + digits);
        }
    }
    lex.slice().parse().ok()
}

/// A lexical token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'src> {
    Number(f64),
    Identifier(&'src str),
    /// A name immediately followed by `(`.
    FunctionName(&'src str),
    Operator(BinaryOp),
    LeftParen,
    RightParen,
    Comma,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Eof,
}

/// A token together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme<'src> {
    pub token: Token<'src>,
    pub text: &'src str,
    pub span: Span,
    pub position: Position,
}

// Literals and names print bare; punctuation, operators and the end of
// input are quoted.
impl fmt::Display for Lexeme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token {
            Token::Number(_) | Token::Identifier(_) | Token::FunctionName(_) => {
                f.write_str(self.text)
            }
            Token::Eof => f.write_str("'EOF'"),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

pub struct Lexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, RawToken>,
    line: usize,
    line_start: usize,
    scanned: usize,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            inner: RawToken::lexer(source),
            line: 1,
            line_start: 0,
            scanned: 0,
            finished: false,
        }
    }

    /// Offsets only move forward, so newlines are counted once.
    fn position_of(&mut self, offset: usize) -> Position {
        if offset > self.scanned {
            for (i, b) in self.source.as_bytes()[self.scanned..offset].iter().enumerate() {
                if *b == b'\n' {
                    self.line += 1;
                    self.line_start = self.scanned + i + 1;
                }
            }
            self.scanned = offset;
        }
        Position::new(self.line, offset - self.line_start + 1)
    }

    /// The end-of-input lexeme, positioned just past the last byte.
    pub fn eof(&mut self) -> Lexeme<'src> {
        let end = self.source.len();
        Lexeme {
            token: Token::Eof,
            text: "",
            span: Span::new(end, end),
            position: self.position_of(end),
        }
    }

    fn illegal_character(&mut self, start: usize) -> SyntaxError {
        let c = self.source[start..].chars().next().unwrap_or('\u{FFFD}');
        let position = self.position_of(start);
        SyntaxError::new(
            position,
            Span::new(start, start + c.len_utf8()),
            format!("illegal character U+{:04X} '{}'", c as u32, c),
        )
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Lexeme<'src>, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let raw = match self.inner.next() {
            Some(Ok(raw)) => raw,
            Some(Err(())) => {
                self.finished = true;
                let start = self.inner.span().start;
                return Some(Err(self.illegal_character(start)));
            }
            None => {
                self.finished = true;
                return Some(Ok(self.eof()));
            }
        };

        let range = self.inner.span();
        let text = self.inner.slice();
        let token = match raw {
            RawToken::Number(value) => Token::Number(value),
            RawToken::Name if self.inner.remainder().starts_with('(') => Token::FunctionName(text),
            RawToken::Name => Token::Identifier(text),
            RawToken::Plus => Token::Operator(BinaryOp::Add),
            RawToken::Minus => Token::Operator(BinaryOp::Sub),
            RawToken::Star => Token::Operator(BinaryOp::Mul),
            RawToken::Slash => Token::Operator(BinaryOp::Div),
            RawToken::LParen => Token::LeftParen,
            RawToken::RParen => Token::RightParen,
            RawToken::Comma => Token::Comma,
            RawToken::LBrace => Token::LeftBrace,
            RawToken::RBrace => Token::RightBrace,
            RawToken::LBracket => Token::LeftBracket,
            RawToken::RBracket => Token::RightBracket,
        };
        let position = self.position_of(range.start);

        Some(Ok(Lexeme {
            token,
            text,
            span: Span(range),
            position,
        }))
    }
}

/// Tokenizes `source` eagerly, stopping at the first error.
pub fn tokenize(source: &str) -> Result<Vec<Lexeme<'_>>, SyntaxError> {
    Lexer::new(source).collect()
}
