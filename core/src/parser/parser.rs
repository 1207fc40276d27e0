//! Operator-precedence (shunting-yard) parser.
//!
//! Turns the token stream into a syntactic postfix sequence. Names are not
//! resolved here: a [`Postfix::Variable`] or [`Postfix::Call`] is checked
//! against the known variables and functions by the compiler, after the
//! whole input is known to be well formed.

use tracing::trace;

use super::error::SyntaxError;
use super::lexer::{Lexeme, Lexer, Token};
use super::syntax::{BinaryOp, Position, Span, UnaryOp};

/// Default bound on nested groups and calls.
pub const DEFAULT_MAX_DEPTH: usize = 500;

/// One element of a parsed, not yet resolved, postfix sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Postfix<'src> {
    Number {
        value: f64,
        literal: &'src str,
    },
    Variable {
        name: &'src str,
        span: Span,
    },
    Unary(UnaryOp),
    Binary(BinaryOp),
    Call {
        name: &'src str,
        args: usize,
        position: Position,
        span: Span,
    },
}

/// What may legally follow a complete top-level expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    EndOfInput,
    SliceElement,
}

impl Terminator {
    fn accepts(self, token: &Token<'_>) -> bool {
        match self {
            Terminator::EndOfInput => matches!(token, Token::Eof),
            Terminator::SliceElement => matches!(token, Token::Comma | Token::RightBrace),
        }
    }

    fn expected(self) -> &'static str {
        match self {
            Terminator::EndOfInput => "'EOF'",
            Terminator::SliceElement => "',' or '}'",
        }
    }
}

/// Entries of the operator stack. `Group` and `Call` are frames opened by `(`.
#[derive(Debug)]
enum Pending<'src> {
    Unary(UnaryOp),
    Binary(BinaryOp),
    Group,
    Call {
        name: &'src str,
        args: usize,
        position: Position,
        span: Span,
    },
}

impl Pending<'_> {
    fn is_frame(&self) -> bool {
        matches!(self, Pending::Group | Pending::Call { .. })
    }
}

pub struct Parser<'src> {
    lexer: Lexer<'src>,
    lookahead: Option<Lexeme<'src>>,
    max_depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, max_depth: usize) -> Self {
        Self {
            lexer: Lexer::new(source),
            lookahead: None,
            max_depth,
        }
    }

    pub(crate) fn peek(&mut self) -> Result<&Lexeme<'src>, SyntaxError> {
        let lexeme = match self.lookahead.take() {
            Some(lexeme) => lexeme,
            None => self.pull()?,
        };
        Ok(self.lookahead.insert(lexeme))
    }

    pub(crate) fn advance(&mut self) -> Result<Lexeme<'src>, SyntaxError> {
        match self.lookahead.take() {
            Some(lexeme) => Ok(lexeme),
            None => self.pull(),
        }
    }

    fn pull(&mut self) -> Result<Lexeme<'src>, SyntaxError> {
        match self.lexer.next() {
            Some(result) => result,
            None => Ok(self.lexer.eof()),
        }
    }

    fn open(&self, depth: usize, at: &Lexeme<'src>) -> Result<usize, SyntaxError> {
        if depth >= self.max_depth {
            return Err(SyntaxError::new(
                at.position,
                at.span.clone(),
                format!(
                    "expression nesting depth exceeds maximum of {} levels",
                    self.max_depth
                ),
            ));
        }
        Ok(depth + 1)
    }

    /// Parses one expression, stopping (without consuming) at a token the
    /// terminator accepts.
    pub fn parse_expression(
        &mut self,
        terminator: Terminator,
    ) -> Result<Vec<Postfix<'src>>, SyntaxError> {
        let mut output = Vec::new();
        let mut pending: Vec<Pending<'src>> = Vec::new();
        let mut depth = 0;
        let mut expect_operand = true;

        loop {
            let lexeme = self.peek()?.clone();
            trace!(token = ?lexeme.token, expect_operand, "shunting");

            if expect_operand {
                match lexeme.token {
                    Token::Number(value) => {
                        output.push(Postfix::Number {
                            value,
                            literal: lexeme.text,
                        });
                        expect_operand = false;
                    }
                    Token::Identifier(name) => {
                        output.push(Postfix::Variable {
                            name,
                            span: lexeme.span.clone(),
                        });
                        expect_operand = false;
                    }
                    Token::FunctionName(name) => {
                        depth = self.open(depth, &lexeme)?;
                        // The lexer only yields a function name right before `(`.
                        self.advance()?;
                        pending.push(Pending::Call {
                            name,
                            args: 0,
                            position: lexeme.position,
                            span: lexeme.span.clone(),
                        });
                    }
                    Token::Operator(BinaryOp::Add) => pending.push(Pending::Unary(UnaryOp::Plus)),
                    Token::Operator(BinaryOp::Sub) => pending.push(Pending::Unary(UnaryOp::Neg)),
                    Token::LeftParen => {
                        depth = self.open(depth, &lexeme)?;
                        pending.push(Pending::Group);
                    }
                    _ => return Err(SyntaxError::expected("operand", &lexeme)),
                }
                self.advance()?;
                continue;
            }

            match lexeme.token {
                Token::Operator(op) => {
                    loop {
                        let reduced = match pending.last() {
                            Some(Pending::Unary(u)) => Postfix::Unary(*u),
                            Some(Pending::Binary(b)) if b.precedence() >= op.precedence() => {
                                Postfix::Binary(*b)
                            }
                            _ => break,
                        };
                        pending.pop();
                        output.push(reduced);
                    }
                    pending.push(Pending::Binary(op));
                    expect_operand = true;
                }
                Token::RightParen if depth > 0 => {
                    if let Some(Pending::Call {
                        name,
                        args,
                        position,
                        span,
                    }) = reduce_to_frame(&mut pending, &mut output)
                    {
                        output.push(Postfix::Call {
                            name,
                            args: args + 1,
                            position,
                            span,
                        });
                    }
                    depth -= 1;
                }
                Token::Comma if matches!(innermost_frame(&pending), Some(Pending::Call { .. })) => {
                    if let Some(Pending::Call {
                        name,
                        args,
                        position,
                        span,
                    }) = reduce_to_frame(&mut pending, &mut output)
                    {
                        pending.push(Pending::Call {
                            name,
                            args: args + 1,
                            position,
                            span,
                        });
                    }
                    expect_operand = true;
                }
                _ if depth > 0 => return Err(SyntaxError::expected("')'", &lexeme)),
                token if terminator.accepts(&token) => break,
                _ => return Err(SyntaxError::expected(terminator.expected(), &lexeme)),
            }
            self.advance()?;
        }

        while let Some(op) = pending.pop() {
            match op {
                Pending::Unary(u) => output.push(Postfix::Unary(u)),
                Pending::Binary(b) => output.push(Postfix::Binary(b)),
                Pending::Group | Pending::Call { .. } => {
                    unreachable!("every frame is closed before depth returns to 0")
                }
            }
        }
        Ok(output)
    }

    /// Matches `[]float64{` or `float64{`, consuming it only on success.
    pub(crate) fn slice_prefix(&mut self, element_type: &str) -> Result<bool, SyntaxError> {
        if self.peek()?.token == Token::LeftBracket {
            self.advance()?;
            if self.peek()?.token != Token::RightBracket {
                return Ok(false);
            }
            self.advance()?;
        }
        if self.peek()?.token != Token::Identifier(element_type) {
            return Ok(false);
        }
        self.advance()?;
        if self.peek()?.token != Token::LeftBrace {
            return Ok(false);
        }
        self.advance()?;
        Ok(true)
    }

    /// Parses `e1, e2, ...}` up to the end of input; the prefix is already consumed.
    pub(crate) fn slice_elements(&mut self) -> Result<Vec<Vec<Postfix<'src>>>, SyntaxError> {
        let mut elements = Vec::new();
        if self.peek()?.token == Token::RightBrace {
            self.advance()?;
        } else {
            loop {
                elements.push(self.parse_expression(Terminator::SliceElement)?);
                let separator = self.advance()?;
                match separator.token {
                    Token::Comma if self.peek()?.token == Token::RightBrace => {
                        self.advance()?;
                        break;
                    }
                    Token::Comma => {}
                    Token::RightBrace => break,
                    _ => {
                        return Err(SyntaxError::expected(
                            Terminator::SliceElement.expected(),
                            &separator,
                        ));
                    }
                }
            }
        }

        let end = self.advance()?;
        if end.token != Token::Eof {
            return Err(SyntaxError::expected(
                Terminator::EndOfInput.expected(),
                &end,
            ));
        }
        Ok(elements)
    }
}

fn innermost_frame<'a, 'src>(pending: &'a [Pending<'src>]) -> Option<&'a Pending<'src>> {
    pending.iter().rev().find(|p| p.is_frame())
}

/// Moves operators to the output until a frame is reached, then pops and
/// returns that frame.
fn reduce_to_frame<'src>(
    pending: &mut Vec<Pending<'src>>,
    output: &mut Vec<Postfix<'src>>,
) -> Option<Pending<'src>> {
    while let Some(op) = pending.pop() {
        match op {
            Pending::Unary(u) => output.push(Postfix::Unary(u)),
            Pending::Binary(b) => output.push(Postfix::Binary(b)),
            frame => return Some(frame),
        }
    }
    None
}

/// Parses a complete scalar expression.
pub fn parse(source: &str) -> Result<Vec<Postfix<'_>>, SyntaxError> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

pub fn parse_with_max_depth(
    source: &str,
    max_depth: usize,
) -> Result<Vec<Postfix<'_>>, SyntaxError> {
    Parser::new(source, max_depth).parse_expression(Terminator::EndOfInput)
}
