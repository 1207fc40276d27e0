pub mod error;
pub mod lexer;
#[allow(clippy::module_inception)]
pub mod parser;
pub mod slice;
mod syntax;

pub use error::SyntaxError;
pub use lexer::{Lexeme, Lexer, Token, tokenize};
pub use parser::{
    DEFAULT_MAX_DEPTH, Parser, Postfix, Terminator, parse, parse_with_max_depth,
};
pub use slice::{ELEMENT_TYPE, ParsedSlice, parse_slice};
pub use syntax::{BinaryOp, Position, Precedence, Span, UnaryOp};



#[cfg(test)]
mod precedence_test;
