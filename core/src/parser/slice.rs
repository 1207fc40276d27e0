//! Literal array syntax: `float64{e1, e2, ...}` (or `[]float64{...}`).

use super::error::SyntaxError;
use super::parser::{Parser, Postfix, parse_with_max_depth};

/// Element type named by the literal array syntax.
pub const ELEMENT_TYPE: &str = "float64";

/// Outcome of parsing text that is expected to be a literal array.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedSlice<'src> {
    /// One postfix sequence per element, in source order.
    Elements(Vec<Vec<Postfix<'src>>>),
    /// Well-formed input that is a scalar expression, not an array.
    Scalar,
}

/// Parses a literal array of expressions.
///
/// Input that does not start with the array syntax is re-parsed as a scalar
/// expression, so malformed text still reports its syntax error; only
/// well-formed scalars come back as [`ParsedSlice::Scalar`].
pub fn parse_slice(source: &str, max_depth: usize) -> Result<ParsedSlice<'_>, SyntaxError> {
    let mut parser = Parser::new(source, max_depth);
    if !parser.slice_prefix(ELEMENT_TYPE)? {
        parse_with_max_depth(source, max_depth)?;
        return Ok(ParsedSlice::Scalar);
    }
    parser.slice_elements().map(ParsedSlice::Elements)
}
