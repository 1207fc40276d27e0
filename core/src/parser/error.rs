use thiserror::Error;

use super::syntax::{Position, Span};

/// Malformed input: a bad character, a missing operand, an unbalanced
/// delimiter or a call with the wrong number of arguments.
///
/// Displays as `<line>:<column>: <message>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{position}: {message}")]
pub struct SyntaxError {
    pub position: Position,
    pub span: Span,
    pub message: String,
}

impl SyntaxError {
    pub fn new(position: Position, span: Span, message: impl Into<String>) -> Self {
        Self {
            position,
            span,
            message: message.into(),
        }
    }

    /// `expected <what>, found <found>`, the one shape every parse failure takes.
    pub(crate) fn expected(what: &str, found: &super::lexer::Lexeme<'_>) -> Self {
        Self::new(
            found.position,
            found.span.clone(),
            format!("expected {}, found {}", what, found),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes_position() {
        let err = SyntaxError::new(
            Position::new(1, 3),
            Span::new(2, 3),
            "expected operand, found ')'",
        );
        assert_eq!(err.to_string(), "1:3: expected operand, found ')'");
    }

    #[test]
    fn test_display_on_later_line() {
        let err = SyntaxError::new(Position::new(4, 12), Span::new(40, 41), "boom");
        assert_eq!(err.to_string(), "4:12: boom");
    }
}
