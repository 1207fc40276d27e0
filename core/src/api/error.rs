//! Public error types.
//!
//! All compile errors are terminal: no partially compiled expression is ever
//! returned next to one. Evaluation has a single failure, a variable missing
//! from the bindings, which is a caller contract violation.

use thiserror::Error;

use crate::parser::{Span, SyntaxError};

/// Compile-time error for [`Engine::compile`](super::Engine::compile) and
/// [`Engine::compile_slice`](super::Engine::compile_slice).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed input, reported as `<line>:<column>: <message>`.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// A name used as an operand is not one of the known variables.
    ///
    /// The message carries no position; `span` is kept for diagnostics.
    #[error("unknown variable: {name}")]
    UnknownVariable { name: String, span: Span },

    /// A call names a function that is not registered.
    #[error("unknown function: {name}")]
    UnknownFunction { name: String, span: Span },

    /// Well-formed input that is not the expected literal array.
    #[error("expression {expression} is not a {container}")]
    TypeMismatch {
        expression: String,
        container: String,
    },
}

/// Evaluation error from [`CompiledExpression::try_evaluate`](super::CompiledExpression::try_evaluate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("unbound variable: {name}")]
    UnboundVariable { name: String },
}

/// A renderable description of an [`Error`], for error reporters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue, when one is known.
    pub span: Option<Span>,

    /// Help text suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}

impl Error {
    /// Convert to a Diagnostic for error reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, span, code, help) = match self {
            Error::Syntax(err) => (err.message.clone(), Some(err.span.clone()), "P001", vec![]),
            Error::UnknownVariable { span, .. } => (
                self.to_string(),
                Some(span.clone()),
                "N001",
                vec!["Only the variables supplied at compile time can be referenced".to_string()],
            ),
            Error::UnknownFunction { span, .. } => (
                self.to_string(),
                Some(span.clone()),
                "N002",
                vec!["Register the function with the engine's FunctionRegistry".to_string()],
            ),
            Error::TypeMismatch { container, .. } => (
                self.to_string(),
                None,
                "T001",
                vec![format!("Wrap the elements as {container}{{e1, e2, ...}}")],
            ),
        };

        Diagnostic {
            message,
            span,
            help,
            code: Some(code.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Position;

    #[test]
    fn test_messages() {
        let err = Error::UnknownVariable {
            name: "N".to_string(),
            span: Span::new(0, 1),
        };
        assert_eq!(err.to_string(), "unknown variable: N");

        let err = Error::TypeMismatch {
            expression: "N + 1.0".to_string(),
            container: "[]float64".to_string(),
        };
        assert_eq!(err.to_string(), "expression N + 1.0 is not a []float64");

        let err = Error::from(SyntaxError::new(
            Position::new(1, 3),
            Span::new(2, 3),
            "expected operand, found ')'",
        ));
        assert_eq!(err.to_string(), "1:3: expected operand, found ')'");
    }

    #[test]
    fn test_syntax_error_to_diagnostic() {
        let err = Error::from(SyntaxError::new(Position::new(1, 5), Span::new(4, 5), "boom"));
        let diagnostic = err.to_diagnostic();
        assert_eq!(diagnostic.message, "boom");
        assert_eq!(diagnostic.span, Some(Span::new(4, 5)));
        assert_eq!(diagnostic.code, Some("P001".to_string()));
        assert!(diagnostic.help.is_empty());
    }

    #[test]
    fn test_type_mismatch_has_no_span() {
        let err = Error::TypeMismatch {
            expression: "1".to_string(),
            container: "[]float64".to_string(),
        };
        let diagnostic = err.to_diagnostic();
        assert_eq!(diagnostic.span, None);
        assert_eq!(diagnostic.code, Some("T001".to_string()));
        assert_eq!(diagnostic.help, vec!["Wrap the elements as []float64{e1, e2, ...}"]);
    }

    #[test]
    fn test_eval_error_message() {
        let err = EvalError::UnboundVariable {
            name: "M".to_string(),
        };
        assert_eq!(err.to_string(), "unbound variable: M");
    }
}
