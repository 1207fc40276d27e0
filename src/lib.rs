//! rpnexpr - arithmetic expressions over named variables, compiled to postfix
//!
//! # Overview
//!
//! An expression such as `N*math.Log(N)` is compiled once against the set of
//! variables it may reference, then evaluated any number of times against
//! different bindings. The compiled form is a postfix (RPN) program run on a
//! small stack machine; it also renders back to a canonical infix string.
//!
//! A literal array, `float64{e1, e2, ...}`, compiles to one expression per
//! element.
//!
//! # Quick Start
//!
//! ```
//! use rpnexpr::{Engine, render_error_to_string_no_color};
//!
//! let engine = Engine::default();
//!
//! let expr = engine.compile("-math.Hypot(M+N, M-N)", &["M", "N"]).unwrap();
//! assert_eq!(expr.to_string(), "-math.Hypot(M+N, M-N)");
//! assert_eq!(expr.evaluate(&[("M", 3.5), ("N", 0.5)]), -5.0);
//!
//! let slice = engine.compile_slice("float64{N*N, N, 1.0}", &["N"]).unwrap();
//! assert_eq!(slice.evaluate(&[("N", 10.0)]), vec![100.0, 10.0, 1.0]);
//!
//! let source = "(()";
//! let err = engine.compile(source, &["N"]).unwrap_err();
//! assert_eq!(err.to_string(), "1:3: expected operand, found ')'");
//! assert!(render_error_to_string_no_color(&err, source).contains("expected operand"));
//! ```
//!
//! # Functions
//!
//! Calls resolve against a [`FunctionRegistry`]. The default engine carries
//! the `math.` package; custom registries can add or replace functions:
//!
//! ```
//! use rpnexpr::{Engine, EngineOptions, FunctionRegistry};
//!
//! let mut functions = FunctionRegistry::new();
//! functions.register_binary("avg", |a, b| (a + b) / 2.0);
//! let engine = Engine::with_functions(EngineOptions::default(), functions);
//!
//! let expr = engine.compile("avg(1, N)", &["N"]).unwrap();
//! assert_eq!(expr.evaluate(&[("N", 2.0)]), 1.5);
//! ```

mod error_renderer;

// Re-export public API from rpnexpr_core
pub use rpnexpr_core::api::{
    Bindings, CompilationOptions, CompiledExpression, CompiledSlice, Diagnostic, Engine,
    EngineOptions, Error, EvalError, KnownVariables,
};
pub use rpnexpr_core::{compile, compile_slice, default_engine};

// Re-export the pieces needed to inspect compiled programs
pub use rpnexpr_core::parser::{Position, Span, SyntaxError};
pub use rpnexpr_core::stdlib::{FunctionKind, FunctionRegistry};
pub use rpnexpr_core::vm::{Code, Instruction};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
