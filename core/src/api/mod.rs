//! Public API for compiling and evaluating expressions.
//!
//! # Example
//!
//! ```
//! use rpnexpr_core::api::Engine;
//! use std::collections::HashMap;
//!
//! let engine = Engine::default();
//!
//! let expr = engine.compile("N*N", &["N"]).unwrap();
//! let bindings: HashMap<&str, f64> = [("N", 10.0)].into_iter().collect();
//! assert_eq!(expr.evaluate(&bindings), 100.0);
//!
//! let slice = engine.compile_slice("float64{N*N, N, 1.0}", &["N"]).unwrap();
//! assert_eq!(slice.evaluate(&bindings), vec![100.0, 10.0, 1.0]);
//! ```

pub mod engine;
pub mod environment;
pub mod error;
pub mod expression;
pub mod options;

pub use engine::Engine;
pub use environment::{Bindings, KnownVariables};
pub use error::{Diagnostic, Error, EvalError};
pub use expression::{CompiledExpression, CompiledSlice};
pub use options::{CompilationOptions, EngineOptions};
