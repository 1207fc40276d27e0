//! Compile arithmetic expressions over named `f64` variables into postfix
//! programs, and evaluate them.
//!
//! ```
//! let expr = rpnexpr_core::compile("N*N + math.Log(N)", &["N"]).unwrap();
//! assert_eq!(expr.rpn(), ["N", "N", "*", "N", "math.Log", "+"]);
//! assert_eq!(expr.evaluate(&[("N", 1.0)]), 1.0);
//! ```

extern crate alloc;

pub mod api;
pub mod compiler;
pub mod parser;
pub mod render;
pub mod stdlib;
pub mod vm;

pub use api::{
    Bindings, CompilationOptions, CompiledExpression, CompiledSlice, Diagnostic, Engine,
    EngineOptions, Error, EvalError, KnownVariables,
};

use once_cell::sync::Lazy;

/// Engine with default options and the standard library, shared by the free
/// functions below.
static DEFAULT_ENGINE: Lazy<Engine> = Lazy::new(Engine::default);

/// The engine behind [`compile`] and [`compile_slice`].
pub fn default_engine() -> &'static Engine {
    &DEFAULT_ENGINE
}

/// Compiles a scalar expression with the default engine.
pub fn compile<V: KnownVariables + ?Sized>(
    source: &str,
    variables: &V,
) -> Result<CompiledExpression, Error> {
    DEFAULT_ENGINE.compile(source, variables)
}

/// Compiles a literal array, `float64{e1, e2, ...}`, with the default engine.
pub fn compile_slice<V: KnownVariables + ?Sized>(
    source: &str,
    variables: &V,
) -> Result<CompiledSlice, Error> {
    DEFAULT_ENGINE.compile_slice(source, variables)
}
