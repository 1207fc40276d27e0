//! The compilation engine.

use tracing::debug;

use super::{
    CompilationOptions, CompiledExpression, CompiledSlice, EngineOptions, Error, KnownVariables,
};
use crate::compiler::Compiler;
use crate::parser::{self, ELEMENT_TYPE, ParsedSlice, Postfix};
use crate::stdlib::FunctionRegistry;

/// Compiles expressions against a function registry.
///
/// The engine owns its configuration; it holds no per-expression state and
/// can be shared freely.
///
/// # Example
///
/// ```
/// use rpnexpr_core::api::{Engine, EngineOptions};
/// use rpnexpr_core::stdlib::FunctionRegistry;
///
/// let mut functions = FunctionRegistry::with_stdlib();
/// functions.register_unary("Square", |x| x * x);
/// let engine = Engine::with_functions(EngineOptions::default(), functions);
///
/// let expr = engine.compile("Square(N) + math.Sqrt(N)", &["N"]).unwrap();
/// assert_eq!(expr.evaluate(&[("N", 4.0)]), 18.0);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    options: EngineOptions,
    functions: FunctionRegistry,
}

impl Engine {
    /// An engine with the standard library.
    pub fn new(options: EngineOptions) -> Self {
        Self::with_functions(options, FunctionRegistry::with_stdlib())
    }

    pub fn with_functions(options: EngineOptions, functions: FunctionRegistry) -> Self {
        Self { options, functions }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    /// Compiles a scalar expression over `variables`.
    pub fn compile<V: KnownVariables + ?Sized>(
        &self,
        source: &str,
        variables: &V,
    ) -> Result<CompiledExpression, Error> {
        self.compile_with_options(&self.options.default_compilation_options, source, variables)
    }

    pub fn compile_with_options<V: KnownVariables + ?Sized>(
        &self,
        options: &CompilationOptions,
        source: &str,
        variables: &V,
    ) -> Result<CompiledExpression, Error> {
        let postfix = parser::parse_with_max_depth(source, options.max_depth)?;
        let expr = self.resolve(&postfix, variables)?;
        debug!(source, rpn = ?expr.rpn(), "compiled expression");
        Ok(expr)
    }

    /// Compiles a literal array of expressions, `float64{e1, e2, ...}`.
    ///
    /// Syntax errors come first, then [`Error::TypeMismatch`] for well-formed
    /// input that is not an array, then name errors of the elements in order.
    pub fn compile_slice<V: KnownVariables + ?Sized>(
        &self,
        source: &str,
        variables: &V,
    ) -> Result<CompiledSlice, Error> {
        self.compile_slice_with_options(
            &self.options.default_compilation_options,
            source,
            variables,
        )
    }

    pub fn compile_slice_with_options<V: KnownVariables + ?Sized>(
        &self,
        options: &CompilationOptions,
        source: &str,
        variables: &V,
    ) -> Result<CompiledSlice, Error> {
        let elements = match parser::parse_slice(source, options.max_depth)? {
            ParsedSlice::Elements(elements) => elements,
            ParsedSlice::Scalar => {
                return Err(Error::TypeMismatch {
                    expression: source.to_string(),
                    container: format!("[]{ELEMENT_TYPE}"),
                });
            }
        };
        let expressions = elements
            .iter()
            .map(|postfix| self.resolve(postfix, variables))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(source, len = expressions.len(), "compiled slice");
        Ok(CompiledSlice::new(expressions))
    }

    fn resolve<V: KnownVariables + ?Sized>(
        &self,
        postfix: &[Postfix<'_>],
        variables: &V,
    ) -> Result<CompiledExpression, Error> {
        Compiler::new(variables, &self.functions)
            .compile(postfix)
            .map(CompiledExpression::new)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}
