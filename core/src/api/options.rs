//! Configuration options for the engine.

use crate::parser::DEFAULT_MAX_DEPTH;

/// Configuration options for compilation.
///
/// # Example
///
/// ```
/// use rpnexpr_core::api::CompilationOptions;
///
/// let options = CompilationOptions { max_depth: 64 };
/// assert_eq!(CompilationOptions::default().max_depth, 500);
/// # let _ = options;
/// ```
#[derive(Debug, Clone)]
pub struct CompilationOptions {
    /// Maximum nesting of parenthesised groups and function calls.
    ///
    /// Default: 500
    pub max_depth: usize,
}

impl Default for CompilationOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Configuration options for the engine.
///
/// These set the defaults used by [`Engine::compile`](super::Engine::compile)
/// and [`Engine::compile_slice`](super::Engine::compile_slice); the
/// `*_with_options` variants override them per call.
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    pub default_compilation_options: CompilationOptions,
}
