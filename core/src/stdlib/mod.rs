//! Function registry and standard library.
//!
//! Calls in an expression resolve against a [`FunctionRegistry`]: a fixed
//! whitelist mapping a name to its arity and numeric implementation. The
//! registry is handed to the [`Engine`](crate::api::Engine) explicitly; there
//! is no process-wide table.

use alloc::sync::Arc;
use core::fmt;

use hashbrown::HashMap;

pub mod math;

pub use math::build_math_package;

/// Numeric implementation of a registered function.
#[derive(Clone, Copy)]
pub enum FunctionKind {
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
}

impl FunctionKind {
    pub fn arity(&self) -> usize {
        match self {
            FunctionKind::Unary(_) => 1,
            FunctionKind::Binary(_) => 2,
        }
    }
}

impl fmt::Debug for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionKind::Unary(_) => f.write_str("Unary"),
            FunctionKind::Binary(_) => f.write_str("Binary"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Function {
    pub name: Arc<str>,
    pub kind: FunctionKind,
}

impl Function {
    pub fn arity(&self) -> usize {
        self.kind.arity()
    }
}

/// Whitelist of callable functions, keyed by the name used in source
/// (`math.Log`).
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<Arc<str>, Function>,
}

impl FunctionRegistry {
    /// An empty registry: expressions compiled against it cannot call anything.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the whole standard library.
    pub fn with_stdlib() -> Self {
        let mut registry = Self::new();
        register_stdlib(&mut registry);
        registry
    }

    /// Registers `kind` under `name`, returning the function it replaces.
    pub fn register(&mut self, name: &str, kind: FunctionKind) -> Option<Function> {
        let name: Arc<str> = Arc::from(name);
        self.functions
            .insert(name.clone(), Function { name, kind })
    }

    pub fn register_unary(&mut self, name: &str, f: fn(f64) -> f64) -> Option<Function> {
        self.register(name, FunctionKind::Unary(f))
    }

    pub fn register_binary(&mut self, name: &str, f: fn(f64, f64) -> f64) -> Option<Function> {
        self.register(name, FunctionKind::Binary(f))
    }

    pub fn get(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(|name| name.as_ref())
    }
}

/// Register all standard library packages.
pub fn register_stdlib(registry: &mut FunctionRegistry) {
    build_math_package(registry);
}
