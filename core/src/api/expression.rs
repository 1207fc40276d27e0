//! Compiled expressions.

use core::fmt;
use core::ops::Index;

use super::{Bindings, EvalError};
use crate::parser::ELEMENT_TYPE;
use crate::render::render;
use crate::vm::{Code, Instruction, VM};

/// A compiled scalar expression: an immutable postfix program.
///
/// Evaluation never mutates the program, so one expression can be evaluated
/// any number of times, concurrently, with different bindings.
///
/// # Example
///
/// ```
/// use rpnexpr_core::api::Engine;
///
/// let engine = Engine::default();
/// let expr = engine.compile("-math.Hypot(M+N, M-N)", &["M", "N"]).unwrap();
///
/// assert_eq!(expr.rpn(), ["M", "N", "+", "M", "N", "-", "math.Hypot", "u-"]);
/// assert_eq!(expr.to_string(), "-math.Hypot(M+N, M-N)");
/// assert_eq!(expr.evaluate(&[("M", 3.5), ("N", 0.5)]), -5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpression {
    code: Code,
}

impl CompiledExpression {
    pub(crate) fn new(code: Code) -> Self {
        Self { code }
    }

    /// Evaluates the expression.
    ///
    /// # Panics
    ///
    /// Panics if `bindings` lacks a variable the expression references. The
    /// variables were validated at compile time, so the bindings must cover
    /// every name in the set the expression was compiled with; use
    /// [`try_evaluate`](Self::try_evaluate) when that is not guaranteed.
    pub fn evaluate<B: Bindings + ?Sized>(&self, bindings: &B) -> f64 {
        match self.try_evaluate(bindings) {
            Ok(value) => value,
            Err(err) => panic!("{err}: bindings must cover every compiled variable"),
        }
    }

    /// Evaluates the expression, reporting a missing variable as an error.
    pub fn try_evaluate<B: Bindings + ?Sized>(&self, bindings: &B) -> Result<f64, EvalError> {
        VM::new(&self.code, bindings).run()
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    pub fn instructions(&self) -> &[Instruction] {
        self.code.instructions()
    }

    /// The postfix listing: one string per instruction.
    pub fn rpn(&self) -> Vec<String> {
        self.instructions().iter().map(|i| i.to_string()).collect()
    }

    /// Distinct variables referenced, in order of first use.
    pub fn variables(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for instruction in self.instructions() {
            if let Instruction::Variable(name) = instruction {
                if !seen.contains(&name.as_ref()) {
                    seen.push(name);
                }
            }
        }
        seen
    }
}

/// Canonical infix form; compiling it again yields the same program.
impl fmt::Display for CompiledExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.instructions()))
    }
}

/// An ordered sequence of compiled expressions; index `i` is the `i`-th
/// element of the source literal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompiledSlice {
    expressions: Vec<CompiledExpression>,
}

impl CompiledSlice {
    pub(crate) fn new(expressions: Vec<CompiledExpression>) -> Self {
        Self { expressions }
    }

    /// Evaluates every element in order.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`CompiledExpression::evaluate`].
    pub fn evaluate<B: Bindings + ?Sized>(&self, bindings: &B) -> Vec<f64> {
        self.expressions
            .iter()
            .map(|expr| expr.evaluate(bindings))
            .collect()
    }

    pub fn try_evaluate<B: Bindings + ?Sized>(&self, bindings: &B) -> Result<Vec<f64>, EvalError> {
        self.expressions
            .iter()
            .map(|expr| expr.try_evaluate(bindings))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CompiledExpression> {
        self.expressions.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, CompiledExpression> {
        self.expressions.iter()
    }

    pub fn as_slice(&self) -> &[CompiledExpression] {
        &self.expressions
    }
}

impl Index<usize> for CompiledSlice {
    type Output = CompiledExpression;

    fn index(&self, index: usize) -> &CompiledExpression {
        &self.expressions[index]
    }
}

impl<'a> IntoIterator for &'a CompiledSlice {
    type Item = &'a CompiledExpression;
    type IntoIter = core::slice::Iter<'a, CompiledExpression>;

    fn into_iter(self) -> Self::IntoIter {
        self.expressions.iter()
    }
}

impl IntoIterator for CompiledSlice {
    type Item = CompiledExpression;
    type IntoIter = alloc::vec::IntoIter<CompiledExpression>;

    fn into_iter(self) -> Self::IntoIter {
        self.expressions.into_iter()
    }
}

impl fmt::Display for CompiledSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ELEMENT_TYPE}{{")?;
        for (i, expr) in self.expressions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{expr}")?;
        }
        f.write_str("}")
    }
}
