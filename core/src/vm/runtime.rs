use tracing::trace;

use super::instruction_set::Instruction;

use crate::api::{Bindings, EvalError};
use crate::vm::{Code, Stack};

/// Executes a program against a set of variable bindings.
///
/// Arithmetic follows IEEE-754: division by zero gives an infinity or NaN
/// rather than an error. The only failure is a variable missing from
/// `bindings`.
pub struct VM<'a, B: ?Sized> {
    code: &'a Code,
    bindings: &'a B,
    stack: Stack<f64>,
}

impl<'a, B: Bindings + ?Sized> VM<'a, B> {
    pub fn new(code: &'a Code, bindings: &'a B) -> Self {
        VM {
            code,
            bindings,
            stack: Stack::new(code.max_stack_size),
        }
    }

    pub fn run(mut self) -> Result<f64, EvalError> {
        for instruction in &self.code.instructions {
            use Instruction::*;
            match instruction {
                Number { value, .. } => self.stack.push(*value),
                Variable(name) => match self.bindings.get(name) {
                    Some(value) => self.stack.push(value),
                    None => {
                        return Err(EvalError::UnboundVariable {
                            name: name.to_string(),
                        });
                    }
                },
                Binary(op) => {
                    let (a, b) = self.stack.pop_pair();
                    self.stack.push(op.apply(a, b));
                }
                Unary(op) => {
                    let a = self.stack.pop();
                    self.stack.push(op.apply(a));
                }
                UnaryFunc { apply, .. } => {
                    let a = self.stack.pop();
                    self.stack.push(apply(a));
                }
                BinaryFunc { apply, .. } => {
                    let (a, b) = self.stack.pop_pair();
                    self.stack.push(apply(a, b));
                }
            }
            trace!(%instruction, top = ?self.stack.peek(), "executed");
        }
        Ok(self.stack.into_result())
    }
}
