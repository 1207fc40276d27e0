//! Name resolution: turns a parsed postfix sequence into a runnable [`Code`].
//!
//! Every variable must be one of the known variables and every call must
//! name a registered function with matching arity. Errors are reported for
//! the first offending item in postfix order, so a call's arguments are
//! checked before the call itself.

use alloc::sync::Arc;

use hashbrown::HashMap;
use tracing::debug;

use crate::api::{Error, KnownVariables};
use crate::parser::{Postfix, SyntaxError};
use crate::stdlib::{FunctionKind, FunctionRegistry};
use crate::vm::{Code, Instruction};

#[cfg(test)]
mod tests;

pub struct Compiler<'a, V: ?Sized> {
    variables: &'a V,
    functions: &'a FunctionRegistry,

    /// Interned variable names, so repeated references share one allocation.
    names: HashMap<&'a str, Arc<str>>,

    instructions: Vec<Instruction>,
    current_stack_depth: usize,
    max_stack_size: usize,
}

impl<'a, V: KnownVariables + ?Sized> Compiler<'a, V> {
    pub fn new(variables: &'a V, functions: &'a FunctionRegistry) -> Self {
        Self {
            variables,
            functions,
            names: HashMap::new(),
            instructions: Vec::new(),
            current_stack_depth: 0,
            max_stack_size: 0,
        }
    }

    pub fn compile(mut self, postfix: &[Postfix<'a>]) -> Result<Code, Error> {
        for item in postfix {
            let instruction = self.resolve(item)?;
            self.emit(instruction);
        }
        debug_assert_eq!(self.current_stack_depth, 1, "unbalanced postfix sequence");
        debug!(
            instructions = self.instructions.len(),
            max_stack_size = self.max_stack_size,
            "compiled program"
        );
        Ok(Code {
            instructions: self.instructions,
            max_stack_size: self.max_stack_size,
        })
    }

    fn resolve(&mut self, item: &Postfix<'a>) -> Result<Instruction, Error> {
        Ok(match item {
            Postfix::Number { value, literal } => Instruction::Number {
                value: *value,
                literal: Arc::from(*literal),
            },
            Postfix::Variable { name, span } => {
                if !self.variables.contains(name) {
                    return Err(Error::UnknownVariable {
                        name: name.to_string(),
                        span: span.clone(),
                    });
                }
                let name = self
                    .names
                    .entry(*name)
                    .or_insert_with(|| Arc::from(*name))
                    .clone();
                Instruction::Variable(name)
            }
            Postfix::Unary(op) => Instruction::Unary(*op),
            Postfix::Binary(op) => Instruction::Binary(*op),
            Postfix::Call {
                name,
                args,
                position,
                span,
            } => {
                let Some(function) = self.functions.get(name) else {
                    return Err(Error::UnknownFunction {
                        name: name.to_string(),
                        span: span.clone(),
                    });
                };
                if function.arity() != *args {
                    return Err(SyntaxError::new(
                        *position,
                        span.clone(),
                        format!(
                            "wrong number of arguments to {}: expected {}, found {}",
                            name,
                            function.arity(),
                            args
                        ),
                    )
                    .into());
                }
                match function.kind {
                    FunctionKind::Unary(apply) => Instruction::UnaryFunc {
                        name: function.name.clone(),
                        apply,
                    },
                    FunctionKind::Binary(apply) => Instruction::BinaryFunc {
                        name: function.name.clone(),
                        apply,
                    },
                }
            }
        })
    }

    fn emit(&mut self, instruction: Instruction) {
        self.current_stack_depth = self.current_stack_depth + 1 - instruction.arity();
        self.max_stack_size = self.max_stack_size.max(self.current_stack_depth);
        self.instructions.push(instruction);
    }
}
