use core::fmt;

use crate::vm::Instruction;

/// A compiled postfix program.
///
/// Instruction order is fixed at construction. `max_stack_size` is the
/// deepest the operand stack gets while the program runs.
#[derive(Clone, PartialEq)]
pub struct Code {
    pub(crate) instructions: Vec<Instruction>,
    pub(crate) max_stack_size: usize,
}

impl Code {
    /// Builds a program, checking that it leaves exactly one value.
    ///
    /// Returns `None` when an instruction would pop from an empty stack or
    /// when the final depth is not 1.
    pub fn new(instructions: Vec<Instruction>) -> Option<Self> {
        let mut depth: usize = 0;
        let mut max_stack_size = 0;
        for instruction in &instructions {
            depth = depth.checked_sub(instruction.arity())? + 1;
            max_stack_size = max_stack_size.max(depth);
        }
        (depth == 1).then_some(Self {
            instructions,
            max_stack_size,
        })
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn max_stack_size(&self) -> usize {
        self.max_stack_size
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Code {{")?;
        writeln!(f, "  max_stack_size: {}", self.max_stack_size)?;
        writeln!(f, "  instructions:")?;
        for (addr, instr) in self.instructions.iter().enumerate() {
            writeln!(f, "    {:4}  {:?}", addr, instr)?;
        }
        write!(f, "}}")
    }
}
