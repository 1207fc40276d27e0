//! Renders a postfix program back to infix text.
//!
//! The walk mirrors evaluation: each instruction combines the fragments its
//! operands produced. A fragment remembers the precedence of its outermost
//! operator so a parent parenthesises only the children that need it:
//!
//! - the left operand of a binary operator when it binds more loosely,
//! - the right operand when it binds more loosely or equally,
//! - the operand of a sign when it is a binary expression.
//!
//! Binary operators are written without spaces (`M+N`), call arguments are
//! separated by `", "`.

use crate::parser::Precedence;
use crate::vm::Instruction;

struct Fragment {
    text: String,
    precedence: Precedence,
}

impl Fragment {
    fn atom(text: String) -> Self {
        Self {
            text,
            precedence: Precedence::Atom,
        }
    }

    /// The text, parenthesised when it binds more loosely than `min`.
    fn at_least(self, min: Precedence) -> String {
        if self.precedence < min {
            format!("({})", self.text)
        } else {
            self.text
        }
    }
}

fn pop(stack: &mut Vec<Fragment>) -> Fragment {
    match stack.pop() {
        Some(fragment) => fragment,
        None => panic!("render: malformed postfix program"),
    }
}

/// Renders `instructions`, which must form a valid postfix program.
pub fn render(instructions: &[Instruction]) -> String {
    let mut stack: Vec<Fragment> = Vec::with_capacity(instructions.len());

    for instruction in instructions {
        let fragment = match instruction {
            Instruction::Number { literal, .. } => Fragment::atom(literal.to_string()),
            Instruction::Variable(name) => Fragment::atom(name.to_string()),
            Instruction::Unary(op) => {
                let operand = pop(&mut stack).at_least(Precedence::Prefix);
                Fragment {
                    text: format!("{}{}", op.symbol(), operand),
                    precedence: Precedence::Prefix,
                }
            }
            Instruction::Binary(op) => {
                let precedence = op.precedence();
                let right = pop(&mut stack);
                let left = pop(&mut stack).at_least(precedence);
                let right = if right.precedence <= precedence {
                    format!("({})", right.text)
                } else {
                    right.text
                };
                Fragment {
                    text: format!("{}{}{}", left, op.symbol(), right),
                    precedence,
                }
            }
            Instruction::UnaryFunc { name, .. } => {
                let arg = pop(&mut stack);
                Fragment::atom(format!("{}({})", name, arg.text))
            }
            Instruction::BinaryFunc { name, .. } => {
                let second = pop(&mut stack);
                let first = pop(&mut stack);
                Fragment::atom(format!("{}({}, {})", name, first.text, second.text))
            }
        };
        stack.push(fragment);
    }

    debug_assert_eq!(stack.len(), 1, "render: malformed postfix program");
    pop(&mut stack).text
}
