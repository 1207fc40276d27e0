use alloc::sync::Arc;
use core::fmt;

use crate::parser::{BinaryOp, UnaryOp};

/// One element of a compiled postfix program.
///
/// Literals and variable references push one value; unary operators and
/// unary functions pop one and push one; binary operators and binary
/// functions pop two (the first pushed is the left operand) and push one.
#[derive(Clone)]
pub enum Instruction {
    /// A numeric literal. The source text is kept so the program renders
    /// back exactly as written (`1.0` stays `1.0`).
    Number { value: f64, literal: Arc<str> },
    Variable(Arc<str>),
    Binary(BinaryOp),
    Unary(UnaryOp),
    UnaryFunc {
        name: Arc<str>,
        apply: fn(f64) -> f64,
    },
    BinaryFunc {
        name: Arc<str>,
        apply: fn(f64, f64) -> f64,
    },
}

impl Instruction {
    /// Number of operands popped.
    pub fn arity(&self) -> usize {
        match self {
            Instruction::Number { .. } | Instruction::Variable(_) => 0,
            Instruction::Unary(_) | Instruction::UnaryFunc { .. } => 1,
            Instruction::Binary(_) | Instruction::BinaryFunc { .. } => 2,
        }
    }
}

// Functions compare by name: a registry maps each name to one implementation.
impl PartialEq for Instruction {
    fn eq(&self, other: &Self) -> bool {
        use Instruction::*;
        match (self, other) {
            (Number { literal: a, .. }, Number { literal: b, .. }) => a == b,
            (Variable(a), Variable(b)) => a == b,
            (Binary(a), Binary(b)) => a == b,
            (Unary(a), Unary(b)) => a == b,
            (UnaryFunc { name: a, .. }, UnaryFunc { name: b, .. }) => a == b,
            (BinaryFunc { name: a, .. }, BinaryFunc { name: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Number { value, literal } => write!(f, "Number({literal} = {value:?})"),
            Instruction::Variable(name) => write!(f, "Variable({name})"),
            Instruction::Binary(op) => write!(f, "Binary({op})"),
            Instruction::Unary(op) => write!(f, "Unary({op})"),
            Instruction::UnaryFunc { name, .. } => write!(f, "UnaryFunc({name})"),
            Instruction::BinaryFunc { name, .. } => write!(f, "BinaryFunc({name})"),
        }
    }
}

/// The postfix listing form: `1.0`, `N`, `*`, `u-`, `math.Log`.
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Number { literal, .. } => f.write_str(literal),
            Instruction::Variable(name) => f.write_str(name),
            Instruction::Binary(op) => write!(f, "{op}"),
            Instruction::Unary(op) => write!(f, "{op}"),
            Instruction::UnaryFunc { name, .. } | Instruction::BinaryFunc { name, .. } => {
                f.write_str(name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let cases = [
            (
                Instruction::Number {
                    value: 1.0,
                    literal: "1.0".into(),
                },
                "1.0",
            ),
            (Instruction::Variable("N".into()), "N"),
            (Instruction::Binary(BinaryOp::Mul), "*"),
            (Instruction::Unary(UnaryOp::Neg), "u-"),
            (Instruction::Unary(UnaryOp::Plus), "u+"),
            (
                Instruction::UnaryFunc {
                    name: "math.Log".into(),
                    apply: f64::ln,
                },
                "math.Log",
            ),
        ];
        for (instruction, expected) in cases {
            assert_eq!(instruction.to_string(), expected);
        }
    }

    #[test]
    fn test_equality_ignores_function_pointer() {
        let a = Instruction::UnaryFunc {
            name: "f".into(),
            apply: f64::ln,
        };
        let b = Instruction::UnaryFunc {
            name: "f".into(),
            apply: f64::exp,
        };
        assert_eq!(a, b);
        assert_ne!(a, Instruction::Variable("f".into()));
    }

    #[test]
    fn test_arity() {
        assert_eq!(Instruction::Variable("x".into()).arity(), 0);
        assert_eq!(Instruction::Unary(UnaryOp::Neg).arity(), 1);
        assert_eq!(Instruction::Binary(BinaryOp::Add).arity(), 2);
    }
}
