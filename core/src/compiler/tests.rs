//! Tests for name resolution.

use pretty_assertions::assert_eq;

use crate::{
    api::Error,
    compiler::Compiler,
    parser::{self, BinaryOp, Position, Span, SyntaxError, UnaryOp},
    stdlib::FunctionRegistry,
    vm::{Code, Instruction},
};

fn compile(source: &str, variables: &[&str]) -> Result<Code, Error> {
    let functions = FunctionRegistry::with_stdlib();
    let postfix = parser::parse(source).unwrap();
    Compiler::new(variables, &functions).compile(&postfix)
}

fn var(name: &str) -> Instruction {
    Instruction::Variable(name.into())
}

fn num(literal: &str) -> Instruction {
    Instruction::Number {
        value: literal.parse().unwrap(),
        literal: literal.into(),
    }
}

#[test]
fn test_compile_literal() {
    let code = compile("42", &[]).unwrap();

    assert_eq!(code.instructions, vec![num("42")]);
    assert_eq!(code.max_stack_size, 1);
}

#[test]
fn test_compile_product_then_sum() {
    // N*N+N  =>  N N * N +
    let code = compile("N*N+N", &["N"]).unwrap();

    assert_eq!(
        code.instructions,
        vec![
            var("N"),
            var("N"),
            Instruction::Binary(BinaryOp::Mul),
            var("N"),
            Instruction::Binary(BinaryOp::Add),
        ]
    );
    assert_eq!(code.max_stack_size, 2);
}

#[test]
fn test_compile_sum_then_product() {
    // N+N*N  =>  N N N * +
    let code = compile("N+N*N", &["N"]).unwrap();

    assert_eq!(code.instructions.len(), 5);
    assert_eq!(code.max_stack_size, 3, "all three operands are live at once");
}

#[test]
fn test_compile_calls() {
    let code = compile("-math.Hypot(M, math.Log(N))", &["M", "N"]).unwrap();

    assert_eq!(code.instructions.len(), 5);
    assert_eq!(code.instructions[0], var("M"));
    assert_eq!(code.instructions[1], var("N"));
    assert!(matches!(
        &code.instructions[2],
        Instruction::UnaryFunc { name, .. } if &**name == "math.Log"
    ));
    assert!(matches!(
        &code.instructions[3],
        Instruction::BinaryFunc { name, .. } if &**name == "math.Hypot"
    ));
    assert_eq!(code.instructions[4], Instruction::Unary(UnaryOp::Neg));
    assert_eq!(code.max_stack_size, 2);
}

#[test]
fn test_variable_names_are_shared() {
    let code = compile("N+N", &["N"]).unwrap();

    match (&code.instructions[0], &code.instructions[1]) {
        (Instruction::Variable(a), Instruction::Variable(b)) => {
            assert!(alloc::sync::Arc::ptr_eq(a, b))
        }
        other => panic!("expected two variables, got {:?}", other),
    }
}

#[test]
fn test_unknown_variable() {
    let err = compile("M + N", &["N"]).unwrap_err();

    assert_eq!(
        err,
        Error::UnknownVariable {
            name: "M".to_string(),
            span: Span::new(0, 1),
        }
    );
    assert_eq!(err.to_string(), "unknown variable: M");
}

#[test]
fn test_no_variables_known() {
    let err = compile("N", &[]).unwrap_err();
    assert_eq!(err.to_string(), "unknown variable: N");
}

#[test]
fn test_unknown_function() {
    let err = compile("1 + foo(N)", &["N"]).unwrap_err();

    assert_eq!(
        err,
        Error::UnknownFunction {
            name: "foo".to_string(),
            span: Span::new(4, 7),
        }
    );
}

#[test]
fn test_arguments_are_checked_before_the_call() {
    let err = compile("foo(M)", &["N"]).unwrap_err();
    assert_eq!(err.to_string(), "unknown variable: M");
}

#[test]
fn test_wrong_arity() {
    let err = compile("N + math.Log(N, N)", &["N"]).unwrap_err();

    assert_eq!(
        err,
        Error::Syntax(SyntaxError::new(
            Position::new(1, 5),
            Span::new(4, 12),
            "wrong number of arguments to math.Log: expected 1, found 2",
        ))
    );

    let err = compile("math.Hypot(N)", &["N"]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "1:1: wrong number of arguments to math.Hypot: expected 2, found 1"
    );
}

#[test]
fn test_empty_registry_rejects_calls() {
    let functions = FunctionRegistry::new();
    let postfix = parser::parse("math.Log(N)").unwrap();
    let err = Compiler::new(&["N"], &functions)
        .compile(&postfix)
        .unwrap_err();

    assert_eq!(err.to_string(), "unknown function: math.Log");
}
