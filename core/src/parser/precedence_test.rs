use pretty_assertions::assert_eq;

use super::parser::{Postfix, parse};

// Helper function to parse an expression and return its postfix listing.
//
// We test precedence by comparing whether two expressions parenthesized in
// different ways yield the same postfix sequence.
fn rpn(source: &str) -> Vec<String> {
    let postfix = parse(source)
        .unwrap_or_else(|e| panic!("Expression parsing failed: {}\n{}", source, e));
    postfix
        .iter()
        .map(|item| match item {
            Postfix::Number { literal, .. } => literal.to_string(),
            Postfix::Variable { name, .. } => name.to_string(),
            Postfix::Unary(op) => op.to_string(),
            Postfix::Binary(op) => op.to_string(),
            Postfix::Call { name, .. } => name.to_string(),
        })
        .collect()
}

#[test]
fn test_addition_vs_subtraction() {
    assert_eq!(rpn("a + b - c"), rpn("(a + b) - c"));
    assert_eq!(rpn("a - b + c"), rpn("(a - b) + c"));
    assert_eq!(
        rpn("a + b - c + d - e + f"),
        rpn("((((a + b) - c) + d) - e) + f")
    );
}

#[test]
fn test_multiplication_vs_division() {
    assert_eq!(rpn("a * b / c"), rpn("(a * b) / c"));
    assert_eq!(rpn("a / b * c"), rpn("(a / b) * c"));
    assert_eq!(
        rpn("a * b / c * d / e * f"),
        rpn("((((a * b) / c) * d) / e) * f")
    );
}

#[test]
fn test_addition_vs_multiplication() {
    assert_eq!(rpn("a + b * c"), rpn("a + (b * c)"));
    assert_eq!(rpn("a * b + c"), rpn("(a * b) + c"));
    assert_eq!(rpn("a - b / c - d"), rpn("(a - (b / c)) - d"));
}

#[test]
fn test_grouping_overrides_precedence() {
    assert_eq!(rpn("(a + b) * c"), ["a", "b", "+", "c", "*"]);
    assert_eq!(rpn("a - (b - c)"), ["a", "b", "c", "-", "-"]);
    assert_eq!(rpn("a - b - c"), ["a", "b", "-", "c", "-"]);
}

#[test]
fn test_unary_binds_tighter_than_binary() {
    assert_eq!(rpn("-a * b"), rpn("(-a) * b"));
    assert_eq!(rpn("-a + b"), rpn("(-a) + b"));
    assert_eq!(rpn("a * -b"), rpn("a * (-b)"));
    assert_eq!(rpn("a - -b"), rpn("a - (-b)"));
    assert_eq!(rpn("-a * b"), ["a", "u-", "b", "*"]);
}

#[test]
fn test_unary_after_open_paren_and_comma() {
    assert_eq!(rpn("(-a)"), ["a", "u-"]);
    assert_eq!(rpn("f(-a, +b)"), ["a", "u-", "b", "u+", "f"]);
}

#[test]
fn test_stacked_signs() {
    assert_eq!(rpn("--a"), ["a", "u-", "u-"]);
    assert_eq!(rpn("-+a"), ["a", "u+", "u-"]);
    assert_eq!(rpn("a--b"), ["a", "b", "u-", "-"]);
}

#[test]
fn test_sign_applies_to_whole_call() {
    assert_eq!(rpn("-f(a)"), rpn("-(f(a))"));
    assert_eq!(rpn("-f(a) * b"), ["a", "f", "u-", "b", "*"]);
}

#[test]
fn test_call_arguments_are_full_expressions() {
    assert_eq!(rpn("f(a + b * c, d)"), ["a", "b", "c", "*", "+", "d", "f"]);
    assert_eq!(rpn("f(g(a), (b))"), ["a", "g", "b", "f"]);
    assert_eq!(rpn("f(a) * g(b) + c"), rpn("(f(a) * g(b)) + c"));
}

#[test]
fn test_redundant_parens_vanish() {
    assert_eq!(rpn("((a))"), rpn("a"));
    assert_eq!(rpn("(((a + b)))"), rpn("a + b"));
}
