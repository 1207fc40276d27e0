#![allow(dead_code)]

use pretty_assertions::assert_eq;

/// One scalar expression checked end to end: compile, list, render,
/// recompile the rendering, evaluate.
pub struct Case {
    pub input: &'static str,
    pub variables: Vec<&'static str>,
    pub rpn: Option<Vec<&'static str>>,
    pub formatted: Option<&'static str>,
    pub bindings: Vec<(&'static str, f64)>,
    pub value: Option<f64>,
    pub error: Option<&'static str>,
}

impl Case {
    pub fn check(&self) {
        let expr = match (rpnexpr::compile(self.input, &self.variables), self.error) {
            (Err(err), Some(expected)) => {
                assert_eq!(err.to_string(), expected, "error for {:?}", self.input);
                return;
            }
            (Ok(expr), Some(expected)) => panic!(
                "expected {:?} to fail with {:?}, compiled to {:?}",
                self.input,
                expected,
                expr.rpn()
            ),
            (Err(err), None) => panic!("compiling {:?} failed: {}", self.input, err),
            (Ok(expr), None) => expr,
        };

        if let Some(rpn) = &self.rpn {
            assert_eq!(&expr.rpn(), rpn, "postfix of {:?}", self.input);
        }

        let rendered = expr.to_string();
        if let Some(formatted) = self.formatted {
            assert_eq!(rendered, formatted, "rendering of {:?}", self.input);
        }
        let again = rpnexpr::compile(&rendered, &self.variables)
            .unwrap_or_else(|e| panic!("recompiling {:?} failed: {}", rendered, e));
        assert_eq!(again.instructions(), expr.instructions(), "round trip of {:?}", self.input);

        if let Some(expected) = self.value {
            let actual = expr.evaluate(&self.bindings);
            assert_same_value(actual, expected);
            // No state survives an evaluation.
            assert_eq!(expr.evaluate(&self.bindings).to_bits(), actual.to_bits());
        }
    }
}

pub fn assert_same_value(actual: f64, expected: f64) {
    if expected.is_nan() {
        assert!(actual.is_nan(), "expected NaN, got {}", actual);
    } else {
        assert_eq!(actual, expected);
    }
}

/// Declares a `#[test]` that checks one [`Case`].
///
/// `input` and `variables` are required; the remaining fields are optional
/// but must appear in this order.
#[macro_export]
macro_rules! test_case {
    (
        $name:ident,
        input: $input:expr,
        variables: [$($var:expr),* $(,)?],
        $(rpn: [$($rpn:expr),* $(,)?],)?
        $(formatted: $formatted:expr,)?
        $(bindings: {$($bname:expr => $bvalue:expr),* $(,)?},)?
        $(value: $value:expr,)?
        $(error: $error:expr,)?
    ) => {
        #[test]
        fn $name() {
            $crate::cases::Case {
                input: $input,
                variables: vec![$($var),*],
                rpn: None $(.or(Some(vec![$($rpn),*])))?,
                formatted: None $(.or(Some($formatted)))?,
                bindings: vec![$($(($bname, $bvalue)),*)?],
                value: None $(.or(Some($value)))?,
                error: None $(.or(Some($error)))?,
            }
            .check();
        }
    };
}
