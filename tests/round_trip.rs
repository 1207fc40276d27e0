use pretty_assertions::assert_eq;

const VARIABLES: [&str; 3] = ["K", "M", "N"];

// Rendering then recompiling must reproduce the same program.
const SOURCES: &[&str] = &[
    "K - (M - N)",
    "K - M - N",
    "K / (M * N)",
    "K * (M / N)",
    "(K + M) * (N - K)",
    "-(K + M)",
    "-K * -M",
    "-(-K)",
    "+(-(+K))",
    "K - -(M * N)",
    "math.Atan2(-K, M - N) / math.Pi2(K)",
    "math.Pow(K, M - (N - 1))",
    "(((K)))",
    "0.5 * .5 + 5. - 1e-3",
];

#[test]
fn test_semantic_round_trip() {
    let mut functions = rpnexpr::FunctionRegistry::with_stdlib();
    functions.register_unary("math.Pi2", |x| x * std::f64::consts::TAU);
    let engine = rpnexpr::Engine::with_functions(Default::default(), functions);

    for source in SOURCES {
        let expr = engine
            .compile(source, &VARIABLES)
            .unwrap_or_else(|e| panic!("compiling {:?} failed: {}", source, e));
        let rendered = expr.to_string();
        let again = engine
            .compile(&rendered, &VARIABLES)
            .unwrap_or_else(|e| panic!("recompiling {:?} failed: {}", rendered, e));

        assert_eq!(again.rpn(), expr.rpn(), "{:?} rendered as {:?}", source, rendered);
        // The canonical form is a fixed point.
        assert_eq!(again.to_string(), rendered);
    }
}

#[test]
fn test_canonical_forms() {
    let cases = [
        ("K - (M - N)", "K-(M-N)"),
        ("(K - M) - N", "K-M-N"),
        ("-(-K)", "--K"),
        ("-K * -M", "-K*-M"),
        ("K - -(M * N)", "K--(M*N)"),
        ("0.5 * .5 + 5. - 1e-3", "0.5*.5+5.-1e-3"),
    ];

    for (source, expected) in cases {
        let expr = rpnexpr::compile(source, &VARIABLES).unwrap();
        assert_eq!(expr.to_string(), expected, "rendering of {:?}", source);
    }
}
