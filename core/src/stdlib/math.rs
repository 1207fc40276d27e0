//! Math Package
//!
//! Registers the `math.` functions.
//!
//! Unary: Abs, Sqrt, Cbrt, Exp, Exp2, Expm1, Log, Log10, Log2, Log1p,
//!        Sin, Cos, Tan, Asin, Acos, Atan, Sinh, Cosh, Tanh,
//!        Floor, Ceil, Round, Trunc
//! Binary: Hypot, Pow, Atan2, Min, Max, Mod, Dim

use super::FunctionRegistry;

pub const PACKAGE: &str = "math";

const UNARY: &[(&str, fn(f64) -> f64)] = &[
    // Basic operations
    ("Abs", f64::abs),
    ("Sqrt", f64::sqrt),
    ("Cbrt", f64::cbrt),
    // Exponentials and logarithms
    ("Exp", f64::exp),
    ("Exp2", f64::exp2),
    ("Expm1", f64::exp_m1),
    ("Log", f64::ln),
    ("Log10", f64::log10),
    ("Log2", f64::log2),
    ("Log1p", f64::ln_1p),
    // Trigonometry
    ("Sin", f64::sin),
    ("Cos", f64::cos),
    ("Tan", f64::tan),
    ("Asin", f64::asin),
    ("Acos", f64::acos),
    ("Atan", f64::atan),
    ("Sinh", f64::sinh),
    ("Cosh", f64::cosh),
    ("Tanh", f64::tanh),
    // Rounding
    ("Floor", f64::floor),
    ("Ceil", f64::ceil),
    ("Round", f64::round),
    ("Trunc", f64::trunc),
];

const BINARY: &[(&str, fn(f64, f64) -> f64)] = &[
    ("Hypot", f64::hypot),
    ("Pow", f64::powf),
    ("Atan2", f64::atan2),
    ("Min", math_min),
    ("Max", math_max),
    ("Mod", math_mod),
    ("Dim", math_dim),
];

/// Floating-point remainder; the result takes the sign of `x`.
fn math_mod(x: f64, y: f64) -> f64 {
    x % y
}

/// Smaller of `x` and `y`; NaN if either is NaN.
fn math_min(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    x.min(y)
}

/// Larger of `x` and `y`; NaN if either is NaN.
fn math_max(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    x.max(y)
}

/// Positive difference: `x - y` when positive, otherwise 0.
fn math_dim(x: f64, y: f64) -> f64 {
    let d = x - y;
    if d.is_nan() {
        return d;
    }
    d.max(0.0)
}

/// Registers every math function as `math.<Name>`.
pub fn build_math_package(registry: &mut FunctionRegistry) {
    for (name, f) in UNARY {
        registry.register_unary(&format!("{PACKAGE}.{name}"), *f);
    }
    for (name, f) in BINARY {
        registry.register_binary(&format!("{PACKAGE}.{name}"), *f);
    }
}
