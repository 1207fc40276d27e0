use clap::Parser;
use regex::Regex;
use rpnexpr::{Bindings, CompiledExpression, CompiledSlice, Engine, render_error};
use std::collections::{BTreeMap, BTreeSet};
use std::io::BufRead;
use tracing::debug;

mod capture;
mod error;

use error::CliError;

/// rpnexpr - compile and evaluate arithmetic expressions over named variables
#[derive(Parser, Debug)]
#[command(name = "rpnexpr")]
#[command(about = "Evaluate arithmetic expressions", long_about = None)]
struct Args {
    /// Bind a variable, e.g. `--var N=10`; may be repeated
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Regex whose named capture groups become variables, bound per file
    #[arg(long, value_name = "REGEX")]
    pattern: Option<String>,

    /// File name to match against --pattern; may be repeated
    #[arg(long = "file", value_name = "NAME")]
    files: Vec<String>,

    /// Compile the input as a literal array, `float64{e1, e2, ...}`
    #[arg(long)]
    slice: bool,

    /// Print the postfix program (for debugging)
    #[arg(long)]
    debug_rpn: bool,

    /// Expression to evaluate (if not provided, reads one per line from stdin)
    expression: Option<String>,
}

fn parse_binding(arg: &str) -> Result<(String, f64), CliError> {
    let invalid = || CliError::InvalidBinding {
        arg: arg.to_string(),
    };
    let (name, value) = arg.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid());
    }
    let value = value.trim().parse::<f64>().map_err(|_| invalid())?;
    Ok((name.to_string(), value))
}

/// Either kind of compiled input.
enum Program {
    Scalar(CompiledExpression),
    Slice(CompiledSlice),
}

impl Program {
    fn rpn(&self) -> Vec<String> {
        match self {
            Program::Scalar(expr) => expr.rpn(),
            Program::Slice(slice) => slice
                .iter()
                .map(|expr| expr.rpn().join(" "))
                .collect(),
        }
    }

    fn evaluate<B: Bindings + ?Sized>(&self, bindings: &B) -> Result<String, CliError> {
        Ok(match self {
            Program::Scalar(expr) => expr.try_evaluate(bindings)?.to_string(),
            Program::Slice(slice) => {
                let values = slice.try_evaluate(bindings)?;
                let values: Vec<String> = values.iter().map(f64::to_string).collect();
                format!("[{}]", values.join(", "))
            }
        })
    }
}

/// Where variables come from: `--var` values, plus per-file captures.
struct Environment {
    vars: BTreeMap<String, f64>,
    pattern: Option<Regex>,
    files: Vec<String>,
}

impl Environment {
    fn from_args(args: &Args) -> Result<Self, CliError> {
        let pattern = args.pattern.as_deref().map(Regex::new).transpose()?;
        if pattern.is_none() && !args.files.is_empty() {
            return Err(CliError::FilesWithoutPattern);
        }
        Ok(Self {
            vars: args.vars.iter().cloned().collect(),
            pattern,
            files: args.files.clone(),
        })
    }

    fn known_variables(&self) -> BTreeSet<String> {
        let mut known: BTreeSet<String> = self.vars.keys().cloned().collect();
        if let Some(pattern) = &self.pattern {
            known.extend(capture::named_vars(pattern));
        }
        known
    }

    /// Bindings for one file: its captures override `--var` values.
    fn bindings_for(&self, pattern: &Regex, file: &str) -> Result<BTreeMap<String, f64>, CliError> {
        let mut bindings = self.vars.clone();
        bindings.extend(capture::bindings_for(pattern, file)?);
        Ok(bindings)
    }
}

fn compile(engine: &Engine, input: &str, slice: bool, env: &Environment) -> Result<Program, CliError> {
    let known = env.known_variables();
    debug!(input, ?known, slice, "compiling");

    let result = if slice {
        engine.compile_slice(input, &known).map(Program::Slice)
    } else {
        engine.compile(input, &known).map(Program::Scalar)
    };
    result.map_err(|e| {
        render_error(&e, input);
        CliError::Compile
    })
}

fn interpret_input(engine: &Engine, input: &str, args: &Args, env: &Environment) -> Result<(), CliError> {
    let program = compile(engine, input, args.slice, env)?;

    if args.debug_rpn {
        println!("=== RPN ===");
        for line in program.rpn() {
            println!("{}", line);
        }
        println!();
    }

    match &env.pattern {
        Some(pattern) if !env.files.is_empty() => {
            for file in &env.files {
                let bindings = env.bindings_for(pattern, file)?;
                println!("{}\t{}", file, program.evaluate(&bindings)?);
            }
        }
        _ => println!("{}", program.evaluate(&env.vars)?),
    }
    Ok(())
}

fn main() -> miette::Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let env = Environment::from_args(&args)?;
    let engine = Engine::default();

    // Check if we have a direct expression argument
    if let Some(expr) = &args.expression {
        interpret_input(&engine, expr, &args, &env)?;
        return Ok(());
    }

    // Otherwise read one expression per line; a bad line is reported and skipped
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(CliError::from)?;
        if line.trim().is_empty() {
            continue;
        }
        match interpret_input(&engine, &line, &args, &env) {
            Ok(()) | Err(CliError::Compile) => {}
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn env(args: &[&str]) -> (Args, Environment) {
        let args = Args::parse_from(std::iter::once("rpnexpr").chain(args.iter().copied()));
        let env = Environment::from_args(&args).unwrap();
        (args, env)
    }

    #[test]
    fn test_parse_binding() {
        assert_eq!(parse_binding("N=10").unwrap(), ("N".to_string(), 10.0));
        assert_eq!(parse_binding(" M = 2.5 ").unwrap(), ("M".to_string(), 2.5));
        assert!(parse_binding("N").is_err());
        assert!(parse_binding("=1").is_err());
        assert!(parse_binding("N=ten").is_err());
    }

    #[test]
    fn test_known_variables_merge_vars_and_pattern() {
        let (_, env) = env(&["--var", "K=1", "--pattern", r"(?P<N>\d+)", "N*K"]);
        let known: Vec<String> = env.known_variables().into_iter().collect();
        assert_eq!(known, ["K", "N"]);
    }

    #[test]
    fn test_files_need_pattern() {
        let args = Args::parse_from(["rpnexpr", "--file", "a.txt", "N"]);
        assert!(matches!(
            Environment::from_args(&args),
            Err(CliError::FilesWithoutPattern)
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let args = Args::parse_from(["rpnexpr", "--pattern", "(?P<N>", "N"]);
        assert!(matches!(
            Environment::from_args(&args),
            Err(CliError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_evaluate_scalar_with_vars() {
        let (args, env) = env(&["--var", "N=10", "N*N"]);
        let engine = Engine::default();
        let program = compile(&engine, "N*N", args.slice, &env).unwrap();

        assert_eq!(program.rpn(), ["N", "N", "*"]);
        assert_eq!(program.evaluate(&env.vars).unwrap(), "100");
    }

    #[test]
    fn test_evaluate_slice_per_file() {
        let (args, env) = env(&[
            "--slice",
            "--pattern",
            r"n(?P<N>\d+)\.csv",
            "--file",
            "n4.csv",
            "float64{N, N*N}",
        ]);
        let engine = Engine::default();
        let program = compile(&engine, "float64{N, N*N}", args.slice, &env).unwrap();
        let pattern = env.pattern.as_ref().unwrap();
        let bindings = env.bindings_for(pattern, "n4.csv").unwrap();

        assert_eq!(program.rpn(), ["N", "N N *"]);
        assert_eq!(program.evaluate(&bindings).unwrap(), "[4, 16]");
    }

    #[test]
    fn test_captures_override_vars() {
        let (_, env) = env(&["--var", "N=1", "--var", "K=3", "--pattern", r"(?P<N>\d+)", "N"]);
        let pattern = env.pattern.as_ref().unwrap();
        let bindings = env.bindings_for(pattern, "x7").unwrap();

        assert_eq!(bindings.get("N"), Some(&7.0));
        assert_eq!(bindings.get("K"), Some(&3.0));
    }

    #[test]
    fn test_unbound_variable_is_reported() {
        let (args, env) = env(&["--pattern", r"(?P<N>\d+)(-(?P<M>\d+))?", "N+M"]);
        let engine = Engine::default();
        let program = compile(&engine, "N+M", args.slice, &env).unwrap();
        let bindings = env
            .bindings_for(env.pattern.as_ref().unwrap(), "5")
            .unwrap();

        let err = program.evaluate(&bindings).unwrap_err();
        assert_eq!(err.to_string(), "unbound variable: M");
    }

    #[test]
    fn test_compile_error() {
        let (args, env) = env(&["(()"]);
        let engine = Engine::default();
        assert!(matches!(
            compile(&engine, "(()", args.slice, &env),
            Err(CliError::Compile)
        ));
    }
}
