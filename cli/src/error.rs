use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("invalid binding {arg:?}: expected NAME=VALUE")]
    #[diagnostic(code(cli::binding), help("for example --var N=10"))]
    InvalidBinding { arg: String },

    #[error("invalid pattern")]
    #[diagnostic(code(cli::pattern))]
    InvalidPattern(#[from] regex::Error),

    #[error("--file requires --pattern to bind variables from file names")]
    #[diagnostic(code(cli::pattern))]
    FilesWithoutPattern,

    #[error("file name {file:?} does not match pattern {pattern}")]
    #[diagnostic(code(cli::no_match))]
    NoMatch { file: String, pattern: String },

    #[error("capture {name} of {file:?} is not a number: {text}")]
    #[diagnostic(code(cli::not_a_number))]
    NotANumber {
        file: String,
        name: String,
        text: String,
    },

    #[error("compilation failed")]
    #[diagnostic(code(cli::compile))]
    Compile,

    #[error(transparent)]
    #[diagnostic(code(cli::eval), help("bind it with --var or a named group in --pattern"))]
    Eval(#[from] rpnexpr::EvalError),

    #[error("failed to read standard input")]
    #[diagnostic(code(cli::io))]
    Io(#[from] std::io::Error),
}
