/// Parsing errors.
///
/// Defines all error types the parser records while turning tokens into an
/// AST: unexpected tokens, missing prefix parse rules, and invalid integer
/// literals. Parse errors are collected into a list rather than raised.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// unresolved identifiers, operator type mismatches, bad hash keys, and
/// builtin misuse. The first runtime error aborts the program.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The error surfaced at the [`evaluate`](crate::evaluate) boundary.
///
/// A source string either fails to parse (with the parser's full message
/// list) or fails during evaluation (with a single runtime error). Runtime
/// failures display in their inspection form, `ERROR: <message>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The parser recorded at least one error; the program was not run.
    Parse(Vec<ParseError>),
    /// Evaluation aborted with a runtime error.
    Runtime(RuntimeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(errors) => {
                write!(f, "parser errors:")?;
                for error in errors {
                    write!(f, "\n\t{error}")?;
                }
                Ok(())
            },
            Self::Runtime(error) => write!(f, "ERROR: {error}"),
        }
    }
}

impl std::error::Error for Error {}
