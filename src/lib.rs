//! # brio
//!
//! brio is a small, dynamically-typed, expression-oriented scripting
//! language written in Rust. It supports integers, strings, booleans, null,
//! arrays, hash maps, first-class closures with lexical scoping, conditional
//! expressions, and early return, driven by a lexer, a Pratt parser, and a
//! tree-walking evaluator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::eval_program,
        lexer::Lexer,
        parser::core::Parser,
        value::{core::Value, environment::{EnvRef, Environment}},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST
/// is built by the parser and traversed by the evaluator; its `Display`
/// implementations produce a canonical, fully-parenthesized rendition.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Defines the closed prefix/infix operator enums.
/// - Pretty-prints nodes for diagnostics and round-trip tests.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating code: the parser's collected message list and the runtime
/// errors that abort a program, together with the crate-level error exposed
/// at the [`evaluate`] boundary.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Renders the exact human-readable message for each failure.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, and error handling to provide a complete runtime for
/// source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides entry points for interpreting programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates a source string in a fresh environment and returns the final
/// value.
///
/// The program's value is that of its last statement (or of a top-level
/// `return`); an empty program yields `Null`.
///
/// # Errors
/// Returns [`Error::Parse`] with the parser's full message list when the
/// source does not parse (the program is not run), or [`Error::Runtime`]
/// when evaluation aborts.
///
/// # Examples
/// ```
/// use brio::{evaluate, interpreter::value::core::Value};
///
/// let value = evaluate("let x = 2; x * 3").unwrap();
/// assert_eq!(value, Value::Integer(6));
///
/// // A parse failure reports every recorded message.
/// assert!(evaluate("let = 5;").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<Value, Error> {
    let env = Environment::new().into_ref();
    evaluate_with_env(source, &env)
}

/// Evaluates a source string against an existing environment.
///
/// Bindings created by the program persist in `env`, which is what a REPL
/// uses to carry state from line to line.
///
/// # Errors
/// Same contract as [`evaluate`].
///
/// # Examples
/// ```
/// use brio::{evaluate_with_env,
///            interpreter::value::{core::Value, environment::Environment}};
///
/// let env = Environment::new().into_ref();
///
/// evaluate_with_env("let total = 40;", &env).unwrap();
/// let value = evaluate_with_env("total + 2", &env).unwrap();
///
/// assert_eq!(value, Value::Integer(42));
/// ```
pub fn evaluate_with_env(source: &str, env: &EnvRef) -> Result<Value, Error> {
    let lexer = Lexer::new(source);
    let parser = Parser::new(lexer);

    let (program, errors) = parser.parse_program();
    if !errors.is_empty() {
        return Err(Error::Parse(errors));
    }

    eval_program(&program, env).map_err(Error::Runtime)
}
