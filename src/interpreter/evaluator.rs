/// Core evaluation logic.
///
/// Contains the evaluation entry point, the `Signal` type that threads
/// `return` and runtime errors through the recursion, and the rules for
/// programs, statements, and blocks.
pub mod core;

/// Prefix operator evaluation.
///
/// Handles `!` (truthiness negation) and `-` (integer negation).
pub mod unary;

/// Infix operator evaluation.
///
/// Implements the arithmetic, comparison, and concatenation rules, plus the
/// type-mismatch and unknown-operator errors for everything else.
pub mod binary;

/// Composite value evaluation.
///
/// Array and hash literals and the index operator.
pub mod collection;

/// Call evaluation.
///
/// Applies closures in a fresh enclosed environment and dispatches builtins.
pub mod function;

/// Builtin functions.
///
/// The fixed table of native functions and their implementations.
pub mod builtin;
