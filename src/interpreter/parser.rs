/// Core parser state and the Pratt expression loop.
///
/// Declares the `Parser` struct, the operator precedence ladder, token
/// bookkeeping, and error recovery.
pub mod core;

/// Statement parsing.
///
/// Parses `let` and `return` statements, expression statements, and the
/// braced blocks used by conditionals and function bodies.
pub mod statement;

/// Expression parselets.
///
/// The prefix and infix parse rules dispatched per token kind: literals,
/// identifiers, operators, grouping, conditionals, function literals, calls,
/// and the composite array/hash/index forms.
pub mod expression;
