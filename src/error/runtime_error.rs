use crate::ast::{InfixOperator, PrefixOperator};

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can abort evaluation.
///
/// The first runtime error short-circuits the whole program and is surfaced
/// to the caller; there is no recovery.
pub enum RuntimeError {
    /// A name resolved neither in the environment chain nor in the builtin
    /// table.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
    },
    /// An infix operator was applied to operands of two different types.
    TypeMismatch {
        /// Type tag of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type tag of the right operand.
        right:    &'static str,
    },
    /// A prefix operator was applied to an operand it is not defined for.
    UnknownPrefixOperator {
        /// The operator.
        operator: PrefixOperator,
        /// Type tag of the operand.
        operand:  &'static str,
    },
    /// An infix operator was applied to same-typed operands it is not
    /// defined for.
    UnknownInfixOperator {
        /// Type tag of the left operand.
        left:     &'static str,
        /// The operator.
        operator: InfixOperator,
        /// Type tag of the right operand.
        right:    &'static str,
    },
    /// A call was made on a value that is neither a function nor a builtin.
    NotAFunction {
        /// Type tag of the called value.
        kind: &'static str,
    },
    /// The index operator was applied to a value that does not support it.
    IndexNotSupported {
        /// Type tag of the indexed value.
        kind: &'static str,
    },
    /// A value that is not an integer, boolean, or string was used as a hash
    /// key.
    UnusableHashKey {
        /// Type tag of the offending key.
        kind: &'static str,
    },
    /// A builtin received an argument of a type it does not support.
    UnsupportedArgument {
        /// Name of the builtin.
        builtin: &'static str,
        /// Type tag of the offending argument.
        kind:    &'static str,
    },
    /// A builtin received the wrong number of arguments.
    WrongArgumentCount {
        /// How many arguments were supplied.
        got:  usize,
        /// How many the builtin requires.
        want: usize,
    },
    /// Attempted division by zero.
    DivisionByZero,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => {
                write!(f, "type mismatch: {left} {operator} {right}")
            },
            Self::UnknownPrefixOperator { operator, operand } => {
                write!(f, "unknown operator: {operator}{operand}")
            },
            Self::UnknownInfixOperator { left,
                                         operator,
                                         right, } => {
                write!(f, "unknown operator: {left} {operator} {right}")
            },
            Self::NotAFunction { kind } => write!(f, "not a function: {kind}"),
            Self::IndexNotSupported { kind } => {
                write!(f, "index operator not supported: {kind}")
            },
            Self::UnusableHashKey { kind } => write!(f, "unusable as hash key: {kind}"),
            Self::UnsupportedArgument { builtin, kind } => {
                write!(f, "argument to `{builtin}` not supported, got {kind}")
            },
            Self::WrongArgumentCount { got, want } => {
                write!(f, "wrong number of arguments. got={got}, want={want}")
            },
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RuntimeError {}
