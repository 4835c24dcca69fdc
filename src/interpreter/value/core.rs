use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::Block,
    interpreter::{
        evaluator::builtin::BuiltinDef,
        value::{environment::EnvRef, hash_key::HashKey},
    },
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every type a program can produce: the scalar integers,
/// booleans, strings, and `null`, the composite arrays and hashes, and the
/// callable closures and builtins. Composite and closure payloads sit behind
/// `Rc` so that values copy cheaply and stay immutable from the language's
/// point of view (`push` returns a fresh array).
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer. Arithmetic wraps on overflow.
    Integer(i64),
    /// A boolean value, produced by literals and comparisons.
    Boolean(bool),
    /// The null value, produced by missing branches and absent elements.
    Null,
    /// An immutable string.
    String(Rc<str>),
    /// An array of values.
    Array(Rc<Vec<Value>>),
    /// A hash map keyed by [`HashKey`], each entry retaining the original
    /// key value for inspection.
    Hash(Rc<HashMap<HashKey, HashPair>>),
    /// A closure: parameters and body paired with the environment captured
    /// at the function literal.
    Function(Rc<Function>),
    /// A native function from the builtin table.
    Builtin(&'static BuiltinDef),
}

/// A key-value pair stored in a hash value.
///
/// The map itself is keyed by the derived [`HashKey`]; the pair keeps the
/// original key around so hashes can be inspected as written.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as it was evaluated.
    pub key:   Value,
    /// The value stored under it.
    pub value: Value,
}

/// A closure value.
///
/// Captures the environment that was current at the function literal, so
/// the body sees the bindings of its defining scope no matter where the
/// call happens.
pub struct Function {
    /// Parameter names, bound positionally at call time.
    pub parameters: Vec<String>,
    /// The function body.
    pub body:       Block,
    /// The captured defining environment.
    pub env:        EnvRef,
}

// A closure's environment routinely contains the closure itself (that is
// what makes `let fact = fn(n) { ... fact(n - 1) ... }` work), so Debug
// must not descend into `env`.
impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("parameters", &self.parameters)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}

impl Value {
    /// Returns the type tag used in diagnostics, such as `INTEGER` or
    /// `ARRAY`.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::Boolean(_) => "BOOLEAN",
            Self::Null => "NULL",
            Self::String(_) => "STRING",
            Self::Array(_) => "ARRAY",
            Self::Hash(_) => "HASH",
            Self::Function(_) => "FUNCTION",
            Self::Builtin(_) => "BUILTIN",
        }
    }

    /// Tests the value's truthiness: `false` and `null` are falsy,
    /// everything else (including `0` and `""`) is truthy.
    ///
    /// # Example
    /// ```
    /// use brio::interpreter::value::core::Value;
    ///
    /// assert!(Value::Integer(0).is_truthy());
    /// assert!(!Value::Boolean(false).is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Hash(a), Self::Hash(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(Rc::from(value))
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::Array(Rc::new(value))
    }
}

impl fmt::Display for Value {
    /// Writes the value's inspection: integers in decimal, strings raw,
    /// arrays and hashes element-wise, closures with their pretty-printed
    /// body. Hash entry order is unspecified.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::String(value) => write!(f, "{value}"),
            Self::Array(elements) => {
                let elements: Vec<String> = elements.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", elements.join(", "))
            },
            Self::Hash(pairs) => {
                let pairs: Vec<String> = pairs.values()
                                              .map(|pair| format!("{}: {}", pair.key, pair.value))
                                              .collect();
                write!(f, "{{{}}}", pairs.join(", "))
            },
            Self::Function(function) => {
                write!(f,
                       "fn({}) {{\n{}\n}}",
                       function.parameters.join(", "),
                       function.body)
            },
            Self::Builtin(_) => write!(f, "builtin function"),
        }
    }
}
