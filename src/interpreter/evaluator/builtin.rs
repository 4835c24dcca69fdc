use std::rc::Rc;

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and returns a
/// value or a runtime error. Arity has already been checked by the time a
/// handler runs.
pub type BuiltinFn = fn(&[Value]) -> Result<Value, RuntimeError>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Variadic` means any number is accepted.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    Variadic,
}

/// A builtin table entry: name, arity, and handler.
pub struct BuiltinDef {
    /// The name the builtin is looked up under.
    pub name: &'static str,
    arity:    Arity,
    func:     BuiltinFn,
}

impl std::fmt::Debug for BuiltinDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinDef").field("name", &self.name).finish_non_exhaustive()
    }
}

impl BuiltinDef {
    /// Checks arity and invokes the handler.
    ///
    /// # Errors
    /// Returns `WrongArgumentCount` on an arity mismatch, or whatever the
    /// handler itself reports.
    pub fn call(&self, args: &[Value]) -> Result<Value, RuntimeError> {
        if let Arity::Exact(want) = self.arity
            && args.len() != want
        {
            return Err(RuntimeError::WrongArgumentCount { got: args.len(),
                                                          want });
        }
        (self.func)(args)
    }
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name, an arity specification, and a function
/// pointer implementing the builtin. The macro produces the static
/// `BUILTIN_TABLE` used for lookup and the public `BUILTIN_FUNCTIONS` name
/// list.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin function.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: Arity::Exact(1), func: len },
    "first" => { arity: Arity::Exact(1), func: first },
    "last"  => { arity: Arity::Exact(1), func: last },
    "rest"  => { arity: Arity::Exact(1), func: rest },
    "push"  => { arity: Arity::Exact(2), func: push },
    "puts"  => { arity: Arity::Variadic, func: puts },
}

/// Looks a name up in the builtin table.
///
/// Identifier resolution falls back to this after the environment chain, so
/// a `let` binding can shadow a builtin.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|def| def.name == name)
}

/// Returns the length of a string (in bytes) or an array (in elements).
fn len(args: &[Value]) -> Result<Value, RuntimeError> {
    match &args[0] {
        Value::String(value) => Ok(Value::Integer(value.len() as i64)),
        Value::Array(elements) => Ok(Value::Integer(elements.len() as i64)),
        other => Err(RuntimeError::UnsupportedArgument { builtin: "len",
                                                         kind:    other.type_name(), }),
    }
}

/// Returns the first element of an array, or `Null` when it is empty.
fn first(args: &[Value]) -> Result<Value, RuntimeError> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::UnsupportedArgument { builtin: "first",
                                                         kind:    other.type_name(), }),
    }
}

/// Returns the last element of an array, or `Null` when it is empty.
fn last(args: &[Value]) -> Result<Value, RuntimeError> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::UnsupportedArgument { builtin: "last",
                                                         kind:    other.type_name(), }),
    }
}

/// Returns a new array holding every element but the first, or `Null` for an
/// empty array.
fn rest(args: &[Value]) -> Result<Value, RuntimeError> {
    match &args[0] {
        Value::Array(elements) => {
            if elements.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(Value::Array(Rc::new(elements[1..].to_vec())))
            }
        },
        other => Err(RuntimeError::UnsupportedArgument { builtin: "rest",
                                                         kind:    other.type_name(), }),
    }
}

/// Returns a new array with the second argument appended. The input array is
/// not mutated.
fn push(args: &[Value]) -> Result<Value, RuntimeError> {
    match &args[0] {
        Value::Array(elements) => {
            let mut extended = elements.as_ref().clone();
            extended.push(args[1].clone());
            Ok(Value::Array(Rc::new(extended)))
        },
        other => Err(RuntimeError::UnsupportedArgument { builtin: "push",
                                                         kind:    other.type_name(), }),
    }
}

/// Prints each argument's inspection on its own line and returns `Null`.
fn puts(args: &[Value]) -> Result<Value, RuntimeError> {
    for arg in args {
        println!("{arg}");
    }
    Ok(Value::Null)
}
