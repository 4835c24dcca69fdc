use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval_expression},
        value::{core::{HashPair, Value}, environment::EnvRef},
    },
};

/// Evaluates an array literal, left to right. The first signal from an
/// element aborts the literal.
pub(crate) fn eval_array_literal(elements: &[Expr], env: &EnvRef) -> EvalResult<Value> {
    let mut values = Vec::with_capacity(elements.len());

    for element in elements {
        values.push(eval_expression(element, env)?);
    }

    Ok(Value::Array(Rc::new(values)))
}

/// Evaluates a hash literal.
///
/// Each key is evaluated, checked for hashability, and then its value is
/// evaluated. Pairs land in the map in source order, so a duplicate key
/// keeps the value written last.
pub(crate) fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &EnvRef) -> EvalResult<Value> {
    let mut map = HashMap::with_capacity(pairs.len());

    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env)?;
        let hash_key = key.hash_key()?;
        let value = eval_expression(value_expr, env)?;
        map.insert(hash_key, HashPair { key, value });
    }

    Ok(Value::Hash(Rc::new(map)))
}

/// Evaluates an index expression over already-evaluated operands.
///
/// Arrays take integer indices; out-of-range (negative or past the end)
/// yields `Null`. Hashes take any hashable key; a missing key yields `Null`
/// and a non-hashable one errors. Indexing anything else reports the
/// target's type.
///
/// # Example
/// ```
/// use brio::interpreter::{evaluator::collection::eval_index, value::core::Value};
///
/// let array = Value::from(vec![Value::Integer(7)]);
///
/// assert_eq!(eval_index(&array, &Value::Integer(0)).unwrap(), Value::Integer(7));
/// assert_eq!(eval_index(&array, &Value::Integer(-1)).unwrap(), Value::Null);
/// ```
pub fn eval_index(left: &Value, index: &Value) -> EvalResult<Value> {
    match (left, index) {
        (Value::Array(elements), Value::Integer(i)) => {
            let element = usize::try_from(*i).ok().and_then(|i| elements.get(i));
            Ok(element.cloned().unwrap_or(Value::Null))
        },
        (Value::Hash(pairs), key) => {
            let hash_key = key.hash_key()?;
            Ok(pairs.get(&hash_key).map_or(Value::Null, |pair| pair.value.clone()))
        },
        _ => Err(RuntimeError::IndexNotSupported { kind: left.type_name() }.into()),
    }
}
