use std::rc::Rc;

use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates an infix operator over two already-evaluated operands.
///
/// The dispatch follows the operand types:
/// - two integers support the full operator set;
/// - two strings support `+` (concatenation) only;
/// - two booleans, or two nulls, support `==` and `!=` only;
/// - operands of different types are a `type mismatch`;
/// - anything else is an `unknown operator`.
pub fn eval_infix(op: InfixOperator, left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(op, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_infix(op, l, r),
        (Value::Boolean(l), Value::Boolean(r)) => eval_equality(op, l == r, left, right),
        (Value::Null, Value::Null) => eval_equality(op, true, left, right),
        _ if left.type_name() != right.type_name() => {
            Err(RuntimeError::TypeMismatch { left:     left.type_name(),
                                             operator: op,
                                             right:    right.type_name(), }.into())
        },
        _ => Err(RuntimeError::UnknownInfixOperator { left:     left.type_name(),
                                                      operator: op,
                                                      right:    right.type_name(), }.into()),
    }
}

/// Integer arithmetic and comparison. Arithmetic wraps on overflow; division
/// by zero is an error.
fn eval_integer_infix(op: InfixOperator, left: i64, right: i64) -> EvalResult<Value> {
    let value = match op {
        InfixOperator::Add => Value::Integer(left.wrapping_add(right)),
        InfixOperator::Sub => Value::Integer(left.wrapping_sub(right)),
        InfixOperator::Mul => Value::Integer(left.wrapping_mul(right)),
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero.into());
            }
            Value::Integer(left.wrapping_div(right))
        },
        InfixOperator::Lt => Value::Boolean(left < right),
        InfixOperator::Gt => Value::Boolean(left > right),
        InfixOperator::Eq => Value::Boolean(left == right),
        InfixOperator::NotEq => Value::Boolean(left != right),
    };
    Ok(value)
}

/// String concatenation; every other operator on strings is unknown.
fn eval_string_infix(op: InfixOperator, left: &str, right: &str) -> EvalResult<Value> {
    match op {
        InfixOperator::Add => {
            let mut joined = String::with_capacity(left.len() + right.len());
            joined.push_str(left);
            joined.push_str(right);
            Ok(Value::String(Rc::from(joined)))
        },
        _ => Err(RuntimeError::UnknownInfixOperator { left:     "STRING",
                                                      operator: op,
                                                      right:    "STRING", }.into()),
    }
}

/// `==`/`!=` over value equality, for the boolean and null cases.
fn eval_equality(op: InfixOperator, equal: bool, left: &Value, right: &Value) -> EvalResult<Value> {
    match op {
        InfixOperator::Eq => Ok(Value::Boolean(equal)),
        InfixOperator::NotEq => Ok(Value::Boolean(!equal)),
        _ => Err(RuntimeError::UnknownInfixOperator { left:     left.type_name(),
                                                      operator: op,
                                                      right:    right.type_name(), }.into()),
    }
}
