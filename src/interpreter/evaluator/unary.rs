use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a prefix operator applied to an already-evaluated operand.
///
/// `!` negates the operand's truthiness and is defined for every value;
/// `-` negates an integer (wrapping at the i64 boundary) and errors for
/// anything else.
///
/// # Example
/// ```
/// use brio::{ast::PrefixOperator,
///            interpreter::{evaluator::unary::eval_prefix, value::core::Value}};
///
/// let negated = eval_prefix(PrefixOperator::Not, &Value::Null).unwrap();
/// assert_eq!(negated, Value::Boolean(true));
/// ```
pub fn eval_prefix(op: PrefixOperator, operand: &Value) -> EvalResult<Value> {
    match op {
        PrefixOperator::Not => Ok(Value::Boolean(!operand.is_truthy())),
        PrefixOperator::Negate => match operand {
            Value::Integer(value) => Ok(Value::Integer(value.wrapping_neg())),
            _ => Err(RuntimeError::UnknownPrefixOperator { operator: op,
                                                           operand:  operand.type_name(), }.into()),
        },
    }
}
