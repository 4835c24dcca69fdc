use std::rc::Rc;

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, builtin, collection, function, unary},
        value::{core::{Function, Value}, environment::EnvRef},
    },
};

/// A non-local outcome threaded through evaluation.
///
/// `return` and runtime errors both travel through the `Err` side of
/// [`EvalResult`], so `?` forwards them out of nested blocks without
/// unwrapping. A `Return` is unwrapped exactly once, at the nearest call
/// boundary (or at the program boundary for top-level returns). Errors pass
/// every boundary and abort the program.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// An in-flight `return`, carrying the returned value.
    Return(Value),
    /// A runtime error aborting evaluation.
    Error(RuntimeError),
}

impl From<RuntimeError> for Signal {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`Signal`] describing why evaluation stopped early.
pub type EvalResult<T> = Result<T, Signal>;

/// Evaluates a program against an environment.
///
/// Statements run in order. A top-level `return` ends the program with its
/// value; otherwise the program's value is that of its last statement, or
/// `Null` for an empty program. The first runtime error aborts everything.
///
/// # Errors
/// Returns the `RuntimeError` that aborted evaluation, if any.
pub fn eval_program(program: &Program, env: &EnvRef) -> Result<Value, RuntimeError> {
    let mut result = Value::Null;

    for statement in &program.statements {
        match eval_statement(statement, env) {
            Ok(value) => result = value,
            Err(Signal::Return(value)) => return Ok(value),
            Err(Signal::Error(error)) => return Err(error),
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// `let` evaluates its value and binds it in the current scope, yielding
/// `Null`; `return` wraps its value into a [`Signal::Return`]; an
/// expression statement yields the expression's value.
pub(crate) fn eval_statement(statement: &Statement, env: &EnvRef) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value);
            Ok(Value::Null)
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Err(Signal::Return(value))
        },
        Statement::Expression { expr } => eval_expression(expr, env),
    }
}

/// Evaluates a block of statements.
///
/// Yields the last statement's value. Signals pass through untouched; in
/// particular a `Return` is *not* unwrapped here, so it keeps propagating
/// through enclosing blocks until a call or program boundary catches it.
pub(crate) fn eval_block(block: &Block, env: &EnvRef) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;
    }

    Ok(result)
}

/// Evaluates an expression and returns the resulting value.
///
/// This is the main dispatch of the tree walk; each variant delegates to
/// its evaluation rule.
pub(crate) fn eval_expression(expr: &Expr, env: &EnvRef) -> EvalResult<Value> {
    match expr {
        Expr::Identifier { name } => eval_identifier(name, env),
        Expr::IntegerLiteral { value } => Ok(Value::Integer(*value)),
        Expr::StringLiteral { value } => Ok(Value::String(Rc::from(value.as_str()))),
        Expr::BooleanLiteral { value } => Ok(Value::Boolean(*value)),
        Expr::Prefix { op, right } => {
            let right = eval_expression(right, env)?;
            unary::eval_prefix(*op, &right)
        },
        Expr::Infix { left, op, right } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            binary::eval_infix(*op, &left, &right)
        },
        Expr::If { condition,
                   consequence,
                   alternative, } => {
            let condition = eval_expression(condition, env)?;
            if condition.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Ok(Value::Null)
            }
        },
        Expr::FunctionLiteral { parameters, body } => {
            Ok(Value::Function(Rc::new(Function { parameters: parameters.clone(),
                                                  body:       body.clone(),
                                                  env:        Rc::clone(env), })))
        },
        Expr::Call { function, arguments } => function::eval_call(function, arguments, env),
        Expr::ArrayLiteral { elements } => collection::eval_array_literal(elements, env),
        Expr::Index { left, index } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            collection::eval_index(&left, &index)
        },
        Expr::HashLiteral { pairs } => collection::eval_hash_literal(pairs, env),
    }
}

/// Resolves a name: the environment chain first, then the builtin table.
fn eval_identifier(name: &str, env: &EnvRef) -> EvalResult<Value> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }
    if let Some(def) = builtin::lookup(name) {
        return Ok(Value::Builtin(def));
    }
    Err(RuntimeError::IdentifierNotFound { name: name.to_owned() }.into())
}
