use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Signal, eval_block, eval_expression},
        value::{core::Value, environment::{EnvRef, enclosed}},
    },
};

/// Evaluates a call expression.
///
/// The callee is evaluated first, then the arguments left to right; the
/// first signal aborts the call. The evaluated callee is then applied.
pub(crate) fn eval_call(function: &Expr, arguments: &[Expr], env: &EnvRef) -> EvalResult<Value> {
    let callee = eval_expression(function, env)?;

    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        args.push(eval_expression(argument, env)?);
    }

    apply(&callee, &args)
}

/// Applies an evaluated callee to evaluated arguments.
///
/// A closure runs its body in a fresh environment enclosing the captured
/// one, with parameters bound positionally. Missing arguments leave their
/// parameters unbound; extra arguments are dropped. A `Return` escaping the
/// body is unwrapped here, at the call boundary. Builtins dispatch through
/// their table entry; calling any other value is an error.
pub(crate) fn apply(callee: &Value, args: &[Value]) -> EvalResult<Value> {
    match callee {
        Value::Function(function) => {
            let local = enclosed(&function.env);
            for (parameter, argument) in function.parameters.iter().zip(args) {
                local.borrow_mut().set(parameter.clone(), argument.clone());
            }

            match eval_block(&function.body, &local) {
                Err(Signal::Return(value)) => Ok(value),
                other => other,
            }
        },
        Value::Builtin(def) => def.call(args).map_err(Signal::Error),
        _ => Err(RuntimeError::NotAFunction { kind: callee.type_name() }.into()),
    }
}
