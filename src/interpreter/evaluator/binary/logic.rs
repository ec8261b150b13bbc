use crate::{
    ast::{Expr, InfixOperator},
    error::EvalResult,
    interpreter::{environment::Environment, evaluator::core::Interpreter, value::core::Value},
};

impl Interpreter {
    /// Evaluates a short-circuiting logical operator.
    ///
    /// `&&` and `||` return one of their operands rather than a boolean:
    /// `a && b` is `a` when `a` is falsy, else `b`; `a || b` is `a` when `a`
    /// is truthy, else `b`. `a nor b` is `false` as soon as `a` is truthy
    /// and `!b` otherwise. The right operand is only evaluated when needed.
    pub(crate) fn eval_logic(&mut self,
                             op: InfixOperator,
                             left: &Expr,
                             right: &Expr,
                             env: &Environment)
                             -> EvalResult<Value> {
        let left = self.eval_expr(left, env)?;

        match op {
            InfixOperator::And if !left.is_truthy() => Ok(left),
            InfixOperator::Or if left.is_truthy() => Ok(left),
            InfixOperator::Nor if left.is_truthy() => Ok(Value::Bool(false)),
            InfixOperator::Nor => Ok(Value::Bool(!self.eval_expr(right, env)?.is_truthy())),
            _ => self.eval_expr(right, env),
        }
    }
}
