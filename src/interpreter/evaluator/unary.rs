use crate::{
    ast::{Expr, Position, PrefixOperator},
    error::{AtPosition, EvalResult, RuntimeErrorKind},
    interpreter::{environment::Environment, evaluator::core::Interpreter, value::core::Value},
};

impl Interpreter {
    /// Evaluates a prefix operation.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `right`: The operand expression.
    /// - `pos`: Position of the operator, used for errors.
    /// - `env`: Current scope.
    pub(crate) fn eval_prefix(&mut self,
                              op: PrefixOperator,
                              right: &Expr,
                              pos: Position,
                              env: &Environment)
                              -> EvalResult<Value> {
        let operand = self.eval_expr(right, env)?;
        apply_prefix(op, &operand).at(pos)
    }
}

/// Applies a prefix operator to an already evaluated operand.
///
/// `!` negates truthiness and works on every value; `-` needs a number.
///
/// # Example
/// ```
/// use aegis::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::unary::apply_prefix, value::core::Value},
/// };
///
/// assert_eq!(apply_prefix(PrefixOperator::Not, &Value::Number(0.0)), Ok(Value::Bool(false)));
/// assert_eq!(apply_prefix(PrefixOperator::Negate, &Value::Number(2.5)), Ok(Value::Number(-2.5)));
/// assert!(apply_prefix(PrefixOperator::Negate, &Value::from("x")).is_err());
/// ```
pub fn apply_prefix(op: PrefixOperator, operand: &Value) -> Result<Value, RuntimeErrorKind> {
    match op {
        PrefixOperator::Not => Ok(Value::Bool(!operand.is_truthy())),
        PrefixOperator::Negate => Ok(Value::Number(-operand.as_number()?)),
    }
}
