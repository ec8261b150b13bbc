use crate::{
    ast::{Expr, InfixOperator, Position},
    error::{AtPosition, EvalResult, RuntimeErrorKind},
    interpreter::{
        environment::Environment,
        evaluator::{
            binary::{arithmetic, comparison},
            core::Interpreter,
        },
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates an infix expression.
    ///
    /// `&&`, `||` and `nor` are handed to `eval_logic` unevaluated. Every
    /// other operator evaluates the left operand, then the right, then
    /// applies [`apply_infix`].
    ///
    /// # Parameters
    /// - `left`: Left operand expression.
    /// - `op`: The operator.
    /// - `right`: Right operand expression.
    /// - `pos`: Position of the operator, used for errors.
    /// - `env`: Current scope.
    pub(crate) fn eval_infix(&mut self,
                             left: &Expr,
                             op: InfixOperator,
                             right: &Expr,
                             pos: Position,
                             env: &Environment)
                             -> EvalResult<Value> {
        use InfixOperator::{And, Nor, Or};

        if matches!(op, And | Or | Nor) {
            return self.eval_logic(op, left, right, env);
        }

        let left = self.eval_expr(left, env)?;
        let right = self.eval_expr(right, env)?;
        apply_infix(op, &left, &right).at(pos)
    }
}

/// Applies an infix operator to two evaluated operands.
///
/// `&&`, `||` and `nor` fail with a type error. They short-circuit, so the
/// evaluator applies them before the right operand is evaluated.
///
/// # Example
/// ```
/// use aegis::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::core::apply_infix, value::core::Value},
/// };
///
/// let sum = apply_infix(InfixOperator::Add, &Value::from("a"), &Value::from(1));
/// assert_eq!(sum, Ok(Value::from("a1")));
///
/// let less = apply_infix(InfixOperator::Less, &Value::from(1), &Value::from(2));
/// assert_eq!(less, Ok(Value::Bool(true)));
/// ```
pub fn apply_infix(op: InfixOperator,
                   left: &Value,
                   right: &Value)
                   -> Result<Value, RuntimeErrorKind> {
    use InfixOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, In, Less, LessEqual, Mod, Mul, Nor,
        NotEqual, Or, Sub,
    };

    match op {
        Add => arithmetic::add(left, right),
        Sub | Mul | Div | Mod => arithmetic::numeric(op, left, right),
        Equal => Ok(Value::Bool(left == right)),
        NotEqual => Ok(Value::Bool(left != right)),
        Less | Greater | LessEqual | GreaterEqual => comparison::compare(op, left, right),
        In => Ok(Value::Bool(comparison::contains(right, left))),
        And | Or | Nor => {
            Err(RuntimeErrorKind::TypeError(format!("'{op}' needs unevaluated operands")))
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn logical_operators_are_not_applied_to_values() {
        for op in [InfixOperator::And, InfixOperator::Or, InfixOperator::Nor] {
            assert!(matches!(apply_infix(op, &Value::Bool(true), &Value::Null),
                             Err(RuntimeErrorKind::TypeError(_))));
        }
    }

    #[test]
    fn membership_takes_the_container_on_the_right() {
        let list = Value::array(vec![Value::from(1)]);

        assert_eq!(apply_infix(InfixOperator::In, &Value::from(1), &list),
                   Ok(Value::Bool(true)));
    }
}
