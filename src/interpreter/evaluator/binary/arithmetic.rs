use crate::{
    ast::InfixOperator,
    error::RuntimeErrorKind,
    interpreter::value::core::Value,
};

/// Evaluates `+`.
///
/// Two numbers add. If either operand is a string, both are converted to
/// their display form and concatenated. Two arrays concatenate into a new
/// array. Anything else is a type error.
///
/// # Example
/// ```
/// use aegis::interpreter::{evaluator::binary::arithmetic::add, value::core::Value};
///
/// assert_eq!(add(&Value::from(1), &Value::from(2)), Ok(Value::from(3)));
/// assert_eq!(add(&Value::from(1), &Value::from("x")), Ok(Value::from("1x")));
/// assert!(add(&Value::Bool(true), &Value::from(1)).is_err());
/// ```
pub fn add(left: &Value, right: &Value) -> Result<Value, RuntimeErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(_), _) | (_, Value::Str(_)) => Ok(Value::from(format!("{left}{right}"))),
        (Value::Array(a), Value::Array(b)) => {
            let mut items = a.borrow().clone();
            items.extend(b.borrow().iter().cloned());
            Ok(Value::array(items))
        },
        _ => Err(RuntimeErrorKind::TypeError(format!("cannot add {} and {}",
                                                      left.type_name(),
                                                      right.type_name()))),
    }
}

/// Evaluates `-`, `*`, `/` and `%` on two numbers.
///
/// Division and modulo by zero fail. `%` is floored: a non-zero result takes
/// the sign of the divisor.
pub fn numeric(op: InfixOperator,
               left: &Value,
               right: &Value)
               -> Result<Value, RuntimeErrorKind> {
    let (a, b) = (left.as_number()?, right.as_number()?);

    let result = match op {
        InfixOperator::Sub => a - b,
        InfixOperator::Mul => a * b,
        InfixOperator::Div => {
            if b == 0.0 {
                return Err(RuntimeErrorKind::DivisionByZero);
            }
            a / b
        },
        InfixOperator::Mod => floored_mod(a, b)?,
        other => {
            let message = format!("'{other}' is not an arithmetic operator");
            return Err(RuntimeErrorKind::TypeError(message));
        },
    };

    Ok(Value::Number(result))
}

fn floored_mod(a: f64, b: f64) -> Result<f64, RuntimeErrorKind> {
    if b == 0.0 {
        return Err(RuntimeErrorKind::DivisionByZero);
    }
    let remainder = a % b;
    if remainder != 0.0 && (remainder < 0.0) != (b < 0.0) {
        Ok(remainder + b)
    } else {
        Ok(remainder)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn num(n: f64) -> Value {
        Value::Number(n)
    }

    #[test]
    fn modulo_takes_the_sign_of_the_divisor() {
        assert_eq!(numeric(InfixOperator::Mod, &num(7.0), &num(3.0)), Ok(num(1.0)));
        assert_eq!(numeric(InfixOperator::Mod, &num(-7.0), &num(3.0)), Ok(num(2.0)));
        assert_eq!(numeric(InfixOperator::Mod, &num(7.0), &num(-3.0)), Ok(num(-2.0)));
        assert_eq!(numeric(InfixOperator::Mod, &num(-6.0), &num(3.0)), Ok(num(0.0)));
    }

    #[test]
    fn division_by_zero_fails() {
        assert_eq!(numeric(InfixOperator::Div, &num(1.0), &num(0.0)),
                   Err(RuntimeErrorKind::DivisionByZero));
        assert_eq!(numeric(InfixOperator::Mod, &num(1.0), &num(0.0)),
                   Err(RuntimeErrorKind::DivisionByZero));
    }

    #[test]
    fn arrays_concatenate_into_a_new_array() {
        let left = Value::array(vec![num(1.0), num(2.0)]);
        let right = Value::array(vec![num(3.0)]);

        let joined = add(&left, &right).unwrap();

        assert_eq!(joined, Value::array(vec![num(1.0), num(2.0), num(3.0)]));
        assert_eq!(left, Value::array(vec![num(1.0), num(2.0)]));
    }

    #[test]
    fn strings_concatenate_display_forms() {
        let list = Value::array(vec![Value::from("a"), Value::Null]);

        assert_eq!(add(&Value::from("v="), &list), Ok(Value::from(r#"v=["a", null]"#)));
        assert_eq!(add(&num(1.5), &Value::from("!")), Ok(Value::from("1.5!")));
    }

    #[test]
    fn non_numbers_are_rejected() {
        assert_eq!(numeric(InfixOperator::Sub, &Value::from("a"), &num(1.0)),
                   Err(RuntimeErrorKind::ExpectedNumber("string")));
        assert!(matches!(add(&Value::Null, &num(1.0)), Err(RuntimeErrorKind::TypeError(_))));
    }
}
