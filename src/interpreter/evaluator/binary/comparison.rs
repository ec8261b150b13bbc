use crate::{ast::InfixOperator, error::RuntimeErrorKind, interpreter::value::core::Value};

/// Evaluates `<`, `>`, `<=` and `>=`.
///
/// Both operands must be numbers.
///
/// # Example
/// ```
/// use aegis::{
///     ast::InfixOperator,
///     interpreter::{evaluator::binary::comparison::compare, value::core::Value},
/// };
///
/// let result = compare(InfixOperator::GreaterEqual, &Value::from(2), &Value::from(2));
/// assert_eq!(result, Ok(Value::Bool(true)));
/// ```
pub fn compare(op: InfixOperator,
               left: &Value,
               right: &Value)
               -> Result<Value, RuntimeErrorKind> {
    let (a, b) = (left.as_number()?, right.as_number()?);

    let result = match op {
        InfixOperator::Less => a < b,
        InfixOperator::Greater => a > b,
        InfixOperator::LessEqual => a <= b,
        InfixOperator::GreaterEqual => a >= b,
        other => {
            return Err(RuntimeErrorKind::TypeError(format!("'{other}' is not a comparison")));
        },
    };

    Ok(Value::Bool(result))
}

/// Tests whether `container` holds `item`.
///
/// - string in string: substring test
/// - anything in array: some element is deeply equal
/// - string in object: the key exists
///
/// Every other combination is `false`.
#[must_use]
pub fn contains(container: &Value, item: &Value) -> bool {
    match (container, item) {
        (Value::Str(haystack), Value::Str(needle)) => haystack.contains(&**needle),
        (Value::Array(items), _) => items.borrow().iter().any(|element| element == item),
        (Value::Object(map), Value::Str(key)) => map.borrow().contains_key(&**key),
        _ => false,
    }
}
