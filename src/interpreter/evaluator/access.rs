use crate::{
    ast::{Expr, Position},
    error::{AtPosition, EvalResult, RuntimeErrorKind},
    interpreter::{environment::Environment, evaluator::core::Interpreter, value::core::Value},
    util::num::{f64_to_i64_checked, resolve_index, usize_to_f64_checked},
};

impl Interpreter {
    /// Evaluates `collection[index]`.
    pub(crate) fn eval_index(&mut self,
                             collection: &Expr,
                             index: &Expr,
                             pos: Position,
                             env: &Environment)
                             -> EvalResult<Value> {
        let collection = self.eval_expr(collection, env)?;
        let index = self.eval_expr(index, env)?;
        index_value(&collection, &index).at(pos)
    }

    /// Evaluates `object.property`.
    pub(crate) fn eval_member(&mut self,
                              object: &Expr,
                              property: &str,
                              pos: Position,
                              env: &Environment)
                              -> EvalResult<Value> {
        let object = self.eval_expr(object, env)?;
        member_value(&object, property).at(pos)
    }
}

/// Converts an index value to an integer.
///
/// Numbers without a fractional part are accepted; everything else is an
/// `InvalidIndex` error.
///
/// # Example
/// ```
/// use aegis::interpreter::{evaluator::access::to_index, value::core::Value};
///
/// assert_eq!(to_index(&Value::from(2.0)), Ok(2));
/// assert!(to_index(&Value::from(2.5)).is_err());
/// assert!(to_index(&Value::from("2")).is_err());
/// ```
pub fn to_index(index: &Value) -> Result<i64, RuntimeErrorKind> {
    match index {
        Value::Number(n) => {
            f64_to_i64_checked(*n, RuntimeErrorKind::InvalidIndex(format!("{n} is not an integer")))
        },
        other => Err(RuntimeErrorKind::InvalidIndex(format!("expected an integer, found {}",
                                                            other.type_name()))),
    }
}

/// Reads one element of an array or one character of a string.
///
/// Negative indices count from the end.
pub fn index_value(collection: &Value, index: &Value) -> Result<Value, RuntimeErrorKind> {
    let index = to_index(index)?;

    match collection {
        Value::Array(items) => {
            let items = items.borrow();
            let len = items.len();
            resolve_index(index, len).and_then(|position| items.get(position).cloned())
                                     .ok_or(RuntimeErrorKind::IndexOutOfBounds { index, len })
        },
        Value::Str(text) => {
            let len = text.chars().count();
            resolve_index(index, len).and_then(|position| text.chars().nth(position))
                                     .map(|c| Value::from(c.to_string()))
                                     .ok_or(RuntimeErrorKind::IndexOutOfBounds { index, len })
        },
        other => Err(RuntimeErrorKind::NotIndexable(other.type_name())),
    }
}

/// Reads a property.
///
/// Objects yield the value under the key, or `null` when it is absent.
/// Arrays and strings expose `length`. Anything else is `PropertyNotFound`.
///
/// # Example
/// ```
/// use aegis::interpreter::{evaluator::access::member_value, value::core::Value};
///
/// let point = Value::object([("x", Value::from(1))]);
///
/// assert_eq!(member_value(&point, "x"), Ok(Value::from(1)));
/// assert_eq!(member_value(&point, "y"), Ok(Value::Null));
/// assert_eq!(member_value(&Value::from("héllo"), "length"), Ok(Value::from(5)));
/// assert!(member_value(&Value::from(1), "length").is_err());
/// ```
pub fn member_value(object: &Value, property: &str) -> Result<Value, RuntimeErrorKind> {
    let not_found = || RuntimeErrorKind::PropertyNotFound(property.to_owned());

    match object {
        Value::Object(map) => Ok(map.borrow().get(property).cloned().unwrap_or_default()),
        Value::Array(items) if property == "length" => {
            usize_to_f64_checked(items.borrow().len(), not_found()).map(Value::Number)
        },
        Value::Str(text) if property == "length" => {
            usize_to_f64_checked(text.chars().count(), not_found()).map(Value::Number)
        },
        _ => Err(not_found()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn negative_indices_count_from_the_end() {
        let list = Value::array(vec![Value::from(1), Value::from(2), Value::from(3)]);

        assert_eq!(index_value(&list, &Value::from(-1)), Ok(Value::from(3)));
        assert_eq!(index_value(&list, &Value::from(-3)), Ok(Value::from(1)));
        assert_eq!(index_value(&list, &Value::from(-4)),
                   Err(RuntimeErrorKind::IndexOutOfBounds { index: -4, len: 3 }));
        assert_eq!(index_value(&list, &Value::from(3)),
                   Err(RuntimeErrorKind::IndexOutOfBounds { index: 3, len: 3 }));
    }

    #[test]
    fn strings_index_by_character() {
        let text = Value::from("añb");

        assert_eq!(index_value(&text, &Value::from(1)), Ok(Value::from("ñ")));
        assert_eq!(index_value(&text, &Value::from(-1)), Ok(Value::from("b")));
    }

    #[test]
    fn other_values_are_not_indexable() {
        assert_eq!(index_value(&Value::Null, &Value::from(0)),
                   Err(RuntimeErrorKind::NotIndexable("null")));
        assert_eq!(index_value(&Value::object([("0", Value::Null)]), &Value::from(0)),
                   Err(RuntimeErrorKind::NotIndexable("object")));
    }
}
