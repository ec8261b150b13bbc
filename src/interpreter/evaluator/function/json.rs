use crate::{
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::{core::Interpreter, function::core::string_arg},
        value::core::Value,
    },
};

/// Parses JSON text into a value.
///
/// # Example
/// ```
/// use aegis::interpreter::{
///     evaluator::{core::Interpreter, function::json::parse},
///     value::core::Value,
/// };
///
/// let mut interpreter = Interpreter::new();
/// let value = parse(&mut interpreter, &[Value::from(r#"{"ok": true}"#)]).unwrap();
///
/// assert_eq!(value, Value::object([("ok", Value::Bool(true))]));
/// ```
pub fn parse(_: &mut Interpreter, args: &[Value]) -> Result<Value, RuntimeErrorKind> {
    let text = string_arg("json.parse", args)?;
    let json = serde_json::from_str(text).map_err(|err| {
                                             RuntimeErrorKind::native("json.parse", err.to_string())
                                         })?;
    Ok(Value::from_json(json))
}

/// Serializes a value as compact JSON text.
///
/// Functions and non-finite numbers have no JSON form and fail.
pub fn stringify(_: &mut Interpreter, args: &[Value]) -> Result<Value, RuntimeErrorKind> {
    let value = args.first().cloned().unwrap_or_default();
    let text = serde_json::to_string(&value.to_json()?).map_err(|err| {
                   RuntimeErrorKind::native("json.stringify", err.to_string())
               })?;
    Ok(Value::from(text))
}
