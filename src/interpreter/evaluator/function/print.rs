use crate::{
    error::RuntimeErrorKind,
    interpreter::{evaluator::core::Interpreter, value::core::Value},
};

/// Prints the display form of every argument, separated by single spaces,
/// followed by a newline.
///
/// Accepts any number of arguments and returns `null`.
///
/// # Example
/// ```
/// use aegis::interpreter::{
///     evaluator::{core::Interpreter, function::print::print},
///     output::Output,
///     value::core::Value,
/// };
///
/// let mut interpreter = Interpreter::new().with_output(Output::buffer());
/// let result = print(&mut interpreter, &[Value::from("total:"), Value::from(3)]).unwrap();
///
/// assert_eq!(result, Value::Null);
/// assert_eq!(interpreter.output().captured(), Some("total: 3\n"));
/// ```
pub fn print(interpreter: &mut Interpreter, args: &[Value]) -> Result<Value, RuntimeErrorKind> {
    let line = args.iter()
                   .map(ToString::to_string)
                   .collect::<Vec<_>>()
                   .join(" ");
    interpreter.output_mut().write_line(&line);
    Ok(Value::Null)
}
