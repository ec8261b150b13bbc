use crate::{
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::{core::Interpreter, function::core::string_arg},
        value::core::Value,
    },
};

/// Loads a module by path and returns the value its last statement produced.
///
/// Repeated requests for the same file return the cached value.
pub fn require(interpreter: &mut Interpreter, args: &[Value]) -> Result<Value, RuntimeErrorKind> {
    let spec = string_arg("module.require", args)?;
    interpreter.require(spec)
}
