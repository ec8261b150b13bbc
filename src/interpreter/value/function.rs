use std::{fmt, rc::Rc};

use crate::{
    ast::FunctionDefinition,
    error::RuntimeErrorKind,
    interpreter::{environment::Environment, evaluator::core::Interpreter, value::core::Value},
};

/// Frame name used for functions defined without a name.
pub const ANONYMOUS: &str = "<anonymous>";

/// A script function: its definition plus the environment active where it
/// was defined.
///
/// Calls run in a child of `env`, never of the caller's environment.
pub struct Closure {
    /// The parsed function.
    pub definition: Rc<FunctionDefinition>,
    /// The defining scope, shared with everything else defined there.
    pub env:        Environment,
}

impl Closure {
    /// Gets the name shown in stack traces.
    #[must_use]
    pub fn frame_name(&self) -> &str {
        self.definition.name.as_deref().unwrap_or(ANONYMOUS)
    }
}

/// Signature of host functions callable from scripts.
///
/// Natives receive the whole argument list and may re-enter the interpreter,
/// for example to load a module.
pub type NativeFn = dyn Fn(&mut Interpreter, &[Value]) -> Result<Value, RuntimeErrorKind>;

/// A named host function.
pub struct NativeFunction {
    /// The name shown in stack traces and error messages.
    pub name: String,
    func:     Box<NativeFn>,
}

impl NativeFunction {
    /// Wraps a host callable.
    ///
    /// # Example
    /// ```
    /// use aegis::interpreter::value::{core::Value, function::NativeFunction};
    ///
    /// let len = NativeFunction::new("len", |_, args| Ok(Value::from(args.len() as f64)));
    /// assert_eq!(len.name, "len");
    /// ```
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
        where F: Fn(&mut Interpreter, &[Value]) -> Result<Value, RuntimeErrorKind> + 'static
    {
        Self { name: name.into(),
               func: Box::new(func), }
    }

    /// Invokes the host callable.
    ///
    /// # Errors
    /// Whatever the host callable reports.
    pub fn call(&self,
                interpreter: &mut Interpreter,
                args: &[Value])
                -> Result<Value, RuntimeErrorKind> {
        (self.func)(interpreter, args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
         .field("name", &self.name)
         .finish_non_exhaustive()
    }
}

impl From<NativeFunction> for Value {
    fn from(native: NativeFunction) -> Self {
        Self::Native(Rc::new(native))
    }
}
