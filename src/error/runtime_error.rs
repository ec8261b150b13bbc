use thiserror::Error;

use crate::ast::Position;

/// What went wrong during evaluation, independent of where.
///
/// Native functions return this directly; the evaluator stamps the call
/// site onto it to build a [`RuntimeError`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeErrorKind {
    /// An identifier is bound nowhere in the scope chain.
    #[error("Undefined identifier '{0}'")]
    UndefinedIdentifier(String),
    /// An operator or call received values of the wrong type.
    #[error("Type error: {0}")]
    TypeError(String),
    /// A number was required.
    #[error("Expected a number, found {0}")]
    ExpectedNumber(&'static str),
    /// An index was not an integral number.
    #[error("Invalid index: {0}")]
    InvalidIndex(String),
    /// An index fell outside the collection.
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The requested index.
        index: i64,
        /// The length of the collection.
        len:   usize,
    },
    /// The value does not support indexing.
    #[error("Cannot index into a value of type {0}")]
    NotIndexable(&'static str),
    /// Member access found nothing.
    #[error("Property '{0}' not found")]
    PropertyNotFound(String),
    /// Member assignment on something other than an object.
    #[error("Cannot set a property on a value of type {0}")]
    InvalidPropertyTarget(&'static str),
    /// The callee is not a function.
    #[error("Value of type {0} is not callable")]
    NotCallable(&'static str),
    /// `/` or `%` with a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,
    /// A host function failed.
    #[error("{name}: {message}")]
    Native {
        /// The native function's name.
        name:    String,
        /// The host's message.
        message: String,
    },
    /// A required module could not be read, parsed or evaluated.
    #[error("Error in module '{path}': {message}")]
    Module {
        /// The module path as resolved.
        path:    String,
        /// What failed.
        message: String,
    },
    /// A module was required while it was still being evaluated.
    #[error("Circular module dependency on '{0}'")]
    CircularModule(String),
    /// Too many nested calls.
    #[error("Maximum call depth of {0} exceeded")]
    CallDepthExceeded(usize),
}

impl RuntimeErrorKind {
    /// Builds the error a native function reports.
    ///
    /// ## Example
    /// ```
    /// use aegis::error::RuntimeErrorKind;
    ///
    /// let err = RuntimeErrorKind::native("json.parse", "unexpected end of input");
    /// assert_eq!(err.to_string(), "json.parse: unexpected end of input");
    /// ```
    #[must_use]
    pub fn native(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Native { name:    name.into(),
                       message: message.into(), }
    }

    /// Attaches a source position, producing a [`RuntimeError`] without a
    /// trace.
    #[must_use]
    pub fn at(self, pos: Position) -> RuntimeError {
        RuntimeError { kind: self,
                       pos,
                       trace: None }
    }
}

/// A runtime error: its kind, where it happened and the call frames active
/// when it happened.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Runtime error at {pos}: {kind}")]
pub struct RuntimeError {
    /// What went wrong.
    pub kind:  RuntimeErrorKind,
    /// Where it went wrong.
    pub pos:   Position,
    /// Call frames, innermost first, captured the first time the error
    /// crossed a call boundary.
    pub trace: Option<Vec<String>>,
}

impl RuntimeError {
    /// Gets the captured call frames, innermost first.
    ///
    /// Empty when the error was raised outside of any call.
    #[must_use]
    pub fn trace(&self) -> &[String] {
        self.trace.as_deref().unwrap_or_default()
    }
}

/// Result type of every evaluation function.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stamps a source position onto a failure that does not carry one yet.
///
/// ## Example
/// ```
/// use aegis::{
///     ast::Position,
///     error::{AtPosition, RuntimeErrorKind},
/// };
///
/// let failed: Result<(), RuntimeErrorKind> = Err(RuntimeErrorKind::DivisionByZero);
/// let err = failed.at(Position::new(2, 7)).unwrap_err();
///
/// assert_eq!(err.to_string(), "Runtime error at 2:7: Division by zero");
/// ```
pub trait AtPosition<T> {
    /// Converts the error side into a [`RuntimeError`] located at `pos`.
    fn at(self, pos: Position) -> EvalResult<T>;
}

impl<T> AtPosition<T> for Result<T, RuntimeErrorKind> {
    fn at(self, pos: Position) -> EvalResult<T> {
        self.map_err(|kind| kind.at(pos))
    }
}
