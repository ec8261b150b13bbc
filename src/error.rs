use std::path::PathBuf;

use thiserror::Error;

/// Parsing errors.
///
/// Everything that can be wrong with the shape of a script: unexpected or
/// missing tokens, invalid assignment targets, object keys and number
/// literals.
pub mod parse_error;
/// Runtime errors.
///
/// Errors raised during evaluation, split into a position-free
/// [`RuntimeErrorKind`] that native functions produce and the positioned
/// [`RuntimeError`] carrying the call-frame trace.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseResult};
pub use runtime_error::{AtPosition, EvalResult, RuntimeError, RuntimeErrorKind};

/// Any failure of the public entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// The source did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// A script file could not be read.
    #[error("Could not read '{}': {source}", .path.display())]
    Io {
        /// The file that was requested.
        path:   PathBuf,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },
}
