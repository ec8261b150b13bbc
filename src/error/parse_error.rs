use thiserror::Error;

/// Represents all errors that can occur while parsing.
///
/// Lexing never fails on its own: unknown characters become `ILLEGAL` tokens
/// and surface here as [`ParseError::NoPrefixRule`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required token kind was absent.
    #[error("Parse error at {line}:{col}: expected {expected}, found {found}")]
    UnexpectedToken {
        /// The token kind the grammar required.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        col:      usize,
    },
    /// No expression can start with the current token.
    #[error("Parse error at {line}:{col}: no prefix parse rule for {found}")]
    NoPrefixRule {
        /// The offending token.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
        /// The source column where the error occurred.
        col:   usize,
    },
    /// The left side of `set` is not an identifier, index or member.
    #[error("Parse error at {line}:{col}: invalid assignment target")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
        /// The source column where the error occurred.
        col:  usize,
    },
    /// An object literal key was neither a name nor a string.
    #[error("Parse error at {line}:{col}: invalid object key {found}")]
    InvalidObjectKey {
        /// The offending token.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
        /// The source column where the error occurred.
        col:   usize,
    },
    /// A number literal could not be represented.
    #[error("Parse error at {line}:{col}: invalid number literal '{literal}'")]
    InvalidNumber {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        col:     usize,
    },
}

/// Result type of every parsing function.
pub type ParseResult<T> = Result<T, ParseError>;
