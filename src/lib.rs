//! # aegis
//!
//! aegis is a small, dynamically typed scripting language written in Rust.
//! Source text is tokenized, parsed into an AST by a Pratt parser and run by
//! a tree-walking evaluator over a chain of lexical scopes. Host code plugs
//! capabilities in through native functions, and scripts load each other
//! through a caching module loader.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{fs, path::Path};

use crate::{
    error::Error,
    interpreter::{evaluator::core::Interpreter, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types the parser
/// produces and the evaluator walks. Every node carries the line and column
/// it started at.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines `ParseError` for malformed source, with the offending position.
/// - Defines `RuntimeError` for failed evaluation, with position and the call
///   frames active when it happened.
/// - Combines both, plus file access, into the crate-level `Error`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, values, scopes and
/// module loading, and exposes the [`Interpreter`] that hosts embed.
pub mod interpreter;
/// General utilities: safe numeric conversion and stack growth.
pub mod util;

/// Runs a script in a fresh interpreter and returns its final value.
///
/// # Errors
/// Returns the parse error or runtime error that stopped the script.
///
/// # Examples
/// ```
/// use aegis::{interpreter::value::core::Value, run_source};
///
/// let source = "fn add(a, b) { return a + b; } add(2, 3)";
/// assert_eq!(run_source(source).unwrap(), Value::from(5));
///
/// // Example with an intentional error (unknown variable).
/// let source = "let y = x + 1";
/// assert!(run_source(source).is_err());
/// ```
pub fn run_source(source: &str) -> Result<Value, Error> {
    Interpreter::new().run(source)
}

/// Reads a script file and runs it in a fresh interpreter with `argv` bound
/// to `ARGV`.
///
/// # Errors
/// Returns `Error::Io` when the file cannot be read, otherwise the error that
/// stopped the script.
pub fn run_file(path: impl AsRef<Path>, argv: &[String]) -> Result<Value, Error> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(),
                                                                       source })?;
    Interpreter::new().run_with_args(&source, argv)
}
