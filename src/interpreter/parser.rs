use crate::{ast::Program, error::ParseResult, interpreter::lexer::Lexer};

/// Core of the Pratt expression parser.
///
/// Holds the precedence table, the prefix dispatch and the infix loop every
/// other expression rule goes through.
pub mod core;

/// Prefix operators `!` and unary `-`.
pub mod unary;

/// Infix operators and the postfix forms: calls, indexing and member access.
pub mod binary;

/// Blocks and function literals.
pub mod block;

/// Shared helpers: token expectations, comma-separated lists and the array
/// and object literals built on them.
pub mod utils;

/// Statements and the desugaring of `unless`, `until`, `however` chains and
/// function declarations.
pub mod statement;

/// Parses source text into a [`Program`].
///
/// # Errors
/// Returns the first `ParseError`, carrying the line and column of the
/// offending token.
///
/// # Example
/// ```
/// use aegis::interpreter::parser::parse;
///
/// let program = parse("let x = 1; set x = x + 1;").unwrap();
/// assert_eq!(program.body.len(), 2);
///
/// assert!(parse("set 1 = 2").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<Program> {
    let tokens = Lexer::new(source).tokenize();
    let mut iter = tokens.iter().peekable();
    statement::parse_program(&mut iter)
}
