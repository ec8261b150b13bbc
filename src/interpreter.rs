/// The lexer turns source text into position-tagged tokens.
///
/// It owns the keyword and alias tables, the three comment styles and the
/// string literal rules. Unrecognized input becomes an `Illegal` token for
/// the parser to reject.
pub mod lexer;
/// The parser builds the AST from tokens.
///
/// Expressions use a Pratt parser; statements are parsed by recursive
/// descent, which also desugars `unless`, `until`, `however` chains and
/// function declarations.
pub mod parser;
/// The runtime value model.
///
/// # Responsibilities
/// - Defines the `Value` enum and its shared, mutable arrays and objects.
/// - Implements truthiness, deep equality and the display form.
/// - Converts between script values, Rust values and JSON.
pub mod value;
/// Lexical scopes: a chain of frames from the innermost scope outward.
pub mod environment;
/// The evaluator executes AST nodes and computes results.
///
/// # Responsibilities
/// - Evaluates statements and expressions against an environment.
/// - Calls closures and natives and tracks call frames for traces.
/// - Reports runtime errors such as type mismatches or bad indices.
pub mod evaluator;
/// Module resolution, loading and caching.
pub mod module;
/// Runtime limits and defaults.
pub mod config;
/// Where `print` writes.
pub mod output;
