/// Interpreter state and expression dispatch.
///
/// Contains the `Interpreter`, the entry points that run whole programs and
/// the `eval_expr` dispatcher every other file hooks into.
pub mod core;

/// Statements, blocks and the `Flow` signal carrying `return` outward.
pub mod statement;

/// Prefix operator evaluation.
///
/// Implements logical NOT under truthiness and numeric negation.
pub mod unary;

/// Infix operator evaluation.
///
/// Handles arithmetic, concatenation, comparisons, deep equality, membership
/// and the short-circuiting logical operators.
pub mod binary;

/// Calls and call frames.
///
/// Dispatches to closures and natives, tracks the call-frame stack, enforces
/// the depth limit and records traces on failing calls.
pub mod call;

/// Index and member reads.
pub mod access;

/// Targets of `set`: bindings, object keys and array elements.
pub mod assign;

/// Native functions and the standard globals.
pub mod function;
