/// Dispatch of infix operators.
///
/// Evaluates the operands and routes the operator to the file implementing
/// it. The logical operators are routed before their operands are evaluated
/// so they can short-circuit.
pub mod core;

/// `+ - * / %`, including string and array concatenation.
pub mod arithmetic;

/// Ordering, deep equality and the `in` membership test.
pub mod comparison;

/// `&&`, `||` and `nor`.
pub mod logic;
