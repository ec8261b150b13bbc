/// Numeric conversion helpers.
///
/// Safe conversions between `i64`, `usize` and `f64` without silent data
/// loss, plus index resolution for negative indices. Every fallible helper
/// takes the error to return so callers choose between parse and runtime
/// errors.
pub mod num;
/// Stack growth guard for recursive parsing and evaluation.
pub mod stack;
