/// The `Value` enum, truthiness, type names and deep equality.
pub mod core;
/// Script closures and host functions.
pub mod function;
/// The display form used by `print` and string concatenation.
pub mod display;
/// Conversions from Rust and JSON values.
///
/// These make up the interchange surface between scripts and the host:
/// `From` impls for common Rust types and lossless JSON conversion for the
/// data subset of the value model.
pub mod convert;
