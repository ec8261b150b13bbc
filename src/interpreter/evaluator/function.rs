/// The native table and the installation of the standard globals.
pub mod core;
/// The `print` function implementation.
///
/// Writes the display form of its arguments to the interpreter's output.
pub mod print;
/// `module.require` and `module.load_file`.
pub mod module;
/// `json.parse` and `json.stringify`.
///
/// Converts between JSON text and script values through `serde_json`.
pub mod json;
