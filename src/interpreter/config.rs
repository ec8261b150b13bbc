/// Default limit on nested calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;
/// Default extension appended to module specifiers without one.
pub const DEFAULT_MODULE_EXTENSION: &str = "aeg";

/// Runtime configuration of an [`Interpreter`](crate::interpreter::evaluator::core::Interpreter).
///
/// # Example
/// ```
/// use aegis::interpreter::config::Config;
///
/// let config = Config::default().with_max_call_depth(64)
///                               .with_module_extension("txt");
///
/// assert_eq!(config.max_call_depth, 64);
/// assert_eq!(config.module_extension, "txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How many calls may be active at once before evaluation fails with
    /// `CallDepthExceeded`.
    pub max_call_depth:   usize,
    /// Extension given to module specifiers that have none, without the dot.
    pub module_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_call_depth:   DEFAULT_MAX_CALL_DEPTH,
               module_extension: DEFAULT_MODULE_EXTENSION.to_string(), }
    }
}

impl Config {
    /// Sets the call depth limit.
    #[must_use]
    pub const fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    /// Sets the default module extension.
    #[must_use]
    pub fn with_module_extension(mut self, extension: impl Into<String>) -> Self {
        self.module_extension = extension.into();
        self
    }
}
