/// Where `print` writes.
///
/// Embedders and tests use `Buffer` to capture script output instead of
/// sending it to the process's standard output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Output {
    /// Write to standard output.
    #[default]
    Stdout,
    /// Append to an in-memory buffer.
    Buffer(String),
}

impl Output {
    /// Creates an empty capturing buffer.
    #[must_use]
    pub const fn buffer() -> Self {
        Self::Buffer(String::new())
    }

    /// Writes one line, adding the newline.
    pub fn write_line(&mut self, line: &str) {
        match self {
            Self::Stdout => println!("{line}"),
            Self::Buffer(buffer) => {
                buffer.push_str(line);
                buffer.push('\n');
            },
        }
    }

    /// Gets everything captured so far, or `None` when writing to stdout.
    #[must_use]
    pub fn captured(&self) -> Option<&str> {
        match self {
            Self::Stdout => None,
            Self::Buffer(buffer) => Some(buffer),
        }
    }

    /// Removes and returns everything captured so far.
    ///
    /// # Example
    /// ```
    /// use aegis::interpreter::output::Output;
    ///
    /// let mut output = Output::buffer();
    /// output.write_line("hello");
    ///
    /// assert_eq!(output.take(), "hello\n");
    /// assert_eq!(output.captured(), Some(""));
    /// ```
    pub fn take(&mut self) -> String {
        match self {
            Self::Stdout => String::new(),
            Self::Buffer(buffer) => std::mem::take(buffer),
        }
    }
}
