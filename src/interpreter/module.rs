use std::{
    collections::{HashMap, HashSet},
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    error::RuntimeErrorKind,
    interpreter::{evaluator::core::Interpreter, parser::parse, value::core::Value},
};

/// Modules loaded by one interpreter, keyed by canonical path.
///
/// Entries are never invalidated. `loading` holds the modules whose
/// evaluation has started but not finished.
#[derive(Debug, Default)]
pub struct ModuleCache {
    loaded:  HashMap<PathBuf, Value>,
    loading: HashSet<PathBuf>,
}

impl ModuleCache {
    /// Gets the cached value of the module at `path`.
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&Value> {
        self.loaded.get(path)
    }

    /// Gets the number of modules loaded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    /// Tells whether no module has been loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }
}

/// Resolves a module specifier to a canonical path.
///
/// `extension` is appended when the specifier has none. Relative
/// specifiers are resolved against the process's working directory.
///
/// # Errors
/// The error of canonicalization, typically because the file does not exist.
///
/// # Example
/// ```
/// use aegis::interpreter::module::resolve_module_path;
///
/// let dir = std::env::temp_dir().canonicalize().unwrap();
/// let file = dir.join("resolve_doc_example.aeg");
/// std::fs::write(&file, "1").unwrap();
///
/// let spec = dir.join("resolve_doc_example");
/// assert_eq!(resolve_module_path(spec.to_str().unwrap(), "aeg").unwrap(), file);
/// ```
pub fn resolve_module_path(spec: &str, extension: &str) -> io::Result<PathBuf> {
    let mut path = PathBuf::from(spec);
    if path.extension().is_none() {
        path.set_extension(extension);
    }
    path.canonicalize()
}

impl Interpreter {
    /// Loads the module named by `spec` and returns its result value.
    ///
    /// The module is read, parsed and evaluated in a fresh global
    /// environment the first time its canonical path is seen; later requests
    /// return the cached value without running it again.
    ///
    /// # Errors
    /// - `CircularModule` when the module is requested again while it is
    ///   still being evaluated.
    /// - `Module` when it cannot be resolved, read, parsed or evaluated.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn require(&mut self, spec: &str) -> Result<Value, RuntimeErrorKind> {
        let extension = &self.config().module_extension;
        let path = resolve_module_path(spec, extension).map_err(|err| {
                       RuntimeErrorKind::Module { path:    spec.to_owned(),
                                                  message: err.to_string(), }
                   })?;

        if let Some(value) = self.modules.loaded.get(&path) {
            debug!(path = %path.display(), "module cache hit");
            return Ok(value.clone());
        }
        if self.modules.loading.contains(&path) {
            return Err(RuntimeErrorKind::CircularModule(path.display().to_string()));
        }
        debug!(path = %path.display(), "module cache miss");

        self.modules.loading.insert(path.clone());
        let result = self.load_module(&path);
        self.modules.loading.remove(&path);

        let value = result?;
        self.modules.loaded.insert(path, value.clone());
        Ok(value)
    }

    fn load_module(&mut self, path: &Path) -> Result<Value, RuntimeErrorKind> {
        let shown = path.display().to_string();
        let module_error = |message: String| RuntimeErrorKind::Module { path: shown.clone(),
                                                                        message };

        let source = fs::read_to_string(path).map_err(|err| module_error(err.to_string()))?;
        let program = parse(&source).map_err(|err| module_error(err.to_string()))?;
        let env = self.global_environment();

        debug!(path = %shown, "evaluating module");
        self.evaluate(&program, &env).map_err(|err| match err.kind {
                                         RuntimeErrorKind::CircularModule(_) => err.kind,
                                         _ => module_error(err.to_string()),
                                     })
    }
}
