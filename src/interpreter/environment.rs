use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::{error::RuntimeErrorKind, interpreter::value::core::Value};

/// One scope frame: its bindings and the enclosing frame.
#[derive(Default)]
struct Frame {
    store: HashMap<String, Value>,
    outer: Option<Environment>,
}

/// A shared handle to a scope frame.
///
/// Frames link outward to the global frame of their module. Cloning the
/// handle shares the frame, which is how closures keep their defining scope
/// alive and observe later changes to it.
#[derive(Clone, Default)]
pub struct Environment(Rc<RefCell<Frame>>);

impl Environment {
    /// Creates a root frame with no outer link.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty frame enclosed by `outer`.
    #[must_use]
    pub fn with_outer(outer: &Self) -> Self {
        Self(Rc::new(RefCell::new(Frame { store: HashMap::new(),
                                          outer: Some(outer.clone()), })))
    }

    /// Binds `name` in this frame, replacing any binding of the same name
    /// here and shadowing any in outer frames.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().store.insert(name.into(), value);
    }

    /// Looks `name` up, walking outward from this frame.
    ///
    /// # Errors
    /// `RuntimeErrorKind::UndefinedIdentifier` if no frame binds it.
    ///
    /// # Example
    /// ```
    /// use aegis::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let global = Environment::new();
    /// global.define("x", Value::from(1));
    /// let local = Environment::with_outer(&global);
    ///
    /// assert_eq!(local.get("x"), Ok(Value::from(1)));
    /// assert!(local.get("y").is_err());
    /// ```
    pub fn get(&self, name: &str) -> Result<Value, RuntimeErrorKind> {
        let mut current = self.clone();
        loop {
            let outer = {
                let frame = current.0.borrow();
                if let Some(value) = frame.store.get(name) {
                    return Ok(value.clone());
                }
                frame.outer.clone()
            };
            match outer {
                Some(outer) => current = outer,
                None => return Err(RuntimeErrorKind::UndefinedIdentifier(name.to_string())),
            }
        }
    }

    /// Rebinds the nearest existing `name`, walking outward from this frame.
    /// When no frame binds it, defines it here instead.
    ///
    /// # Example
    /// ```
    /// use aegis::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let global = Environment::new();
    /// global.define("x", Value::from(1));
    /// let local = Environment::with_outer(&global);
    ///
    /// local.assign("x", Value::from(2));
    /// local.assign("fresh", Value::from(3));
    ///
    /// assert_eq!(global.get("x"), Ok(Value::from(2)));
    /// assert!(global.get("fresh").is_err());
    /// assert_eq!(local.get("fresh"), Ok(Value::from(3)));
    /// ```
    pub fn assign(&self, name: &str, value: Value) {
        let mut current = self.clone();
        loop {
            let outer = {
                let mut frame = current.0.borrow_mut();
                if let Some(slot) = frame.store.get_mut(name) {
                    *slot = value;
                    return;
                }
                frame.outer.clone()
            };
            match outer {
                Some(outer) => current = outer,
                None => break,
            }
        }
        self.define(name, value);
    }

    /// Whether both handles refer to the same frame.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frame = self.0.borrow();
        let mut names: Vec<_> = frame.store.keys().collect();
        names.sort();
        f.debug_struct("Environment")
         .field("names", &names)
         .field("has_outer", &frame.outer.is_some())
         .finish()
    }
}
