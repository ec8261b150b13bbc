use std::{cell::RefCell, collections::BTreeMap, fmt, rc::Rc};

use crate::{
    error::RuntimeErrorKind,
    interpreter::value::function::{Closure, NativeFunction},
};

/// Shared, mutable array storage. Clones alias the same elements.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;
/// Shared, mutable object storage. Clones alias the same entries.
pub type ObjectRef = Rc<RefCell<BTreeMap<String, Value>>>;

/// Represents a runtime value in the interpreter.
///
/// Scalars are copied on assignment; arrays and objects are shared, so a
/// mutation through one binding is visible through every other binding of
/// the same value.
#[derive(Clone, Default)]
pub enum Value {
    /// The absence of a value. Falsy.
    #[default]
    Null,
    /// `true` or `false`. Only `false` is falsy.
    Bool(bool),
    /// A double precision number. Integers are numbers without a fractional
    /// part.
    Number(f64),
    /// An immutable string.
    Str(Rc<str>),
    /// An ordered, mutable sequence.
    Array(ArrayRef),
    /// A string-keyed, mutable map.
    Object(ObjectRef),
    /// A script function together with the scope it was defined in.
    Function(Rc<Closure>),
    /// A host function.
    Native(Rc<NativeFunction>),
}

impl Value {
    /// Creates a new array value owning `items`.
    #[must_use]
    pub fn array(items: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(items)))
    }

    /// Creates a new object value from key/value pairs.
    ///
    /// # Example
    /// ```
    /// use aegis::interpreter::value::core::Value;
    ///
    /// let point = Value::object([("x", Value::from(1)), ("y", Value::from(2))]);
    /// assert_eq!(point.to_string(), "{x: 1, y: 2}");
    /// ```
    #[must_use]
    pub fn object<K: Into<String>>(entries: impl IntoIterator<Item = (K, Self)>) -> Self {
        let map = entries.into_iter()
                         .map(|(key, value)| (key.into(), value))
                         .collect();
        Self::Object(Rc::new(RefCell::new(map)))
    }

    /// Applies the truthiness rule: only `null` and `false` are falsy.
    ///
    /// # Example
    /// ```
    /// use aegis::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Bool(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(false))
    }

    /// Gets the name of the value's type, as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Function(_) => "function",
            Self::Native(_) => "native function",
        }
    }

    /// Gets the number inside the value.
    ///
    /// # Errors
    /// `RuntimeErrorKind::ExpectedNumber` for any other type.
    pub fn as_number(&self) -> Result<f64, RuntimeErrorKind> {
        match self {
            Self::Number(n) => Ok(*n),
            other => Err(RuntimeErrorKind::ExpectedNumber(other.type_name())),
        }
    }

    /// Gets the string inside the value, if it is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Deep, structural equality without coercion between types.
///
/// Arrays and objects compare element by element; functions compare by
/// identity. Containers that reach themselves compare equal when their
/// shapes match.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        deep_eq(self, other, &mut Vec::new())
    }
}

/// Compares two values that may sit inside containers.
///
/// `open` holds the address pairs of the containers currently being
/// compared. Meeting a pair again means the comparison has come round a
/// cycle, and that branch counts as equal.
fn deep_eq(left: &Value, right: &Value, open: &mut Vec<(usize, usize)>) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            if Rc::ptr_eq(a, b) {
                return true;
            }
            let pair = (a.as_ptr() as usize, b.as_ptr() as usize);
            if open.contains(&pair) {
                return true;
            }
            open.push(pair);

            let (a, b) = (a.borrow(), b.borrow());
            let equal = a.len() == b.len()
                        && a.iter().zip(b.iter()).all(|(x, y)| deep_eq(x, y, open));
            open.pop();
            equal
        },
        (Value::Object(a), Value::Object(b)) => {
            if Rc::ptr_eq(a, b) {
                return true;
            }
            let pair = (a.as_ptr() as usize, b.as_ptr() as usize);
            if open.contains(&pair) {
                return true;
            }
            open.push(pair);

            let (a, b) = (a.borrow(), b.borrow());
            let equal = a.len() == b.len()
                        && a.iter()
                            .zip(b.iter())
                            .all(|((ka, x), (kb, y))| ka == kb && deep_eq(x, y, open));
            open.pop();
            equal
        },
        (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
        (Value::Native(a), Value::Native(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Array(items) => f.debug_tuple("Array").field(&items.borrow()).finish(),
            Self::Object(map) => f.debug_tuple("Object").field(&map.borrow()).finish(),
            Self::Function(closure) => write!(f, "Function({})", closure.frame_name()),
            Self::Native(native) => write!(f, "Native({})", native.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds `[tag, <itself>]`.
    fn looped(tag: i32) -> Value {
        let value = Value::array(vec![Value::from(tag)]);
        if let Value::Array(items) = &value {
            items.borrow_mut().push(value.clone());
        }
        value
    }

    #[test]
    fn self_containing_arrays_compare_without_recursing_forever() {
        assert!(looped(1) == looped(1));
        assert!(looped(1) != looped(2));
        assert!(looped(1) != Value::array(vec![Value::from(1), Value::Null]));
    }

    #[test]
    fn self_containing_objects_compare_by_shape() {
        let make = |tag: i32| {
            let value = Value::object([("tag", Value::from(tag))]);
            if let Value::Object(map) = &value {
                map.borrow_mut().insert("me".into(), value.clone());
            }
            value
        };

        assert!(make(1) == make(1));
        assert!(make(1) != make(3));
    }
}
