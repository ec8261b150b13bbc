use std::fmt;

use crate::interpreter::value::core::Value;

/// Formats values the way `print` and string concatenation show them.
///
/// Strings are raw at the top level and quoted inside arrays and objects.
/// An array or object that contains itself prints as `[...]` or `{...}` at
/// the point of recursion.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            other => write_nested(other, f, &mut Vec::new()),
        }
    }
}

/// Writes a value that may sit inside a container.
///
/// `open` holds the addresses of the containers currently being written.
fn write_nested(value: &Value, f: &mut fmt::Formatter<'_>, open: &mut Vec<usize>) -> fmt::Result {
    match value {
        Value::Null => write!(f, "null"),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Number(n) => write!(f, "{n}"),
        Value::Str(s) => write!(f, "{s:?}"),
        Value::Function(closure) => match &closure.definition.name {
            Some(name) => write!(f, "<fn {name}>"),
            None => write!(f, "<fn>"),
        },
        Value::Native(native) => write!(f, "<native fn {}>", native.name),
        Value::Array(items) => {
            let address = items.as_ptr() as usize;
            if open.contains(&address) {
                return write!(f, "[...]");
            }
            open.push(address);

            write!(f, "[")?;
            for (index, item) in items.borrow().iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write_nested(item, f, open)?;
            }
            open.pop();
            write!(f, "]")
        },
        Value::Object(map) => {
            let address = map.as_ptr() as usize;
            if open.contains(&address) {
                return write!(f, "{{...}}");
            }
            open.push(address);

            write!(f, "{{")?;
            for (index, (key, item)) in map.borrow().iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}: ")?;
                write_nested(item, f, open)?;
            }
            open.pop();
            write!(f, "}}")
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::interpreter::value::core::Value;

    #[test]
    fn numbers_drop_integral_fraction() {
        assert_eq!(Value::Number(3.0).to_string(), "3");
        assert_eq!(Value::Number(-2.0).to_string(), "-2");
        assert_eq!(Value::Number(1.5).to_string(), "1.5");
    }

    #[test]
    fn strings_are_quoted_only_when_nested() {
        let nested = Value::array(vec![Value::from("a\"b"), Value::Null, Value::Bool(true)]);

        assert_eq!(Value::from("plain").to_string(), "plain");
        assert_eq!(nested.to_string(), r#"["a\"b", null, true]"#);
    }

    #[test]
    fn self_containing_array_terminates() {
        let items = Value::array(vec![Value::from(1)]);
        if let Value::Array(inner) = &items {
            inner.borrow_mut().push(items.clone());
        }

        assert_eq!(items.to_string(), "[1, [...]]");
    }
}
