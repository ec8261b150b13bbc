use std::rc::Rc;

use crate::{
    error::RuntimeErrorKind, interpreter::value::core::Value, util::num::f64_to_i64_checked,
};

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::array(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl Value {
    /// Builds a value from JSON data.
    ///
    /// Every JSON value has a counterpart, so this cannot fail. Numbers
    /// outside the `f64` range saturate the way `serde_json` reads them.
    ///
    /// # Example
    /// ```
    /// use aegis::interpreter::value::core::Value;
    ///
    /// let json = serde_json::json!({ "ok": true, "ids": [1, 2] });
    /// assert_eq!(Value::from_json(json).to_string(), "{ids: [1, 2], ok: true}");
    /// ```
    #[must_use]
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            serde_json::Value::String(s) => Self::from(s),
            serde_json::Value::Array(items) => {
                Self::array(items.into_iter().map(Self::from_json).collect())
            },
            serde_json::Value::Object(map) => {
                Self::object(map.into_iter().map(|(k, v)| (k, Self::from_json(v))))
            },
        }
    }

    /// Converts the value to JSON data.
    ///
    /// Integral numbers become JSON integers so they print without a
    /// fraction.
    ///
    /// # Errors
    /// `RuntimeErrorKind::TypeError` for functions, non-finite numbers and
    /// containers that contain themselves, which have no JSON form.
    ///
    /// # Example
    /// ```
    /// use aegis::interpreter::value::core::Value;
    ///
    /// let value = Value::array(vec![Value::from(1), Value::from(2.5), Value::from("x")]);
    /// assert_eq!(value.to_json().unwrap().to_string(), r#"[1,2.5,"x"]"#);
    /// ```
    pub fn to_json(&self) -> Result<serde_json::Value, RuntimeErrorKind> {
        json_nested(self, &mut Vec::new())
    }
}

/// Converts a value that may sit inside a container.
///
/// `open` holds the addresses of the containers currently being converted.
fn json_nested(value: &Value,
               open: &mut Vec<usize>)
               -> Result<serde_json::Value, RuntimeErrorKind> {
    let address = match value {
        Value::Array(items) => Some(items.as_ptr() as usize),
        Value::Object(map) => Some(map.as_ptr() as usize),
        _ => None,
    };
    if let Some(address) = address {
        if open.contains(&address) {
            return Err(RuntimeErrorKind::TypeError("cannot convert a cyclic value to JSON".into()));
        }
        open.push(address);
    }

    let json = match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Number(n) => number_to_json(*n)?,
        Value::Str(s) => serde_json::Value::String(s.to_string()),
        Value::Array(items) => {
            let items = items.borrow()
                             .iter()
                             .map(|item| json_nested(item, open))
                             .collect::<Result<Vec<_>, _>>()?;
            serde_json::Value::Array(items)
        },
        Value::Object(map) => {
            let map = map.borrow()
                         .iter()
                         .map(|(k, v)| json_nested(v, open).map(|v| (k.clone(), v)))
                         .collect::<Result<serde_json::Map<_, _>, _>>()?;
            serde_json::Value::Object(map)
        },
        Value::Function(_) | Value::Native(_) => {
            return Err(RuntimeErrorKind::TypeError(format!("cannot convert a {} to JSON",
                                                           value.type_name())));
        },
    };

    if address.is_some() {
        open.pop();
    }
    Ok(json)
}

/// Converts a number, preferring the integer form for integral values.
fn number_to_json(n: f64) -> Result<serde_json::Value, RuntimeErrorKind> {
    if let Ok(integer) = f64_to_i64_checked(n, ()) {
        return Ok(serde_json::Value::from(integer));
    }
    serde_json::Number::from_f64(n).map(serde_json::Value::Number)
                                   .ok_or_else(|| {
                                       RuntimeErrorKind::TypeError(format!("cannot convert {n} \
                                                                            to JSON"))
                                   })
}
