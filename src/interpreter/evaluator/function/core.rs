use std::collections::BTreeMap;

use crate::{
    error::RuntimeErrorKind,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::Interpreter,
            function::{json, module, print},
        },
        value::{core::Value, function::NativeFunction},
    },
};

/// Type alias for native function handlers.
///
/// A handler receives the interpreter and the evaluated arguments. It
/// reports failures without a position; the call site supplies one.
type NativeHandler = fn(&mut Interpreter, &[Value]) -> Result<Value, RuntimeErrorKind>;

/// Specifies the allowed number of arguments for a native.
///
/// - `Any` accepts every argument count.
/// - `Exact(n)` means the native must receive exactly `n` arguments.
#[derive(Clone, Copy)]
enum Arity {
    Any,
    Exact(usize),
}

/// Defines the standard natives by generating a lookup table and a name list.
///
/// Names may be dotted: `"json.parse"` is installed as the `parse` member
/// of a global `json` object.
macro_rules! native_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct NativeDef {
            name:  &'static str,
            arity: Arity,
            func:  NativeHandler,
        }
        static NATIVE_TABLE: &[NativeDef] = &[
            $(
                NativeDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every standard native, dotted for namespaced ones.
        pub const NATIVE_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

native_functions! {
    "print"            => { arity: Arity::Any,      func: print::print },
    "module.require"   => { arity: Arity::Exact(1), func: module::require },
    "module.load_file" => { arity: Arity::Exact(1), func: module::require },
    "json.parse"       => { arity: Arity::Exact(1), func: json::parse },
    "json.stringify"   => { arity: Arity::Exact(1), func: json::stringify },
}

impl Arity {
    /// Checks an argument count against this arity on behalf of `name`.
    fn check(self, name: &str, n: usize) -> Result<(), RuntimeErrorKind> {
        match self {
            Self::Any => Ok(()),
            Self::Exact(m) if n == m => Ok(()),
            Self::Exact(m) => {
                let plural = if m == 1 { "" } else { "s" };
                let message = format!("expected {m} argument{plural}, found {n}");
                Err(RuntimeErrorKind::native(name, message))
            },
        }
    }
}

impl NativeDef {
    fn to_value(&'static self) -> Value {
        Value::from(NativeFunction::new(self.name, move |interpreter, args| {
                        self.arity.check(self.name, args.len())?;
                        (self.func)(interpreter, args)
                    }))
    }
}

/// Defines the standard globals in `env`.
///
/// Plain natives are bound by name; dotted natives are grouped into one
/// object per namespace. `sandbox` is the capability object host
/// extensions consult; the core only defines it, with every flag off.
///
/// # Example
/// ```
/// use aegis::interpreter::{environment::Environment, evaluator::function::core::install_globals};
///
/// let env = Environment::new();
/// install_globals(&env);
///
/// assert!(env.get("print").is_ok());
/// assert_eq!(env.get("sandbox").unwrap().to_string(), "{fs: false}");
/// ```
pub fn install_globals(env: &Environment) {
    let mut namespaces: BTreeMap<&str, Vec<(&str, Value)>> = BTreeMap::new();

    for def in NATIVE_TABLE {
        match def.name.split_once('.') {
            Some((namespace, member)) => {
                namespaces.entry(namespace).or_default().push((member, def.to_value()));
            },
            None => env.define(def.name, def.to_value()),
        }
    }

    for (namespace, members) in namespaces {
        env.define(namespace, Value::object(members));
    }

    env.define("sandbox", Value::object([("fs", Value::Bool(false))]));
}

/// Gets the only argument of a single-argument native as a string.
pub(crate) fn string_arg<'a>(name: &str, args: &'a [Value]) -> Result<&'a str, RuntimeErrorKind> {
    match args.first() {
        Some(Value::Str(text)) => Ok(&**text),
        Some(other) => {
            let message = format!("expected a string, found {}", other.type_name());
            Err(RuntimeErrorKind::native(name, message))
        },
        None => Err(RuntimeErrorKind::native(name, "expected a string")),
    }
}
