use std::rc::Rc;

use tracing::warn;

use crate::{
    ast::{Expr, Program},
    error::{AtPosition, Error, EvalResult, RuntimeErrorKind},
    interpreter::{
        config::Config,
        environment::Environment,
        evaluator::{function::core::install_globals, statement::Flow},
        lexer::is_identifier,
        module::ModuleCache,
        output::Output,
        parser::parse,
        value::{
            core::Value,
            function::{Closure, NativeFunction},
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Stores the state of one script run.
///
/// An `Interpreter` owns everything that outlives a single expression: the
/// call-frame stack used for traces, the module cache, the print destination
/// and the natives the host registered. Two interpreters never share any of
/// it, so independent runs can coexist in one process.
///
/// ## Usage
///
/// ```
/// use aegis::interpreter::{evaluator::core::Interpreter, value::core::Value};
///
/// let mut interpreter = Interpreter::new();
/// let value = interpreter.run("let x = 20; x + 22").unwrap();
///
/// assert_eq!(value, Value::from(42));
/// ```
#[derive(Debug, Default)]
pub struct Interpreter {
    config:             Config,
    /// Names of the active calls, outermost first.
    pub(crate) frames:  Vec<String>,
    pub(crate) modules: ModuleCache,
    output:             Output,
    natives:            Vec<Rc<NativeFunction>>,
}

impl Interpreter {
    /// Creates an interpreter with the default configuration, printing to
    /// standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Replaces the print destination.
    ///
    /// # Example
    /// ```
    /// use aegis::interpreter::{evaluator::core::Interpreter, output::Output};
    ///
    /// let mut interpreter = Interpreter::new().with_output(Output::buffer());
    /// interpreter.run(r#"print("a", 1, [true, null])"#).unwrap();
    ///
    /// assert_eq!(interpreter.output().captured(), Some("a 1 [true, null]\n"));
    /// ```
    #[must_use]
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Gets the active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the print destination.
    #[must_use]
    pub const fn output(&self) -> &Output {
        &self.output
    }

    /// Gets the print destination for writing.
    pub const fn output_mut(&mut self) -> &mut Output {
        &mut self.output
    }

    /// Gets the module cache.
    #[must_use]
    pub const fn modules(&self) -> &ModuleCache {
        &self.modules
    }

    /// Registers a host function under `name`.
    ///
    /// It is defined in every global environment created afterwards: the
    /// program root and every module root. A name that does not lex as a
    /// plain identifier (a keyword, reserved word or domain word such as
    /// `payload`) is still registered but cannot be reached from scripts, so
    /// it is logged as a warning.
    ///
    /// # Example
    /// ```
    /// use aegis::interpreter::{evaluator::core::Interpreter, value::core::Value};
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.register_native("double", |_, args| {
    ///                let n = args.first().cloned().unwrap_or_default().as_number()?;
    ///                Ok(Value::from(n * 2.0))
    ///            });
    ///
    /// assert_eq!(interpreter.run("double(21)").unwrap(), Value::from(42));
    /// ```
    pub fn register_native<F>(&mut self, name: impl Into<String>, func: F)
        where F: Fn(&mut Self, &[Value]) -> Result<Value, RuntimeErrorKind> + 'static
    {
        let name = name.into();
        if !is_identifier(&name) {
            warn!(name = %name,
                  "native function name is not an identifier; scripts cannot call it");
        }
        self.natives.push(Rc::new(NativeFunction::new(name, func)));
    }

    /// Creates a fresh global environment holding the standard globals and
    /// every registered native.
    #[must_use]
    pub fn global_environment(&self) -> Environment {
        let env = Environment::new();
        install_globals(&env);
        for native in &self.natives {
            env.define(native.name.clone(), Value::Native(Rc::clone(native)));
        }
        env
    }

    /// Parses and evaluates a script in a fresh global environment with an
    /// empty `ARGV`.
    ///
    /// # Errors
    /// The first parse or runtime error.
    pub fn run(&mut self, source: &str) -> Result<Value, Error> {
        self.run_with_args(source, &[])
    }

    /// Parses and evaluates a script, exposing `args` to it as `ARGV`.
    ///
    /// # Errors
    /// The first parse or runtime error.
    pub fn run_with_args(&mut self, source: &str, args: &[String]) -> Result<Value, Error> {
        let program = parse(source)?;
        let env = self.global_environment();
        let argv = args.iter().map(|arg| Value::from(arg.as_str())).collect();
        env.define("ARGV", Value::array(argv));
        Ok(self.evaluate(&program, &env)?)
    }

    /// Evaluates a parsed program against `env`.
    ///
    /// The result is the value of the last statement. A top-level `return`
    /// ends the program early with its value.
    pub fn evaluate(&mut self, program: &Program, env: &Environment) -> EvalResult<Value> {
        let mut result = Value::Null;
        for statement in &program.body {
            match self.exec_statement(statement, env)? {
                Flow::Normal(value) => result = value,
                Flow::Return(value) => return Ok(value),
            }
        }
        Ok(result)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Literals are
    /// handled here; every other variant is delegated to the file that owns
    /// it.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Scope to resolve identifiers in.
    pub fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match expr {
            Expr::Identifier { name, pos } => env.get(name).at(*pos),
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::Str { value, .. } => Ok(Value::from(value.as_str())),
            Expr::Boolean { value, .. } => Ok(Value::Bool(*value)),
            Expr::Null { .. } => Ok(Value::Null),
            Expr::Array { elements, .. } => {
                let items = elements.iter()
                                    .map(|element| self.eval_expr(element, env))
                                    .collect::<EvalResult<Vec<_>>>()?;
                Ok(Value::array(items))
            },
            Expr::Object { properties, .. } => {
                let mut entries = Vec::with_capacity(properties.len());
                for property in properties {
                    entries.push((property.key.as_str(), self.eval_expr(&property.value, env)?));
                }
                Ok(Value::object(entries))
            },
            Expr::Prefix { op, right, pos } => self.eval_prefix(*op, right, *pos, env),
            Expr::Infix { left,
                          op,
                          right,
                          pos, } => self.eval_infix(left, *op, right, *pos, env),
            Expr::Call { callee, args, pos } => self.eval_call(callee, args, *pos, env),
            Expr::Index { collection,
                          index,
                          pos, } => self.eval_index(collection, index, *pos, env),
            Expr::Member { object,
                           property,
                           pos, } => self.eval_member(object, property, *pos, env),
            Expr::Function(definition) => {
                Ok(Value::Function(Rc::new(Closure { definition: Rc::clone(definition),
                                                     env:        env.clone(), })))
            },
        })
    }
}
