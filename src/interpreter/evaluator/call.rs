use std::rc::Rc;

use tracing::trace;

use crate::{
    ast::{Expr, Position},
    error::{AtPosition, EvalResult, RuntimeErrorKind},
    interpreter::{
        environment::Environment,
        evaluator::{core::Interpreter, statement::Flow},
        value::{core::Value, function::Closure},
    },
};

impl Interpreter {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then every argument from left to
    /// right, then the call is dispatched through [`Interpreter::call_value`].
    pub(crate) fn eval_call(&mut self,
                            callee: &Expr,
                            args: &[Expr],
                            pos: Position,
                            env: &Environment)
                            -> EvalResult<Value> {
        let callee = self.eval_expr(callee, env)?;
        let args = args.iter()
                       .map(|arg| self.eval_expr(arg, env))
                       .collect::<EvalResult<Vec<_>>>()?;
        self.call_value(&callee, &args, pos)
    }

    /// Calls a function value with already evaluated arguments.
    ///
    /// Script functions and natives both run inside a named call frame.
    /// Natives get the whole argument list; their failures are reported at
    /// `pos`.
    ///
    /// # Errors
    /// `NotCallable` when `callee` is not a function, `CallDepthExceeded`
    /// past the configured depth, or whatever the callee fails with.
    ///
    /// # Example
    /// ```
    /// use aegis::{
    ///     ast::Position,
    ///     interpreter::{evaluator::core::Interpreter, value::core::Value},
    /// };
    ///
    /// let mut interpreter = Interpreter::new();
    /// let env = interpreter.global_environment();
    /// let parse = env.get("json").unwrap();
    /// let parse = match parse {
    ///     Value::Object(json) => json.borrow()["parse"].clone(),
    ///     _ => unreachable!(),
    /// };
    ///
    /// let value = interpreter.call_value(&parse, &[Value::from("[1, 2]")], Position::default())
    ///                        .unwrap();
    /// assert_eq!(value, Value::array(vec![Value::from(1), Value::from(2)]));
    /// ```
    pub fn call_value(&mut self,
                      callee: &Value,
                      args: &[Value],
                      pos: Position)
                      -> EvalResult<Value> {
        match callee {
            Value::Function(closure) => {
                let closure = Rc::clone(closure);
                self.with_frame(closure.frame_name(), pos, |interpreter| {
                        interpreter.call_closure(&closure, args)
                    })
            },
            Value::Native(native) => {
                let native = Rc::clone(native);
                self.with_frame(&native.name, pos, |interpreter| {
                        native.call(interpreter, args).at(pos)
                    })
            },
            other => Err(RuntimeErrorKind::NotCallable(other.type_name()).at(pos)),
        }
    }

    /// Runs `body` with `name` pushed onto the call-frame stack.
    ///
    /// The frame is popped again whether `body` succeeds or fails. An error
    /// leaving the frame without a trace gets one: the active frames,
    /// innermost first.
    fn with_frame<F>(&mut self, name: &str, pos: Position, body: F) -> EvalResult<Value>
        where F: FnOnce(&mut Self) -> EvalResult<Value>
    {
        let limit = self.config().max_call_depth;
        if self.frames.len() >= limit {
            return Err(RuntimeErrorKind::CallDepthExceeded(limit).at(pos));
        }

        self.frames.push(name.to_owned());
        trace!(frame = name, depth = self.frames.len(), "enter call frame");

        let result = body(self).map_err(|mut err| {
                                   if err.trace.is_none() {
                                       let frames = self.frames.iter().rev().cloned().collect();
                                       err.trace = Some(frames);
                                   }
                                   err
                               });

        self.frames.pop();
        trace!(frame = name, depth = self.frames.len(), "leave call frame");
        result
    }

    /// Binds the arguments in a fresh child of the closure's defining scope
    /// and runs the body.
    ///
    /// Missing arguments are `null`; extra ones are ignored. Without a
    /// `return` the call yields the body's last value.
    fn call_closure(&mut self, closure: &Closure, args: &[Value]) -> EvalResult<Value> {
        let env = Environment::with_outer(&closure.env);
        for (index, param) in closure.definition.params.iter().enumerate() {
            env.define(param.clone(), args.get(index).cloned().unwrap_or_default());
        }

        match self.exec_block(&closure.definition.body, &env)? {
            Flow::Normal(value) | Flow::Return(value) => Ok(value),
        }
    }
}
