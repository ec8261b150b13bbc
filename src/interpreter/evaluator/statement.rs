use crate::{
    ast::{Block, Expr, IfStatement, Stmt},
    error::EvalResult,
    interpreter::{environment::Environment, evaluator::core::Interpreter, value::core::Value},
};

/// How a statement finished.
///
/// `Return` travels outward through blocks, `if` and `while` until the
/// enclosing call (or the program) turns it back into a plain value.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Execution continues with the next statement; carries the statement's
    /// value.
    Normal(Value),
    /// A `return` was executed.
    Return(Value),
}

impl Interpreter {
    /// Executes a single statement.
    ///
    /// `let` defines in the current frame, `set` evaluates its value before
    /// resolving the target, and every statement yields the value it
    /// produced so blocks and programs can return their last one.
    pub fn exec_statement(&mut self, statement: &Stmt, env: &Environment) -> EvalResult<Flow> {
        match statement {
            Stmt::Let { name, value, .. } => {
                let value = self.eval_expr(value, env)?;
                env.define(name.clone(), value.clone());
                Ok(Flow::Normal(value))
            },
            Stmt::Assign { target, value, .. } => {
                let value = self.eval_expr(value, env)?;
                self.assign(target, value.clone(), env)?;
                Ok(Flow::Normal(value))
            },
            Stmt::If(if_statement) => self.exec_if(if_statement, env),
            Stmt::While { test, body, .. } => self.exec_while(test, body, env),
            Stmt::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.eval_expr(expr, env)?,
                    None => Value::Null,
                };
                Ok(Flow::Return(value))
            },
            Stmt::Expression { expr, .. } => Ok(Flow::Normal(self.eval_expr(expr, env)?)),
        }
    }

    /// Executes the statements of a block in order, in `env` itself.
    ///
    /// The block's value is the value of its last statement, `null` when it
    /// is empty.
    pub fn exec_block(&mut self, block: &Block, env: &Environment) -> EvalResult<Flow> {
        let mut result = Value::Null;
        for statement in &block.statements {
            match self.exec_statement(statement, env)? {
                Flow::Normal(value) => result = value,
                flow @ Flow::Return(_) => return Ok(flow),
            }
        }
        Ok(Flow::Normal(result))
    }

    fn exec_if(&mut self, statement: &IfStatement, env: &Environment) -> EvalResult<Flow> {
        if self.eval_expr(&statement.test, env)?.is_truthy() {
            return self.exec_block(&statement.consequent, env);
        }
        match &statement.alternate {
            Some(alternate) => self.exec_block(alternate, env),
            None => Ok(Flow::Normal(Value::Null)),
        }
    }

    /// Runs `body` while `test` is truthy.
    ///
    /// Yields the value of the last completed iteration, `null` if the body
    /// never ran.
    fn exec_while(&mut self,
                  test: &Expr,
                  body: &Block,
                  env: &Environment)
                  -> EvalResult<Flow> {
        let mut result = Value::Null;
        while self.eval_expr(test, env)?.is_truthy() {
            match self.exec_block(body, env)? {
                Flow::Normal(value) => result = value,
                flow @ Flow::Return(_) => return Ok(flow),
            }
        }
        Ok(Flow::Normal(result))
    }
}
