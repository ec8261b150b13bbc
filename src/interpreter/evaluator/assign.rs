use crate::{
    ast::AssignTarget,
    error::{AtPosition, EvalResult, RuntimeErrorKind},
    interpreter::{
        environment::Environment,
        evaluator::{access::to_index, core::Interpreter},
        value::core::Value,
    },
    util::num::resolve_index,
};

impl Interpreter {
    /// Writes `value` into the place named by `target`.
    ///
    /// Identifiers update the nearest existing binding, or define one in
    /// `env` when there is none. Member targets need an object; index
    /// targets need an array.
    pub(crate) fn assign(&mut self,
                         target: &AssignTarget,
                         value: Value,
                         env: &Environment)
                         -> EvalResult<()> {
        match target {
            AssignTarget::Identifier { name, .. } => {
                env.assign(name, value);
                Ok(())
            },
            AssignTarget::Member { object,
                                   property,
                                   pos, } => match self.eval_expr(object, env)? {
                Value::Object(map) => {
                    map.borrow_mut().insert(property.clone(), value);
                    Ok(())
                },
                other => Err(RuntimeErrorKind::InvalidPropertyTarget(other.type_name()).at(*pos)),
            },
            AssignTarget::Index { collection,
                                  index,
                                  pos, } => {
                let collection = self.eval_expr(collection, env)?;
                let index = self.eval_expr(index, env)?;
                set_index(&collection, &index, value).at(*pos)
            },
        }
    }
}

/// Replaces one element of an array.
///
/// Negative indices count from the end. Strings are immutable.
pub fn set_index(collection: &Value, index: &Value, value: Value) -> Result<(), RuntimeErrorKind> {
    match collection {
        Value::Array(items) => {
            let index = to_index(index)?;
            let mut items = items.borrow_mut();
            let len = items.len();
            let slot = resolve_index(index, len).and_then(|position| items.get_mut(position))
                                                .ok_or(RuntimeErrorKind::IndexOutOfBounds { index,
                                                                                            len })?;
            *slot = value;
            Ok(())
        },
        Value::Str(_) => {
            Err(RuntimeErrorKind::TypeError("strings cannot be modified in place".into()))
        },
        other => Err(RuntimeErrorKind::NotIndexable(other.type_name())),
    }
}
