use std::{cell::Cell, fs, path::Path, rc::Rc};

use aegis::{
    error::{Error, RuntimeErrorKind},
    interpreter::{evaluator::core::Interpreter, value::core::Value},
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, source: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, source).unwrap_or_else(|e| panic!("Failed to write {path:?}: {e}"));
    path.to_string_lossy().into_owned()
}

fn require_call(spec: impl AsRef<Path>) -> String {
    format!("module.require({:?})", spec.as_ref().to_string_lossy())
}

fn runtime_error(interpreter: &mut Interpreter, src: &str) -> RuntimeErrorKind {
    match interpreter.run(src) {
        Err(Error::Runtime(err)) => err.kind,
        Err(other) => panic!("Expected a runtime error, got: {other}"),
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail"),
    }
}

#[test]
fn modules_evaluate_once_and_share_their_value() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "config.aeg", "tick()\n{answer: 42}");

    let runs = Rc::new(Cell::new(0));
    let mut interpreter = Interpreter::new();
    let counter = Rc::clone(&runs);
    interpreter.register_native("tick", move |_, _| {
                   counter.set(counter.get() + 1);
                   Ok(Value::Null)
               });

    let src = format!("let a = {0}\nlet b = {0}\nset a.answer = 7\nb.answer", require_call(&path));
    let value = interpreter.run(&src).unwrap();

    assert_eq!(value, Value::from(7));
    assert_eq!(runs.get(), 1);
    assert_eq!(interpreter.modules().len(), 1);

    let cached = interpreter.modules()
                            .get(&Path::new(&path).canonicalize().unwrap())
                            .cloned();
    assert_eq!(cached, Some(Value::object([("answer", Value::from(7))])));
}

#[test]
fn extension_is_appended_and_load_file_is_an_alias() {
    let dir = TempDir::new().unwrap();
    write(&dir, "math.aeg", "fn double(x) { x * 2 }\n{double: double}");
    let bare = dir.path().join("math");

    let src = format!("let m = {}\nlet n = module.load_file({:?})\nm == n and m.double(4) == 8",
                      require_call(&bare),
                      bare.to_string_lossy());
    let mut interpreter = Interpreter::new();

    assert_eq!(interpreter.run(&src).unwrap(), Value::Bool(true));
    assert_eq!(interpreter.modules().len(), 1);
}

#[test]
fn modules_run_in_a_fresh_global_scope() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "peek.aeg", "secret");

    let mut interpreter = Interpreter::new();
    let src = format!("let secret = 1\n{}", require_call(&path));

    let RuntimeErrorKind::Module { message, .. } = runtime_error(&mut interpreter, &src) else {
        panic!("expected a module error");
    };
    assert!(message.contains("Undefined identifier 'secret'"), "{message}");
}

#[test]
fn module_results_can_be_any_value() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "early.aeg", "return [1, 2]\n3");

    let mut interpreter = Interpreter::new();
    let value = interpreter.run(&require_call(&path)).unwrap();

    assert_eq!(value, Value::array(vec![Value::from(1), Value::from(2)]));
}

#[test]
fn circular_requires_fail_fast() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.aeg");
    let b = dir.path().join("b.aeg");
    write(&dir, "a.aeg", &require_call(&b));
    write(&dir, "b.aeg", &require_call(&a));

    let mut interpreter = Interpreter::new();
    let kind = runtime_error(&mut interpreter, &require_call(&a));

    let expected = a.canonicalize().unwrap().display().to_string();
    assert_eq!(kind, RuntimeErrorKind::CircularModule(expected));
    assert!(interpreter.modules().is_empty());
}

#[test]
fn missing_and_broken_modules_are_module_errors() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nowhere.aeg");
    let broken = write(&dir, "broken.aeg", "let = 1");

    let mut interpreter = Interpreter::new();

    let RuntimeErrorKind::Module { path, .. } =
        runtime_error(&mut interpreter, &require_call(&missing))
    else {
        panic!("expected a module error");
    };
    assert_eq!(path, missing.to_string_lossy());

    let RuntimeErrorKind::Module { message, .. } =
        runtime_error(&mut interpreter, &require_call(&broken))
    else {
        panic!("expected a module error");
    };
    assert!(message.starts_with("Parse error at 1:5"), "{message}");

    assert!(matches!(runtime_error(&mut interpreter, "module.require(1)"),
                     RuntimeErrorKind::Native { .. }));
}
