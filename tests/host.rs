use std::fs;

use aegis::{
    ast::Position,
    error::{Error, RuntimeErrorKind},
    interpreter::{
        config::Config, evaluator::core::Interpreter, output::Output, parser::parse,
        value::core::Value,
    },
    run_file,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn print_writes_display_forms_to_the_output() {
    let mut interpreter = Interpreter::new().with_output(Output::buffer());
    let src = r#"
        print("hello", 1, 2.5, null, true)
        print({b: "x", a: [1, "y"]})
        print(print)
        fn named() {}
        print(named, fn () {})
        print()
    "#;

    let value = interpreter.run(src).unwrap();

    assert_eq!(value, Value::Null);
    assert_eq!(interpreter.output_mut().take(),
               "hello 1 2.5 null true\n{a: [1, \"y\"], b: \"x\"}\n<native fn print>\n<fn named> \
                <fn>\n\n");
}

#[test]
fn registered_natives_receive_all_arguments() {
    let mut interpreter = Interpreter::new();
    interpreter.register_native("sum", |_, args| {
                   let mut total = 0.0;
                   for arg in args {
                       total += arg.as_number()?;
                   }
                   Ok(Value::from(total))
               });

    assert_eq!(interpreter.run("sum(1, 2, 3.5)").unwrap(), Value::from(6.5));
    assert_eq!(interpreter.run("sum()").unwrap(), Value::from(0));
}

#[test]
fn natives_share_arrays_with_scripts() {
    let mut interpreter = Interpreter::new();
    interpreter.register_native("push", |_, args| match args {
                   [Value::Array(items), value] => {
                       items.borrow_mut().push(value.clone());
                       Ok(Value::Null)
                   },
                   _ => Err(RuntimeErrorKind::native("push", "expected an array and a value")),
               });

    let value = interpreter.run("let list = [1]; push(list, 2); list").unwrap();
    assert_eq!(value, Value::array(vec![Value::from(1), Value::from(2)]));
}

#[test]
fn native_failures_become_runtime_errors_at_the_call_site() {
    let mut interpreter = Interpreter::new();
    interpreter.register_native("fail", |_, _| Err(RuntimeErrorKind::native("fail", "nope")));

    let Err(Error::Runtime(err)) = interpreter.run("fn wrapper() {\n  fail()\n}\nwrapper()")
    else {
        panic!("expected a runtime error");
    };

    assert_eq!(err.kind, RuntimeErrorKind::native("fail", "nope"));
    assert_eq!(err.pos, Position::new(2, 7));
    assert_eq!(err.trace(), ["fail", "wrapper"]);
    assert_eq!(err.to_string(), "Runtime error at 2:7: fail: nope");
}

#[test]
fn host_can_call_script_closures() {
    let mut interpreter = Interpreter::new();
    let env = interpreter.global_environment();
    let program = parse("let factor = 3; fn (x) { x * factor }").unwrap();

    let function = interpreter.evaluate(&program, &env).unwrap();
    let Value::Function(closure) = &function else {
        panic!("expected a closure, got {function}");
    };
    assert!(closure.env.ptr_eq(&env));

    let result = interpreter.call_value(&function, &[Value::from(5)], Position::default());
    assert_eq!(result, Ok(Value::from(15)));

    let not_callable = interpreter.call_value(&Value::from("f"), &[], Position::new(1, 1));
    assert_eq!(not_callable.map_err(|err| err.kind),
               Err(RuntimeErrorKind::NotCallable("string")));
}

#[test]
fn json_interchange_is_lossless_for_data() {
    let original = json!({
        "name": "aegis",
        "version": 1,
        "ratio": 0.25,
        "tags": ["a", "b"],
        "nested": { "ok": true, "none": null }
    });

    let value = Value::from_json(original.clone());
    assert_eq!(value.to_json().unwrap(), original);

    let mut interpreter = Interpreter::new();
    interpreter.register_native("data", move |_, _| Ok(Value::from_json(original.clone())));
    let text = interpreter.run("json.stringify(data())").unwrap();
    assert_eq!(text,
               Value::from(r#"{"name":"aegis","nested":{"none":null,"ok":true},"ratio":0.25,"tags":["a","b"],"version":1}"#));
}

#[test]
fn natives_named_after_reserved_words_are_unreachable() {
    let mut interpreter = Interpreter::new();
    interpreter.register_native("payload", |_, _| Ok(Value::Null));
    interpreter.register_native("données", |_, _| Ok(Value::from(7)));

    assert!(matches!(interpreter.run("payload()"), Err(Error::Parse(_))));
    assert_eq!(interpreter.run("données()").unwrap(), Value::from(7));
}

#[test]
fn functions_have_no_json_form() {
    let mut interpreter = Interpreter::new();
    let Err(Error::Runtime(err)) = interpreter.run("json.stringify({f: fn () {}})") else {
        panic!("expected a runtime error");
    };
    assert!(matches!(err.kind, RuntimeErrorKind::TypeError(_)));

    let Err(Error::Runtime(err)) = interpreter.run(r#"json.parse("{oops")"#) else {
        panic!("expected a runtime error");
    };
    assert!(matches!(err.kind, RuntimeErrorKind::Native { ref name, .. } if name == "json.parse"));
}

#[test]
fn call_depth_is_configurable() {
    let config = Config::default().with_max_call_depth(10);
    let mut interpreter = Interpreter::new().with_config(config);

    let src = "fn down(n) { if (n == 0) { return 0 } return down(n - 1) }";
    assert_eq!(interpreter.run(&format!("{src} down(8)")).unwrap(), Value::from(0));

    let Err(Error::Runtime(err)) = interpreter.run(&format!("{src} down(20)")) else {
        panic!("expected a runtime error");
    };
    assert_eq!(err.kind, RuntimeErrorKind::CallDepthExceeded(10));
    assert_eq!(err.trace().len(), 10);
    assert!(interpreter.run(&format!("{src} down(8)")).is_ok());
}

#[test]
fn deep_nesting_does_not_overflow_the_stack() {
    let depth = 2_000;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(aegis::run_source(&src).unwrap(), Value::from(1));

    let src = format!("{}0", "-".repeat(depth));
    assert_eq!(aegis::run_source(&src).unwrap(), Value::from(0));
}

#[test]
fn run_file_binds_argv() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("args.aeg");
    fs::write(&path, "ARGV[0] + \"-\" + ARGV.length").unwrap();

    let value = run_file(&path, &["first".to_string(), "second".to_string()]).unwrap();
    assert_eq!(value, Value::from("first-2"));

    let missing = run_file(dir.path().join("missing.aeg"), &[]);
    assert!(matches!(missing, Err(Error::Io { .. })));
}
