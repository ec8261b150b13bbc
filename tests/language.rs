use aegis::{
    error::{Error, RuntimeErrorKind},
    interpreter::value::core::Value,
    run_source,
};
use pretty_assertions::assert_eq;

fn eval(src: &str) -> Value {
    run_source(src).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

fn assert_value(src: &str, expected: impl Into<Value>) {
    assert_eq!(eval(src), expected.into(), "{src}");
}

fn assert_success(src: &str) {
    assert_value(src, true);
}

fn assert_failure(src: &str) {
    if run_source(src).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{src}")
    }
}

fn runtime_error(src: &str) -> RuntimeErrorKind {
    match run_source(src) {
        Err(Error::Runtime(err)) => err.kind,
        Err(other) => panic!("Expected a runtime error, got: {other}"),
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail"),
    }
}

#[test]
fn addition_and_concatenation() {
    assert_value("1 + 2", 3);
    assert_value(r#""a" + 1"#, "a1");
    assert_value(r#"1 + "x""#, "1x");
    assert_value("[1, 2] + [3]", vec![Value::from(1), Value::from(2), Value::from(3)]);
    assert_value(r#""list: " + [1, "b"]"#, r#"list: [1, "b"]"#);
    assert_value(r#""pi is " + 3.5"#, "pi is 3.5");
    assert!(matches!(runtime_error("true + 1"), RuntimeErrorKind::TypeError(_)));
    assert!(matches!(runtime_error("[1] + 1"), RuntimeErrorKind::TypeError(_)));
}

#[test]
fn arithmetic_and_precedence() {
    assert_value("2 + 3 * 4", 14);
    assert_value("(2 + 3) * 4", 20);
    assert_value("10 - 4 - 3", 3);
    assert_value("7 / 2", 3.5);
    assert_value("-7 % 3", 2);
    assert_value("-2 * -3", 6);
    assert_eq!(runtime_error("1 / 0"), RuntimeErrorKind::DivisionByZero);
    assert_eq!(runtime_error(r#"1 - "a""#), RuntimeErrorKind::ExpectedNumber("string"));
    assert_eq!(runtime_error("-null"), RuntimeErrorKind::ExpectedNumber("null"));
}

#[test]
fn binding_assignment_and_loops() {
    assert_value("let x = 1; set x = x + 2; let i = 0; while (i < 3) { set i = i + 1; } x + i;",
                 6);
    assert_value("let n = 0; until (n >= 4) { set n = n + 1 } n", 4);
    assert_value("let i = 0; while (i < 3) { set i = i + 1; i * 10 }", 30);
    assert_value("while (false) { 1 }", Value::Null);
}

#[test]
fn set_declares_unbound_names() {
    assert_value("set fresh = 41; fresh + 1", 42);
    assert_value("fn f() { set local = 5; return local; } f()", 5);
    assert_eq!(runtime_error("fn f() { set local = 5; } f(); local"),
               RuntimeErrorKind::UndefinedIdentifier("local".into()));
}

#[test]
fn let_shadows_and_set_mutates_outer_bindings() {
    assert_value("let x = 1; fn f() { let x = 2; return x; } f() + x", 3);
    assert_value("let x = 1; fn f() { set x = 2; } f(); x", 2);
}

#[test]
fn blocks_share_the_enclosing_scope() {
    assert_value("if (true) { let inner = 3 } inner", 3);
}

#[test]
fn functions_and_returns() {
    assert_value("fn add(a, b) { return a + b; } let r = add(2, 3); r;", 5);
    assert_value("def twice(x) { x * 2 } twice(4)", 8);
    assert_value("let square = fn (x) { return x * x }; square(9)", 81);
    assert_value("fn (x) { x + 1 }(1)", 2);
    assert_value("fn f() { return; } f()", Value::Null);
    assert_value("fn f(a, b) { b } f(1)", Value::Null);
    assert_value("fn f(a) { a } f(1, 2, 3)", 1);
    assert_value("fn early(x) { if (x > 0) { return \"pos\" } return \"neg\" } early(1)",
                 "pos");
    assert_value("fn fact(n) { if (n <= 1) { return 1 } return n * fact(n - 1) } fact(10)",
                 3_628_800);
}

#[test]
fn closures_capture_by_reference() {
    assert_value("let x = 1; fn get() { return x; } set x = 2; get()", 2);
    assert_value(r"
        fn counter() {
            let count = 0;
            return fn () { set count = count + 1; return count; };
        }
        let next = counter();
        next(); next();
        next()
    ",
                 3);
    assert_value(r"
        fn make(n) { return fn () { n } }
        let a = make(1);
        let b = make(2);
        a() + b() * 10
    ",
                 21);
}

#[test]
fn top_level_return_ends_the_program() {
    assert_value("let x = 1; return x + 1; set x = 100; x", 2);
}

#[test]
fn truthiness_and_logic() {
    assert_value("!0", false);
    assert_value(r#"!"x""#, false);
    assert_value("!null", true);
    assert_value("not false", true);
    assert_value("null || 5", 5);
    assert_value("0 || 5", 0);
    assert_value("false && 5", false);
    assert_value("1 && 5", 5);
    assert_value("1 and 2 or 3", 2);
    assert_value("false nor false", true);
    assert_value("false nor 1", false);
    assert_value("1 nor 1", false);
}

#[test]
fn short_circuit_skips_side_effects() {
    let src = r"
        let calls = 0;
        fn bump() { set calls = calls + 1; return true; }
        false && bump();
        true || bump();
        true nor bump();
        calls
    ";
    assert_value(src, 0);
    assert_value("let calls = 0; fn bump() { set calls = calls + 1 } null nor bump(); calls", 1);
}

#[test]
fn equality_is_deep_and_never_coerces() {
    assert_success("[1, [2, 3]] == [1, [2, 3]]");
    assert_success(r#"{a: 1, b: [true]} == {b: [true], a: 1}"#);
    assert_value(r#"1 == "1""#, false);
    assert_value("null == false", false);
    assert_success("1 is 1");
    assert_success("[1] != [2]");
    assert_success("fn f() {} f == f");
    assert_value("fn () {} == fn () {}", false);
}

#[test]
fn self_containing_values_fail_gracefully() {
    let cycles = "let a = [0]; set a[0] = a; let b = [0]; set b[0] = b;";
    assert_success(&format!("{cycles} a == b"));
    assert_success(&format!("{cycles} b in [a]"));
    assert_success(&format!("{cycles} a == [a]"));
    assert_value(&format!("{cycles} \"a is \" + a"), "a is [[...]]");
    assert_eq!(runtime_error(&format!("{cycles} json.stringify(a)")),
               RuntimeErrorKind::TypeError("cannot convert a cyclic value to JSON".into()));
}

#[test]
fn unicode_identifiers() {
    assert_value("let é = 1; let 名前 = 2; let x2 = é + 名前; x2", 3);
}

#[test]
fn comparisons_need_numbers() {
    assert_success("2 < 3 && 3 > 2 && 2 <= 2 && 3 >= 3");
    assert_eq!(runtime_error(r#""a" < "b""#), RuntimeErrorKind::ExpectedNumber("string"));
}

#[test]
fn membership() {
    assert_success(r#""ell" in "hello""#);
    assert_success("2 in [1, 2, 3]");
    assert_success(r#""k" in {k: null}"#);
    assert_value("1 in 12", false);
    assert_value(r#""x" in null"#, false);
}

#[test]
fn if_chains() {
    let classify = r#"
        fn classify(n) {
            if (n < 0) then {
                return "negative"
            } however (n == 0) {
                return "zero"
            } however (n < 10) {
                return "small"
            } otherwise {
                return "large"
            }
        }
    "#;
    assert_value(&format!("{classify} classify(-1)"), "negative");
    assert_value(&format!("{classify} classify(0)"), "zero");
    assert_value(&format!("{classify} classify(5)"), "small");
    assert_value(&format!("{classify} classify(50)"), "large");
    assert_value("unless (false) { 1 } else { 2 }", 1);
    assert_value("if (null) { 1 } yet { 2 }", 2);
    assert_value("if (false) { 1 }", Value::Null);
}

#[test]
fn arrays_objects_and_aliasing() {
    assert_value("let a = [1, 2, 3]; a[0] + a[-1]", 4);
    assert_value("let a = [1, 2, 3]; a[1.0]", 2);
    assert_value("let a = [1, 2, 3]; a.length", 3);
    assert_value(r#""héllo".length"#, 5);
    assert_value(r#""abc"[1]"#, "b");
    assert_value("let a = [1, 2]; let b = a; set b[0] = 9; a[0]", 9);
    assert_value("let o = {}; fn fill(x) { set x.key = 1 } fill(o); o.key", 1);
    assert_value("let o = {x: 1}; o.missing", Value::Null);
    assert_value(r#"let o = {"two words": 2, if: 1}; o.if"#, 1);
    assert_value("let grid = [[1, 2], [3, 4]]; set grid[1][0] = 7; grid[1][0]", 7);
    assert_value("let o = {inner: {v: 1}}; set o.inner.v = 5; o.inner.v", 5);
}

#[test]
fn assignment_evaluates_the_value_before_the_target() {
    let src = r"
        let order = [];
        fn target() { set order = order + [1]; return {}; }
        fn value() { set order = order + [2]; return 0; }
        set target().field = value();
        order
    ";
    assert_value(src, vec![Value::from(2), Value::from(1)]);
}

#[test]
fn index_and_member_errors() {
    assert!(matches!(runtime_error("[1, 2][1.5]"), RuntimeErrorKind::InvalidIndex(_)));
    assert!(matches!(runtime_error(r#"[1, 2]["0"]"#), RuntimeErrorKind::InvalidIndex(_)));
    assert_eq!(runtime_error("[1, 2][2]"),
               RuntimeErrorKind::IndexOutOfBounds { index: 2, len: 2 });
    assert_eq!(runtime_error("null[0]"), RuntimeErrorKind::NotIndexable("null"));
    assert_eq!(runtime_error("let n = 5; n.size"),
               RuntimeErrorKind::PropertyNotFound("size".into()));
    assert_eq!(runtime_error("let a = [1]; set a.x = 1"),
               RuntimeErrorKind::InvalidPropertyTarget("array"));
    assert!(matches!(runtime_error(r#"let s = "ab"; set s[0] = "x""#),
                     RuntimeErrorKind::TypeError(_)));
}

#[test]
fn calling_non_functions_fails() {
    assert_eq!(runtime_error("let x = 1; x()"), RuntimeErrorKind::NotCallable("number"));
    assert_eq!(runtime_error("missing()"),
               RuntimeErrorKind::UndefinedIdentifier("missing".into()));
}

#[test]
fn runaway_recursion_is_stopped() {
    assert_eq!(runtime_error("fn f(n) { return f(n + 1) } f(0)"),
               RuntimeErrorKind::CallDepthExceeded(1000));
}

#[test]
fn runtime_errors_carry_position_and_trace() {
    let src = "fn inner() {\n  return 1 + null\n}\nfn outer() { inner() }\nouter()";
    let Err(Error::Runtime(err)) = run_source(src) else {
        panic!("expected a runtime error");
    };

    assert_eq!(err.to_string(),
               "Runtime error at 2:12: Type error: cannot add number and null");
    assert_eq!(err.trace(), ["inner", "outer"]);

    let Err(Error::Runtime(err)) = run_source("let f = fn () { null() }; f()") else {
        panic!("expected a runtime error");
    };
    assert_eq!(err.trace(), ["<anonymous>"]);

    let Err(Error::Runtime(err)) = run_source("undefined_name") else {
        panic!("expected a runtime error");
    };
    assert!(err.trace().is_empty());
}

#[test]
fn parse_errors_are_reported() {
    for src in ["let = 1", "set 1 = 2", "1 +", "{1: 2}", "if true { 1 }", "let x = [1, 2"] {
        assert!(matches!(run_source(src), Err(Error::Parse(_))), "{src}");
    }
    assert_failure("let x = @");
}

#[test]
fn comments_and_aliases() {
    let src = r"
        # hash comment
        // slash comment
        ~ tilde comment
        let x = 2 // trailing
        x is 2
    ";
    assert_success(src);
}

#[test]
fn standard_globals_exist() {
    assert_success("sandbox.fs == false");
    assert_success("ARGV == []");
    assert_value(r#"json.stringify(json.parse("[1, 2.5, null]"))"#, "[1,2.5,null]");
}
