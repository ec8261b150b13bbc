use std::fs;

use aegis::{interpreter::value::core::Value, run_source};
use walkdir::WalkDir;

#[test]
fn script_suite_passes() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").sort_by_file_name()
                                     .into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "aeg"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        match run_source(&source) {
            Ok(Value::Bool(true)) => {},
            Ok(other) => panic!("Script {path:?} finished with {other} instead of true"),
            Err(e) => panic!("Script {path:?} failed:\n{e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
