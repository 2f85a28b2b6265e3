use std::fs;

use arith::run_with_output;
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Runs every `tests/programs/*.arith` script and compares what it prints with
/// the `.out` file next to it.
#[test]
fn sample_programs_print_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "arith"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read {expected_path:?}: {e}"));

        let mut out = Vec::new();
        if let Err(e) = run_with_output(&source, &mut out) {
            panic!("Program {path:?} failed:\n{source}\nError: {e}");
        }

        count += 1;
        assert_eq!(String::from_utf8_lossy(&out).into_owned(), expected, "output of {path:?}");
    }

    assert!(count > 0, "No programs found in tests/programs");
}
