use arith::run_with_output;

fn run(src: &str) -> Result<String, String> {
    let mut out = Vec::new();
    match run_with_output(src, &mut out) {
        Ok(()) => Ok(String::from_utf8(out).expect("output is not UTF-8")),
        Err(e) => Err(e.to_string()),
    }
}

fn assert_output(src: &str, expected: &[i32]) {
    let output = run(src).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"));
    let printed: Vec<i32> =
        output.lines()
              .map(|line| line.parse().unwrap_or_else(|_| panic!("Not an integer: {line:?}")))
              .collect();
    assert_eq!(printed, expected, "unexpected output for:\n{src}");
}

fn assert_failure(src: &str, message: &str) {
    match run(src) {
        Ok(out) => panic!("Script succeeded but was expected to fail, printed:\n{out}"),
        Err(e) => assert!(e.contains(message), "expected error containing {message:?}, got {e:?}"),
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_output("x = 1 + 2; print x;", &[3]);
    assert_output("x = 7 * 9; print x;", &[63]);
    assert_output("x = 8 - 5; print x;", &[3]);
    assert_output("x = 10 / 3; print x;", &[3]);
    assert_output("print -7 / 2;", &[-3]);
    assert_output("print 2 + 3 * 4;", &[14]);
    assert_output("print (2 + 3) * 4;", &[20]);
}

#[test]
fn compound_assignments() {
    assert_output("x = 2; x += 3; print x;", &[5]);
    assert_output("x = 7; x -= 2; print x;", &[5]);
    assert_output("x = 4; x *= 2; print x;", &[8]);
    assert_output("x = 9; x /= 3; print x;", &[3]);
    assert_output("x = 12; x &= 10; print x;", &[8]);
    assert_output("x = 12; x |= 3; print x;", &[15]);
    assert_output("x = 12; x ^= 5; print x;", &[9]);
}

#[test]
fn assignment_is_an_expression() {
    assert_output("a = b = 4; print a; print b;", &[4, 4]);
    assert_output("print (c = 9) + 1; print c;", &[10, 9]);
    assert_output("x = 1; x += x += 2; print x;", &[6]);
}

#[test]
fn right_operand_is_evaluated_first() {
    assert_output("x = 5; print x - ++x;", &[0]);
    assert_output("x = 5; print ++x + ++x;", &[13]);
    assert_output("x = 1; print (x = 10) + x;", &[11]);
}

#[test]
fn prefix_increment_and_decrement() {
    assert_output("x = 1; print ++x; print x;", &[2, 2]);
    assert_output("x = 1; print --x; print x;", &[0, 0]);
    assert_output("x = 3; y = -x; print y; print x;", &[-3, 3]);
}

#[test]
fn bitwise_operators() {
    assert_output("print 6 & 3;", &[2]);
    assert_output("print 6 | 3;", &[7]);
    assert_output("print 6 ^ 3;", &[5]);
    assert_output("print ~0;", &[-1]);
    assert_output("print !5;", &[-6]);
    assert_output("print ~~42;", &[42]);
}

#[test]
fn logical_and_comparisons() {
    assert_output("print 2 < 3;", &[1]);
    assert_output("print 3 > 2;", &[1]);
    assert_output("print 2 <= 2;", &[1]);
    assert_output("print 3 >= 4;", &[0]);
    assert_output("print 2 != 3;", &[1]);
    assert_output("print 2 == 2;", &[1]);
    assert_output("print 2 && -1;", &[1]);
    assert_output("print 0 || 0;", &[0]);
}

#[test]
fn logical_operators_do_not_short_circuit() {
    assert_output("x = 0; y = 0 && (x = 1); print y; print x;", &[0, 1]);
    assert_output("x = 0; y = 1 || ++x; print y; print x;", &[1, 1]);
}

#[test]
fn arithmetic_wraps_around() {
    assert_output("print 2147483647 + 1;", &[i32::MIN]);
    assert_output("m = -2147483647 - 1; print m / -1;", &[i32::MIN]);
    assert_output("m = -2147483647 - 1; print -m;", &[i32::MIN]);
}

#[test]
fn if_else_and_blocks() {
    assert_output("if (1) print 1; else print 2;", &[1]);
    assert_output("if (0) print 1; else print 2;", &[2]);
    assert_output("if (0) print 1; print 3;", &[3]);
    assert_output("if (1) if (0) print 1; else print 2;", &[2]);
    assert_output("{ x = 1; { x += 1; } print x; }", &[2]);
}

#[test]
fn block_scopes_shadow_nothing() {
    assert_output("x = 1; { x = 2; } print x;", &[2]);
    assert_output("{ y = 1; } y = 5; print y;", &[5]);
    assert_failure("{ y = 1; } print y;", "Undefined variable 'y'");
    assert_failure("if (1) { z = 3; } print z;", "Undefined variable 'z'");
}

#[test]
fn while_loops() {
    assert_output("i = 0; while (i < 3) { print i; i += 1; }", &[0, 1, 2]);
    assert_output("i = 5; while (i < 3) print i; print i;", &[5]);
}

#[test]
fn do_while_runs_at_least_once() {
    assert_output("i = 5; do { print i; i += 1; } while (i < 3);", &[5]);
    assert_output("i = 0; do i += 1; while (i < 4); print i;", &[4]);
}

#[test]
fn for_loops_and_sum() {
    assert_output("sum = 0; for (i = 1; i <= 5; i += 1) sum += i; print sum;", &[15]);
    assert_output("for (i = 0; i < 3; ++i) print i;", &[0, 1, 2]);
    assert_output("i = 7; for (; i < 9; i += 1) print i;", &[7, 8]);
}

#[test]
fn for_loop_variable_is_local_to_the_loop() {
    let src = "last = -1;
               for (i = 0; (i < 3) + 0 * (last = i); i += 1) print i;
               print last;";
    assert_output(src, &[0, 1, 2, 3]);

    assert_failure("for (i = 0; i < 3; i += 1) ; print i;", "Undefined variable 'i'");
}

#[test]
fn comma_separated_expressions() {
    assert_output("a = 1, b = 2, c = a + b; print c;", &[3]);
}

#[test]
fn comments_are_ignored() {
    assert_output("// a comment\nprint 1; /* another\n one */ print 2;", &[1, 2]);
}

#[test]
fn empty_program_prints_nothing() {
    assert_output("", &[]);
    assert_output(";;;", &[]);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("x = 1 / 0;", "Division by zero");
    assert_failure("x = 3; x /= 0;", "Division by zero");
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("print foo;", "Undefined variable 'foo'");
    assert_failure("foo += 1;", "Undefined variable 'foo'");
}

#[test]
fn assigning_to_a_non_variable_is_error() {
    assert_failure("3 = 4;", "Error on line 1");
    assert_failure("x = 1; (x + 1) += 2;", "Error on line 1");
    assert_failure("++5;", "Error on line 1");
}

#[test]
fn errors_report_their_line() {
    assert_failure("x = 1;\ny = 2;\nprint z;", "Error on line 3");
    assert_failure("print 1;\nprint (2;", "Error on line 2");
}

#[test]
fn truncated_programs_report_their_last_line() {
    assert_failure("x = 1;\nprint x +", "Error on line 2: Unexpected end of input");
    assert_failure("x = 1;\nif (x)", "Error on line 2: Unexpected end of input");
    assert_failure("x = 1;\n\nwhile (x) {\n  x -= 1;", "Error on line 4");
}

#[test]
fn runtime_error_keeps_earlier_output() {
    let mut out = Vec::new();
    let result = run_with_output("print 1; print 1 / 0; print 2;", &mut out);

    assert!(result.is_err());
    assert_eq!(out, b"1\n");
}

#[test]
fn syntax_errors_run_nothing() {
    let mut out = Vec::new();
    let result = run_with_output("print 1; print 2", &mut out);

    assert!(result.is_err());
    assert!(out.is_empty());
}

#[test]
fn invalid_characters_are_rejected() {
    assert_failure("print 1 $ 2;", "Unexpected token");
    assert_failure("print 99999999999;", "too large");
}
