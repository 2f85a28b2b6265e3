use arith::{
    ast::{BinaryOperator, Expr, Statement, UnaryOperator},
    error::ParseError,
    parse_source, run_with_output,
};
use pretty_assertions::assert_eq;

fn parse_one(src: &str) -> Statement {
    let mut program = parse_source(src).unwrap_or_else(|e| panic!("{src:?} failed to parse: {e}"));
    assert_eq!(program.len(), 1, "expected a single statement in {src:?}");
    program.remove(0)
}

fn printed(src: &str) -> String {
    parse_one(src).to_string()
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(printed("1 + 2 * 3;"), "(1 + (2 * 3));");
    assert_eq!(printed("1 - 2 - 3;"), "((1 - 2) - 3);");
    assert_eq!(printed("8 / 4 / 2;"), "((8 / 4) / 2);");
    assert_eq!(printed("(1 + 2) * 3;"), "((1 + 2) * 3);");
}

#[test]
fn bitwise_and_logical_precedence() {
    assert_eq!(printed("a | b ^ c & d;"), "(a | (b ^ (c & d)));");
    assert_eq!(printed("a || b && c;"), "(a || (b && c));");
    assert_eq!(printed("a & b == c;"), "(a & (b == c));");
    assert_eq!(printed("a == b < c;"), "(a == (b < c));");
    assert_eq!(printed("a < b + c;"), "(a < (b + c));");
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(printed("a = b = c;"), "(a = (b = c));");
    assert_eq!(printed("a += b -= 1;"), "(a += (b -= 1));");
    assert_eq!(printed("x = y || z;"), "(x = (y || z));");
}

#[test]
fn unary_operators() {
    assert_eq!(printed("-x * y;"), "(-x * y);");
    assert_eq!(printed("!x;"), "~x;");
    assert_eq!(printed("~x;"), "~x;");
    assert_eq!(printed("- -x;"), "-(-x);");
    assert_eq!(printed("++x + --y;"), "(++x + --y);");
}

#[test]
fn unary_tree_shape() {
    let statement = parse_one("--n;");
    let expected = Statement::Expression { exprs: vec![Expr::UnaryOp { op:   UnaryOperator::PreDecrement,
                                                                      expr: Box::new(Expr::Variable { name: "n".to_string(),
                                                                                                      line: 1, }),
                                                                      line: 1, }],
                                           line:  1, };
    assert_eq!(statement, expected);
}

#[test]
fn compound_assignment_tree_shape() {
    let Statement::Expression { exprs, .. } = parse_one("x ^= 3;") else {
        panic!("expected an expression statement");
    };

    let [Expr::BinaryOp { left, op, right, .. }] = exprs.as_slice() else {
        panic!("expected a single binary expression");
    };
    assert_eq!(*op, BinaryOperator::XorAssign);
    assert_eq!(left.to_string(), "x");
    assert_eq!(right.to_string(), "3");
}

#[test]
fn statements_print_back_as_source() {
    assert_eq!(printed("print x;"), "print x;");
    assert_eq!(printed(";"), ";");
    assert_eq!(printed("a = 1, b = 2;"), "(a = 1), (b = 2);");
    assert_eq!(printed("if (x) print 1; else print 2;"),
               "if (x) print 1; else print 2;");
    assert_eq!(printed("while (i < 3) i += 1;"), "while ((i < 3)) (i += 1);");
    assert_eq!(printed("do i += 1; while (i < 3);"), "do (i += 1); while ((i < 3));");
    assert_eq!(printed("for (i = 0; i < 3; i += 1) print i;"),
               "for ((i = 0); (i < 3); (i += 1)) print i;");
    assert_eq!(printed("{ x = 1; { print x; } }"),
               "{\n    (x = 1);\n    {\n        print x;\n    }\n}");
}

#[test]
fn printed_programs_parse_to_the_same_text() {
    let sources = ["x = 5; print x - ++x;",
                   "if (a) if (b) print 1; else print 2;",
                   "for (; i < 10; i *= 2) { print i; }",
                   "do { n -= 1; } while (n > 0);",
                   "print - -x;",
                   "print ~~x & -(y | 3);",
                   "{ { } ; }"];

    for src in sources {
        let first: Vec<String> = parse_source(src).unwrap().iter().map(ToString::to_string).collect();
        let joined = first.join("\n");
        let second: Vec<String> =
            parse_source(&joined).unwrap_or_else(|e| panic!("{joined:?} failed to reparse: {e}"))
                                 .iter()
                                 .map(ToString::to_string)
                                 .collect();
        assert_eq!(first, second);
    }
}

#[test]
fn dangling_else_binds_to_nearest_if() {
    let Statement::If { else_branch, then_branch, .. } = parse_one("if (a) if (b) x = 1; else x = 2;")
    else {
        panic!("expected an if statement");
    };

    assert!(else_branch.is_none());
    assert!(matches!(*then_branch, Statement::If { else_branch: Some(_), .. }));
}

#[test]
fn statement_lines() {
    let program = parse_source("x = 1;\n\n/* two\nlines */\nprint x;").unwrap();

    assert_eq!(program[0].line_number(), 1);
    assert_eq!(program[1].line_number(), 5);
}

fn run_printed(statement: &Statement) -> String {
    let mut out = Vec::new();
    run_with_output(&statement.to_string(), &mut out).unwrap_or_else(|e| {
                                                         panic!("{statement} failed: {e}")
                                                     });
    String::from_utf8(out).unwrap()
}

fn print_stmt(value: i32) -> Box<Statement> {
    Box::new(Statement::Print { expr: Expr::Number { value, line: 1 },
                                line: 1, })
}

#[test]
fn else_after_an_open_inner_if_keeps_its_owner() {
    // if (0) { if (0) print 1; } else print 2;
    let inner = Statement::If { condition:   Expr::Number { value: 0, line: 1 },
                                then_branch: print_stmt(1),
                                else_branch: None,
                                line:        1, };
    let outer = Statement::If { condition:   Expr::Number { value: 0, line: 1 },
                                then_branch: Box::new(inner.clone()),
                                else_branch: Some(print_stmt(2)),
                                line:        1, };

    assert_eq!(outer.to_string(), "if (0) {\n    if (0) print 1;\n} else print 2;");
    assert_eq!(run_printed(&outer), "2\n");
    assert_eq!(parse_one(&outer.to_string()).to_string(), outer.to_string());

    // The open `if` can also hide inside a loop body.
    let looped = Statement::If { condition:   Expr::Number { value: 0, line: 1 },
                                 then_branch: Box::new(Statement::While { condition: Expr::Number { value: 0,
                                                                                                   line:  1, },
                                                                          body:      Box::new(inner),
                                                                          line:      1, }),
                                 else_branch: Some(print_stmt(3)),
                                 line:        1, };
    assert_eq!(run_printed(&looped), "3\n");
}

#[test]
fn negated_negative_literal_is_parenthesised() {
    let expr = Expr::UnaryOp { op:   UnaryOperator::Negate,
                               expr: Box::new(Expr::Number { value: -5, line: 1 }),
                               line: 1, };
    let statement = Statement::Print { expr, line: 1 };

    assert_eq!(statement.to_string(), "print -(-5);");
    assert_eq!(run_printed(&statement), "5\n");
}

#[test]
fn end_of_input_reports_the_last_line() {
    assert_eq!(parse_source("x = 1;\nprint x +"),
               Err(ParseError::UnexpectedEndOfInput { line: 2 }));
    assert_eq!(parse_source("x = 1;\n{\nprint x;"),
               Err(ParseError::UnexpectedEndOfInput { line: 3 }));
}

#[test]
fn missing_semicolon() {
    assert_eq!(parse_source("print 1"),
               Err(ParseError::UnexpectedEndOfInput { line: 1 }));
}

#[test]
fn missing_closing_paren() {
    assert_eq!(parse_source("print (1 + 2;"),
               Err(ParseError::ExpectedClosingParen { line: 1 }));
}

#[test]
fn unterminated_block() {
    assert!(matches!(parse_source("{ print 1;"),
                     Err(ParseError::UnexpectedEndOfInput { .. })));
}

#[test]
fn unexpected_tokens() {
    assert!(matches!(parse_source("print ;"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse_source("else print 1;"),
                     Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse_source("x = 1 @ 2;"),
                     Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn literal_out_of_range() {
    assert_eq!(parse_source("print 2147483648;"),
               Err(ParseError::LiteralTooLarge { line: 1 }));
    assert!(parse_source("print 2147483647;").is_ok());
}
