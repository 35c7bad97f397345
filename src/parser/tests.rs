//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Let and return statements
//! - Literal, prefix and infix expressions
//! - Operator precedence and grouping
//! - `if`, `fn` and calls
//! - Diagnostics and recovery

use crate::{
    ast::{
        ast::{ExprType, Expression, Program, Statement, StmtType},
        expressions::{
            CallExpression, FunctionLiteral, Identifier, IfExpression, InfixExpression,
            IntegerLiteral,
        },
        statements::{ExpressionStatement, LetStatement, ReturnStatement},
    },
    errors::errors::{ErrorImpl, ErrorTip},
    lexer::{lexer::Lexer, tokens::TokenKind},
};

use super::{
    expr::parse_infix_expr,
    lookups::{Associativity, Precedence},
    parser::{parse, Parser},
};

fn parse_ok(source: &str) -> Program {
    let (parser, program) = parse(source.to_string());
    assert!(
        parser.errors().is_empty(),
        "unexpected errors for {:?}: {:?}",
        source,
        parser.errors()
    );
    program
}

fn single_expr(program: &Program) -> &Expression {
    assert_eq!(program.len(), 1, "program: {}", program);
    match &program.statements[0] {
        Statement::Expression(ExpressionStatement { expr }) => expr,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

fn ident(name: &str) -> Expression {
    Expression::Identifier(Identifier::new(name))
}

fn int(value: i64) -> Expression {
    Expression::Integer(IntegerLiteral { value })
}

#[test]
fn test_parse_let_statements() {
    let program = parse_ok("let x = 5; let y = true; let foobar = y;");
    let expected = [("x", "5"), ("y", "true"), ("foobar", "y")];

    assert_eq!(program.len(), 3);
    for (stmt, (name, value)) in program.iter().zip(expected) {
        match stmt {
            Statement::Let(LetStatement { name: ident, value: expr }) => {
                assert_eq!(ident.name, name);
                assert_eq!(expr.to_string(), value);
            }
            other => panic!("expected let statement, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_let_without_semicolon() {
    let program = parse_ok("let x = 1 + 2");

    assert_eq!(program.to_string(), "let x = (1 + 2);");
}

#[test]
fn test_parse_return_statements() {
    let program = parse_ok("return 5; return x + 1; return;");

    assert_eq!(program.len(), 3);
    assert_eq!(
        program.statements[0],
        Statement::Return(ReturnStatement { value: Some(int(5)) })
    );
    assert_eq!(program.statements[1].to_string(), "return (x + 1);");
    assert_eq!(
        program.statements[2],
        Statement::Return(ReturnStatement { value: None })
    );
}

#[test]
fn test_parse_literal_leaves() {
    assert_eq!(*single_expr(&parse_ok("5;")), int(5));
    assert_eq!(*single_expr(&parse_ok("foobar;")), ident("foobar"));

    let program = parse_ok("true;");
    assert_eq!(single_expr(&program).get_expr_type(), ExprType::Boolean);
    assert_eq!(single_expr(&program).to_string(), "true");

    let program = parse_ok("false");
    assert_eq!(single_expr(&program).to_string(), "false");
}

#[test]
fn test_parse_prefix_expressions() {
    let tests = [("!5;", "!", "5"), ("-15;", "-", "15"), ("!true;", "!", "true")];

    for (source, operator, operand) in tests {
        let program = parse_ok(source);
        match single_expr(&program) {
            Expression::Prefix(prefix) => {
                assert_eq!(prefix.operator, operator);
                assert_eq!(prefix.operand.to_string(), operand);
            }
            other => panic!("expected prefix expression, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_infix_expressions() {
    let operators = ["+", "-", "*", "/", ">", "<", "==", "!="];

    for operator in operators {
        let source = format!("5 {} 6;", operator);
        let program = parse_ok(&source);
        assert_eq!(
            *single_expr(&program),
            Expression::Infix(InfixExpression {
                operator: operator.to_string(),
                left: Box::new(int(5)),
                right: Box::new(int(6)),
            })
        );
    }
}

#[test]
fn test_operator_precedence_parsing() {
    let tests = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b * c", "(a + (b * c))"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4) ((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(a + b) * c", "((a + b) * c)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        ("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))"),
        ("-f(x)", "(-f(x))"),
    ];

    for (source, expected) in tests {
        let program = parse_ok(source);
        assert_eq!(program.to_string(), expected, "source: {}", source);
    }
}

#[test]
fn test_parse_if_else_expression() {
    let program = parse_ok("if (x < y) { x } else { y }");

    match single_expr(&program) {
        Expression::If(IfExpression {
            condition,
            consequence,
            alternative,
        }) => {
            assert_eq!(condition.to_string(), "(x < y)");
            assert_eq!(consequence.statements, vec![ident("x").into_stmt()]);
            let alternative = alternative.as_ref().expect("alternative block");
            assert_eq!(alternative.len(), 1);
            assert_eq!(alternative.statements[0], ident("y").into_stmt());
        }
        other => panic!("expected if expression, got {:?}", other),
    }
    assert_eq!(program.to_string(), "if (x < y) { x } else { y }");
}

#[test]
fn test_parse_if_without_else() {
    let program = parse_ok("if (x) { 1; 2 }");

    match single_expr(&program) {
        Expression::If(IfExpression {
            consequence,
            alternative,
            ..
        }) => {
            assert_eq!(consequence.len(), 2);
            assert!(alternative.is_none());
        }
        other => panic!("expected if expression, got {:?}", other),
    }
}

#[test]
fn test_parse_function_literal() {
    let program = parse_ok("fn(x, y) { x + y; }");

    match single_expr(&program) {
        Expression::Function(FunctionLiteral { parameters, body }) => {
            assert_eq!(
                parameters,
                &vec![Identifier::new("x"), Identifier::new("y")]
            );
            assert_eq!(body.len(), 1);
            assert_eq!(body.statements[0].to_string(), "(x + y)");
        }
        other => panic!("expected function literal, got {:?}", other),
    }
}

#[test]
fn test_parse_function_parameters() {
    let tests: [(&str, &[&str]); 3] = [
        ("fn() {};", &[]),
        ("fn(x) {};", &["x"]),
        ("fn(x, y, z) {};", &["x", "y", "z"]),
    ];

    for (source, expected) in tests {
        let program = parse_ok(source);
        match single_expr(&program) {
            Expression::Function(function) => {
                let names: Vec<&str> =
                    function.parameters.iter().map(|p| p.name.as_str()).collect();
                assert_eq!(names, expected);
                assert!(function.body.is_empty());
            }
            other => panic!("expected function literal, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_call_expression() {
    let program = parse_ok("add(1, 2 * 3)");

    assert_eq!(
        *single_expr(&program),
        Expression::Call(CallExpression {
            callee: Box::new(ident("add")),
            arguments: vec![
                int(1),
                Expression::Infix(InfixExpression {
                    operator: "*".to_string(),
                    left: Box::new(int(2)),
                    right: Box::new(int(3)),
                }),
            ],
        })
    );
}

#[test]
fn test_parse_call_without_arguments_and_immediate_call() {
    assert_eq!(parse_ok("f()").to_string(), "f()");
    assert_eq!(
        parse_ok("fn(x) { x }(5)").to_string(),
        "fn(x) { x }(5)"
    );
}

#[test]
fn test_parse_block_statement() {
    let program = parse_ok("{ let x = 1; x }");

    assert_eq!(program.len(), 1);
    assert_eq!(program.statements[0].get_stmt_type(), StmtType::BlockStmt);
    assert_eq!(program.to_string(), "{ let x = 1; x }");
}

#[test]
fn test_bare_return_closing_block() {
    let program = parse_ok("fn() { return }");

    assert_eq!(program.to_string(), "fn() { return; }");
}

#[test]
fn test_parse_empty_program() {
    let (parser, program) = parse(String::new());

    assert!(program.is_empty());
    assert!(!parser.has_errors());
}

#[test]
fn test_missing_assign_is_reported() {
    let (parser, program) = parse("let x 5;".to_string());

    assert_eq!(
        parser.errors(),
        vec!["expected next token to be =, got INT instead".to_string()]
    );
    assert!(program.is_empty());
}

#[test]
fn test_missing_identifier_is_reported() {
    let (parser, _) = parse("let = 10;".to_string());

    assert_eq!(
        parser.errors(),
        vec!["expected next token to be IDENT, got = instead".to_string()]
    );
}

#[test]
fn test_recovers_at_next_statement() {
    let (parser, program) = parse("let x 5; let y = 10; y".to_string());

    assert_eq!(parser.errors().len(), 1);
    assert_eq!(program.to_string(), "let y = 10; y");
}

#[test]
fn test_no_prefix_parse_function() {
    let (parser, _) = parse("1 + @".to_string());

    assert_eq!(
        parser.errors(),
        vec!["no prefix parse function for ILLEGAL found".to_string()]
    );
    match parser.diagnostics()[0].get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains('@')),
        ErrorTip::None => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_integer_overflow_is_reported() {
    let (parser, program) = parse("let big = 9223372036854775808;".to_string());

    assert_eq!(
        parser.errors(),
        vec!["could not parse \"9223372036854775808\" as integer".to_string()]
    );
    assert!(program.is_empty());
}

#[test]
fn test_unclosed_group_is_reported() {
    let (parser, _) = parse("(1 + 2".to_string());

    assert_eq!(
        parser.errors(),
        vec!["expected next token to be ), got EOF instead".to_string()]
    );
}

#[test]
fn test_unclosed_block_is_reported() {
    let (parser, program) = parse("fn(x) { x".to_string());

    assert_eq!(
        parser.errors(),
        vec!["expected next token to be }, got EOF instead".to_string()]
    );
    assert_eq!(program.to_string(), "fn(x) { x }");
}

#[test]
fn test_failure_inside_block_stays_inside_block() {
    let (parser, program) = parse("fn() { 1 + }; y".to_string());

    assert_eq!(
        parser.errors(),
        vec!["no prefix parse function for } found".to_string()]
    );
    assert_eq!(program.to_string(), "fn() { } y");
}

#[test]
fn test_failure_after_nested_block_stays_in_outer_block() {
    let (parser, program) = parse("let g = fn() { f(fn() { 1 } ; let y = 2; };".to_string());

    assert_eq!(
        parser.errors(),
        vec!["expected next token to be ), got ; instead".to_string()]
    );
    assert_eq!(program.to_string(), "let g = fn() { let y = 2; };");
}

#[test]
fn test_recovery_skips_blocks_opened_by_failed_statement() {
    let (parser, program) = parse("let = fn() { a; b }; c".to_string());

    assert_eq!(
        parser.errors(),
        vec!["expected next token to be IDENT, got = instead".to_string()]
    );
    assert_eq!(program.to_string(), "c");
}

#[test]
fn test_stray_closing_brace_at_top_level() {
    let (parser, program) = parse("} let x = 1;".to_string());

    assert_eq!(
        parser.errors(),
        vec!["no prefix parse function for } found".to_string()]
    );
    assert_eq!(program.to_string(), "let x = 1;");
}

#[test]
fn test_deep_prefix_chain_is_reported() {
    let (parser, program) = parse(format!("{}5", "-".repeat(100_000)));

    assert_eq!(
        parser.errors(),
        vec!["expressions and blocks nested deeper than 256 levels".to_string()]
    );
    assert!(program.is_empty());
}

#[test]
fn test_deep_grouping_is_reported() {
    let source = format!("{}1{}; x", "(".repeat(100_000), ")".repeat(100_000));
    let (parser, program) = parse(source);

    assert_eq!(parser.diagnostics().len(), 1);
    assert!(matches!(
        parser.diagnostics()[0].get_impl(),
        ErrorImpl::NestingTooDeep { limit: 256 }
    ));
    assert_eq!(program.to_string(), "x");
}

#[test]
fn test_deep_blocks_are_reported() {
    let source = format!("{}{}", "{".repeat(100_000), "}".repeat(100_000));
    let (parser, program) = parse(source);

    assert_eq!(parser.diagnostics().len(), 1);
    assert!(matches!(
        parser.diagnostics()[0].get_impl(),
        ErrorImpl::NestingTooDeep { .. }
    ));
    assert_eq!(program.len(), 1);
}

#[test]
fn test_moderate_nesting_is_accepted() {
    let source = format!("{}1{}", "(".repeat(100), ")".repeat(100));
    let program = parse_ok(&source);

    assert_eq!(program.to_string(), "1");
}

#[test]
fn test_else_without_block_is_reported() {
    let (parser, program) = parse("if (x) { 1 } else 5".to_string());

    assert_eq!(
        parser.errors(),
        vec!["expected next token to be {, got INT instead".to_string()]
    );
    assert!(program.is_empty());
}

#[test]
fn test_bad_parameter_is_reported() {
    let (parser, _) = parse("fn(1) {}".to_string());

    assert!(matches!(
        parser.diagnostics()[0].get_impl(),
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Identifier,
            got: TokenKind::Integer,
        }
    ));
}

#[test]
fn test_garbage_terminates() {
    let (parser, _) = parse(")))((( }}} {{{ let let = = fn fn if else , ;".to_string());

    assert!(parser.has_errors());
}

#[test]
fn test_right_associative_registration() {
    let mut parser = Parser::new(Lexer::new("a - b - c; a + b - c".to_string()));
    parser.register_infix(
        TokenKind::Minus,
        Precedence::Sum,
        Associativity::Right,
        parse_infix_expr,
    );
    let program = parser.parse_program();

    assert!(!parser.has_errors());
    assert_eq!(program.to_string(), "(a - (b - c)) ((a + b) - c)");
}

#[test]
fn test_precedence_lower() {
    assert_eq!(Precedence::Product.lower(), Precedence::Sum);
    assert_eq!(Precedence::Lowest.lower(), Precedence::Lowest);
    assert!(Precedence::Call > Precedence::Prefix);
}
