//! Integration tests for the front end pipeline.
//!
//! These tests run source text through tokenization and parsing via
//! `analyze`, and feed the result into the type environment.

use morl::{
    analyze,
    ast::{
        ast::StmtType,
        expressions::Expr,
        statements::Stmt,
    },
    format_error,
    lexer::tokens::TokenKind,
    type_checker::{
        environment::{TypeEnv, TypeKind},
        type_checker::declare_top_level,
    },
    Config,
};
use pretty_assertions::assert_eq;

const PROGRAM: &str = "\
Point :: struct {
    x: i32;
    y: i32;
}

origin: Point = .{ x = 0, y = 0 };
limit: i32 = 10 + 20 - 5;

shift :: (*self) {
    self.x += 1;
    self.y -= 1;
}

main :: () -> i32 {
    count: = 3;
    return 1 + 2;
}
";

#[test]
fn test_analyze_program() {
    let unit = analyze(PROGRAM, &Config::default()).unwrap();

    let kinds = unit
        .ast
        .iter()
        .map(|stmt| stmt.get_stmt_type())
        .collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            StmtType::StructStmt,
            StmtType::ExpressionStmt,
            StmtType::ExpressionStmt,
            StmtType::FunctionStmt,
            StmtType::FunctionStmt,
        ]
    );

    assert_eq!(unit.tokens.get(0).unwrap().kind, TokenKind::Identifier);
    assert_eq!(unit.tokens.last().unwrap().kind, TokenKind::CloseCurly);
    assert_eq!(unit.tokens.last().unwrap().line, 17);
}

#[test]
fn test_analyze_then_declare() {
    let unit = analyze(PROGRAM, &Config::default()).unwrap();
    let mut env = TypeEnv::new(PROGRAM);

    assert_eq!(declare_top_level(&unit.ast, &mut env), 3);

    let limit = unit
        .tokens
        .iter()
        .find(|token| token.lexeme(PROGRAM) == "limit")
        .unwrap();
    assert_eq!(env.lookup(limit.span).unwrap().kind, TypeKind::I32);

    let point = unit
        .tokens
        .iter()
        .filter(|token| token.lexeme(PROGRAM) == "Point")
        .last()
        .unwrap();
    assert_eq!(env.lookup(point.span).unwrap().kind, TypeKind::Struct);
}

#[test]
fn test_analyze_shares_source_spans() {
    let unit = analyze(PROGRAM, &Config::default()).unwrap();

    let Stmt::Struct(point) = &unit.ast.body[0] else {
        panic!("expected a struct");
    };
    assert_eq!(point.identifier.lexeme(PROGRAM), "Point");
    assert_eq!(&point.identifier, unit.tokens.get(0).unwrap());

    let Stmt::Expression(origin) = &unit.ast.body[1] else {
        panic!("expected a declaration");
    };
    let Expr::Variable(origin) = &origin.expression else {
        panic!("expected a variable");
    };
    assert!(matches!(origin.value.as_deref(), Some(Expr::StructLiteral(_))));
}

#[test]
fn test_analyze_lexical_error() {
    let source = "x: i32 = 1;\ny: i32 = 2 $ 3;\n";
    let error = analyze(source, &Config::default()).unwrap_err();

    assert_eq!(error.get_line(), 2);

    let rendered = format_error(&error, source, "bad.morl");
    assert!(rendered.contains("UnrecognisedCharacter"));
    assert!(rendered.contains("2 | y: i32 = 2 $ 3;"));
}

#[test]
fn test_analyze_parse_error_rendering() {
    let source = "Point :: struct {\n    x: i32 = 1\n}\n";
    let error = analyze(source, &Config::default()).unwrap_err();

    assert_eq!(error.get_line(), 3);

    let rendered = format_error(&error, source, "point.morl");
    assert_eq!(
        rendered,
        "error: UnexpectedToken (expected `Semicolon`, found `}`)\n\
         -> point.morl\n  \
         |\n\
         3 | }\n  \
         | ^\n"
    );
}

#[test]
fn test_analyze_unterminated_block() {
    let source = "main :: () {\n  x: i32 = 1;\n";
    let error = analyze(source, &Config::default()).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");

    let rendered = format_error(&error, source, "main.morl");
    assert!(rendered.starts_with("error: UnexpectedEndOfInput"));
    assert!(rendered.contains("2 | x: i32 = 1;"));
}

#[test]
fn test_analyze_unsupported_is_reported() {
    let source = "main :: () {\n  return x;\n}";
    let error = analyze(source, &Config::default()).unwrap_err();

    assert!(error.is_unsupported());
    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_analyze_empty_source() {
    let unit = analyze("", &Config::default()).unwrap();

    assert!(unit.tokens.is_empty());
    assert!(unit.ast.is_empty());
}
