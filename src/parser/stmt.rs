use crate::{
    ast::{
        expressions::{Expr, VariableExpr, VariableTarget},
        statements::{ExpressionStmt, FnStmt, Receiver, ReturnStmt, Stmt, StructStmt},
        types::Type,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::{
    parser::Parser,
    types::{parse_declared_type, parse_type},
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.nested(|parser| {
        let token = parser
            .current_token()
            .ok_or_else(|| parser.end_of_input("a statement"))?;

        match parser.get_stmt_handler(token.kind) {
            Some(handler) => handler(parser),
            None => Err(parser.unexpected(token, "expected a statement")),
        }
    })
}

/// `return expr;`
pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Return)?;

    let value = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt { value }))
}

/// Statements led by an identifier or `self`. The token after it decides
/// between a declaration, a definition and a field write.
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.peek_kind(1) {
        Some(TokenKind::Colon) => parse_var_decl_stmt(parser),
        Some(TokenKind::ColonColon) => parse_definition_stmt(parser),
        Some(TokenKind::Dot) => parse_field_stmt(parser),
        Some(_) => {
            parser.advance();
            let token = parser
                .current_token()
                .ok_or_else(|| parser.end_of_input("`:`, `::` or `.`"))?;
            Err(parser.unexpected(token, "expected `:`, `::` or `.` after identifier"))
        }
        None => {
            parser.advance();
            Err(parser.end_of_input("`:`, `::` or `.`"))
        }
    }
}

/// `name: type = value;`, `name: type;`, `name: = value;` or `name: ;`
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let identifier = *parser.advance().ok_or_else(|| parser.end_of_input("an identifier"))?;

    parser.expect(TokenKind::Colon)?;
    let var_type = parse_declared_type(parser)?;

    let token = parser
        .current_token()
        .ok_or_else(|| parser.end_of_input("`=` or `;`"))?;

    let value = match token.kind {
        TokenKind::Assignment => {
            parser.advance();
            let value = parse_expr(parser, BindingPower::Default)?;
            parser.expect(TokenKind::Semicolon)?;
            Some(Box::new(value))
        }
        TokenKind::Semicolon => {
            parser.advance();
            None
        }
        _ => return Err(parser.unexpected(token, "expected `=` or `;` after the type")),
    };

    Ok(Stmt::Expression(ExpressionStmt {
        expression: Expr::Variable(VariableExpr {
            identifier,
            var_type,
            value,
            target: VariableTarget::Declaration,
        }),
    }))
}

/// `Name :: struct { ... }` or `name :: (...) -> type { ... }`
pub fn parse_definition_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let identifier = *parser.advance().ok_or_else(|| parser.end_of_input("an identifier"))?;

    parser.expect(TokenKind::ColonColon)?;

    let token = parser
        .current_token()
        .ok_or_else(|| parser.end_of_input("`struct` or `(`"))?;

    match token.kind {
        TokenKind::Struct => {
            parser.advance();
            parser.expect(TokenKind::OpenCurly)?;
            let fields = parse_block_body(parser)?;

            Ok(Stmt::Struct(StructStmt { identifier, fields }))
        }
        TokenKind::OpenParen => {
            parser.advance();
            let receiver = parse_receiver(parser)?;

            match parser.current_token() {
                Some(token) if token.is_one_of_many(&[TokenKind::Identifier, TokenKind::Comma]) => {
                    return Err(parser.unsupported(token, "function parameters"));
                }
                _ => {
                    parser.expect(TokenKind::CloseParen)?;
                }
            }

            let return_type = if parser.current_token_kind() == Some(TokenKind::Arrow) {
                parser.advance();
                Some(parse_type(parser)?)
            } else {
                None
            };

            parser.expect(TokenKind::OpenCurly)?;
            let body = parse_block_body(parser)?;

            Ok(Stmt::Function(FnStmt {
                identifier,
                receiver,
                return_type,
                body,
            }))
        }
        _ => Err(parser.unexpected(token, "expected `struct` or `(` after `::`")),
    }
}

/// `self` or `*self` as the first thing in a parameter list.
fn parse_receiver(parser: &mut Parser) -> Result<Option<Receiver>, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::SelfKw) => {
            parser.advance();
            Ok(Some(Receiver::Value))
        }
        Some(TokenKind::Star) => {
            parser.advance();
            parser.expect(TokenKind::SelfKw)?;
            Ok(Some(Receiver::Pointer))
        }
        _ => Ok(None),
    }
}

/// Statements up to and including the closing `}`. The opening `{` must
/// already be consumed.
pub fn parse_block_body(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    let mut statements = Vec::new();

    while parser.current_token_kind() != Some(TokenKind::CloseCurly) {
        if !parser.has_tokens() {
            return Err(parser.end_of_input("`}`"));
        }

        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(statements)
}

/// `receiver.field op value;`. Method references (`receiver.name :: ...`)
/// and calls (`receiver.name(...)`) are rejected as unsupported.
pub fn parse_field_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let receiver = *parser.advance().ok_or_else(|| parser.end_of_input("an identifier"))?;

    parser.expect(TokenKind::Dot)?;
    let field = *parser.expect(TokenKind::Identifier)?;

    let token = parser
        .current_token()
        .ok_or_else(|| parser.end_of_input("an assignment operator"))?;

    match token.kind {
        TokenKind::ColonColon => Err(parser.unsupported(token, "method reference")),
        TokenKind::OpenParen => Err(parser.unsupported(token, "method call")),
        operator if operator.is_assignment() => {
            parser.advance();
            let value = parse_expr(parser, BindingPower::Default)?;
            parser.expect(TokenKind::Semicolon)?;

            Ok(Stmt::Expression(ExpressionStmt {
                expression: Expr::Variable(VariableExpr {
                    identifier: field,
                    var_type: Type::Infer,
                    value: Some(Box::new(value)),
                    target: VariableTarget::FieldWrite { receiver, operator },
                }),
            }))
        }
        _ => Err(parser.unexpected(token, "expected an assignment operator after the field")),
    }
}
