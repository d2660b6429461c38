use crate::{
    ast::expressions::{BinaryExpr, Expr, NumberExpr, StructLiteralExpr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Precedence climbing. Operators bind only while their power is strictly
/// above `bp`, and the right operand is parsed at the operator's own power,
/// so equal precedence folds to the left.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.nested(|parser| {
        let token = parser
            .current_token()
            .ok_or_else(|| parser.end_of_input("an expression"))?;
        let nud = parser
            .get_nud_handler(token.kind)
            .ok_or_else(|| parser.unexpected(token, "expected an expression"))?;

        let mut left = nud(parser)?;

        while let Some(kind) = parser.current_token_kind() {
            let Some(operator_bp) = parser.get_binding_power(kind) else {
                break;
            };

            if operator_bp <= bp {
                break;
            }

            let led = match parser.get_led_handler(kind) {
                Some(led) => led,
                None => break,
            };

            left = led(parser, left, operator_bp)?;
        }

        Ok(left)
    })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.expect(TokenKind::Number)?;
    let lexeme = parser.lexeme(token);

    match lexeme.parse::<i32>() {
        Ok(value) => Ok(Expr::IntLiteral(NumberExpr {
            value,
            token: *token,
        })),
        Err(_) => Err(Error::new(
            ErrorImpl::NumberParseError {
                token: lexeme.to_string(),
            },
            token.line,
        )
        .with_span(token.span)),
    }
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, Error> {
    let operator = match parser.advance() {
        Some(token) => token.kind,
        None => return Err(parser.end_of_input("an operator")),
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

/// `.{ name = expr, ... }`
pub fn parse_struct_literal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = *parser.expect(TokenKind::Dot)?;
    parser.expect(TokenKind::OpenCurly)?;

    let mut fields = vec![];

    while parser.current_token_kind() != Some(TokenKind::CloseCurly) {
        let field_name = *parser.expect(TokenKind::Identifier)?;
        parser.expect(TokenKind::Assignment)?;
        let field_value = parse_expr(parser, BindingPower::Default)?;

        fields.push((field_name, field_value));

        if parser.current_token_kind() == Some(TokenKind::Comma) {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(Expr::StructLiteral(StructLiteralExpr {
        fields,
        token: start,
    }))
}

pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser
        .current_token()
        .ok_or_else(|| parser.end_of_input("an expression"))?;
    Err(parser.unsupported(token, "identifier expression"))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser
        .current_token()
        .ok_or_else(|| parser.end_of_input("an expression"))?;
    Err(parser.unsupported(token, "parenthesized expression"))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser
        .current_token()
        .ok_or_else(|| parser.end_of_input("an expression"))?;
    Err(parser.unsupported(token, "unary expression"))
}
