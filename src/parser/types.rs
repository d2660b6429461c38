//! Type annotation parsing.
//!
//! An annotation is a single identifier: `i32` resolves to the primitive,
//! any other name is kept as a struct reference for a later pass.

use crate::{
    ast::types::{Primitive, Type},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Parses an explicit annotation and advances past it.
pub fn parse_type(parser: &mut Parser) -> Result<Type, Error> {
    let token = parser
        .current_token()
        .ok_or_else(|| parser.end_of_input("a type"))?;

    match token.kind {
        TokenKind::Identifier => {
            parser.advance();

            match Primitive::from_name(parser.lexeme(token)) {
                Some(primitive) => Ok(Type::Primitive(primitive)),
                None => Ok(Type::Struct(*token)),
            }
        }
        TokenKind::Struct => Err(parser.unsupported(token, "anonymous struct type")),
        _ => Err(parser.unexpected(token, "expected a type")),
    }
}

/// Parses the annotation of a variable declaration, where it may be elided.
/// An elided annotation leaves the cursor on the `=` or `;` that follows.
pub fn parse_declared_type(parser: &mut Parser) -> Result<Type, Error> {
    match parser.current_token_kind() {
        Some(TokenKind::Assignment) | Some(TokenKind::Semicolon) => Ok(Type::Infer),
        _ => parse_type(parser),
    }
}
