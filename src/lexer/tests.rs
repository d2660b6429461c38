//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numerals
//! - Single and compound symbols
//! - Line tracking
//! - Error cases

use pretty_assertions::assert_eq;

use super::{lexer::tokenize, tokens::TokenKind};
use crate::errors::errors::ErrorImpl;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_declaration() {
    let source = "x: i32 = 40;";
    let tokens = tokenize(source).unwrap();

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
        ]
    );
    assert_eq!(tokens.get(2).unwrap().lexeme(source), "i32");
    assert_eq!(tokens.get(4).unwrap().lexeme(source), "40");
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("struct return self"),
        vec![TokenKind::Struct, TokenKind::Return, TokenKind::SelfKw]
    );
}

#[test]
fn test_tokenize_keyword_prefixes_are_identifiers() {
    let source = "structs returned selfish _self Struct";
    let tokens = tokenize(source).unwrap();

    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
    assert_eq!(tokens.get(0).unwrap().lexeme(source), "structs");
    assert_eq!(tokens.get(4).unwrap().lexeme(source), "Struct");
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore CamelCase";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens.get(2).unwrap().lexeme(source), "baz_123");
    assert_eq!(tokens.get(3).unwrap().lexeme(source), "_underscore");
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 0 100";
    let tokens = tokenize(source).unwrap();

    assert_eq!(kinds(source), vec![TokenKind::Number; 3]);
    assert_eq!(tokens.get(0).unwrap().lexeme(source), "42");
    assert_eq!(tokens.get(2).unwrap().lexeme(source), "100");
}

#[test]
fn test_tokenize_number_then_identifier() {
    let source = "12ab";
    let tokens = tokenize(source).unwrap();

    assert_eq!(kinds(source), vec![TokenKind::Number, TokenKind::Identifier]);
    assert_eq!(tokens.get(1).unwrap().lexeme(source), "ab");
}

#[test]
fn test_tokenize_compound_symbols() {
    assert_eq!(
        kinds(": :: := - -> -= + += ="),
        vec![
            TokenKind::Colon,
            TokenKind::ColonColon,
            TokenKind::ColonEquals,
            TokenKind::Dash,
            TokenKind::Arrow,
            TokenKind::MinusEquals,
            TokenKind::Plus,
            TokenKind::PlusEquals,
            TokenKind::Assignment,
        ]
    );
}

#[test]
fn test_tokenize_compound_symbols_without_spaces() {
    assert_eq!(
        kinds("a::(*self)->i32{}"),
        vec![
            TokenKind::Identifier,
            TokenKind::ColonColon,
            TokenKind::OpenParen,
            TokenKind::Star,
            TokenKind::SelfKw,
            TokenKind::CloseParen,
            TokenKind::Arrow,
            TokenKind::Identifier,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] . , ; *"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Star,
        ]
    );
}

#[test]
fn test_tokenize_trailing_colon_and_dash() {
    assert_eq!(kinds("a:"), vec![TokenKind::Identifier, TokenKind::Colon]);
    assert_eq!(kinds("1-"), vec![TokenKind::Number, TokenKind::Dash]);
}

#[test]
fn test_tokenize_spans() {
    let source = "ab :: 7";
    let tokens = tokenize(source).unwrap();

    let spans = tokens
        .iter()
        .map(|token| (token.span.start, token.span.end))
        .collect::<Vec<_>>();
    assert_eq!(spans, vec![(0, 2), (3, 5), (6, 7)]);
}

#[test]
fn test_tokenize_line_numbers() {
    let source = "a: i32;\n\nb: i32;\n";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.get(0).unwrap().line, 1);
    assert_eq!(tokens.get(3).unwrap().line, 1);
    assert_eq!(tokens.get(4).unwrap().line, 3);
    assert_eq!(tokens.last().unwrap().line, 3);
}

#[test]
fn test_tokenize_empty_source() {
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("  \n \n").unwrap().is_empty());
}

#[test]
fn test_tokenize_no_end_of_file_token() {
    let tokens = tokenize("x").unwrap();

    assert_eq!(tokens.len(), 1);
    assert!(tokens.get(1).is_none());
}

#[test]
fn test_tokenize_unrecognised_character() {
    let error = tokenize("x: i32 = 1;\ny: = $;").unwrap_err();

    assert_eq!(error.get_line(), 2);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnrecognisedCharacter { character: '$' }
    );
    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
}

#[test]
fn test_tokenize_tab_is_unrecognised() {
    let error = tokenize("x:\ti32;").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnrecognisedCharacter { character: '\t' }
    );
}

#[test]
fn test_tokenize_non_ascii_character() {
    let error = tokenize("\n\né").unwrap_err();

    assert_eq!(error.get_line(), 3);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnrecognisedCharacter { character: 'é' }
    );
    assert_eq!(error.get_span().unwrap().len(), 2);
}
