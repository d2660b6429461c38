//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Recognition of keywords, identifiers and numerals
//! - Single and compound symbols (`::`, `:=`, `->`, `-=`, `+=`)
//! - Line tracking for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
