//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Statements are dispatched on their leading token; expressions use
//! precedence climbing with NUD/LED handlers.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for leading expressions
//! - LED (left denotation) handlers for binary operators
//! - Binding powers for operator precedence

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    ast::ast::Ast,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenStream},
    Config,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler,
        NUDLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// Holds the token stream, the source buffer the tokens point into, and the
/// lookup tables for statements and expressions. The cursor only moves
/// forward and is never read past the end of the stream.
pub struct Parser<'a> {
    /// The tokens to parse
    tokens: &'a [Token],
    /// Source text the token spans index into
    source: &'a str,
    /// Current position in the token stream
    pos: usize,
    /// Current nesting of statements and expressions
    depth: usize,
    max_depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (binary operator) handlers
    led_lookup: LEDLookup,
    /// Lookup table for operator binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser with empty lookup tables.
    ///
    /// # Arguments
    ///
    /// * `tokens` - The token stream to parse
    /// * `source` - The source buffer the tokens were lexed from
    /// * `config` - Front end settings, for the nesting limit
    pub fn new(tokens: &'a TokenStream, source: &'a str, config: &Config) -> Self {
        Parser {
            tokens: tokens.as_slice(),
            source,
            pos: 0,
            depth: 0,
            max_depth: config.max_nesting_depth,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Returns the kind of the token `n` positions after the current one.
    pub fn peek_kind(&self, n: usize) -> Option<TokenKind> {
        self.tokens.get(self.pos + n).map(|token| token.kind)
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;

        trace!(kind = %token.kind, line = token.line, pos = self.pos, "consumed token");
        Some(token)
    }

    /// Consumes the current token if it is of `expected_kind`.
    ///
    /// # Returns
    ///
    /// The consumed token, or an error naming the expected kind together with
    /// the token actually found (or the end of input).
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<&'a Token, Error> {
        let Some(token) = self.current_token() else {
            return Err(self.end_of_input(&format!("`{}`", expected_kind)));
        };

        if token.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: expected_kind,
                    found: self.lexeme(token).to_string(),
                },
                token.line,
            )
            .with_span(token.span));
        }

        self.pos += 1;
        trace!(kind = %token.kind, line = token.line, pos = self.pos, "consumed token");
        Ok(token)
    }

    /// Returns true while unconsumed tokens remain.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    /// Text of `token`, re-sliced from the source buffer.
    pub fn lexeme(&self, token: &Token) -> &'a str {
        token.lexeme(self.source)
    }

    /// Line of the current token, or of the last token once the stream is
    /// exhausted.
    pub fn current_line(&self) -> u32 {
        self.current_token()
            .or_else(|| self.tokens.last())
            .map_or(1, |token| token.line)
    }

    /// Error for a stream that ended where `expected` was required.
    pub fn end_of_input(&self, expected: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedEndOfInput {
                expected: expected.to_string(),
            },
            self.current_line(),
        )
    }

    /// Error for an unexpected token with a message describing what was wanted.
    pub fn unexpected(&self, token: &Token, message: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: self.lexeme(token).to_string(),
                message: message.to_string(),
            },
            token.line,
        )
        .with_span(token.span)
    }

    /// Error for an intentionally unimplemented construct starting at `token`.
    pub fn unsupported(&self, token: &Token, construct: &str) -> Error {
        Error::unsupported(construct, token.line).with_span(token.span)
    }

    /// Runs `parse_fn` one nesting level deeper, failing once the configured
    /// limit is reached.
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= self.max_depth {
            let error = Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.max_depth,
                },
                self.current_line(),
            );

            return Err(match self.current_token() {
                Some(token) => error.with_span(token.span),
                None => error,
            });
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;

        result
    }

    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud_handler(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led_handler(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    pub fn get_binding_power(&self, kind: TokenKind) -> Option<BindingPower> {
        self.binding_power_lookup.get(&kind).copied()
    }

    /// Registers a left denotation (binary operator) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence of this operator
    /// * `led_fn` - The handler function for this operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation handler for a token that can start an
    /// expression.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token that can start a statement.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a token stream into the ordered top-level statements.
///
/// Stops at the first malformed construct and returns it as an error; no
/// partial AST is produced.
///
/// # Arguments
///
/// * `tokens` - The complete token stream of the unit
/// * `source` - The source buffer the tokens were lexed from
/// * `config` - Front end settings
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &TokenStream, source: &str, config: &Config) -> Result<Ast, Error> {
    let mut parser = Parser::new(tokens, source, config);
    create_token_lookups(&mut parser);

    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    debug!(statements = body.len(), "parsed unit");
    Ok(Ast { body })
}
