use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{errors::errors::{Error, ErrorImpl}, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind, TokenStream, RESERVED_LOOKUP};

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref NUMERAL: Regex = Regex::new("^[0-9]+").unwrap();
}

/// Handles a run matched by a pattern. Receives the length of the match.
pub type RegexHandler = fn(&mut Lexer, usize);

pub struct RegexPattern {
    regex: &'static Regex,
    handler: RegexHandler,
}

pub struct Lexer<'a> {
    patterns: [RegexPattern; 2],
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            // Checked in order: identifiers before numerals.
            patterns: [
                RegexPattern { regex: &IDENTIFIER, handler: symbol_handler },
                RegexPattern { regex: &NUMERAL, handler: number_handler },
            ],
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, kind: TokenKind, len: usize) {
        self.tokens.push(MK_TOKEN!(kind, MK_SPAN!(self.pos, len), self.line));
    }

    pub fn at(&self) -> u8 {
        self.source.as_bytes()[self.pos]
    }

    pub fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos + 1).copied()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn unrecognised(&self) -> Error {
        let character = self.remainder().chars().next().unwrap_or('\0');
        Error::new(ErrorImpl::UnrecognisedCharacter { character }, self.line)
            .with_span(MK_SPAN!(self.pos, character.len_utf8()))
    }
}

fn symbol_handler(lexer: &mut Lexer, len: usize) {
    let value = &lexer.remainder()[..len];

    match RESERVED_LOOKUP.get(value) {
        Some(kind) => lexer.push(*kind, len),
        None => lexer.push(TokenKind::Identifier, len),
    }

    lexer.advance_n(len);
}

fn number_handler(lexer: &mut Lexer, len: usize) {
    lexer.push(TokenKind::Number, len);
    lexer.advance_n(len);
}

/// Resolves the symbol starting at `current`, looking one byte ahead for
/// compound operators. Returns the kind and its length in bytes.
fn match_symbol(current: u8, next: Option<u8>) -> Option<(TokenKind, usize)> {
    let symbol = match (current, next) {
        (b':', Some(b':')) => (TokenKind::ColonColon, 2),
        (b':', Some(b'=')) => (TokenKind::ColonEquals, 2),
        (b':', _) => (TokenKind::Colon, 1),
        (b'-', Some(b'>')) => (TokenKind::Arrow, 2),
        (b'-', Some(b'=')) => (TokenKind::MinusEquals, 2),
        (b'-', _) => (TokenKind::Dash, 1),
        (b'+', Some(b'=')) => (TokenKind::PlusEquals, 2),
        (b'+', _) => (TokenKind::Plus, 1),
        (b'*', _) => (TokenKind::Star, 1),
        (b'=', _) => (TokenKind::Assignment, 1),
        (b'.', _) => (TokenKind::Dot, 1),
        (b'(', _) => (TokenKind::OpenParen, 1),
        (b')', _) => (TokenKind::CloseParen, 1),
        (b'{', _) => (TokenKind::OpenCurly, 1),
        (b'}', _) => (TokenKind::CloseCurly, 1),
        (b'[', _) => (TokenKind::OpenBracket, 1),
        (b']', _) => (TokenKind::CloseBracket, 1),
        (b',', _) => (TokenKind::Comma, 1),
        (b';', _) => (TokenKind::Semicolon, 1),
        _ => return None,
    };

    Some(symbol)
}

/// Converts source text into its full token stream in one forward pass.
///
/// Fails on the first unrecognised character; no partial stream is returned.
/// The stream has no end-of-file token, callers bounds-check instead.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Result<TokenStream, Error> {
    let mut lex = Lexer::new(source);

    'outer: while !lex.at_eof() {
        for index in 0..lex.patterns.len() {
            let pattern = &lex.patterns[index];
            if let Some(matched) = pattern.regex.find(lex.remainder()) {
                let handler = pattern.handler;
                handler(&mut lex, matched.end());
                continue 'outer;
            }
        }

        if let Some((kind, len)) = match_symbol(lex.at(), lex.peek()) {
            lex.push(kind, len);
            lex.advance_n(len);
            continue;
        }

        match lex.at() {
            b' ' => lex.advance_n(1),
            b'\n' => {
                lex.line += 1;
                lex.advance_n(1);
            }
            _ => return Err(lex.unrecognised()),
        }
    }

    debug!(tokens = lex.tokens.len(), lines = lex.line, "tokenized source");
    Ok(TokenStream::new(lex.tokens))
}
