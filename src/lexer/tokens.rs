use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, slice::Iter};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("struct", TokenKind::Struct);
        map.insert("return", TokenKind::Return);
        map.insert("self", TokenKind::SelfKw);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =

    Dot,
    Semicolon,
    Colon,
    ColonColon,  // ::
    ColonEquals, // :=
    Comma,
    Arrow,

    PlusEquals,
    MinusEquals,

    Plus,
    Dash,
    Star,

    // Reserved
    Struct,
    Return,
    SelfKw,
}

impl TokenKind {
    /// Whether the kind writes to its target: `=`, `+=` or `-=`.
    pub fn is_assignment(&self) -> bool {
        matches!(
            self,
            TokenKind::Assignment | TokenKind::PlusEquals | TokenKind::MinusEquals
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A lexical unit. The span points back into the source buffer the token was
/// read from; the token never owns its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: u32,
}

impl Token {
    /// Re-slices the token's text out of the buffer it was lexed from.
    pub fn lexeme<'s>(&self, source: &'s str) -> &'s str {
        self.span.slice(source)
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}

/// Ordered tokens of one compilation unit, built once by the lexer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        TokenStream { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
