//! Type annotations as they appear in the AST.
//!
//! An annotation is resolved while parsing when it names a primitive,
//! otherwise it is kept as a reference to a struct by name. An elided
//! annotation is `Infer` and left for a later pass.

use crate::lexer::tokens::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    I32,
}

impl Primitive {
    pub fn from_name(name: &str) -> Option<Primitive> {
        match name {
            "i32" => Some(Primitive::I32),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Primitive(Primitive),
    /// Names a struct; the token is the struct's identifier.
    Struct(Token),
    Infer,
}

impl Type {
    pub fn is_infer(&self) -> bool {
        matches!(self, Type::Infer)
    }
}
