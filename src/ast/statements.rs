use crate::lexer::tokens::Token;

use super::{expressions::Expr, types::Type};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Struct(StructStmt),
    Function(FnStmt),
    Return(ReturnStmt),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStmt {
    pub expression: Expr,
}

/// `Name :: struct { ... }`. The body reuses the statement grammar, so
/// fields are usually bare variable declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructStmt {
    pub identifier: Token,
    pub fields: Vec<Stmt>,
}

/// How a method takes its receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Receiver {
    /// `self`
    Value,
    /// `*self`
    Pointer,
}

/// `name :: (receiver) -> type { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnStmt {
    pub identifier: Token,
    pub receiver: Option<Receiver>,
    pub return_type: Option<Type>,
    pub body: Vec<Stmt>,
}

impl FnStmt {
    pub fn is_method(&self) -> bool {
        self.receiver.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStmt {
    pub value: Expr,
}
