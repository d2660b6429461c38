use crate::lexer::tokens::{Token, TokenKind};

use super::types::Type;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    IntLiteral(NumberExpr),
    Variable(VariableExpr),
    Binary(BinaryExpr),
    StructLiteral(StructLiteralExpr),
}

// LITERALS

/// Number Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberExpr {
    pub value: i32,
    pub token: Token,
}

/// Anonymous struct literal, `.{ x = 1, y = 2 }`. Fields keep source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructLiteralExpr {
    pub fields: Vec<(Token, Expr)>,
    pub token: Token,
}

// VARIABLES

/// What a variable node writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableTarget {
    /// `name: type = value;`
    Declaration,
    /// `receiver.field op value;` where `op` is `=`, `+=` or `-=`.
    FieldWrite { receiver: Token, operator: TokenKind },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableExpr {
    pub identifier: Token,
    pub var_type: Type,
    pub value: Option<Box<Expr>>,
    pub target: VariableTarget,
}

impl VariableExpr {
    /// True for writes through `self`, e.g. `self.count += 1;`.
    pub fn is_self_write(&self) -> bool {
        matches!(
            self.target,
            VariableTarget::FieldWrite { receiver, .. } if receiver.kind == TokenKind::SelfKw
        )
    }
}

// OPERATIONS

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: TokenKind,
    pub right: Box<Expr>,
}
