use std::slice::Iter;

use super::{expressions::Expr, statements::Stmt};

/// Statement Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    ExpressionStmt,
    StructStmt,
    FunctionStmt,
    ReturnStmt,
}

/// Expression Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    IntLiteral,
    Variable,
    Binary,
    StructLiteral,
}

impl Stmt {
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Stmt::Expression(_) => StmtType::ExpressionStmt,
            Stmt::Struct(_) => StmtType::StructStmt,
            Stmt::Function(_) => StmtType::FunctionStmt,
            Stmt::Return(_) => StmtType::ReturnStmt,
        }
    }
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::IntLiteral(_) => ExprType::IntLiteral,
            Expr::Variable(_) => ExprType::Variable,
            Expr::Binary(_) => ExprType::Binary,
            Expr::StructLiteral(_) => ExprType::StructLiteral,
        }
    }
}

/// The ordered top-level statements of one compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ast {
    pub body: Vec<Stmt>,
}

impl Ast {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl<'a> IntoIterator for &'a Ast {
    type Item = &'a Stmt;
    type IntoIter = Iter<'a, Stmt>;

    fn into_iter(self) -> Self::IntoIter {
        self.body.iter()
    }
}
