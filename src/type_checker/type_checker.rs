use crate::{
    ast::{
        ast::Ast,
        expressions::{Expr, VariableTarget},
        statements::Stmt,
    },
    errors::errors::Error,
};

use super::environment::{SymbolRecord, TypeEnv, TypeKind};

/// Records the types the parser could already resolve: every top-level
/// declaration with an explicit annotation, and every struct definition.
///
/// Returns the number of records inserted.
pub fn declare_top_level(ast: &Ast, env: &mut TypeEnv) -> usize {
    let mut declared = 0;

    for stmt in ast {
        let record = match stmt {
            Stmt::Expression(stmt) => match &stmt.expression {
                Expr::Variable(variable) if variable.target == VariableTarget::Declaration => {
                    TypeKind::from_type(&variable.var_type).map(|kind| SymbolRecord {
                        identifier: variable.identifier.span,
                        kind,
                    })
                }
                _ => None,
            },
            Stmt::Struct(definition) => Some(SymbolRecord {
                identifier: definition.identifier.span,
                kind: TypeKind::Struct,
            }),
            Stmt::Function(_) | Stmt::Return(_) => None,
        };

        if let Some(record) = record {
            env.insert(record);
            declared += 1;
        }
    }

    declared
}

/// Checks the unit against the environment.
///
/// Not implemented yet; always reports the check as unsupported.
pub fn type_check(_ast: &Ast, _env: &TypeEnv) -> Result<(), Error> {
    Err(Error::unsupported("type checking", 1))
}
