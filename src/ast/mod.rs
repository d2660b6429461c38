/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The root node and node kind discriminants
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the statement variants
/// - types: Type annotations recorded by the parser
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
