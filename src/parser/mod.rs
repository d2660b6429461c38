//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an ordered list of statements. It handles:
//!
//! - Statement parsing (declarations, struct and function definitions,
//!   field writes, returns)
//! - Expression parsing (integer literals, struct literals, binary ops)
//! - Type annotation parsing
//! - Located error reporting at every required token
//!
//! Expressions are parsed by precedence climbing with NUD (null denotation)
//! and LED (left denotation) handlers keyed by token kind.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
