//! Error types and error handling for the front end.
//!
//! This module defines the error types used by the lexer and parser:
//!
//! - Error structures carrying the line and, where known, the source span
//! - Specific error variants for lexical, structural and unsupported failures
//! - Error naming and suggestion tips used by diagnostics

pub mod errors;
