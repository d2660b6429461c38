//! Symbol and type environment.
//!
//! The environment is a flat, global table from identifiers to type kinds,
//! filled through explicit inserts. It is keyed by spans into the source
//! buffer and compares keys by their text.
//!
//! Checking a unit against the environment is not implemented; `type_check`
//! reports it as unsupported.

pub mod environment;
pub mod type_checker;
