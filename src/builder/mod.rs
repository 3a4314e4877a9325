//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and a macro that accumulate a
//! definition, validate it, and only then hand it to the engine.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuilderError;
pub use machine::AutomatonBuilder;
