//! Errors for the automaton builder.

use crate::automaton::BuildError;
use crate::validation::ValidationError;
use thiserror::Error;

/// Errors that can occur when building an automaton through the builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    #[error("Invalid automaton definition: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to build automaton: {0}")]
    Build(#[from] BuildError),
}
