//! Errors raised while building and executing automata.

use thiserror::Error;

/// Errors that can occur when resolving a definition into a state graph.
///
/// Only reachable when construction is invoked on a definition that was
/// never validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("State '{0}' not found")]
    StateNotFound(String),
}

/// Errors that can occur while executing an input sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The input is not used by any transition of the automaton
    #[error("Input '{0}' is not in the automaton's alphabet")]
    InvalidInput(String),

    /// The current state has no edge for the input
    #[error("No transition from state '{state}' on input '{input}'")]
    TransitionNotFound { state: String, input: String },

    /// All input was consumed but the state reached is not accepting
    #[error("State '{0}' is not a final state")]
    NotAFinalState(String),
}
