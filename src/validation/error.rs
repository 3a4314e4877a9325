//! Validation errors for automaton definitions and input sequences.

use thiserror::Error;

/// Structural problems found in a proposed automaton definition, or in an
/// input sequence checked against an automaton's alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No states defined. Declare at least one state")]
    StatesNotDefined,

    #[error("State '{0}' is declared more than once")]
    DuplicateState(String),

    #[error("Initial state not specified")]
    InitialStateNotDefined,

    #[error("Initial state '{0}' is not a declared state")]
    InvalidInitialState(String),

    #[error("No final states defined. Declare at least one final state")]
    FinalStatesNotDefined,

    #[error("Final state '{0}' is not a declared state")]
    InvalidFinalState(String),

    #[error("No transitions defined. Add at least one transition")]
    TransitionsNotDefined,

    #[error("Transition references undeclared state '{0}'")]
    InvalidTransitionState(String),

    #[error("Input '{0}' is not in the automaton's alphabet")]
    InvalidInput(String),
}
