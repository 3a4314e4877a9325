//! Finite Automaton: validated deterministic finite automata
//!
//! A definition (states, initial state, final states, transitions) is first
//! checked for structural consistency, then resolved into an immutable state
//! graph that can be executed against input sequences any number of times.
//!
//! # Core Concepts
//!
//! - **Validation**: Pure, short-circuiting checks over a raw definition
//! - **Automaton**: Frozen arena of states with `input -> state` edges
//! - **Execution**: Deterministic traversal with accept/reject semantics
//! - **Builder**: Fluent configuration that validates before building
//!
//! Symbols are opaque strings; the alphabet is whatever inputs appear in the
//! transition table. When two transitions share a start state and input, the
//! later one wins.
//!
//! # Example
//!
//! ```rust
//! use finite_automaton::automaton::ExecutionError;
//! use finite_automaton::builder::AutomatonBuilder;
//! use finite_automaton::core::Transition;
//!
//! let automaton = AutomatonBuilder::new()
//!     .states(["S0", "S1", "S2"])
//!     .initial_state("S0")
//!     .final_states(["S0", "S1", "S2"])
//!     .transitions([
//!         Transition::new("S0", "0", "S0"),
//!         Transition::new("S0", "1", "S1"),
//!         Transition::new("S1", "0", "S2"),
//!         Transition::new("S1", "1", "S0"),
//!         Transition::new("S2", "0", "S1"),
//!         Transition::new("S2", "1", "S2"),
//!     ])
//!     .build()
//!     .unwrap();
//!
//! let input = ["0", "1", "0", "1", "0", "1", "0", "1"];
//! assert_eq!(automaton.execute(&input), Ok("S1"));
//!
//! assert_eq!(
//!     automaton.execute(&["0", "2"]),
//!     Err(ExecutionError::InvalidInput("2".into()))
//! );
//! ```

pub mod automaton;
pub mod builder;
pub mod core;
pub mod validation;

// Re-export commonly used types
pub use automaton::{Automaton, BuildError, ExecutionError, Run};
pub use builder::{AutomatonBuilder, BuilderError};
pub use crate::core::{State, StateId, Transition};
pub use validation::{validate_definition, validate_inputs, ValidationError};
