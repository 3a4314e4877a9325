//! Core automaton data model.
//!
//! This module contains the plain data the rest of the crate works on:
//! - Transition triples supplied when defining an automaton
//! - State records and their arena handles, read-only once built

mod state;
mod transition;

pub use state::{State, StateId};
pub use transition::{inputs_of, Transition};
