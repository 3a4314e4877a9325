//! Traces of executions.

use crate::automaton::error::ExecutionError;
use crate::automaton::machine::Automaton;
use crate::core::{State, StateId};

/// The states visited while consuming an input sequence.
///
/// The path always starts with the initial state and has one more entry
/// than the number of symbols consumed.
#[derive(Clone, Debug)]
pub struct Run<'a> {
    automaton: &'a Automaton,
    path: Vec<StateId>,
}

impl<'a> Run<'a> {
    pub(crate) fn new(automaton: &'a Automaton, path: Vec<StateId>) -> Self {
        debug_assert!(!path.is_empty());
        Self { automaton, path }
    }

    /// Handles of the visited states, in visiting order.
    pub fn path(&self) -> &[StateId] {
        &self.path
    }

    /// Names of the visited states, in visiting order.
    pub fn names(&self) -> Vec<&'a str> {
        let automaton = self.automaton;
        self.path
            .iter()
            .map(|id| automaton.state(*id).name())
            .collect()
    }

    /// Number of symbols consumed.
    pub fn steps(&self) -> usize {
        self.path.len() - 1
    }

    /// The state the run ended on.
    pub fn last_state(&self) -> &'a State {
        let last = self.path.last().copied().unwrap_or(self.automaton.initial_id());
        self.automaton.state(last)
    }

    /// Check if the run ended on an accepting state.
    pub fn is_accepted(&self) -> bool {
        self.last_state().is_final()
    }

    /// Turn the run into an accept/reject verdict.
    ///
    /// Returns the name of the last state if it is accepting, otherwise
    /// [`ExecutionError::NotAFinalState`] naming it.
    pub fn into_accepted(self) -> Result<&'a str, ExecutionError> {
        let last = self.last_state();
        if last.is_final() {
            Ok(last.name())
        } else {
            Err(ExecutionError::NotAFinalState(last.name().to_string()))
        }
    }
}
