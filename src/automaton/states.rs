//! Arena of states used while an automaton is under construction.

use crate::automaton::error::BuildError;
use crate::core::{State, StateId, Transition};
use std::collections::HashMap;
use tracing::debug;

/// Flat, declaration-ordered collection of states with a name index.
///
/// This is the only place states are mutated. Once construction finishes
/// the collection moves into an [`Automaton`](crate::automaton::Automaton),
/// which only hands out shared references.
#[derive(Clone, Debug, Default)]
pub(crate) struct States {
    states: Vec<State>,
    index: HashMap<String, StateId>,
}

impl States {
    /// Create one non-final state per name, preserving order.
    ///
    /// If a name repeats, lookups resolve to its first occurrence.
    pub(crate) fn from_names<Q: AsRef<str>>(names: &[Q]) -> Self {
        let mut states = Vec::with_capacity(names.len());
        let mut index = HashMap::with_capacity(names.len());

        for (position, name) in names.iter().map(AsRef::as_ref).enumerate() {
            index
                .entry(name.to_string())
                .or_insert_with(|| StateId::new(position));
            states.push(State::new(name));
        }

        Self { states, index }
    }

    /// Resolve a state name to its handle.
    pub(crate) fn find(&self, name: &str) -> Result<StateId, BuildError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| BuildError::StateNotFound(name.to_string()))
    }

    /// Mark every named state as accepting.
    pub(crate) fn set_final_states<F: AsRef<str>>(&mut self, names: &[F]) -> Result<(), BuildError> {
        for name in names.iter().map(AsRef::as_ref) {
            let id = self.find(name)?;
            self.states[id.index()].mark_final();
        }
        Ok(())
    }

    /// Record a transition edge. A later edge for the same start state and
    /// input replaces the earlier one.
    pub(crate) fn set_transition(&mut self, transition: &Transition) -> Result<(), BuildError> {
        let start = self.find(&transition.start_state)?;
        let result = self.find(&transition.result_state)?;

        let replaced = self.states[start.index()].set_edge(transition.input.as_str(), result);
        if let Some(previous) = replaced.filter(|previous| *previous != result) {
            debug!(
                state = transition.start_state.as_str(),
                input = transition.input.as_str(),
                previous = self.states[previous.index()].name(),
                replacement = transition.result_state.as_str(),
                "later transition overrides earlier one"
            );
        }
        Ok(())
    }

    pub(crate) fn get(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    pub(crate) fn as_slice(&self) -> &[State] {
        &self.states
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }
}
