//! States of a built automaton.
//!
//! A state is a named node owning its outgoing edges. Edges point at other
//! states through [`StateId`] handles into the automaton's state arena, so
//! cycles never involve shared ownership.

use std::collections::HashMap;
use std::fmt;

/// Stable handle of a state inside its automaton.
///
/// Ids are assigned in declaration order, starting at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(usize);

impl StateId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the state in declaration order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// A node of the automaton.
///
/// All methods are read-only. Marking a state final and adding edges is
/// only possible while the automaton is being constructed.
///
/// # Example
///
/// ```rust
/// use finite_automaton::builder::AutomatonBuilder;
/// use finite_automaton::core::Transition;
///
/// let automaton = AutomatonBuilder::new()
///     .states(["even", "odd"])
///     .initial_state("even")
///     .final_states(["even"])
///     .add_transition(Transition::new("even", "1", "odd"))
///     .add_transition(Transition::new("odd", "1", "even"))
///     .build()
///     .unwrap();
///
/// let even = automaton.initial_state();
/// assert_eq!(even.name(), "even");
/// assert!(even.is_final());
///
/// let next = even.successor("1").map(|id| automaton.state(id).name());
/// assert_eq!(next, Some("odd"));
/// assert_eq!(even.successor("0"), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    name: String,
    is_final: bool,
    edges: HashMap<String, StateId>,
}

impl State {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_final: false,
            edges: HashMap::new(),
        }
    }

    /// Name of the state, unique within its automaton.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if this is an accepting state.
    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Look up the state reached by consuming `input`, if any.
    pub fn successor(&self, input: &str) -> Option<StateId> {
        self.edges.get(input).copied()
    }

    /// Iterate over the outgoing edges as `(input, target)` pairs.
    ///
    /// The iteration order is unspecified.
    pub fn transitions(&self) -> impl Iterator<Item = (&str, StateId)> + '_ {
        self.edges.iter().map(|(input, id)| (input.as_str(), *id))
    }

    pub(crate) fn mark_final(&mut self) {
        self.is_final = true;
    }

    /// Record an edge, returning the target it replaced.
    pub(crate) fn set_edge(&mut self, input: impl Into<String>, target: StateId) -> Option<StateId> {
        self.edges.insert(input.into(), target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_not_final_and_has_no_edges() {
        let state = State::new("s1");

        assert_eq!(state.name(), "s1");
        assert!(!state.is_final());
        assert_eq!(state.transitions().count(), 0);
        assert_eq!(state.successor("a"), None);
    }

    #[test]
    fn mark_final_is_idempotent() {
        let mut state = State::new("s1");
        state.mark_final();
        state.mark_final();

        assert!(state.is_final());
    }

    #[test]
    fn set_edge_overwrites_previous_target() {
        let mut state = State::new("s1");

        assert_eq!(state.set_edge("a", StateId::new(0)), None);
        assert_eq!(state.set_edge("a", StateId::new(2)), Some(StateId::new(0)));
        assert_eq!(state.successor("a"), Some(StateId::new(2)));
        assert_eq!(state.transitions().count(), 1);
    }

    #[test]
    fn state_id_reports_index_and_displays() {
        let id = StateId::new(3);

        assert_eq!(id.index(), 3);
        assert_eq!(id.to_string(), "q3");
    }
}
