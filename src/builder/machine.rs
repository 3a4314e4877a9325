//! Builder for constructing automata.

use crate::automaton::Automaton;
use crate::builder::error::BuilderError;
use crate::core::Transition;
use crate::validation::{validate_definition, ValidationError};
use serde::{Deserialize, Serialize};

/// Builder for constructing automata with a fluent API.
///
/// The builder only accumulates the definition. [`validate`](Self::validate)
/// checks it and [`build`](Self::build) validates then constructs, so every
/// automaton obtained here satisfies the structural invariants.
///
/// A definition can also be described as data: the builder is
/// (de)serializable and missing fields default to empty.
///
/// # Example
///
/// ```rust
/// use finite_automaton::builder::AutomatonBuilder;
/// use finite_automaton::core::Transition;
///
/// let automaton = AutomatonBuilder::new()
///     .states(["S0", "S1"])
///     .initial_state("S0")
///     .add_final_state("S1")
///     .add_transition(Transition::new("S0", "a", "S1"))
///     .add_transition(Transition::new("S1", "a", "S0"))
///     .build()
///     .unwrap();
///
/// assert_eq!(automaton.execute(&["a", "a", "a"]), Ok("S1"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomatonBuilder {
    states: Vec<String>,
    initial_state: String,
    final_states: Vec<String>,
    transitions: Vec<Transition>,
}

impl AutomatonBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the declared states.
    pub fn states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states = states.into_iter().map(Into::into).collect();
        self
    }

    /// Declare one more state.
    pub fn add_state(mut self, state: impl Into<String>) -> Self {
        self.states.push(state.into());
        self
    }

    /// Set the initial state (required).
    pub fn initial_state(mut self, state: impl Into<String>) -> Self {
        self.initial_state = state.into();
        self
    }

    /// Replace the final states.
    pub fn final_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.final_states = states.into_iter().map(Into::into).collect();
        self
    }

    /// Declare one more final state.
    pub fn add_final_state(mut self, state: impl Into<String>) -> Self {
        self.final_states.push(state.into());
        self
    }

    /// Replace the transitions.
    pub fn transitions<I, T>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Transition>,
    {
        self.transitions = transitions.into_iter().map(Into::into).collect();
        self
    }

    /// Append one transition. Later transitions win over earlier ones with
    /// the same start state and input.
    pub fn add_transition(mut self, transition: impl Into<Transition>) -> Self {
        self.transitions.push(transition.into());
        self
    }

    /// Discard everything configured so far.
    pub fn reset(self) -> Self {
        Self::new()
    }

    /// Check the current definition without building it.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_definition(
            &self.states,
            &self.initial_state,
            &self.final_states,
            &self.transitions,
        )
    }

    /// Validate the definition, then build the automaton.
    pub fn build(&self) -> Result<Automaton, BuilderError> {
        self.validate()?;

        let automaton = Automaton::build(
            &self.states,
            &self.initial_state,
            &self.final_states,
            &self.transitions,
        )?;
        Ok(automaton)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::ExecutionError;

    fn configured() -> AutomatonBuilder {
        AutomatonBuilder::new()
            .states(["s1", "s2"])
            .initial_state("s1")
            .final_states(["s1", "s2"])
            .add_transition(("s1", "1", "s2"))
    }

    #[test]
    fn new_builder_is_empty() {
        let builder = AutomatonBuilder::new();

        assert_eq!(builder, AutomatonBuilder::default());
        assert!(matches!(
            builder.validate(),
            Err(ValidationError::StatesNotDefined)
        ));
    }

    #[test]
    fn add_methods_append() {
        let builder = AutomatonBuilder::new()
            .add_state("a")
            .add_state("b")
            .initial_state("a")
            .add_final_state("a")
            .add_final_state("b")
            .add_transition(Transition::new("a", "x", "b"))
            .add_transition(Transition::new("b", "x", "a"));

        assert_eq!(builder.states, vec!["a", "b"]);
        assert_eq!(builder.final_states, vec!["a", "b"]);
        assert_eq!(builder.transitions.len(), 2);
    }

    #[test]
    fn setters_replace_previous_values() {
        let builder = configured()
            .states(["x"])
            .final_states(["x"])
            .transitions([("x", "0", "x")]);

        assert_eq!(builder.states, vec!["x"]);
        assert_eq!(builder.final_states, vec!["x"]);
        assert_eq!(builder.transitions, vec![Transition::new("x", "0", "x")]);
    }

    #[test]
    fn validate_passes_for_complete_definition() {
        assert_eq!(configured().validate(), Ok(()));
    }

    #[test]
    fn validate_reports_missing_transitions() {
        let builder = AutomatonBuilder::new()
            .states(["s1", "s2"])
            .initial_state("s1")
            .final_states(["s1", "s2"]);

        assert_eq!(
            builder.validate(),
            Err(ValidationError::TransitionsNotDefined)
        );
    }

    #[test]
    fn build_validates_first() {
        let result = configured().add_transition(("s1", "0", "s9")).build();

        assert!(matches!(
            result,
            Err(BuilderError::Validation(ValidationError::InvalidTransitionState(name)))
                if name == "s9"
        ));
    }

    #[test]
    fn build_produces_executable_automaton() {
        let automaton = configured().build().unwrap();

        assert_eq!(automaton.execute(&["1"]), Ok("s2"));
        assert_eq!(
            automaton.execute(&["0"]),
            Err(ExecutionError::InvalidInput("0".into()))
        );
    }

    #[test]
    fn builder_can_build_repeatedly() {
        let builder = configured();
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();

        assert_eq!(first.states(), second.states());
    }

    #[test]
    fn reset_clears_configuration() {
        let builder = configured().reset();
        assert_eq!(builder, AutomatonBuilder::new());
    }

    #[test]
    fn builder_deserializes_from_json() {
        let json = r#"{
            "states": ["even", "odd"],
            "initial_state": "even",
            "final_states": ["even"],
            "transitions": [
                {"start_state": "even", "input": "1", "result_state": "odd"},
                {"start_state": "odd", "input": "1", "result_state": "even"}
            ]
        }"#;

        let builder: AutomatonBuilder = serde_json::from_str(json).unwrap();
        let automaton = builder.build().unwrap();

        assert_eq!(automaton.execute(&["1", "1"]), Ok("even"));
    }

    #[test]
    fn missing_json_fields_default_to_empty() {
        let builder: AutomatonBuilder = serde_json::from_str(r#"{"states": ["a"]}"#).unwrap();

        assert_eq!(
            builder.validate(),
            Err(ValidationError::InitialStateNotDefined)
        );
    }

    #[test]
    fn builder_round_trips_through_json() {
        let builder = configured();
        let json = serde_json::to_string(&builder).unwrap();
        let back: AutomatonBuilder = serde_json::from_str(&json).unwrap();

        assert_eq!(builder, back);
    }

    #[test]
    fn builder_error_wraps_source_message() {
        let err = BuilderError::from(ValidationError::StatesNotDefined);
        assert_eq!(
            err.to_string(),
            "Invalid automaton definition: No states defined. Declare at least one state"
        );
    }
}
