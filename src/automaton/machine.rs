//! The built, immutable automaton and its execution.

use crate::automaton::error::{BuildError, ExecutionError};
use crate::automaton::run::Run;
use crate::automaton::states::States;
use crate::core::{inputs_of, State, StateId, Transition};
use crate::validation::first_inadmissible;
use tracing::{debug, trace};

/// A deterministic finite automaton.
///
/// An `Automaton` can only be obtained through construction and exposes no
/// mutators, so it can be executed any number of times, from any number of
/// threads, without synchronization.
///
/// # Example
///
/// ```rust
/// use finite_automaton::automaton::{Automaton, ExecutionError};
/// use finite_automaton::core::Transition;
///
/// let transitions = vec![
///     Transition::new("locked", "coin", "unlocked"),
///     Transition::new("unlocked", "push", "locked"),
/// ];
/// let turnstile = Automaton::build(
///     &["locked", "unlocked"],
///     "locked",
///     &["locked"],
///     &transitions,
/// )
/// .unwrap();
///
/// assert_eq!(turnstile.execute(&["coin", "push"]), Ok("locked"));
/// assert_eq!(
///     turnstile.execute(&["coin"]),
///     Err(ExecutionError::NotAFinalState("unlocked".into()))
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Automaton {
    states: States,
    initial: StateId,
    alphabet: Vec<String>,
}

impl Automaton {
    /// Build the state graph for a definition.
    ///
    /// This performs name resolution only. Definitions should go through
    /// [`validate_definition`](crate::validation::validate_definition) first
    /// (the [`AutomatonBuilder`](crate::builder::AutomatonBuilder) does this)
    /// to get precise diagnostics; here any unresolvable name surfaces as
    /// [`BuildError::StateNotFound`].
    pub fn build<Q, F>(
        states: &[Q],
        initial_state: &str,
        final_states: &[F],
        transitions: &[Transition],
    ) -> Result<Self, BuildError>
    where
        Q: AsRef<str>,
        F: AsRef<str>,
    {
        let mut graph = States::from_names(states);
        graph.set_final_states(final_states)?;

        for transition in transitions {
            graph.set_transition(transition)?;
        }

        let initial = graph.find(initial_state)?;
        let alphabet = inputs_of(transitions);

        debug!(
            states = graph.len(),
            transitions = transitions.len(),
            symbols = alphabet.len(),
            initial = initial_state,
            "built automaton"
        );

        Ok(Self {
            states: graph,
            initial,
            alphabet,
        })
    }

    /// Execute the automaton, rejecting unknown symbols up front.
    ///
    /// Every input is first checked against [`alphabet`](Self::alphabet);
    /// the first unknown symbol fails with [`ExecutionError::InvalidInput`]
    /// before any transition is taken. Otherwise behaves like
    /// [`run`](Self::run).
    pub fn execute<I: AsRef<str>>(&self, inputs: &[I]) -> Result<&str, ExecutionError> {
        if let Some(symbol) = first_inadmissible(inputs, self.alphabet.as_slice()) {
            return Err(ExecutionError::InvalidInput(symbol.to_string()));
        }
        self.run(inputs)
    }

    /// Execute the automaton without checking the alphabet first.
    ///
    /// Returns the name of the state reached if it is accepting. A symbol
    /// with no edge from the current state fails with
    /// [`ExecutionError::TransitionNotFound`]; ending on a non-accepting state
    /// fails with [`ExecutionError::NotAFinalState`].
    pub fn run<I: AsRef<str>>(&self, inputs: &[I]) -> Result<&str, ExecutionError> {
        self.trace(inputs)?.into_accepted()
    }

    /// Walk the input from the initial state and record every state visited.
    ///
    /// Unlike [`run`](Self::run) this does not require the last state to be
    /// accepting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use finite_automaton::automaton::Automaton;
    /// use finite_automaton::core::Transition;
    ///
    /// let transitions = vec![
    ///     Transition::new("a", "x", "b"),
    ///     Transition::new("b", "x", "c"),
    /// ];
    /// let automaton = Automaton::build(&["a", "b", "c"], "a", &["c"], &transitions).unwrap();
    ///
    /// let run = automaton.trace(&["x"]).unwrap();
    /// assert_eq!(run.names(), vec!["a", "b"]);
    /// assert!(!run.is_accepted());
    /// ```
    pub fn trace<I: AsRef<str>>(&self, inputs: &[I]) -> Result<Run<'_>, ExecutionError> {
        let mut path = Vec::with_capacity(inputs.len() + 1);
        let mut current = self.initial;
        path.push(current);

        for input in inputs.iter().map(AsRef::as_ref) {
            let state = self.state(current);
            let next = state
                .successor(input)
                .ok_or_else(|| ExecutionError::TransitionNotFound {
                    state: state.name().to_string(),
                    input: input.to_string(),
                })?;

            trace!(
                from = state.name(),
                input,
                to = self.state(next).name(),
                "step"
            );

            current = next;
            path.push(current);
        }

        Ok(Run::new(self, path))
    }

    /// Check whether the automaton accepts the input.
    pub fn accepts<I: AsRef<str>>(&self, inputs: &[I]) -> bool {
        self.execute(inputs).is_ok()
    }

    /// All states in declaration order.
    pub fn states(&self) -> &[State] {
        self.states.as_slice()
    }

    /// Get the state behind a handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this automaton.
    pub fn state(&self, id: StateId) -> &State {
        self.states.get(id)
    }

    /// Find a state and its handle by name.
    pub fn find(&self, name: &str) -> Option<(StateId, &State)> {
        self.states
            .find(name)
            .ok()
            .map(|id| (id, self.states.get(id)))
    }

    /// The state every execution starts from.
    pub fn initial_state(&self) -> &State {
        self.states.get(self.initial)
    }

    /// Handle of the initial state.
    pub fn initial_id(&self) -> StateId {
        self.initial
    }

    /// Accepting states in declaration order.
    pub fn final_states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states().iter().filter(|state| state.is_final())
    }

    /// Symbols used by at least one transition, in first-occurrence order.
    pub fn alphabet(&self) -> &[String] {
        &self.alphabet
    }

    /// Look up the effective transition from a named state on `input`.
    pub fn transition(&self, from: &str, input: &str) -> Option<&State> {
        let (_, state) = self.find(from)?;
        state.successor(input).map(|id| self.state(id))
    }
}
