//! Structural validation of automaton definitions.
//!
//! Validation is a pure check over the raw definition: it never builds
//! anything and never logs. Checks run in a fixed order and stop at the
//! first failure, so the returned error always names the earliest problem:
//!
//! 1. states are declared and unique
//! 2. the initial state is set and declared
//! 3. final states are declared (duplicates among them are harmless)
//! 4. transitions exist and only reference declared states
//!
//! Input sequences are checked separately, at execution time, against the
//! set of symbols used by the transition table.

pub mod error;

pub use error::ValidationError;

use crate::core::Transition;
use std::collections::HashSet;

/// Check a complete automaton definition.
///
/// # Example
///
/// ```rust
/// use finite_automaton::core::Transition;
/// use finite_automaton::validation::{validate_definition, ValidationError};
///
/// let transitions = vec![Transition::new("s1", "a", "s2")];
///
/// assert!(validate_definition(&["s1", "s2"], "s1", &["s2"], &transitions).is_ok());
///
/// let result = validate_definition(&["s1", "s2"], "s3", &["s2"], &transitions);
/// assert_eq!(result, Err(ValidationError::InvalidInitialState("s3".into())));
/// ```
pub fn validate_definition<Q, F>(
    states: &[Q],
    initial_state: &str,
    final_states: &[F],
    transitions: &[Transition],
) -> Result<(), ValidationError>
where
    Q: AsRef<str>,
    F: AsRef<str>,
{
    let declared = validate_states(states)?;
    validate_initial_state(initial_state, &declared)?;
    validate_final_states(final_states, &declared)?;
    validate_transitions(transitions, &declared)
}

/// Check that every input belongs to the admissible symbols.
///
/// Fails with [`ValidationError::InvalidInput`] naming the first symbol, in
/// sequence order, that is not admissible. An empty sequence is always valid.
///
/// # Example
///
/// ```rust
/// use finite_automaton::validation::{validate_inputs, ValidationError};
///
/// let alphabet = ["0", "1"];
///
/// assert!(validate_inputs(&["1", "0", "1"], &alphabet).is_ok());
/// assert_eq!(
///     validate_inputs(&["1", "2", "3"], &alphabet),
///     Err(ValidationError::InvalidInput("2".into()))
/// );
/// ```
pub fn validate_inputs<I, A>(inputs: &[I], admissible: &[A]) -> Result<(), ValidationError>
where
    I: AsRef<str>,
    A: AsRef<str>,
{
    match first_inadmissible(inputs, admissible) {
        Some(symbol) => Err(ValidationError::InvalidInput(symbol.to_string())),
        None => Ok(()),
    }
}

/// Find the first input that is not among the admissible symbols.
pub(crate) fn first_inadmissible<'a, I, A>(inputs: &'a [I], admissible: &[A]) -> Option<&'a str>
where
    I: AsRef<str>,
    A: AsRef<str>,
{
    let admissible: HashSet<&str> = admissible.iter().map(AsRef::as_ref).collect();
    inputs
        .iter()
        .map(AsRef::as_ref)
        .find(|symbol| !admissible.contains(symbol))
}

fn validate_states<Q: AsRef<str>>(states: &[Q]) -> Result<HashSet<&str>, ValidationError> {
    if states.is_empty() {
        return Err(ValidationError::StatesNotDefined);
    }

    let mut declared = HashSet::with_capacity(states.len());
    for state in states.iter().map(AsRef::as_ref) {
        if !declared.insert(state) {
            return Err(ValidationError::DuplicateState(state.to_string()));
        }
    }

    Ok(declared)
}

fn validate_initial_state(
    initial_state: &str,
    declared: &HashSet<&str>,
) -> Result<(), ValidationError> {
    if initial_state.is_empty() {
        return Err(ValidationError::InitialStateNotDefined);
    }

    if !declared.contains(initial_state) {
        return Err(ValidationError::InvalidInitialState(
            initial_state.to_string(),
        ));
    }

    Ok(())
}

fn validate_final_states<F: AsRef<str>>(
    final_states: &[F],
    declared: &HashSet<&str>,
) -> Result<(), ValidationError> {
    if final_states.is_empty() {
        return Err(ValidationError::FinalStatesNotDefined);
    }

    match final_states
        .iter()
        .map(AsRef::as_ref)
        .find(|state| !declared.contains(state))
    {
        Some(state) => Err(ValidationError::InvalidFinalState(state.to_string())),
        None => Ok(()),
    }
}

fn validate_transitions(
    transitions: &[Transition],
    declared: &HashSet<&str>,
) -> Result<(), ValidationError> {
    if transitions.is_empty() {
        return Err(ValidationError::TransitionsNotDefined);
    }

    for transition in transitions {
        // start is reported before result
        for state in [&transition.start_state, &transition.result_state] {
            if !declared.contains(state.as_str()) {
                return Err(ValidationError::InvalidTransitionState(state.clone()));
            }
        }
    }

    Ok(())
}
