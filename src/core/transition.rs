//! Transition triples and helpers over transition tables.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single edge of the transition table: `start_state --input--> result_state`.
///
/// Transitions are supplied as an ordered list. When two transitions share
/// the same `start_state` and `input`, the later one wins.
///
/// # Example
///
/// ```rust
/// use finite_automaton::core::Transition;
///
/// let t = Transition::new("S0", "1", "S1");
/// assert_eq!(t.start_state, "S0");
/// assert_eq!(t.input, "1");
/// assert_eq!(t.result_state, "S1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    /// The state the transition leaves from
    pub start_state: String,
    /// The symbol consumed by the transition
    pub input: String,
    /// The state the transition leads to
    pub result_state: String,
}

impl Transition {
    /// Create a transition from anything string-like.
    pub fn new(
        start_state: impl Into<String>,
        input: impl Into<String>,
        result_state: impl Into<String>,
    ) -> Self {
        Self {
            start_state: start_state.into(),
            input: input.into(),
            result_state: result_state.into(),
        }
    }
}

impl<A, B, C> From<(A, B, C)> for Transition
where
    A: Into<String>,
    B: Into<String>,
    C: Into<String>,
{
    fn from((start_state, input, result_state): (A, B, C)) -> Self {
        Self::new(start_state, input, result_state)
    }
}

/// Collect the distinct inputs of a transition table.
///
/// Inputs are returned in order of first occurrence.
///
/// # Example
///
/// ```rust
/// use finite_automaton::core::{inputs_of, Transition};
///
/// let transitions = vec![
///     Transition::new("a", "1", "b"),
///     Transition::new("b", "0", "a"),
///     Transition::new("a", "1", "a"),
/// ];
///
/// assert_eq!(inputs_of(&transitions), vec!["1", "0"]);
/// ```
pub fn inputs_of(transitions: &[Transition]) -> Vec<String> {
    let mut seen = HashSet::new();
    transitions
        .iter()
        .filter(|t| seen.insert(t.input.as_str()))
        .map(|t| t.input.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_owned_and_borrowed() {
        let owned = Transition::new(String::from("s1"), "x", String::from("s2"));
        let borrowed = Transition::new("s1", "x", "s2");

        assert_eq!(owned, borrowed);
    }

    #[test]
    fn from_tuple_matches_new() {
        let t: Transition = ("s1", "1", "s2").into();
        assert_eq!(t, Transition::new("s1", "1", "s2"));
    }

    #[test]
    fn inputs_of_empty_table_is_empty() {
        assert!(inputs_of(&[]).is_empty());
    }

    #[test]
    fn inputs_of_keeps_first_occurrence_order() {
        let transitions = vec![
            Transition::new("s1", "b", "s1"),
            Transition::new("s1", "a", "s2"),
            Transition::new("s2", "b", "s1"),
            Transition::new("s2", "c", "s2"),
            Transition::new("s2", "a", "s2"),
        ];

        assert_eq!(inputs_of(&transitions), vec!["b", "a", "c"]);
    }

    #[test]
    fn transition_serializes_with_field_names() {
        let t = Transition::new("s1", "0", "s2");
        let json = serde_json::to_value(&t).unwrap();

        assert_eq!(json["start_state"], "s1");
        assert_eq!(json["input"], "0");
        assert_eq!(json["result_state"], "s2");

        let back: Transition = serde_json::from_value(json).unwrap();
        assert_eq!(back, t);
    }
}
