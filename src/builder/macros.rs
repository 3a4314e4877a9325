//! Macros for concise automaton definitions.

/// Define and build an automaton in one expression.
///
/// State names are written as identifiers; inputs are any expression that
/// implements `ToString`. Expands to an [`AutomatonBuilder`] chain, so the
/// result is a `Result<Automaton, BuilderError>` and the definition is fully
/// validated.
///
/// [`AutomatonBuilder`]: crate::builder::AutomatonBuilder
///
/// # Example
///
/// ```
/// use finite_automaton::automaton;
///
/// let parity = automaton! {
///     states: [Even, Odd],
///     initial: Even,
///     final: [Even],
///     transitions: [
///         (Even, 1, Odd),
///         (Odd, 1, Even),
///         (Even, 0, Even),
///         (Odd, 0, Odd),
///     ]
/// }
/// .unwrap();
///
/// assert_eq!(parity.execute(&["1", "0", "1"]), Ok("Even"));
/// ```
#[macro_export]
macro_rules! automaton {
    (
        states: [$($state:ident),* $(,)?],
        initial: $initial:ident,
        final: [$($final:ident),* $(,)?],
        transitions: [$(($from:ident, $input:expr, $to:ident)),* $(,)?] $(,)?
    ) => {
        $crate::builder::AutomatonBuilder::new()
            $(.add_state(stringify!($state)))*
            .initial_state(stringify!($initial))
            $(.add_final_state(stringify!($final)))*
            $(.add_transition($crate::core::Transition::new(
                stringify!($from),
                ::std::string::ToString::to_string(&$input),
                stringify!($to),
            )))*
            .build()
    };
}

#[cfg(test)]
mod tests {
    use crate::automaton::ExecutionError;
    use crate::builder::BuilderError;
    use crate::validation::ValidationError;

    #[test]
    fn automaton_macro_builds_and_executes() {
        let automaton = automaton! {
            states: [S0, S1, S2],
            initial: S0,
            final: [S2],
            transitions: [
                (S0, "a", S1),
                (S1, "b", S2),
            ],
        }
        .unwrap();

        assert_eq!(automaton.execute(&["a", "b"]), Ok("S2"));
        assert_eq!(
            automaton.execute(&["a"]),
            Err(ExecutionError::NotAFinalState("S1".into()))
        );
    }

    #[test]
    fn automaton_macro_accepts_numeric_inputs() {
        let automaton = automaton! {
            states: [Off, On],
            initial: Off,
            final: [On],
            transitions: [(Off, 1, On), (On, 0, Off)]
        }
        .unwrap();

        assert_eq!(automaton.alphabet(), &["1".to_string(), "0".to_string()]);
    }

    #[test]
    fn automaton_macro_validates_definition() {
        let result = automaton! {
            states: [A, B],
            initial: A,
            final: [C],
            transitions: [(A, "x", B)]
        };

        assert!(matches!(
            result,
            Err(BuilderError::Validation(ValidationError::InvalidFinalState(name)))
                if name == "C"
        ));
    }

    #[test]
    fn automaton_macro_with_no_transitions_is_rejected() {
        let result = automaton! {
            states: [A],
            initial: A,
            final: [A],
            transitions: []
        };

        assert!(matches!(
            result,
            Err(BuilderError::Validation(ValidationError::TransitionsNotDefined))
        ));
    }
}
