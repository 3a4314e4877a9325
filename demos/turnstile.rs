//! Turnstile Automaton
//!
//! This example models a coin-operated turnstile and shows the error kinds
//! an execution can end with.
//!
//! Key concepts:
//! - Declarative definition with the `automaton!` macro
//! - Validation errors for malformed definitions
//! - Accepting, rejecting, and missing-transition outcomes
//!
//! Run with: cargo run --example turnstile

use finite_automaton::{automaton, AutomatonBuilder};

fn main() {
    println!("=== Turnstile Automaton ===\n");

    let turnstile = automaton! {
        states: [Locked, Unlocked],
        initial: Locked,
        final: [Locked],
        transitions: [
            (Locked, "coin", Unlocked),
            (Locked, "push", Locked),
            (Unlocked, "push", Locked),
        ]
    }
    .expect("definition is valid");

    let sessions: [&[&str]; 4] = [
        &["coin", "push"],
        &["push", "push"],
        &["coin"],
        &["coin", "coin"],
    ];

    for inputs in sessions {
        match turnstile.execute(inputs) {
            Ok(state) => println!("{inputs:?}: accepted in {state}"),
            Err(err) => println!("{inputs:?}: {err}"),
        }
    }

    println!("\nMalformed definitions never become automata:");
    let result = AutomatonBuilder::new()
        .states(["Locked", "Unlocked"])
        .initial_state("Open")
        .build();
    if let Err(err) = result {
        println!("  {err}");
    }

    println!("\n=== Example Complete ===");
}
