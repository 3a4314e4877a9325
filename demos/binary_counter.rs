//! Binary Remainder Automaton
//!
//! This example tracks the remainder of a binary number modulo three while
//! its digits are read most significant first.
//!
//! Key concepts:
//! - Defining an automaton with the fluent builder
//! - Tracing the states visited for an input
//! - Strict execution rejecting symbols outside the alphabet
//!
//! Run with: cargo run --example binary_counter

use finite_automaton::{AutomatonBuilder, ExecutionError};

fn main() {
    println!("=== Binary Remainder Automaton ===\n");

    let automaton = AutomatonBuilder::new()
        .states(["S0", "S1", "S2"])
        .initial_state("S0")
        .final_states(["S0"])
        .transitions([
            ("S0", "0", "S0"),
            ("S0", "1", "S1"),
            ("S1", "0", "S2"),
            ("S1", "1", "S0"),
            ("S2", "0", "S1"),
            ("S2", "1", "S2"),
        ])
        .build()
        .expect("definition is valid");

    println!("Alphabet: {:?}\n", automaton.alphabet());

    for number in [6u32, 7, 9, 12, 13] {
        let digits: Vec<String> = format!("{number:b}").chars().map(String::from).collect();

        match automaton.trace(&digits) {
            Ok(run) => {
                let verdict = if run.is_accepted() {
                    "divisible by 3"
                } else {
                    "not divisible by 3"
                };
                println!(
                    "{number:>3} = {:>5}  path: {}  -> {verdict}",
                    digits.concat(),
                    run.names().join(" -> ")
                );
            }
            Err(err) => println!("{number:>3}: {err}"),
        }
    }

    println!("\nInputs outside the alphabet are rejected before any step:");
    match automaton.execute(&["1", "2"]) {
        Err(ExecutionError::InvalidInput(symbol)) => println!("  rejected symbol {symbol:?}"),
        other => println!("  unexpected result: {other:?}"),
    }

    println!("\n=== Example Complete ===");
}
