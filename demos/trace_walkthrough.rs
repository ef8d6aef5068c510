//! Trace Walkthrough
//!
//! This example builds the automaton for "strings over {a, b} that end
//! with \"ab\" and contain 'a' exactly twice", prints its transition
//! table, and walks a few inputs through it step by step.
//!
//! Key concepts:
//! - Validated, immutable language specification
//! - Precomputed total transition table
//! - Step-by-step traces for visualization
//!
//! Run with: cargo run --example trace_walkthrough

use suffixcount::{Dfa, LanguageSpec};

fn main() {
    println!("=== Trace Walkthrough ===\n");

    let spec = LanguageSpec::new(['a', 'b'], "ab", 'a', 2).expect("spec is valid");
    let dfa = Dfa::new(spec).expect("spec is valid");

    println!("States:");
    for state in dfa.states() {
        let mut flags = Vec::new();
        if dfa.is_accepting(state) {
            flags.push("accepting");
        }
        if dfa.is_overflow(state) {
            flags.push("overflow");
        }
        println!("  {} {}", dfa.format_state(state), flags.join(" "));
    }

    println!("\nTransition table ({} edges):", dfa.transitions().len());
    for edge in dfa.transitions() {
        println!(
            "  {} --{}--> {}",
            dfa.format_state(edge.from),
            edge.symbol,
            dfa.format_state(edge.to)
        );
    }

    for input in ["baab", "aabab", "ba"] {
        println!("\nInput {input:?}:");
        for step in dfa.trace(input) {
            println!(
                "  {} --{}--> {}",
                dfa.format_state(step.from),
                step.symbol,
                dfa.format_state(step.to)
            );
        }
        match dfa.accepts(input) {
            Ok(accepted) => println!("  accepted: {accepted}"),
            Err(err) => println!("  error: {err}"),
        }
    }

    println!("\n=== Example Complete ===");
}
