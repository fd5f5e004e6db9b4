//! Basic Counter
//!
//! Drives the counter through its whole transition table and prints the
//! rendered view after every step.
//!
//! Run with: cargo run --example basic_counter

use tally::{CounterMachine, CounterState, Event};

fn main() {
    println!("=== Basic Counter Example ===\n");

    let mut machine = CounterMachine::new();
    machine.subscribe(|state: &CounterState| {
        println!("  -> counter={} show_error={}", state.counter(), state.show_error());
    });

    println!("{}\n", machine.view());

    for event in [
        Event::Decrement,
        Event::Increment,
        Event::Increment,
        Event::Decrement,
    ] {
        println!("{event}:");
        machine.dispatch(event);
        println!("{}\n", machine.view());
    }

    println!("Path through states:");
    for state in machine.history().get_path() {
        println!("  ({}, {})", state.counter(), state.show_error());
    }

    println!("\n=== Example Complete ===");
}
