//! Terminal Counter
//!
//! A line-oriented host for the counter. Type `+`/`-`, an event name, or a
//! button test id (`increment-button`) and the view is redrawn. `json`
//! prints the view model, `q` quits.
//!
//! Logs go to stderr; try `RUST_LOG=tally=debug`.
//!
//! Run with: cargo run --example terminal_counter

use std::io::{self, BufRead, Write};
use tally::view::CounterView;
use tally::{CounterMachine, CounterState, Event};
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut machine = CounterMachine::new();
    machine.subscribe(|state: &CounterState| {
        println!("\n{}", CounterView::project(state));
    });

    println!("{}", machine.view());
    prompt()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let input = line.trim();
        match input {
            "" => {}
            "q" | "quit" => break,
            "json" => match machine.view().to_json() {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("error: {e}"),
            },
            _ => {
                if let Ok(event) = input.parse::<Event>() {
                    machine.dispatch(event);
                } else if let Err(e) = machine.click(input) {
                    eprintln!("error: {e}");
                }
            }
        }
        prompt()?;
    }

    println!("{} transitions", machine.history().len());
    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
