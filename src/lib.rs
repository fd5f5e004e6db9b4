//! Tally: a counter that never goes below zero.
//!
//! The counter is a small state machine with a pure core and an imperative
//! shell. Transitions are pure functions on [`CounterState`] values; the
//! [`CounterMachine`] shell owns one state, records history, logs through
//! `tracing` and refreshes observers after each transition. Hosts render
//! [`view::CounterView`], a pure projection of the current state.
//!
//! # Core Concepts
//!
//! - **Counter**: `increment` adds one and clears the error flag; `decrement`
//!   subtracts one, or raises the error flag when already at zero
//! - **Machine**: single owner of the state, with observers and history
//! - **Builder**: validated construction from an injected starting state
//! - **View**: elements addressed by test id, including the two controls
//!
//! # Example
//!
//! ```rust
//! use tally::view::{ERROR_TEXT, INCREMENT_BUTTON};
//! use tally::{CounterMachine, CounterState};
//!
//! let mut machine = CounterMachine::new();
//!
//! machine.decrement();
//! assert_eq!(machine.state(), &CounterState::rejected());
//! assert_eq!(machine.view().error_message(), Some(ERROR_TEXT));
//!
//! machine.click(INCREMENT_BUTTON).unwrap();
//! assert_eq!(machine.counter(), 1);
//! assert!(machine.view().error_message().is_none());
//! ```

pub mod builder;
pub mod core;
pub mod counter;
pub mod machine;
pub mod view;

// Re-export commonly used types
pub use builder::{BuildError, BuildErrors, CounterMachineBuilder};
pub use crate::core::{State, StateHistory, StateTransition};
pub use counter::{CounterState, Event};
pub use machine::{CounterMachine, Observer};
pub use view::CounterView;
