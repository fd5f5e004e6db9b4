//! The owning shell around the counter state machine.
//!
//! The pure transitions live in [`crate::counter`]. This module adds what a
//! host needs on top: one owned state, history, logging, and synchronous
//! observer refresh after every transition.

mod observer;
mod shell;

pub use observer::Observer;
pub use shell::{CounterMachine, DEFAULT_HISTORY_LIMIT};
