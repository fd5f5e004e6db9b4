//! Fluent construction of counter machines.
//!
//! The builder is the one place a starting state can be injected. Injected
//! values are checked here, so a built machine only ever holds reachable
//! states.

pub mod error;
pub mod machine;

pub use error::{BuildError, BuildErrors};
pub use machine::CounterMachineBuilder;
