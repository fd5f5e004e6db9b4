//! The counter state machine.
//!
//! Two values of state and two parameterless events:
//!
//! | counter | event       | new counter | new show_error |
//! |---------|-------------|-------------|----------------|
//! | 0       | `Decrement` | 0           | `true`         |
//! | n > 0   | `Decrement` | n - 1       | unchanged      |
//! | any n   | `Increment` | n + 1       | `false`        |
//!
//! Transitions are pure functions from one [`CounterState`] to the next and
//! cannot fail. Hitting the zero floor is an ordinary transition that raises
//! the error flag.

mod event;
mod state;

pub use event::{Event, ParseEventError};
pub use state::{CounterState, InvalidCounterState};
