//! Counter state and its transitions.

use super::event::Event;
use crate::core::State;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a deserialized state could never be reached through
/// transitions.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("error flag set with counter {counter}; only a rejected decrement at zero raises it")]
pub struct InvalidCounterState {
    pub counter: u64,
}

/// The counter value and the "cannot go below zero" flag.
///
/// The counter is unsigned, and the flag can only be raised while the
/// counter sits at zero, so every value of this type is reachable from
/// [`CounterState::new`].
///
/// # Example
///
/// ```rust
/// use tally::counter::CounterState;
///
/// let state = CounterState::new();
/// let state = state.decrement();
/// assert_eq!((state.counter(), state.show_error()), (0, true));
///
/// let state = state.increment();
/// assert_eq!((state.counter(), state.show_error()), (1, false));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCounterState", into = "RawCounterState")]
pub struct CounterState {
    counter: u64,
    show_error: bool,
}

impl CounterState {
    /// The initial state, `(0, false)`.
    pub const fn new() -> Self {
        Self {
            counter: 0,
            show_error: false,
        }
    }

    /// A state holding `counter` with the error flag cleared.
    pub const fn with_counter(counter: u64) -> Self {
        Self {
            counter,
            show_error: false,
        }
    }

    /// The state after a decrement was refused at zero, `(0, true)`.
    pub const fn rejected() -> Self {
        Self {
            counter: 0,
            show_error: true,
        }
    }

    pub const fn counter(&self) -> u64 {
        self.counter
    }

    pub const fn show_error(&self) -> bool {
        self.show_error
    }

    pub(crate) const fn is_at_floor(&self) -> bool {
        self.counter == 0
    }

    /// Add one and clear the error flag.
    ///
    /// Saturates at `u64::MAX`; there is no upper bound to report.
    #[must_use]
    pub const fn increment(self) -> Self {
        Self {
            counter: self.counter.saturating_add(1),
            show_error: false,
        }
    }

    /// Subtract one, or raise the error flag when already at zero.
    ///
    /// The flag is left as it was when the counter moves.
    #[must_use]
    pub const fn decrement(self) -> Self {
        match self.counter {
            0 => Self {
                show_error: true,
                ..self
            },
            n => Self {
                counter: n - 1,
                ..self
            },
        }
    }

    /// Apply an event.
    #[must_use]
    pub const fn apply(self, event: Event) -> Self {
        match event {
            Event::Increment => self.increment(),
            Event::Decrement => self.decrement(),
        }
    }
}

impl State for CounterState {
    fn name(&self) -> &str {
        if self.show_error {
            "rejected"
        } else {
            "counting"
        }
    }

    fn is_error(&self) -> bool {
        self.show_error
    }
}

#[derive(Serialize, Deserialize)]
struct RawCounterState {
    counter: u64,
    show_error: bool,
}

impl From<CounterState> for RawCounterState {
    fn from(state: CounterState) -> Self {
        Self {
            counter: state.counter,
            show_error: state.show_error,
        }
    }
}

impl TryFrom<RawCounterState> for CounterState {
    type Error = InvalidCounterState;

    fn try_from(raw: RawCounterState) -> Result<Self, Self::Error> {
        if raw.show_error && raw.counter > 0 {
            return Err(InvalidCounterState {
                counter: raw.counter,
            });
        }
        Ok(Self {
            counter: raw.counter,
            show_error: raw.show_error,
        })
    }
}
