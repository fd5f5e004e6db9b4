//! Counter machine: one owned state, history and observers.

use super::observer::Observer;
use crate::builder::CounterMachineBuilder;
use crate::core::{State, StateHistory, StateTransition};
use crate::counter::{CounterState, Event};
use crate::view::{CounterView, ViewError};
use chrono::Utc;
use std::fmt;
use tracing::{debug, trace};
use uuid::Uuid;

/// Number of history records kept unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// Single owning handle over a [`CounterState`].
///
/// Every transition takes `&mut self` and runs to completion: the state is
/// updated, the transition recorded, then each observer refreshed.
pub struct CounterMachine {
    id: Uuid,
    current: CounterState,
    history: StateHistory<CounterState>,
    history_limit: usize,
    observers: Vec<Box<dyn Observer>>,
}

impl CounterMachine {
    /// Create a machine in the initial state `(0, false)`.
    pub fn new() -> Self {
        Self::from_parts(CounterState::new(), DEFAULT_HISTORY_LIMIT, Vec::new())
    }

    /// Start configuring a machine, e.g. with an injected starting state.
    pub fn builder() -> CounterMachineBuilder {
        CounterMachineBuilder::new()
    }

    pub(crate) fn from_parts(
        initial: CounterState,
        history_limit: usize,
        observers: Vec<Box<dyn Observer>>,
    ) -> Self {
        let machine = Self {
            id: Uuid::new_v4(),
            current: initial,
            history: StateHistory::new(),
            history_limit,
            observers,
        };
        debug!(
            session = %machine.id,
            counter = initial.counter(),
            show_error = initial.show_error(),
            history_limit,
            "counter machine created"
        );
        machine
    }

    /// Session id attached to this machine's log records.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> &CounterState {
        &self.current
    }

    pub fn counter(&self) -> u64 {
        self.current.counter()
    }

    pub fn show_error(&self) -> bool {
        self.current.show_error()
    }

    pub fn history(&self) -> &StateHistory<CounterState> {
        &self.history
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Add one and clear the error flag.
    pub fn increment(&mut self) -> CounterState {
        self.dispatch(Event::Increment)
    }

    /// Subtract one, or raise the error flag when already at zero.
    pub fn decrement(&mut self) -> CounterState {
        self.dispatch(Event::Decrement)
    }

    /// Apply `event`, record it and refresh observers. Returns the new state.
    pub fn dispatch(&mut self, event: Event) -> CounterState {
        let from = self.current;
        let to = from.apply(event);

        if event == Event::Decrement && from.is_at_floor() {
            debug!(session = %self.id, "decrement rejected at zero");
        }
        debug!(
            session = %self.id,
            %event,
            from = ?from,
            to = ?to,
            "counter transition"
        );

        self.history.push_bounded(
            StateTransition {
                from,
                to,
                event: event.name().to_string(),
                timestamp: Utc::now(),
            },
            self.history_limit,
        );
        self.current = to;
        self.notify();
        to
    }

    /// Register an observer for every later transition.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: Observer + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Projection of the current state for the host to render.
    pub fn view(&self) -> CounterView {
        CounterView::project(&self.current)
    }

    /// Activate the control rendered under `test_id`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::CounterMachine;
    /// use tally::view::{DECREMENT_BUTTON, ERROR_TEXT};
    ///
    /// let mut machine = CounterMachine::new();
    /// machine.click(DECREMENT_BUTTON).unwrap();
    /// assert_eq!(machine.view().error_message(), Some(ERROR_TEXT));
    /// ```
    pub fn click(&mut self, test_id: &str) -> Result<CounterState, ViewError> {
        let event = self.view().event_for(test_id)?;
        Ok(self.dispatch(event))
    }

    fn notify(&mut self) {
        let state = self.current;
        for observer in &mut self.observers {
            observer.refresh(&state);
        }
        trace!(
            session = %self.id,
            state = state.name(),
            observers = self.observers.len(),
            "observers refreshed"
        );
    }
}

impl Default for CounterMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CounterMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterMachine")
            .field("id", &self.id)
            .field("current", &self.current)
            .field("history", &self.history.len())
            .field("history_limit", &self.history_limit)
            .field("observers", &self.observers.len())
            .finish()
    }
}
