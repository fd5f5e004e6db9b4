//! Transition history.
//!
//! `record` and `record_bounded` return a new history and leave the old one
//! untouched; `push_bounded` appends in place for the single owner.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use tally::core::StateTransition;
/// use tally::counter::{CounterState, Event};
/// use chrono::Utc;
///
/// let from = CounterState::new();
/// let transition = StateTransition {
///     from,
///     to: from.increment(),
///     event: Event::Increment.name().to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to.counter(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// State before the event
    pub from: S,
    /// State after the event
    pub to: S,
    /// Name of the event that caused the transition
    pub event: String,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of transitions, oldest first.
///
/// # Example
///
/// ```rust
/// use tally::core::{StateHistory, StateTransition};
/// use tally::counter::{CounterState, Event};
/// use chrono::Utc;
///
/// let start = CounterState::new();
/// let history = StateHistory::new().record(StateTransition {
///     from: start,
///     to: start.decrement(),
///     event: Event::Decrement.name().to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 2);
/// assert!(path[1].show_error());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Record a transition, keeping only the `limit` most recent records.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tally::core::{StateHistory, StateTransition};
    /// use tally::counter::{CounterState, Event};
    /// use chrono::Utc;
    ///
    /// let mut state = CounterState::new();
    /// let mut history = StateHistory::new();
    /// for _ in 0..5 {
    ///     let next = state.increment();
    ///     history = history.record_bounded(
    ///         StateTransition {
    ///             from: state,
    ///             to: next,
    ///             event: Event::Increment.name().to_string(),
    ///             timestamp: Utc::now(),
    ///         },
    ///         3,
    ///     );
    ///     state = next;
    /// }
    ///
    /// assert_eq!(history.len(), 3);
    /// assert_eq!(history.transitions()[0].from.counter(), 2);
    /// ```
    pub fn record_bounded(&self, transition: StateTransition<S>, limit: usize) -> Self {
        let mut history = self.clone();
        history.push_bounded(transition, limit);
        history
    }

    /// In-place form of [`record_bounded`](Self::record_bounded) for an
    /// owner that holds the only copy of the history.
    pub fn push_bounded(&mut self, transition: StateTransition<S>, limit: usize) {
        self.transitions.push(transition);
        if self.transitions.len() > limit {
            let excess = self.transitions.len() - limit;
            self.transitions.drain(..excess);
        }
    }

    /// States traversed: the `from` of the oldest record, then the `to`
    /// of every record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Time between the oldest and newest record, `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All records, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Most recent record.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
