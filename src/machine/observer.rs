//! Observers refreshed after each transition.

use crate::counter::CounterState;

/// Receives the new state after every transition.
///
/// Refreshes run synchronously, in subscription order, before the
/// transition call returns. Closures taking `&CounterState` are observers.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use tally::CounterMachine;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
///
/// let mut machine = CounterMachine::new();
/// machine.subscribe(move |state: &tally::CounterState| sink.borrow_mut().push(state.counter()));
/// machine.increment();
/// machine.increment();
///
/// assert_eq!(*seen.borrow(), vec![1, 2]);
/// ```
pub trait Observer {
    fn refresh(&mut self, state: &CounterState);
}

impl<F> Observer for F
where
    F: FnMut(&CounterState),
{
    fn refresh(&mut self, state: &CounterState) {
        self(state)
    }
}
