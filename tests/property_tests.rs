//! Property-based tests for the counter state machine.
//!
//! These tests use proptest to check the transition rules over many
//! randomly generated event sequences.

use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tally::view::{CounterView, ERROR_TEXT};
use tally::{CounterMachine, CounterMachineBuilder, CounterState, Event, State};

prop_compose! {
    fn arbitrary_event()(variant in 0..2u8) -> Event {
        match variant {
            0 => Event::Increment,
            _ => Event::Decrement,
        }
    }
}

prop_compose! {
    fn reachable_state()(events in prop::collection::vec(arbitrary_event(), 0..64)) -> CounterState {
        events
            .into_iter()
            .fold(CounterState::new(), |state, event| state.apply(event))
    }
}

proptest! {
    #[test]
    fn error_flag_only_at_zero(state in reachable_state()) {
        if state.show_error() {
            prop_assert_eq!(state.counter(), 0);
        }
        prop_assert_eq!(state.is_error(), state.show_error());
    }

    #[test]
    fn increment_always_clears_flag(state in reachable_state()) {
        let next = state.increment();
        prop_assert!(!next.show_error());
        prop_assert_eq!(next.counter(), state.counter() + 1);
    }

    #[test]
    fn decrement_respects_floor(state in reachable_state()) {
        let next = state.decrement();
        if state.counter() == 0 {
            prop_assert_eq!(next, CounterState::rejected());
        } else {
            prop_assert_eq!(next.counter(), state.counter() - 1);
            prop_assert_eq!(next.show_error(), state.show_error());
        }
    }

    #[test]
    fn increment_then_decrement_restores_counter(state in reachable_state()) {
        let next = state.increment().decrement();
        prop_assert_eq!(next.counter(), state.counter());
        prop_assert!(!next.show_error());
    }

    #[test]
    fn machine_matches_pure_transitions(
        events in prop::collection::vec(arbitrary_event(), 0..64)
    ) {
        let mut machine = CounterMachine::new();
        let mut expected = CounterState::new();

        for event in &events {
            expected = expected.apply(*event);
            prop_assert_eq!(machine.dispatch(*event), expected);
        }

        prop_assert_eq!(machine.state(), &expected);
        prop_assert_eq!(machine.history().len(), events.len());
    }

    #[test]
    fn history_respects_limit(
        events in prop::collection::vec(arbitrary_event(), 0..64),
        limit in 1..16usize,
    ) {
        let mut machine = CounterMachineBuilder::new()
            .history_limit(limit)
            .build()
            .unwrap();
        for event in &events {
            machine.dispatch(*event);
        }

        prop_assert_eq!(machine.history().len(), events.len().min(limit));
        if let Some(last) = machine.history().last() {
            prop_assert_eq!(&last.to, machine.state());
        }
    }

    #[test]
    fn observers_see_every_state(
        events in prop::collection::vec(arbitrary_event(), 0..32)
    ) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut machine = CounterMachine::new();
        machine.subscribe(move |state: &CounterState| sink.borrow_mut().push(*state));

        let returned: Vec<CounterState> = events.iter().map(|e| machine.dispatch(*e)).collect();

        prop_assert_eq!(&*seen.borrow(), &returned);
    }

    #[test]
    fn view_shows_error_iff_flag(state in reachable_state()) {
        let view = CounterView::project(&state);

        let expected_error = state.show_error().then_some(ERROR_TEXT);
        prop_assert_eq!(view.error_message(), expected_error);
        let counter_text = state.counter().to_string();
        prop_assert!(view.counter_display().contains(&counter_text));
    }

    #[test]
    fn injected_counters_build_iff_non_negative(counter in -1000i64..1000) {
        let result = CounterMachineBuilder::new().initial_counter(counter).build();

        prop_assert_eq!(result.is_ok(), counter >= 0);
        if let Ok(machine) = result {
            prop_assert_eq!(machine.counter() as i64, counter);
            prop_assert!(!machine.show_error());
        }
    }
}
