//! Builder for counter machines.

use crate::builder::error::{BuildError, BuildErrors};
use crate::counter::CounterState;
use crate::machine::{CounterMachine, Observer, DEFAULT_HISTORY_LIMIT};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for [`CounterMachine`] with a fluent API.
///
/// Validation accumulates every problem instead of stopping at the first.
///
/// # Example
///
/// ```rust
/// use tally::builder::{BuildError, CounterMachineBuilder};
///
/// let machine = CounterMachineBuilder::new()
///     .initial_counter(7)
///     .history_limit(16)
///     .build()
///     .unwrap();
/// assert_eq!(machine.counter(), 7);
///
/// let errors = CounterMachineBuilder::new()
///     .initial_counter(-1)
///     .history_limit(0)
///     .build()
///     .unwrap_err();
/// assert_eq!(errors.len(), 2);
/// assert!(errors.contains(&BuildError::NegativeCounter { value: -1 }));
/// ```
pub struct CounterMachineBuilder {
    initial_counter: i64,
    show_error: bool,
    history_limit: usize,
    observers: Vec<Box<dyn Observer>>,
}

impl CounterMachineBuilder {
    pub fn new() -> Self {
        Self {
            initial_counter: 0,
            show_error: false,
            history_limit: DEFAULT_HISTORY_LIMIT,
            observers: Vec::new(),
        }
    }

    /// Inject the starting counter. Must not be negative.
    pub fn initial_counter(mut self, counter: i64) -> Self {
        self.initial_counter = counter;
        self
    }

    /// Inject the starting error flag. Only valid with a zero counter.
    pub fn show_error(mut self, show_error: bool) -> Self {
        self.show_error = show_error;
        self
    }

    /// Number of most recent transitions kept in history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Subscribe an observer before the first transition.
    pub fn observer<O>(mut self, observer: O) -> Self
    where
        O: Observer + 'static,
    {
        self.observers.push(Box::new(observer));
        self
    }

    /// Check the configuration, collecting ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let checks = vec![
            self.check_counter(),
            self.check_error_flag(),
            self.check_history_limit(),
        ];
        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the machine, or report every configuration problem.
    pub fn build(self) -> Result<CounterMachine, BuildErrors> {
        if let Validation::Failure(errors) = self.validate() {
            return Err(BuildErrors::new(errors.iter().cloned().collect()));
        }

        // validated: counter >= 0, and the flag only accompanies zero
        let initial = if self.show_error {
            CounterState::rejected()
        } else {
            CounterState::with_counter(self.initial_counter.unsigned_abs())
        };

        Ok(CounterMachine::from_parts(
            initial,
            self.history_limit,
            self.observers,
        ))
    }

    fn check_counter(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        if self.initial_counter < 0 {
            Validation::fail(BuildError::NegativeCounter {
                value: self.initial_counter,
            })
        } else {
            Validation::success(())
        }
    }

    fn check_error_flag(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        if self.show_error && self.initial_counter > 0 {
            Validation::fail(BuildError::UnreachableErrorFlag {
                counter: self.initial_counter,
            })
        } else {
            Validation::success(())
        }
    }

    fn check_history_limit(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        if self.history_limit == 0 {
            Validation::fail(BuildError::ZeroHistoryLimit)
        } else {
            Validation::success(())
        }
    }
}

impl Default for CounterMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn defaults_build_initial_machine() {
        let machine = CounterMachineBuilder::new().build().unwrap();

        assert_eq!(machine.state(), &CounterState::new());
        assert_eq!(machine.history_limit(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn injected_counter_is_used() {
        let machine = CounterMachineBuilder::new()
            .initial_counter(7)
            .build()
            .unwrap();

        assert_eq!(machine.state(), &CounterState::with_counter(7));
    }

    #[test]
    fn injected_error_flag_at_zero_is_accepted() {
        let mut machine = CounterMachineBuilder::new()
            .show_error(true)
            .build()
            .unwrap();

        assert_eq!(machine.state(), &CounterState::rejected());
        assert_eq!(machine.increment(), CounterState::with_counter(1));
    }

    #[test]
    fn negative_counter_is_rejected() {
        let result = CounterMachineBuilder::new().initial_counter(-1).build();

        let errors = result.unwrap_err();
        assert_eq!(
            errors.errors(),
            &[BuildError::NegativeCounter { value: -1 }]
        );
    }

    #[test]
    fn error_flag_above_zero_is_rejected() {
        let errors = CounterMachineBuilder::new()
            .initial_counter(3)
            .show_error(true)
            .build()
            .unwrap_err();

        assert_eq!(
            errors.errors(),
            &[BuildError::UnreachableErrorFlag { counter: 3 }]
        );
    }

    #[test]
    fn zero_history_limit_is_rejected() {
        let errors = CounterMachineBuilder::new()
            .history_limit(0)
            .build()
            .unwrap_err();

        assert!(errors.contains(&BuildError::ZeroHistoryLimit));
    }

    #[test]
    fn validation_accumulates_all_errors() {
        let builder = CounterMachineBuilder::new()
            .initial_counter(-5)
            .history_limit(0);

        match builder.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, BuildError::NegativeCounter { value: -5 })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, BuildError::ZeroHistoryLimit)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn valid_configuration_validates() {
        let builder = CounterMachineBuilder::new().initial_counter(2).history_limit(4);
        assert!(builder.validate().is_success());
    }

    #[test]
    fn errors_render_in_check_order() {
        let errors = CounterMachineBuilder::new()
            .initial_counter(4)
            .show_error(true)
            .history_limit(0)
            .build()
            .unwrap_err();

        assert_eq!(
            errors.to_string(),
            "invalid counter machine configuration; \
             error flag set with counter 4; it can only be raised at zero; \
             history limit must be at least 1"
        );
    }

    #[test]
    fn errors_box_as_std_error() {
        let errors = CounterMachineBuilder::new()
            .initial_counter(-2)
            .build()
            .unwrap_err();
        let boxed: Box<dyn std::error::Error> = Box::new(errors);

        assert_eq!(
            boxed.to_string(),
            "invalid counter machine configuration; initial counter -2 is below zero"
        );
    }

    #[test]
    fn history_limit_bounds_recorded_transitions() {
        let mut machine = CounterMachineBuilder::new()
            .history_limit(2)
            .build()
            .unwrap();
        for _ in 0..5 {
            machine.increment();
        }

        assert_eq!(machine.history().len(), 2);
        assert_eq!(machine.history().last().unwrap().to.counter(), 5);
    }

    #[test]
    fn pre_subscribed_observers_are_refreshed() {
        let refreshes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&refreshes);
        let mut machine = CounterMachineBuilder::new()
            .observer(move |_: &CounterState| counter.set(counter.get() + 1))
            .build()
            .unwrap();

        machine.decrement();
        machine.increment();

        assert_eq!(refreshes.get(), 2);
        assert_eq!(machine.observer_count(), 1);
    }
}
