//! Errors raised while building a counter machine.

use thiserror::Error;

/// A single problem with the builder's configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("initial counter {value} is below zero")]
    NegativeCounter { value: i64 },

    #[error("error flag set with counter {counter}; it can only be raised at zero")]
    UnreachableErrorFlag { counter: i64 },

    #[error("history limit must be at least 1")]
    ZeroHistoryLimit,
}

/// Every problem found by one call to `build()`, in check order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid counter machine configuration{}", joined(.errors))]
pub struct BuildErrors {
    errors: Vec<BuildError>,
}

impl BuildErrors {
    pub(crate) fn new(errors: Vec<BuildError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[BuildError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn contains(&self, error: &BuildError) -> bool {
        self.errors.contains(error)
    }
}

fn joined(errors: &[BuildError]) -> String {
    errors.iter().map(|e| format!("; {e}")).collect()
}
