//! View lookup errors.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("no element with test id '{test_id}' is rendered")]
    UnknownElement { test_id: String },

    #[error("element '{test_id}' is not a control")]
    NotAControl { test_id: String },

    #[error("failed to serialize view: {0}")]
    Serialize(String),
}
