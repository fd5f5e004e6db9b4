//! State-machine primitives shared by the counter.
//!
//! - States via the `State` trait
//! - Immutable history of applied transitions
//!
//! Nothing in this module performs side effects.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
