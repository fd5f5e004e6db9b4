//! The `State` trait shared by every machine state in the crate.
//!
//! States are plain values. Inspecting them never has side effects, which
//! keeps the transition logic testable without a host.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: history keeps a copy of both ends of every transition
/// - `PartialEq`: tests and observers compare states
/// - `Debug`: states appear in log fields
/// - `Serialize` + `Deserialize`: history and views are exported as JSON
///
/// # Example
///
/// ```rust
/// use tally::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Lamp {
///     Off,
///     On,
///     Burnt,
/// }
///
/// impl State for Lamp {
///     fn name(&self) -> &str {
///         match self {
///             Self::Off => "off",
///             Self::On => "on",
///             Self::Burnt => "burnt",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Burnt)
///     }
/// }
///
/// assert_eq!(Lamp::On.name(), "on");
/// assert!(Lamp::Burnt.is_final());
/// assert!(!Lamp::Burnt.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Short name used in logs and text output.
    fn name(&self) -> &str;

    /// Whether the machine stops accepting events in this state.
    ///
    /// Defaults to `false`; machines that run for a whole session never
    /// reach a final state.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether this state should be surfaced to the user as an error.
    ///
    /// Defaults to `false`.
    fn is_error(&self) -> bool {
        false
    }
}
