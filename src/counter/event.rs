//! Events accepted by the counter.

use crate::view::{DECREMENT_BUTTON, INCREMENT_BUTTON};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown counter event '{input}', expected 'increment' or 'decrement'")]
pub struct ParseEventError {
    pub input: String,
}

/// A parameterless command a host issues on user action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    Increment,
    Decrement,
}

impl Event {
    pub const ALL: [Event; 2] = [Event::Increment, Event::Decrement];

    /// Stable name used in history records and logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses event names, the control test ids, the short forms `inc`/`dec`
/// and `+`/`-`, ignoring case and surrounding whitespace.
///
/// ```rust
/// use tally::counter::Event;
///
/// assert_eq!("Increment".parse::<Event>().unwrap(), Event::Increment);
/// assert_eq!("decrement-button".parse::<Event>().unwrap(), Event::Decrement);
/// assert_eq!(" - ".parse::<Event>().unwrap(), Event::Decrement);
/// assert!("reset".parse::<Event>().is_err());
/// ```
impl FromStr for Event {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "increment" | INCREMENT_BUTTON | "inc" | "+" => Ok(Self::Increment),
            "decrement" | DECREMENT_BUTTON | "dec" | "-" => Ok(Self::Decrement),
            _ => Err(ParseEventError {
                input: s.to_string(),
            }),
        }
    }
}
