//! Presentation projection of the counter.
//!
//! [`CounterView`] is what a host renders. It is a pure function of
//! [`CounterState`]: elements carry stable test ids so hosts and tests can
//! address them, and the two buttons carry the [`Event`] they trigger.

mod error;

pub use error::ViewError;

use crate::counter::{CounterState, Event};
use serde::Serialize;
use std::fmt;

pub const COMPONENT_APP: &str = "component-app";
pub const COUNTER_DISPLAY: &str = "counter-display";
pub const ERROR_MESSAGE: &str = "error-message";
pub const INCREMENT_BUTTON: &str = "increment-button";
pub const DECREMENT_BUTTON: &str = "decrement-button";

/// Text shown while the error flag is raised.
pub const ERROR_TEXT: &str = "Counter cannot go below zero";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "event", rename_all = "lowercase")]
pub enum ElementKind {
    Container,
    Heading,
    Paragraph,
    Button(Event),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Element {
    pub test_id: &'static str,
    pub kind: ElementKind,
    pub text: String,
}

impl Element {
    /// Event this element triggers when activated, if it is a control.
    pub fn event(&self) -> Option<Event> {
        match self.kind {
            ElementKind::Button(event) => Some(event),
            _ => None,
        }
    }
}

/// Rendered form of one counter state.
///
/// # Example
///
/// ```rust
/// use tally::counter::CounterState;
/// use tally::view::{CounterView, ERROR_TEXT};
///
/// let view = CounterView::project(&CounterState::new().decrement());
/// assert_eq!(view.counter_display(), "The counter is currently 0");
/// assert_eq!(view.error_message(), Some(ERROR_TEXT));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CounterView {
    elements: Vec<Element>,
}

impl CounterView {
    pub fn project(state: &CounterState) -> Self {
        let mut elements = vec![
            Element {
                test_id: COMPONENT_APP,
                kind: ElementKind::Container,
                text: String::new(),
            },
            Element {
                test_id: COUNTER_DISPLAY,
                kind: ElementKind::Heading,
                text: format!("The counter is currently {}", state.counter()),
            },
        ];
        if state.show_error() {
            elements.push(Element {
                test_id: ERROR_MESSAGE,
                kind: ElementKind::Paragraph,
                text: ERROR_TEXT.to_string(),
            });
        }
        elements.push(Element {
            test_id: INCREMENT_BUTTON,
            kind: ElementKind::Button(Event::Increment),
            text: "Increment counter".to_string(),
        });
        elements.push(Element {
            test_id: DECREMENT_BUTTON,
            kind: ElementKind::Button(Event::Decrement),
            text: "Decrement counter".to_string(),
        });
        Self { elements }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Element carrying `test_id`, if rendered.
    pub fn find(&self, test_id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.test_id == test_id)
    }

    pub fn counter_display(&self) -> &str {
        self.find(COUNTER_DISPLAY)
            .map(|e| e.text.as_str())
            .unwrap_or_default()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.find(ERROR_MESSAGE).map(|e| e.text.as_str())
    }

    /// Resolve a control's test id to the event it triggers.
    pub fn event_for(&self, test_id: &str) -> Result<Event, ViewError> {
        let element = self.find(test_id).ok_or_else(|| ViewError::UnknownElement {
            test_id: test_id.to_string(),
        })?;
        element.event().ok_or_else(|| ViewError::NotAControl {
            test_id: test_id.to_string(),
        })
    }

    pub fn to_json(&self) -> Result<String, ViewError> {
        serde_json::to_string(self).map_err(|e| ViewError::Serialize(e.to_string()))
    }
}

/// One line per visible element; buttons as `[label]`.
impl fmt::Display for CounterView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = self.elements.iter().filter(|e| !e.text.is_empty());
        if let Some(first) = lines.next() {
            write_element(f, first)?;
        }
        for element in lines {
            writeln!(f)?;
            write_element(f, element)?;
        }
        Ok(())
    }
}

fn write_element(f: &mut fmt::Formatter<'_>, element: &Element) -> fmt::Result {
    match element.kind {
        ElementKind::Button(_) => write!(f, "[{}]", element.text),
        _ => f.write_str(&element.text),
    }
}
