//! Single-entry selection.
//!
//! The detail view shows at most one entry. [`Selection`] is that state as a
//! plain value, and [`Selection::apply`] is its whole transition table:
//!
//! ```text
//! Closed   --select(id)--> Open(id)   Opened
//! Open(a)  --select(b)---> Open(b)    Switched    (last select wins)
//! Open(a)  --select(a)---> Open(a)    Reselected
//! Open(a)  --close-------> Closed     Closed
//! Closed   --close-------> Closed     Unchanged
//! ```
//!
//! The state machine does not know the catalog. Checking that an id exists is
//! the caller's job (see [`crate::api::Session::select`]).

use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "id", rename_all = "lowercase")]
pub enum Selection {
    #[default]
    Closed,
    Open(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Select(String),
    Close,
}

/// What a transition did. UIs use `Reselected` to replay an open animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Switched,
    Reselected,
    Closed,
    Unchanged,
}

impl Selection {
    pub fn apply(self, event: SelectionEvent) -> (Selection, Transition) {
        match (self, event) {
            (Selection::Closed, SelectionEvent::Select(id)) => {
                (Selection::Open(id), Transition::Opened)
            }
            (Selection::Open(current), SelectionEvent::Select(id)) => {
                let transition = if current == id {
                    Transition::Reselected
                } else {
                    Transition::Switched
                };
                (Selection::Open(id), transition)
            }
            (Selection::Open(_), SelectionEvent::Close) => (Selection::Closed, Transition::Closed),
            (Selection::Closed, SelectionEvent::Close) => {
                (Selection::Closed, Transition::Unchanged)
            }
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        match self {
            Selection::Closed => None,
            Selection::Open(id) => Some(id),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Open(_))
    }
}

/// Owns the session's [`Selection`] and applies events to it in place.
#[derive(Debug, Default)]
pub struct SelectionController {
    state: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &Selection {
        &self.state
    }

    pub fn dispatch(&mut self, event: SelectionEvent) -> Transition {
        let (next, transition) = std::mem::take(&mut self.state).apply(event);
        debug!(?transition, selected = ?next.selected_id(), "selection changed");
        self.state = next;
        transition
    }

    pub fn select(&mut self, id: impl Into<String>) -> Transition {
        self.dispatch(SelectionEvent::Select(id.into()))
    }

    pub fn close(&mut self) -> Transition {
        self.dispatch(SelectionEvent::Close)
    }
}
