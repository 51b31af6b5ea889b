//! Overlay: which modal, if any, sits on top of the event list.
//!
//! A single enum holds the creation and detail overlays, so at most one of
//! them can ever be visible.

use crate::event::Event;

/// Visible overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Overlay {
    /// No overlay; the list is interactive.
    #[default]
    Idle,
    /// The creation form is open.
    Creating,
    /// The detail/booking overlay is open for one event.
    Viewing(Event),
}

impl Overlay {
    /// `Idle -> Creating`. Returns `false` when another overlay is open.
    pub fn start_create(&mut self) -> bool {
        if !matches!(self, Self::Idle) {
            return false;
        }
        *self = Self::Creating;
        true
    }

    /// `Creating -> Idle` on confirm. Returns `false` when the form was not open.
    pub fn confirm_create(&mut self) -> bool {
        if !matches!(self, Self::Creating) {
            return false;
        }
        *self = Self::Idle;
        true
    }

    /// `Idle -> Viewing(event)`. Returns `false` when another overlay is open.
    pub fn view(&mut self, event: Event) -> bool {
        if !matches!(self, Self::Idle) {
            return false;
        }
        *self = Self::Viewing(event);
        true
    }

    /// `Viewing -> Idle` on the book confirm, yielding the event that was shown.
    pub fn book(&mut self) -> Option<Event> {
        match std::mem::take(self) {
            Self::Viewing(event) => Some(event),
            other => {
                *self = other;
                None
            }
        }
    }

    /// Close whichever overlay is open.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn is_creating(&self) -> bool {
        matches!(self, Self::Creating)
    }

    /// Event shown in the detail overlay.
    #[must_use]
    pub fn selected(&self) -> Option<&Event> {
        match self {
            Self::Viewing(event) => Some(event),
            _ => None,
        }
    }

    /// Whether a backdrop should dim the page.
    #[must_use]
    pub fn has_backdrop(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
