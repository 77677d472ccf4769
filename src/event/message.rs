//! Outbound pagination events.
//!
//! A [`PaginationEvent`] is the only thing a pagination controller ever sends
//! to the owner of the page state. Each event is a request: the owner decides
//! whether to apply it and feeds the new props back on the next cycle.

use std::fmt;

/// A change request emitted by the pagination controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaginationEvent {
    /// The user asked to show the given page.
    PageChange(i64),
    /// The user asked for a different number of items per page.
    PerPageChange(i64),
}

impl PaginationEvent {
    /// Human-readable name for this event, for logging.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::PageChange(_) => "page-change",
            Self::PerPageChange(_) => "per-page-change",
        }
    }

    /// The numeric payload carried by the event.
    pub fn payload(&self) -> i64 {
        match *self {
            Self::PageChange(n) | Self::PerPageChange(n) => n,
        }
    }
}

impl fmt::Display for PaginationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.event_name(), self.payload())
    }
}
