//! Pilot: drives a [`Pagination`] the way its owner would.
//!
//! The Pilot holds the page state, feeds it to a pagination widget, simulates
//! user input, and applies the emitted events back to the state on
//! [`Pilot::process`]. It keeps a history of every processed event so tests
//! can assert on the full conversation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::Result;
use crate::event::message::PaginationEvent;
use crate::event::sink::EventQueue;
use crate::pagination::config::{PaginationConfig, PaginationProps};
use crate::pagination::model::page_count;
use crate::widgets::Pagination;

use super::snapshot::render_to_string;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless owner for a pagination widget.
///
/// # Examples
///
/// ```
/// use crossterm::event::KeyCode;
/// use gilt_pagination::pagination::PaginationProps;
/// use gilt_pagination::testing::Pilot;
///
/// let mut pilot = Pilot::new(PaginationProps::new(1)).unwrap();
/// pilot.press_key(KeyCode::Right);
/// pilot.process().unwrap();
/// assert_eq!(pilot.props().value, 2);
/// ```
pub struct Pilot {
    pagination: Pagination<EventQueue>,
    history: Vec<PaginationEvent>,
}

impl Pilot {
    /// Create a pilot owning `props`.
    pub fn new(props: PaginationProps) -> Result<Self> {
        Ok(Self {
            pagination: Pagination::new(props, EventQueue::new())?,
            history: Vec::new(),
        })
    }

    /// Replace the widget config (builder).
    pub fn with_config(mut self, config: PaginationConfig) -> Self {
        self.pagination = self.pagination.with_config(config);
        self
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Simulate a key press with no modifiers.
    pub fn press_key(&mut self, code: KeyCode) -> Option<PaginationEvent> {
        self.pagination
            .handle_key(&KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Simulate a click on the previous arrow.
    pub fn click_previous(&mut self) -> Option<PaginationEvent> {
        self.pagination.click_previous()
    }

    /// Simulate a click on the next arrow.
    pub fn click_next(&mut self) -> Option<PaginationEvent> {
        self.pagination.click_next()
    }

    /// Simulate choosing a page in the page selector.
    pub fn choose_page(&mut self, page: i64) -> Option<PaginationEvent> {
        self.pagination.select_page(page)
    }

    /// Simulate choosing a size in the per-page selector.
    pub fn choose_per_page(&mut self, per_page: i64) -> Option<PaginationEvent> {
        self.pagination.select_per_page(per_page)
    }

    // ── Processing ───────────────────────────────────────────────────

    /// Apply every pending event to the props and hand them back to the
    /// widget.
    ///
    /// A per-page change keeps the current page when it still exists and
    /// otherwise moves to the new last page.
    ///
    /// Events are applied one at a time. When one is rejected it is dropped
    /// and the error returned; later events stay pending.
    pub fn process(&mut self) -> Result<()> {
        while let Some(event) = self.pagination.controller_mut().sink_mut().pop() {
            let mut props = self.props().clone();
            match event {
                PaginationEvent::PageChange(page) => props.value = page,
                PaginationEvent::PerPageChange(per_page) => {
                    props.per_page = per_page;
                    let pages = page_count(props.total, per_page)?;
                    props.value = props.value.min(pages).max(1);
                }
            }
            self.pagination.set_props(props)?;
            self.history.push(event);
        }
        Ok(())
    }

    // ── Query ────────────────────────────────────────────────────────

    /// The props currently in effect.
    pub fn props(&self) -> &PaginationProps {
        self.pagination.controller().props()
    }

    /// Every event processed so far, in order.
    pub fn history(&self) -> &[PaginationEvent] {
        &self.history
    }

    /// Number of events emitted but not yet processed.
    pub fn pending_count(&self) -> usize {
        self.pagination.controller().sink().pending_count()
    }

    /// Borrow the widget.
    pub fn pagination(&self) -> &Pagination<EventQueue> {
        &self.pagination
    }

    /// Render the widget on one row of `width` cells.
    pub fn render(&self, width: i32) -> String {
        render_to_string(&self.pagination, width, 1)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
