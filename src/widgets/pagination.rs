//! Pagination widget: per-page selector, page selector, arrow buttons.
//!
//! The widget is a thin composition over [`PaginationController`]. Each
//! render builds its children from the controller's current props, so the
//! children never hold state of their own. User interactions (button clicks,
//! select choices, key presses) go through the controller, which emits the
//! resulting change requests into the sink.
//!
//! Full layout, on one row:
//!
//! ```text
//! Items per page: [10▾] 1-10 of 100 items [1 ▾] of 10 pages ‹ ›
//! ```
//!
//! Compact layout:
//!
//! ```text
//! ‹ 1 of 10 pages ›
//! ```

use std::any::Any;

use crossterm::event::KeyEvent;

use crate::error::Result;
use crate::event::input::NavigationKey;
use crate::event::message::PaginationEvent;
use crate::event::sink::EventSink;
use crate::geometry::Region;
use crate::i18n::{tokens, Translator};
use crate::pagination::config::{PaginationConfig, PaginationProps};
use crate::pagination::controller::PaginationController;
use crate::render::strip::{CellStyle, Strip};
use crate::text::capitalize;
use crate::widget::traits::{render_row, Widget};

use super::button::{ChevronIcon, PaginationButton};
use super::info::{ItemsText, Label, PagesText};
use super::select::PaginationSelect;

/// Cells between adjacent children.
const GAP: i32 = 1;

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// The pagination component.
pub struct Pagination<S: EventSink> {
    controller: PaginationController<S>,
}

impl<S: EventSink> Pagination<S> {
    /// Create a pagination widget emitting into `sink`.
    pub fn new(props: PaginationProps, sink: S) -> Result<Self> {
        Ok(Self {
            controller: PaginationController::new(props, sink)?,
        })
    }

    /// Replace the config (builder).
    pub fn with_config(mut self, config: PaginationConfig) -> Self {
        self.controller = self.controller.with_config(config);
        self
    }

    /// Replace the translator (builder).
    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.controller = self.controller.with_translator(translator);
        self
    }

    /// Accept the props for the next cycle. On error the previous props stay.
    pub fn set_props(&mut self, props: PaginationProps) -> Result<()> {
        self.controller.set_props(props)
    }

    pub fn controller(&self) -> &PaginationController<S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut PaginationController<S> {
        &mut self.controller
    }

    // ── Children ─────────────────────────────────────────────────────

    pub fn previous_button(&self) -> PaginationButton {
        let label = capitalize(&self.controller.translate(tokens::PREVIOUS_PAGE));
        PaginationButton::new(ChevronIcon::Left, label).disabled(self.controller.model().is_first_page)
    }

    pub fn next_button(&self) -> PaginationButton {
        let label = capitalize(&self.controller.translate(tokens::NEXT_PAGE));
        PaginationButton::new(ChevronIcon::Right, label).disabled(self.controller.model().is_last_page)
    }

    pub fn page_select(&self) -> PaginationSelect {
        let model = self.controller.model();
        PaginationSelect::pages(
            model.page_count,
            model.value,
            self.controller.translate(tokens::GO_TO_PAGE),
        )
    }

    pub fn per_page_select(&self) -> PaginationSelect {
        PaginationSelect::new(
            self.controller.per_page_options(),
            self.controller.model().per_page,
        )
    }

    pub fn per_page_label(&self) -> Label {
        Label::new(self.controller.translate(tokens::ITEMS_PER_PAGE))
    }

    pub fn pages_text(&self) -> PagesText {
        PagesText::new(self.controller.pages_text()).placeholder(!self.is_compact())
    }

    pub fn items_text(&self) -> ItemsText {
        ItemsText::new(self.controller.items_text()).placeholder(true)
    }

    fn is_compact(&self) -> bool {
        self.controller.config().compact
    }

    // ── Interaction ──────────────────────────────────────────────────

    /// Click on the previous arrow.
    pub fn click_previous(&mut self) -> Option<PaginationEvent> {
        self.controller.request_previous()
    }

    /// Click on the next arrow.
    pub fn click_next(&mut self) -> Option<PaginationEvent> {
        self.controller.request_next()
    }

    /// Choose `page` in the page selector.
    pub fn select_page(&mut self, page: i64) -> Option<PaginationEvent> {
        if !(1..=self.controller.model().page_count).contains(&page) {
            log::trace!("ignoring page choice {page}: not an option");
            return None;
        }
        self.controller.request_page(page)
    }

    /// Choose `per_page` in the per-page selector.
    pub fn select_per_page(&mut self, per_page: i64) -> Option<PaginationEvent> {
        let chosen = self.per_page_select().choose(per_page)?;
        self.controller.request_per_page(chosen)
    }

    /// Handle a terminal key press.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<PaginationEvent> {
        let key = NavigationKey::from_key_event(event)?;
        self.controller.navigate(key)
    }

    fn with_children<R>(&self, f: impl FnOnce(&[&dyn Widget]) -> R) -> R {
        let previous = self.previous_button();
        let next = self.next_button();
        let pages_text = self.pages_text();

        if self.is_compact() {
            let children: [&dyn Widget; 3] = [&previous, &pages_text, &next];
            return f(&children);
        }

        let label = self.per_page_label();
        let per_page_select = self.per_page_select();
        let items_text = self.items_text();
        let page_select = self.page_select();
        let children: [&dyn Widget; 7] = [
            &label,
            &per_page_select,
            &items_text,
            &page_select,
            &pages_text,
            &previous,
            &next,
        ];
        f(&children)
    }
}

impl<S: EventSink + 'static> Widget for Pagination<S> {
    fn widget_type(&self) -> &str {
        "Pagination"
    }

    fn can_focus(&self) -> bool {
        true
    }

    fn intrinsic_width(&self) -> i32 {
        self.with_children(|children| {
            let content: i32 = children.iter().map(|c| c.intrinsic_width()).sum();
            content + GAP * (children.len() as i32 - 1).max(0)
        })
    }

    fn render(&self, region: Region, style: &CellStyle) -> Vec<Strip> {
        self.with_children(|children| render_row(children, region, GAP, style))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
