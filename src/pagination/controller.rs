//! Pagination controller: user intents in, change requests out.
//!
//! The controller never changes the page itself. It holds the latest props
//! supplied by the owner, checks each request against the derived
//! [`PageModel`], and emits at most one [`PaginationEvent`] per request into
//! the owner's [`EventSink`]. The owner applies the change (or not) and hands
//! new props back through [`PaginationController::set_props`].

use std::fmt;

use crate::error::Result;
use crate::event::input::NavigationKey;
use crate::event::message::PaginationEvent;
use crate::event::sink::EventSink;
use crate::i18n::{Dictionary, Translator};

use super::config::{PaginationConfig, PaginationProps};
use super::format;
use super::model::PageModel;
use super::options::{self, SelectOption};

// ---------------------------------------------------------------------------
// PaginationController
// ---------------------------------------------------------------------------

/// Validates navigation requests and emits normalized events.
pub struct PaginationController<S: EventSink> {
    config: PaginationConfig,
    props: PaginationProps,
    model: PageModel,
    translator: Box<dyn Translator>,
    sink: S,
}

impl<S: EventSink> PaginationController<S> {
    /// Create a controller with the default config and built-in dictionary.
    ///
    /// Fails when the props cannot be paginated (`per_page <= 0` or
    /// `total < 0`).
    pub fn new(props: PaginationProps, sink: S) -> Result<Self> {
        let model = derive_model(&props)?;
        Ok(Self {
            config: PaginationConfig::default(),
            props,
            model,
            translator: Box::new(Dictionary::builtin()),
            sink,
        })
    }

    /// Replace the config (builder).
    pub fn with_config(mut self, config: PaginationConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the translator (builder).
    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    /// Accept the props for the next cycle.
    ///
    /// On error the previous props stay in effect.
    pub fn set_props(&mut self, props: PaginationProps) -> Result<()> {
        self.model = derive_model(&props)?;
        self.props = props;
        Ok(())
    }

    // ── Requests ─────────────────────────────────────────────────────

    /// Go back one page. Ignored on the first page.
    pub fn request_previous(&mut self) -> Option<PaginationEvent> {
        if self.model.is_first_page {
            log::trace!("previous ignored: page {} is first", self.model.value);
            return None;
        }
        self.emit(PaginationEvent::PageChange(self.model.value - 1))
    }

    /// Go forward one page. Ignored on (or past) the last page.
    pub fn request_next(&mut self) -> Option<PaginationEvent> {
        if self.model.is_last_page {
            log::trace!(
                "next ignored: page {} of {} is last",
                self.model.value,
                self.model.page_count
            );
            return None;
        }
        self.emit(PaginationEvent::PageChange(self.model.value + 1))
    }

    /// Show page `page`. Always emitted; the selector limits the choices.
    pub fn request_page(&mut self, page: i64) -> Option<PaginationEvent> {
        self.emit(PaginationEvent::PageChange(page))
    }

    /// Change the page size. The current page is not reconciled here; that
    /// is up to the owner.
    pub fn request_per_page(&mut self, per_page: i64) -> Option<PaginationEvent> {
        self.emit(PaginationEvent::PerPageChange(per_page))
    }

    /// Jump to page 1.
    pub fn request_first(&mut self) -> Option<PaginationEvent> {
        self.request_page(1)
    }

    /// Jump to the last page. Ignored when there are no pages.
    pub fn request_last(&mut self) -> Option<PaginationEvent> {
        if self.model.page_count < 1 {
            log::trace!("last ignored: no pages");
            return None;
        }
        self.request_page(self.model.page_count)
    }

    /// Dispatch a keyboard navigation intent.
    pub fn navigate(&mut self, key: NavigationKey) -> Option<PaginationEvent> {
        match key {
            NavigationKey::Previous => self.request_previous(),
            NavigationKey::Next => self.request_next(),
            NavigationKey::First => self.request_first(),
            NavigationKey::Last => self.request_last(),
        }
    }

    fn emit(&mut self, event: PaginationEvent) -> Option<PaginationEvent> {
        log::debug!("emitting {event}");
        self.sink.emit(event);
        Some(event)
    }

    // ── Derived display ──────────────────────────────────────────────

    /// The locale in effect: the props' locale, else the config default.
    pub fn locale(&self) -> &str {
        self.props
            .locale
            .as_deref()
            .unwrap_or(&self.config.default_locale)
    }

    /// Translate a token in the current locale.
    pub fn translate(&self, token: &str) -> String {
        self.translator.translate(self.locale(), token)
    }

    /// Pages information, showing the current page in compact mode.
    pub fn pages_text(&self) -> String {
        format::pages_text(
            self.translator.as_ref(),
            self.locale(),
            self.model.value,
            self.model.page_count,
            self.config.compact,
        )
    }

    /// Items information for the current page.
    pub fn items_text(&self) -> String {
        format::items_text(
            self.translator.as_ref(),
            self.locale(),
            self.model.item_range(),
            self.model.total,
        )
    }

    /// Options for the page selector.
    pub fn page_options(&self) -> Vec<SelectOption> {
        options::page_options(self.translator.as_ref(), self.locale(), self.model.page_count)
    }

    /// Options for the per-page selector.
    pub fn per_page_options(&self) -> Vec<SelectOption> {
        options::per_page_options(
            self.translator.as_ref(),
            self.locale(),
            &self.config.per_page_options,
        )
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// The model derived from the current props.
    pub fn model(&self) -> &PageModel {
        &self.model
    }

    /// The current props.
    pub fn props(&self) -> &PaginationProps {
        &self.props
    }

    /// The config.
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Borrow the sink mutably (e.g. to drain a queue).
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the controller, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

fn derive_model(props: &PaginationProps) -> Result<PageModel> {
    PageModel::derive(&props.state()).map_err(|err| {
        log::warn!("rejecting pagination props: {err}");
        err
    })
}

impl<S: EventSink> fmt::Debug for PaginationController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationController")
            .field("config", &self.config)
            .field("props", &self.props)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
