//! Pagination configuration and per-cycle props.

use crate::i18n::DEFAULT_LOCALE;

use super::model::PaginationState;
use super::options::DEFAULT_PER_PAGE_OPTIONS;

/// Default total when the owner does not supply one.
pub const DEFAULT_TOTAL: i64 = 100;

/// Default page size when the owner does not supply one.
pub const DEFAULT_PER_PAGE: i64 = 10;

// ---------------------------------------------------------------------------
// PaginationConfig
// ---------------------------------------------------------------------------

/// Static setup of a pagination component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Page sizes offered by the per-page selector.
    pub per_page_options: Vec<i64>,
    /// Locale used when the props carry none.
    pub default_locale: String,
    /// Compact display: current page shown in the pages text, per-page
    /// selector hidden.
    pub compact: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            per_page_options: DEFAULT_PER_PAGE_OPTIONS.to_vec(),
            default_locale: DEFAULT_LOCALE.to_owned(),
            compact: false,
        }
    }
}

impl PaginationConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offered page sizes (builder).
    pub fn with_per_page_options(mut self, options: impl Into<Vec<i64>>) -> Self {
        self.per_page_options = options.into();
        self
    }

    /// Set the fallback locale (builder).
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Enable or disable compact display (builder).
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}

// ---------------------------------------------------------------------------
// PaginationProps
// ---------------------------------------------------------------------------

/// Input supplied by the owner on every cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationProps {
    pub value: i64,
    pub total: i64,
    pub per_page: i64,
    pub locale: Option<String>,
}

impl PaginationProps {
    /// Props for page `value` with the default total and page size.
    pub fn new(value: i64) -> Self {
        Self {
            value,
            total: DEFAULT_TOTAL,
            per_page: DEFAULT_PER_PAGE,
            locale: None,
        }
    }

    /// Set the total item count (builder).
    pub fn with_total(mut self, total: i64) -> Self {
        self.total = total;
        self
    }

    /// Set the page size (builder).
    pub fn with_per_page(mut self, per_page: i64) -> Self {
        self.per_page = per_page;
        self
    }

    /// Set the locale (builder).
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Set the current page (builder).
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = value;
        self
    }

    /// The numeric part of the props.
    pub fn state(&self) -> PaginationState {
        PaginationState::new(self.value, self.total, self.per_page)
    }
}

impl From<PaginationState> for PaginationProps {
    fn from(state: PaginationState) -> Self {
        Self {
            value: state.value,
            total: state.total,
            per_page: state.per_page,
            locale: None,
        }
    }
}
