//! Page state and the model derived from it.
//!
//! [`PaginationState`] is what the owner hands in on every cycle.
//! [`PageModel`] is a pure function of it: page count, boundary flags and the
//! item range of the current page. Nothing here is cached between cycles.
//!
//! The page count is rounded up, so a final partial page is a real page:
//! 105 items at 10 per page make 11 pages, and page 11 shows items 101-105.

use crate::error::{PaginationError, Result};

// ---------------------------------------------------------------------------
// PaginationState
// ---------------------------------------------------------------------------

/// Externally owned page state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationState {
    /// Current page, 1-based.
    pub value: i64,
    /// Total number of items.
    pub total: i64,
    /// Items per page.
    pub per_page: i64,
}

impl PaginationState {
    /// Create a new state.
    pub const fn new(value: i64, total: i64, per_page: i64) -> Self {
        Self {
            value,
            total,
            per_page,
        }
    }

    /// Check that `total` and `per_page` can be paginated.
    ///
    /// `value` is not checked: an out-of-range page is tolerated and simply
    /// disables navigation past the boundary.
    pub fn validate(&self) -> Result<()> {
        if self.per_page <= 0 {
            return Err(PaginationError::InvalidPerPage {
                per_page: self.per_page,
            });
        }
        if self.total < 0 {
            return Err(PaginationError::NegativeTotal { total: self.total });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Number of pages needed for `total` items, rounded up.
pub fn page_count(total: i64, per_page: i64) -> Result<i64> {
    PaginationState::new(1, total, per_page).validate()?;
    let full = total / per_page;
    Ok(if total % per_page == 0 { full } else { full + 1 })
}

/// Whether `value` is on (or before) the first page.
pub fn is_first_page(value: i64) -> bool {
    value <= 1
}

/// Whether `value` is on (or past) the last page.
pub fn is_last_page(value: i64, page_count: i64) -> bool {
    value >= page_count
}

/// 1-based inclusive bounds of the items shown on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemRange {
    pub first: i64,
    pub last: i64,
}

/// Item bounds for `page`.
///
/// The first page always reports `1..=per_page`, even when fewer items
/// exist; the text formatter clamps that case. The last page ends at
/// `total`. Every other page ends at `page * per_page`.
pub fn item_range(page: i64, per_page: i64, total: i64, page_count: i64) -> ItemRange {
    if page == 1 {
        return ItemRange {
            first: 1,
            last: per_page,
        };
    }
    let current_page_items = page.saturating_mul(per_page);
    let first = current_page_items.saturating_sub(per_page).saturating_add(1);
    let last = if page == page_count {
        total
    } else {
        current_page_items
    };
    ItemRange { first, last }
}

// ---------------------------------------------------------------------------
// PageModel
// ---------------------------------------------------------------------------

/// Everything derived from a [`PaginationState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageModel {
    pub value: i64,
    pub total: i64,
    pub per_page: i64,
    pub page_count: i64,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub first_item: i64,
    pub last_item: i64,
}

impl PageModel {
    /// Derive the model, rejecting states that cannot be paginated.
    pub fn derive(state: &PaginationState) -> Result<Self> {
        let pages = page_count(state.total, state.per_page)?;
        let range = item_range(state.value, state.per_page, state.total, pages);
        Ok(Self {
            value: state.value,
            total: state.total,
            per_page: state.per_page,
            page_count: pages,
            is_first_page: is_first_page(state.value),
            is_last_page: is_last_page(state.value, pages),
            first_item: range.first,
            last_item: range.last,
        })
    }

    /// The item range of the current page.
    pub fn item_range(&self) -> ItemRange {
        ItemRange {
            first: self.first_item,
            last: self.last_item,
        }
    }

    /// The state this model was derived from.
    pub fn state(&self) -> PaginationState {
        PaginationState::new(self.value, self.total, self.per_page)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
