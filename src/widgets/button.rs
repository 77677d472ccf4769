//! Pagination arrow button.
//!
//! Renders a single chevron glyph. A disabled button cannot take focus and is
//! drawn dim.

use std::any::Any;

use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};
use crate::widget::traits::Widget;

// ---------------------------------------------------------------------------
// ChevronIcon
// ---------------------------------------------------------------------------

/// Direction of an arrow button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChevronIcon {
    Left,
    Right,
}

impl ChevronIcon {
    /// Icon name, as used by icon sets.
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "chevron-left",
            Self::Right => "chevron-right",
        }
    }

    /// Terminal glyph for the icon.
    pub fn glyph(self) -> char {
        match self {
            Self::Left => '‹',
            Self::Right => '›',
        }
    }
}

// ---------------------------------------------------------------------------
// PaginationButton
// ---------------------------------------------------------------------------

/// Previous/next arrow button.
///
/// # Examples
///
/// ```
/// use gilt_pagination::widgets::{ChevronIcon, PaginationButton};
///
/// let prev = PaginationButton::new(ChevronIcon::Left, "Previous page").disabled(true);
/// assert!(prev.is_disabled());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationButton {
    icon: ChevronIcon,
    tooltip_label: String,
    disabled: bool,
}

impl PaginationButton {
    /// Create an enabled button.
    pub fn new(icon: ChevronIcon, tooltip_label: impl Into<String>) -> Self {
        Self {
            icon,
            tooltip_label: tooltip_label.into(),
            disabled: false,
        }
    }

    /// Set whether the button is disabled (builder pattern).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The icon.
    pub fn icon(&self) -> ChevronIcon {
        self.icon
    }

    /// Text shown in the tooltip.
    pub fn tooltip_label(&self) -> &str {
        &self.tooltip_label
    }

    /// Whether the button is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

impl Widget for PaginationButton {
    fn widget_type(&self) -> &str {
        "PaginationButton"
    }

    fn can_focus(&self) -> bool {
        !self.disabled
    }

    fn intrinsic_width(&self) -> i32 {
        1
    }

    fn render(&self, region: Region, style: &CellStyle) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }

        let glyph_style = if self.disabled {
            style.dimmed()
        } else {
            style.bolded()
        };

        let mut strip = Strip::new(region.y, region.x);
        strip.push(self.icon.glyph(), glyph_style);
        strip.fill(region.width, style.clone());
        vec![strip]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn region(w: i32) -> Region {
        Region::new(0, 0, w, 1)
    }

    #[test]
    fn widget_type_is_pagination_button() {
        let b = PaginationButton::new(ChevronIcon::Left, "Previous page");
        assert_eq!(b.widget_type(), "PaginationButton");
    }

    #[test]
    fn icon_names() {
        assert_eq!(ChevronIcon::Left.name(), "chevron-left");
        assert_eq!(ChevronIcon::Right.name(), "chevron-right");
    }

    #[test]
    fn focus_follows_disabled() {
        let b = PaginationButton::new(ChevronIcon::Right, "Next page");
        assert!(b.can_focus());
        assert!(!b.clone().disabled(true).can_focus());
    }

    #[test]
    fn accessors() {
        let b = PaginationButton::new(ChevronIcon::Right, "Next page");
        assert_eq!(b.icon(), ChevronIcon::Right);
        assert_eq!(b.tooltip_label(), "Next page");
        assert!(!b.is_disabled());
    }

    #[test]
    fn render_glyph() {
        let b = PaginationButton::new(ChevronIcon::Left, "Previous page");
        let strips = b.render(region(3), &CellStyle::default());
        assert_eq!(strips.len(), 1);
        assert_eq!(strips[0].text(), "‹  ");
        assert!(strips[0].cells[0].style.bold);
    }

    #[test]
    fn render_disabled_is_dim() {
        let b = PaginationButton::new(ChevronIcon::Right, "Next page").disabled(true);
        let strips = b.render(region(1), &CellStyle::default());
        assert_eq!(strips[0].cells[0].ch, '›');
        assert!(strips[0].cells[0].style.dim);
        assert!(!strips[0].cells[0].style.bold);
    }

    #[test]
    fn render_zero_region() {
        let b = PaginationButton::new(ChevronIcon::Left, "x");
        assert!(b.render(Region::EMPTY, &CellStyle::default()).is_empty());
    }

    #[test]
    fn render_positions() {
        let b = PaginationButton::new(ChevronIcon::Left, "x");
        let strips = b.render(Region::new(7, 2, 1, 1), &CellStyle::default());
        assert_eq!(strips[0].x_offset, 7);
        assert_eq!(strips[0].y, 2);
    }
}
