//! Text widgets: plain labels and the pages/items information.
//!
//! All three render a single line of text, truncated to the region width.
//! Placeholder text (the informational strings next to the selects) is drawn
//! dim.

use std::any::Any;

use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};
use crate::widget::traits::Widget;

fn render_line(text: &str, dim: bool, region: Region, style: &CellStyle) -> Vec<Strip> {
    if region.is_empty() {
        return Vec::new();
    }

    let text_style = if dim { style.dimmed() } else { style.clone() };
    let truncated: String = text.chars().take(region.width as usize).collect();
    let mut strip = Strip::new(region.y, region.x);
    strip.push_str(&truncated, text_style);
    strip.fill(region.width, style.clone());
    vec![strip]
}

fn text_width(text: &str) -> i32 {
    text.chars().count() as i32
}

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// Fixed, non-interactive text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Widget for Label {
    fn widget_type(&self) -> &str {
        "Label"
    }

    fn intrinsic_width(&self) -> i32 {
        text_width(&self.text)
    }

    fn render(&self, region: Region, style: &CellStyle) -> Vec<Strip> {
        render_line(&self.text, false, region, style)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// PagesText
// ---------------------------------------------------------------------------

/// Pages information, e.g. `"of 10 pages"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagesText {
    text: String,
    placeholder: bool,
}

impl PagesText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placeholder: false,
        }
    }

    /// Mark as placeholder text (builder pattern).
    pub fn placeholder(mut self, placeholder: bool) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}

impl Widget for PagesText {
    fn widget_type(&self) -> &str {
        "PagesText"
    }

    fn intrinsic_width(&self) -> i32 {
        text_width(&self.text)
    }

    fn render(&self, region: Region, style: &CellStyle) -> Vec<Strip> {
        render_line(&self.text, self.placeholder, region, style)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ---------------------------------------------------------------------------
// ItemsText
// ---------------------------------------------------------------------------

/// Items information, e.g. `"1-10 of 100 items"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsText {
    text: String,
    placeholder: bool,
}

impl ItemsText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            placeholder: false,
        }
    }

    /// Mark as placeholder text (builder pattern).
    pub fn placeholder(mut self, placeholder: bool) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}

impl Widget for ItemsText {
    fn widget_type(&self) -> &str {
        "ItemsText"
    }

    fn intrinsic_width(&self) -> i32 {
        text_width(&self.text)
    }

    fn render(&self, region: Region, style: &CellStyle) -> Vec<Strip> {
        render_line(&self.text, self.placeholder, region, style)
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
    fn label_renders_and_fills() {
        let l = Label::new("Items per page:");
        assert_eq!(l.intrinsic_width(), 15);
        let strips = l.render(region(18), &CellStyle::default());
        assert_eq!(strips[0].text(), "Items per page:   ");
    }

    #[test]
    fn label_truncates() {
        let l = Label::new("Items per page:");
        let strips = l.render(region(5), &CellStyle::default());
        assert_eq!(strips[0].text(), "Items");
    }

    #[test]
    fn pages_text_placeholder_is_dim() {
        let t = PagesText::new("of 10 pages").placeholder(true);
        assert!(t.is_placeholder());
        let strips = t.render(region(11), &CellStyle::default());
        assert_eq!(strips[0].text(), "of 10 pages");
        assert!(strips[0].cells.iter().all(|c| c.style.dim));
    }

    #[test]
    fn items_text_plain_is_not_dim() {
        let t = ItemsText::new("1-10 of 100 items");
        assert!(!t.is_placeholder());
        assert_eq!(t.text(), "1-10 of 100 items");
        let strips = t.render(region(17), &CellStyle::default());
        assert!(strips[0].cells.iter().all(|c| !c.style.dim));
    }

    #[test]
    fn width_counts_chars() {
        assert_eq!(PagesText::new("de 4 páginas").intrinsic_width(), 12);
    }

    #[test]
    fn render_zero_region() {
        assert!(ItemsText::new("x").render(Region::EMPTY, &CellStyle::default()).is_empty());
        assert_eq!(Label::new("x").widget_type(), "Label");
    }
}
