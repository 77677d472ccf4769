//! Card widget: a bordered box with an optional title, body and link.
//!
//! ```text
//! ┌──────────────────┐
//! │ Card Title       │
//! │ Body text        │
//! │ Read more        │
//! └──────────────────┘
//! ```
//!
//! Unless `full_width` is set the card is capped at [`CARD_WIDTH`] cells.

use std::any::Any;
use std::borrow::Cow;

use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};
use crate::text::capitalize_all_after_spaces;
use crate::widget::traits::Widget;

/// Maximum width of a card that is not full-width.
pub const CARD_WIDTH: i32 = 40;

/// A bordered content card.
///
/// # Examples
///
/// ```
/// use gilt_pagination::widgets::Card;
///
/// let card = Card::new()
///     .with_title("Card Title")
///     .with_link("Awesome link name", "https://storyblok.com");
/// assert_eq!(card.link_title().as_deref(), Some("Link to Awesome link name."));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    title: String,
    link_label: String,
    url: String,
    content: Option<String>,
    full_width: bool,
    title_case: bool,
}

impl Card {
    /// Create an empty card.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (builder pattern).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the link label and target (builder pattern).
    pub fn with_link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.link_label = label.into();
        self.url = url.into();
        self
    }

    /// Set the body text (builder pattern). Lines are split on `'\n'`.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Stretch the card over the whole region (builder pattern).
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Show the title with every word capitalized (builder pattern).
    pub fn title_case(mut self, title_case: bool) -> Self {
        self.title_case = title_case;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The title as drawn in the title row.
    pub fn display_title(&self) -> Cow<'_, str> {
        if self.title_case {
            Cow::Owned(capitalize_all_after_spaces(&self.title))
        } else {
            Cow::Borrowed(&self.title)
        }
    }

    pub fn link_label(&self) -> &str {
        &self.link_label
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_full_width(&self) -> bool {
        self.full_width
    }

    /// Whether a title row is shown.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    /// Whether a link row is shown.
    pub fn has_link(&self) -> bool {
        !self.link_label.is_empty()
    }

    /// Accessible title of the link: `"Link to {label}."`.
    pub fn link_title(&self) -> Option<String> {
        self.has_link()
            .then(|| format!("Link to {}.", self.link_label))
    }

    /// Class names describing the card's variant.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["card"];
        if self.full_width {
            classes.push("card--full-width");
        }
        if !self.has_title() && !self.has_link() {
            classes.push("card--no-labels");
        }
        classes
    }

    fn lines(&self, style: &CellStyle) -> Vec<(Cow<'_, str>, CellStyle)> {
        let mut lines = Vec::new();
        if self.has_title() {
            lines.push((self.display_title(), style.bolded()));
        }
        if let Some(content) = &self.content {
            lines.extend(content.split('\n').map(|line| (Cow::Borrowed(line), style.clone())));
        }
        if self.has_link() {
            lines.push((Cow::Borrowed(self.link_label.as_str()), style.underlined()));
        }
        lines
    }
}

fn border_row(y: i32, x: i32, width: i32, left: char, right: char, style: &CellStyle) -> Strip {
    let mut strip = Strip::new(y, x);
    strip.push(left, style.clone());
    for _ in 0..width - 2 {
        strip.push('─', style.clone());
    }
    strip.push(right, style.clone());
    strip
}

impl Widget for Card {
    fn widget_type(&self) -> &str {
        "Card"
    }

    fn render(&self, region: Region, style: &CellStyle) -> Vec<Strip> {
        let region = if self.full_width {
            region
        } else {
            region.with_max_width(CARD_WIDTH)
        };
        if region.width < 4 || region.height < 2 {
            return Vec::new();
        }

        let inner = (region.width - 4) as usize;
        let body = self.lines(style);
        let body_rows = (region.height - 2).max(0) as usize;

        let mut strips = Vec::with_capacity(body.len().min(body_rows) + 2);
        strips.push(border_row(region.y, region.x, region.width, '┌', '┐', style));

        for (i, (text, text_style)) in body.into_iter().take(body_rows).enumerate() {
            let mut strip = Strip::new(region.y + 1 + i as i32, region.x);
            strip.push('│', style.clone());
            strip.push(' ', style.clone());
            let truncated: String = text.chars().take(inner).collect();
            strip.push_str(&truncated, text_style);
            strip.fill(region.width - 2, style.clone());
            strip.push(' ', style.clone());
            strip.push('│', style.clone());
            strips.push(strip);
        }

        let bottom = region.y + strips.len() as i32;
        strips.push(border_row(bottom, region.x, region.width, '└', '┘', style));
        strips
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
