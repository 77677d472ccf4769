//! Selectable list used for the page and per-page choosers.
//!
//! The select is stateless: the owner supplies the options and the selected
//! value each cycle. [`PaginationSelect::choose`] is the single change
//! notification; it reports the chosen value when it is one of the options.

use std::any::Any;

use crate::geometry::Region;
use crate::pagination::options::{page_option, SelectOption};
use crate::render::strip::{CellStyle, Strip};
use crate::widget::traits::Widget;

/// Marker drawn after the selected label.
const DROPDOWN_MARKER: char = '▾';

/// Where the options come from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Choices {
    /// An explicit, usually short, list.
    Listed(Vec<SelectOption>),
    /// Pages `1..=count`, generated on demand.
    Pages { count: i64, go_to: String },
}

/// A compact dropdown: `[label▾]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationSelect {
    choices: Choices,
    selected: i64,
}

impl PaginationSelect {
    /// Create a select over `options` with `selected` as the current value.
    pub fn new(options: Vec<SelectOption>, selected: i64) -> Self {
        Self {
            choices: Choices::Listed(options),
            selected,
        }
    }

    /// Create a page selector over `1..=page_count`. Options are built only
    /// when asked for, so the cost does not grow with the page count.
    /// `go_to` prefixes each option's aria label.
    pub fn pages(page_count: i64, selected: i64, go_to: impl Into<String>) -> Self {
        Self {
            choices: Choices::Pages {
                count: page_count.max(0),
                go_to: go_to.into(),
            },
            selected,
        }
    }

    /// Number of options.
    pub fn option_count(&self) -> usize {
        match &self.choices {
            Choices::Listed(options) => options.len(),
            Choices::Pages { count, .. } => usize::try_from(*count).unwrap_or(usize::MAX),
        }
    }

    /// All options, in display order.
    pub fn options(&self) -> impl Iterator<Item = SelectOption> + '_ {
        let (listed, pages) = match &self.choices {
            Choices::Listed(options) => (Some(options.iter().cloned()), None),
            Choices::Pages { count, go_to } => {
                (None, Some((1..=*count).map(move |page| page_option(page, go_to))))
            }
        };
        listed.into_iter().flatten().chain(pages.into_iter().flatten())
    }

    /// The selected value.
    pub fn selected(&self) -> i64 {
        self.selected
    }

    /// The option with the given value.
    pub fn option(&self, value: i64) -> Option<SelectOption> {
        match &self.choices {
            Choices::Listed(options) => options.iter().find(|o| o.value == value).cloned(),
            Choices::Pages { count, go_to } => {
                (1..=*count).contains(&value).then(|| page_option(value, go_to))
            }
        }
    }

    /// The label shown in the closed select: the selected value.
    pub fn label(&self) -> String {
        self.selected.to_string()
    }

    /// Report a choice. Returns the chosen value, or `None` when it is not
    /// one of the options.
    pub fn choose(&self, value: i64) -> Option<i64> {
        let known = match &self.choices {
            Choices::Listed(options) => options.iter().any(|o| o.value == value),
            Choices::Pages { count, .. } => (1..=*count).contains(&value),
        };
        if !known {
            log::trace!("ignoring choice {value}: not an option");
            return None;
        }
        Some(value)
    }

    /// Width reserved for labels, so the select does not jump as the
    /// selection changes.
    fn label_width(&self) -> usize {
        let widest = match &self.choices {
            Choices::Listed(options) => options
                .iter()
                .map(|o| o.label.chars().count())
                .max()
                .unwrap_or(0),
            // Page labels are the numbers 1..=count; the last is the widest.
            Choices::Pages { count, .. } if *count > 0 => count.to_string().len(),
            Choices::Pages { .. } => 0,
        };
        widest.max(self.label().chars().count())
    }
}

impl Widget for PaginationSelect {
    fn widget_type(&self) -> &str {
        "PaginationSelect"
    }

    fn can_focus(&self) -> bool {
        self.option_count() > 0
    }

    fn intrinsic_width(&self) -> i32 {
        self.label_width() as i32 + 3
    }

    fn render(&self, region: Region, style: &CellStyle) -> Vec<Strip> {
        if region.is_empty() {
            return Vec::new();
        }

        let label = format!("{:<width$}", self.label(), width = self.label_width());
        let mut strip = Strip::new(region.y, region.x);
        strip.push('[', style.clone());
        strip.push_str(&label, style.underlined());
        strip.push(DROPDOWN_MARKER, style.clone());
        strip.push(']', style.clone());
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
