//! Snapshot rendering helpers.
//!
//! Functions for converting rendered widget output into plain-text strings
//! suitable for snapshot testing and assertions.

use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a widget to a plain text string using the default style.
///
/// The widget is rendered into a region of `width` x `height` cells starting at
/// the origin. Each row becomes one line in the output string, with trailing
/// spaces trimmed. Lines are separated by `'\n'`. The final line does not have
/// a trailing newline.
///
/// # Examples
///
/// ```
/// use gilt_pagination::testing::render_to_string;
/// use gilt_pagination::widgets::Label;
///
/// let output = render_to_string(&Label::new("Hello"), 20, 1);
/// assert_eq!(output, "Hello");
/// ```
pub fn render_to_string(widget: &dyn Widget, width: i32, height: i32) -> String {
    render_to_styled_string(widget, width, height, &CellStyle::default())
}

/// Render a widget to a plain text string with a custom base style.
pub fn render_to_styled_string(
    widget: &dyn Widget,
    width: i32,
    height: i32,
    style: &CellStyle,
) -> String {
    let region = Region::new(0, 0, width, height);
    let strips = widget.render(region, style);
    strips_to_string(&strips, width, height)
}

/// Convert raw strips to a plain text string.
///
/// Builds a `width` x `height` grid of spaces, then overlays each strip's cells
/// at the appropriate (x, y) positions. Each row is right-trimmed of spaces, and
/// rows are joined with `'\n'`.
pub fn strips_to_string(strips: &[Strip], width: i32, height: i32) -> String {
    if width <= 0 || height <= 0 {
        return String::new();
    }

    let w = width as usize;
    let h = height as usize;

    let mut grid: Vec<Vec<char>> = vec![vec![' '; w]; h];

    for strip in strips {
        let y = strip.y;
        if y < 0 || y >= height {
            continue;
        }
        let row = y as usize;
        for (i, cell) in strip.cells.iter().enumerate() {
            let x = strip.x_offset + i as i32;
            if x < 0 || x >= width {
                continue;
            }
            grid[row][x as usize] = cell.ch;
        }
    }

    let lines: Vec<String> = grid
        .into_iter()
        .map(|row| {
            let s: String = row.into_iter().collect();
            s.trim_end().to_owned()
        })
        .collect();

    lines.join("\n")
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{ChevronIcon, Label, PaginationButton};

    #[test]
    fn render_label() {
        assert_eq!(render_to_string(&Label::new("of 10 pages"), 20, 1), "of 10 pages");
    }

    #[test]
    fn render_trims_trailing_spaces() {
        let out = render_to_string(&Label::new("a"), 10, 1);
        assert_eq!(out, "a");
    }

    #[test]
    fn render_extra_rows_are_empty_lines() {
        let out = render_to_string(&Label::new("a"), 5, 3);
        assert_eq!(out, "a\n\n");
    }

    #[test]
    fn render_button_glyph() {
        let b = PaginationButton::new(ChevronIcon::Right, "Next page");
        assert_eq!(render_to_string(&b, 3, 1), "›");
    }

    #[test]
    fn strips_outside_grid_are_ignored() {
        let mut s = Strip::new(5, 0);
        s.push_str("hidden", CellStyle::default());
        let mut t = Strip::new(0, -2);
        t.push_str("abcd", CellStyle::default());
        assert_eq!(strips_to_string(&[s, t], 4, 1), "cd");
    }

    #[test]
    fn zero_dimensions() {
        assert_eq!(strips_to_string(&[], 0, 3), "");
        assert_eq!(render_to_string(&Label::new("x"), 3, 0), "");
    }

    #[test]
    fn styled_render_keeps_text() {
        let style = CellStyle {
            fg: Some("green".into()),
            ..CellStyle::default()
        };
        assert_eq!(render_to_styled_string(&Label::new("ok"), 4, 1, &style), "ok");
    }
}
