//! Widget trait: type name, focus, intrinsic width, render.
//!
//! The `Widget` trait is the core abstraction for every UI element in this
//! crate. A widget knows its type name, how wide it would like to be, and how
//! to render itself into strips within a given region. Widgets are stateless
//! with respect to rendering: the same props always produce the same strips.

use std::any::Any;

use crate::geometry::Region;
use crate::render::strip::{CellStyle, Strip};

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets.
///
/// Widget is object-safe: the core methods use `&self` and return owned types.
pub trait Widget {
    /// The type name for this widget (e.g. "PaginationButton", "Card").
    fn widget_type(&self) -> &str;

    /// Render this widget's content into strips within the given region.
    ///
    /// `style` is the base style inherited from the host; widgets derive
    /// their own variants (dim, bold) from it.
    fn render(&self, region: Region, style: &CellStyle) -> Vec<Strip>;

    /// Preferred width in cells when laid out in a row.
    ///
    /// Defaults to 0, meaning "take whatever is left".
    fn intrinsic_width(&self) -> i32 {
        0
    }

    /// Whether this widget can receive keyboard focus.
    fn can_focus(&self) -> bool {
        false
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;
}

// ---------------------------------------------------------------------------
// Row layout
// ---------------------------------------------------------------------------

/// Render `children` left to right on the first row of `region`, separated by
/// `gap` blank cells.
///
/// Each child gets its intrinsic width (clipped to what remains). Children
/// that no longer fit are skipped. The result is a single strip spanning the
/// full region width.
pub fn render_row(
    children: &[&dyn Widget],
    region: Region,
    gap: i32,
    style: &CellStyle,
) -> Vec<Strip> {
    if region.is_empty() {
        return Vec::new();
    }

    let mut row = Strip::new(region.y, region.x);
    let mut cursor = region.x;

    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            for _ in 0..gap {
                if cursor >= region.right() {
                    break;
                }
                row.push(' ', style.clone());
                cursor += 1;
            }
        }

        let remaining = region.right() - cursor;
        if remaining <= 0 {
            break;
        }
        let width = match child.intrinsic_width() {
            0 => remaining,
            w => w.min(remaining),
        };

        let child_region = Region::new(cursor, region.y, width, 1);
        match child.render(child_region, style).into_iter().next() {
            Some(mut strip) => {
                strip.fill(width, style.clone());
                row.cells.extend(strip.cells);
            }
            None => {
                let mut blank = Strip::new(region.y, cursor);
                blank.fill(width, style.clone());
                row.cells.extend(blank.cells);
            }
        }
        cursor += width;
    }

    row.fill(region.width, style.clone());
    vec![row]
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Test widget
    // -----------------------------------------------------------------------

    struct Label(&'static str);

    impl Widget for Label {
        fn widget_type(&self) -> &str {
            "Label"
        }

        fn render(&self, region: Region, style: &CellStyle) -> Vec<Strip> {
            let mut strip = Strip::new(region.y, region.x);
            let text: String = self.0.chars().take(region.width as usize).collect();
            strip.push_str(&text, style.clone());
            vec![strip]
        }

        fn intrinsic_width(&self) -> i32 {
            self.0.chars().count() as i32
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn defaults() {
        let w = Label("x");
        assert!(!w.can_focus());
        assert_eq!(w.widget_type(), "Label");
    }

    #[test]
    fn as_any_downcast() {
        let w = Label("hello");
        let any = w.as_any();
        assert_eq!(any.downcast_ref::<Label>().unwrap().0, "hello");
    }

    #[test]
    fn row_places_children_with_gap() {
        let a = Label("ab");
        let b = Label("cd");
        let strips = render_row(&[&a, &b], Region::new(0, 0, 8, 1), 1, &CellStyle::default());
        assert_eq!(strips.len(), 1);
        assert_eq!(strips[0].text(), "ab cd   ");
    }

    #[test]
    fn row_clips_overflowing_children() {
        let a = Label("abc");
        let b = Label("defgh");
        let strips = render_row(&[&a, &b], Region::new(0, 0, 6, 1), 1, &CellStyle::default());
        assert_eq!(strips[0].text(), "abc de");
        assert_eq!(strips[0].width(), 6);
    }

    #[test]
    fn row_respects_region_offset() {
        let a = Label("x");
        let strips = render_row(&[&a], Region::new(4, 2, 3, 1), 0, &CellStyle::default());
        assert_eq!(strips[0].x_offset, 4);
        assert_eq!(strips[0].y, 2);
    }

    #[test]
    fn row_empty_region() {
        let a = Label("x");
        assert!(render_row(&[&a], Region::EMPTY, 1, &CellStyle::default()).is_empty());
    }
}
