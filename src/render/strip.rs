//! Strip: a horizontal line of styled terminal cells.
//!
//! A `Strip` is the rendering primitive every widget in this crate produces.
//! It represents a single horizontal row of `StyledCell`s that the host places
//! into its screen buffer. Widgets produce `Vec<Strip>` from `render()`.

// ---------------------------------------------------------------------------
// CellStyle
// ---------------------------------------------------------------------------

/// Visual style for a single terminal cell.
///
/// Colors are stored as optional strings that the host parses as named colors
/// or `#rrggbb` hex values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl CellStyle {
    /// Create a new `CellStyle` with all attributes unset/false.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this style with `dim` set.
    pub fn dimmed(&self) -> Self {
        Self {
            dim: true,
            ..self.clone()
        }
    }

    /// A copy of this style with `bold` set.
    pub fn bolded(&self) -> Self {
        Self {
            bold: true,
            ..self.clone()
        }
    }

    /// A copy of this style with `underline` set.
    pub fn underlined(&self) -> Self {
        Self {
            underline: true,
            ..self.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// StyledCell
// ---------------------------------------------------------------------------

/// A single terminal cell: one character with associated style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledCell {
    pub ch: char,
    pub style: CellStyle,
}

impl StyledCell {
    /// Create a new styled cell.
    pub fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }

    /// A blank (space) cell with default style.
    pub fn blank() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }

    /// A blank (space) cell with the given style.
    pub fn blank_styled(style: CellStyle) -> Self {
        Self { ch: ' ', style }
    }
}

impl Default for StyledCell {
    fn default() -> Self {
        Self::blank()
    }
}

// ---------------------------------------------------------------------------
// Strip
// ---------------------------------------------------------------------------

/// A horizontal line of styled terminal cells.
///
/// Each Strip represents one row (at a given y position) starting at `x_offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    /// The row this strip occupies.
    pub y: i32,
    /// Starting x position for this strip's cells.
    pub x_offset: i32,
    /// The cells in left-to-right order.
    pub cells: Vec<StyledCell>,
}

impl Strip {
    /// Create a new empty strip at the given row and x offset.
    pub fn new(y: i32, x_offset: i32) -> Self {
        Self {
            y,
            x_offset,
            cells: Vec::new(),
        }
    }

    /// Push a single character with the given style.
    pub fn push(&mut self, ch: char, style: CellStyle) {
        self.cells.push(StyledCell::new(ch, style));
    }

    /// Push every character of `text` with the same style.
    pub fn push_str(&mut self, text: &str, style: CellStyle) {
        for ch in text.chars() {
            self.cells.push(StyledCell::new(ch, style.clone()));
        }
    }

    /// The width of this strip in cells.
    pub fn width(&self) -> i32 {
        self.cells.len() as i32
    }

    /// Pad the strip to exactly `width` cells using spaces with the given style.
    ///
    /// If the strip is already wider than `width`, it is truncated.
    pub fn fill(&mut self, width: i32, style: CellStyle) {
        let w = width.max(0) as usize;
        if self.cells.len() < w {
            self.cells.resize(w, StyledCell::blank_styled(style));
        } else if self.cells.len() > w {
            self.cells.truncate(w);
        }
    }

    /// The rightmost x position (exclusive) of this strip.
    pub fn right(&self) -> i32 {
        self.x_offset + self.width()
    }

    /// The characters of this strip as a plain string.
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.ch).collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn red_style() -> CellStyle {
        CellStyle {
            fg: Some("red".into()),
            ..CellStyle::default()
        }
    }

    // -----------------------------------------------------------------------
    // CellStyle
    // -----------------------------------------------------------------------

    #[test]
    fn cell_style_default_is_empty() {
        let s = CellStyle::default();
        assert!(s.fg.is_none());
        assert!(s.bg.is_none());
        assert!(!s.bold);
        assert!(!s.dim);
        assert!(!s.italic);
        assert!(!s.underline);
        assert!(!s.reverse);
    }

    #[test]
    fn cell_style_modifiers_keep_colors() {
        let dim = red_style().dimmed();
        assert!(dim.dim);
        assert_eq!(dim.fg, Some("red".into()));

        let bold = red_style().bolded();
        assert!(bold.bold);
        assert!(!bold.dim);

        assert!(CellStyle::new().underlined().underline);
    }

    // -----------------------------------------------------------------------
    // StyledCell
    // -----------------------------------------------------------------------

    #[test]
    fn styled_cell_default_is_blank() {
        assert_eq!(StyledCell::default(), StyledCell::blank());
        assert_eq!(StyledCell::blank().ch, ' ');
    }

    // -----------------------------------------------------------------------
    // Strip
    // -----------------------------------------------------------------------

    #[test]
    fn strip_push_str() {
        let mut s = Strip::new(0, 0);
        s.push_str("Hello", red_style());
        assert_eq!(s.width(), 5);
        assert_eq!(s.cells[0].ch, 'H');
        assert_eq!(s.cells[4].ch, 'o');
        for cell in &s.cells {
            assert_eq!(cell.style, red_style());
        }
    }

    #[test]
    fn strip_push_counts_chars_not_bytes() {
        let mut s = Strip::new(0, 0);
        s.push_str("‹ ›", CellStyle::default());
        assert_eq!(s.width(), 3);
        assert_eq!(s.text(), "‹ ›");
    }

    #[test]
    fn strip_right() {
        let mut s = Strip::new(0, 10);
        s.push_str("abc", CellStyle::default());
        assert_eq!(s.right(), 13);
    }

    #[test]
    fn strip_fill_pad() {
        let mut s = Strip::new(0, 0);
        s.push_str("Hi", red_style());
        s.fill(5, CellStyle::default());
        assert_eq!(s.width(), 5);
        assert_eq!(s.text(), "Hi   ");
    }

    #[test]
    fn strip_fill_truncate() {
        let mut s = Strip::new(0, 0);
        s.push_str("Hello World", red_style());
        s.fill(5, CellStyle::default());
        assert_eq!(s.text(), "Hello");
    }

    #[test]
    fn strip_fill_negative_width_empties() {
        let mut s = Strip::new(0, 0);
        s.push_str("abc", red_style());
        s.fill(-1, CellStyle::default());
        assert_eq!(s.width(), 0);
    }
}
