//! Region: the rectangle of terminal cells a widget renders into.

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A rectangular area in terminal cells, positioned by its top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// An empty region at the origin.
    pub const EMPTY: Region = Region { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new region.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The right edge (exclusive): `x + width`.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x + self.width
    }

    /// Whether the region has no renderable area.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// A copy of this region with the width capped at `max_width`.
    #[inline]
    pub const fn with_max_width(self, max_width: i32) -> Region {
        let width = if self.width < max_width { self.width } else { max_width };
        Region { x: self.x, y: self.y, width, height: self.height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges() {
        let r = Region::new(2, 3, 10, 4);
        assert_eq!(r.right(), 12);
    }

    #[test]
    fn empty_regions() {
        assert!(Region::EMPTY.is_empty());
        assert!(Region::new(0, 0, 5, 0).is_empty());
        assert!(Region::new(0, 0, -1, 3).is_empty());
        assert!(!Region::new(0, 0, 1, 1).is_empty());
    }

    #[test]
    fn max_width_caps_only_wider_regions() {
        let r = Region::new(1, 1, 50, 3);
        assert_eq!(r.with_max_width(20), Region::new(1, 1, 20, 3));
        assert_eq!(r.with_max_width(80), r);
    }
}
