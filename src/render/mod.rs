//! Rendering primitives: styled cells and strips.

pub mod strip;

pub use strip::{CellStyle, Strip, StyledCell};
