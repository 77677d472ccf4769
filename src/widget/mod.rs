//! Widget system: the `Widget` trait and row layout.

pub mod traits;

pub use traits::{render_row, Widget};
