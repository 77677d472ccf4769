//! Pagination core: state, derived model, display strings, controller.

pub mod config;
pub mod controller;
pub mod format;
pub mod model;
pub mod options;

pub use config::{PaginationConfig, PaginationProps};
pub use controller::PaginationController;
pub use model::{ItemRange, PageModel, PaginationState};
pub use options::SelectOption;
