//! # gilt-pagination
//!
//! Pagination and card widgets for gilt-tui style terminal UIs.
//!
//! The pagination component is props-driven: the owner supplies the current
//! page, total and page size every cycle, and the component answers user
//! interaction with change requests instead of mutating anything itself.
//!
//! ## Core Systems
//!
//! - **[`pagination`]**: page model, display strings, option lists, controller
//! - **[`widgets`]**: Pagination, PaginationButton, PaginationSelect, PagesText, ItemsText, Label, Card
//! - **[`event`]**: outbound events, event sinks, keyboard navigation
//! - **[`i18n`]**: injectable translation with a built-in dictionary
//! - **[`widget`]**: the `Widget` trait and row layout
//! - **[`render`]**: styled cells and strips
//! - **[`testing`]**: headless Pilot and snapshot helpers
//! - **[`geometry`]**: regions

// Foundation
pub mod error;
pub mod geometry;
pub mod text;

// Core
pub mod i18n;
pub mod pagination;

// Widget system
pub mod widget;
pub mod widgets;

// Events
pub mod event;

// Rendering
pub mod render;

// Testing
pub mod testing;

pub use error::{PaginationError, Result};
