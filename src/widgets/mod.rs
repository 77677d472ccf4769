//! Built-in widgets: Pagination and its parts, Card.

pub mod button;
pub mod card;
pub mod info;
pub mod pagination;
pub mod select;

pub use button::{ChevronIcon, PaginationButton};
pub use card::Card;
pub use info::{ItemsText, Label, PagesText};
pub use pagination::Pagination;
pub use select::PaginationSelect;
