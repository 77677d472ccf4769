//! Event system: outbound events, sinks, keyboard navigation.

pub mod input;
pub mod message;
pub mod sink;

pub use input::NavigationKey;
pub use message::PaginationEvent;
pub use sink::{CallbackSink, EventQueue, EventSink};
