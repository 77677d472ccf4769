//! Event sinks: where outbound pagination events go.
//!
//! The controller is generic over [`EventSink`], so the owner of the page
//! state picks the delivery mechanism: a queue drained after each
//! interaction ([`EventQueue`]), a handler callback ([`CallbackSink`]), or a
//! tokio channel for owners living on another task.

use std::collections::VecDeque;
use std::fmt;

use tokio::sync::mpsc::UnboundedSender;

use super::message::PaginationEvent;

// ---------------------------------------------------------------------------
// EventSink
// ---------------------------------------------------------------------------

/// Receiver of outbound pagination events.
///
/// Delivery is synchronous and fire-and-forget: `emit` must not fail back
/// into the controller.
pub trait EventSink {
    /// Deliver one event.
    fn emit(&mut self, event: PaginationEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: PaginationEvent) {
        (**self).emit(event);
    }
}

impl EventSink for Vec<PaginationEvent> {
    fn emit(&mut self, event: PaginationEvent) {
        self.push(event);
    }
}

impl EventSink for UnboundedSender<PaginationEvent> {
    fn emit(&mut self, event: PaginationEvent) {
        if self.send(event).is_err() {
            log::warn!("dropping {event}: receiver closed");
        }
    }
}

// ---------------------------------------------------------------------------
// EventQueue
// ---------------------------------------------------------------------------

/// Queue-based sink.
///
/// Events are enqueued by the controller and drained by the owner. The queue
/// does not interpret or deduplicate events.
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<PaginationEvent>,
}

impl EventQueue {
    /// Create a new, empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an event.
    pub fn push(&mut self, event: PaginationEvent) {
        self.queue.push_back(event);
    }

    /// Take the oldest pending event.
    pub fn pop(&mut self) -> Option<PaginationEvent> {
        self.queue.pop_front()
    }

    /// Drain all pending events in emission order.
    ///
    /// The queue is empty after this call.
    pub fn drain(&mut self) -> Vec<PaginationEvent> {
        self.queue.drain(..).collect()
    }

    /// Number of pending events.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl EventSink for EventQueue {
    fn emit(&mut self, event: PaginationEvent) {
        self.push(event);
    }
}

// ---------------------------------------------------------------------------
// CallbackSink
// ---------------------------------------------------------------------------

/// Sink that forwards each event to a handler closure.
pub struct CallbackSink<F> {
    handler: F,
}

impl<F: FnMut(PaginationEvent)> CallbackSink<F> {
    /// Wrap a handler closure.
    pub fn new(handler: F) -> Self {
        Self { handler }
    }
}

impl<F: FnMut(PaginationEvent)> EventSink for CallbackSink<F> {
    fn emit(&mut self, event: PaginationEvent) {
        (self.handler)(event);
    }
}

impl<F> fmt::Debug for CallbackSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSink").finish_non_exhaustive()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    // ── EventQueue ───────────────────────────────────────────────────

    #[test]
    fn new_queue_is_empty() {
        let q = EventQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.pending_count(), 0);
    }

    #[test]
    fn drain_preserves_order_and_empties() {
        let mut q = EventQueue::new();
        q.emit(PaginationEvent::PageChange(2));
        q.emit(PaginationEvent::PerPageChange(20));
        assert_eq!(q.pending_count(), 2);

        let events = q.drain();
        assert_eq!(
            events,
            vec![PaginationEvent::PageChange(2), PaginationEvent::PerPageChange(20)]
        );
        assert!(q.is_empty());
    }

    #[test]
    fn pop_takes_oldest_first() {
        let mut q = EventQueue::new();
        q.emit(PaginationEvent::PageChange(2));
        q.emit(PaginationEvent::PerPageChange(20));
        assert_eq!(q.pop(), Some(PaginationEvent::PageChange(2)));
        assert_eq!(q.pending_count(), 1);
        assert_eq!(q.pop(), Some(PaginationEvent::PerPageChange(20)));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn queue_keeps_duplicates() {
        let mut q = EventQueue::new();
        q.emit(PaginationEvent::PageChange(3));
        q.emit(PaginationEvent::PageChange(3));
        assert_eq!(q.drain().len(), 2);
    }

    // ── Other sinks ──────────────────────────────────────────────────

    #[test]
    fn vec_sink_collects() {
        let mut v: Vec<PaginationEvent> = Vec::new();
        v.emit(PaginationEvent::PageChange(1));
        assert_eq!(v, vec![PaginationEvent::PageChange(1)]);
    }

    #[test]
    fn callback_sink_invokes_handler() {
        let mut seen = Vec::new();
        {
            let mut sink = CallbackSink::new(|e| seen.push(e));
            sink.emit(PaginationEvent::PerPageChange(40));
        }
        assert_eq!(seen, vec![PaginationEvent::PerPageChange(40)]);
    }

    #[test]
    fn mut_ref_forwards() {
        fn emit_into<S: EventSink>(mut sink: S) {
            sink.emit(PaginationEvent::PageChange(9));
        }

        let mut q = EventQueue::new();
        emit_into(&mut q);
        assert_eq!(q.pending_count(), 1);
    }

    #[test]
    fn channel_sink_delivers() {
        let (mut tx, mut rx) = mpsc::unbounded_channel();
        tx.emit(PaginationEvent::PageChange(5));
        assert_eq!(rx.try_recv().unwrap(), PaginationEvent::PageChange(5));
    }

    #[test]
    fn channel_sink_tolerates_closed_receiver() {
        let (mut tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        tx.emit(PaginationEvent::PageChange(5));
    }
}
