//! Sequenced console event queue.
//!
//! The controller publishes every state transition here; the presentation
//! layer drains it and replays the events through [`crate::state::ConsoleState::apply`].
//! Replay only reproduces the controller's state if no event is skipped, so
//! each event carries a sequence number and drained batches report where
//! they start.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use aura_types::event::ConsoleEvent;

#[derive(Default)]
struct Queue {
    pending: VecDeque<ConsoleEvent>,
    /// Sequence number of the next event to be published
    next_seq: u64,
}

/// A run of consecutive events taken from the bus
#[derive(Debug, Clone, PartialEq)]
pub struct EventBatch {
    /// Sequence number of `events[0]`
    pub first_seq: u64,
    pub events: Vec<ConsoleEvent>,
}

impl EventBatch {
    /// Sequence number the next batch will start at.
    pub fn end_seq(&self) -> u64 {
        self.first_seq + self.events.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Shared handle; clones publish to and drain from the same queue.
#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<Queue>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish an event and return its sequence number.
    pub fn emit(&self, event: ConsoleEvent) -> u64 {
        let mut queue = self.queue.borrow_mut();
        let seq = queue.next_seq;
        queue.next_seq += 1;
        queue.pending.push_back(event);
        seq
    }

    /// Take every pending event along with the sequence number of the first.
    pub fn drain_batch(&self) -> EventBatch {
        let mut queue = self.queue.borrow_mut();
        let first_seq = queue.next_seq - queue.pending.len() as u64;
        EventBatch {
            first_seq,
            events: queue.pending.drain(..).collect(),
        }
    }

    pub fn drain(&self) -> Vec<ConsoleEvent> {
        self.drain_batch().events
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().pending.is_empty()
    }

    /// Events published over the bus's lifetime, drained or not.
    pub fn published(&self) -> u64 {
        self.queue.borrow().next_seq
    }
}
