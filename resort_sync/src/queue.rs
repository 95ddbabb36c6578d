// Copyright 2025 the Resort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred event delivery.
//!
//! Nothing is delivered synchronously inside a drag callback. Handlers push
//! into this FIFO buffer and the host drains it *after* the current update
//! cycle has applied — after the framework has re-rendered from the mutated
//! collection. That single rule yields the ordering guarantee documented on
//! [`SyncEvent`]: within one gesture, the model update precedes the
//! owner-specific notification, which precedes the unified change.

use alloc::vec::Vec;
use core::mem;

use crate::outcome::SyncEvent;

/// FIFO buffer of pending [`SyncEvent`]s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventQueue<T, N> {
    events: Vec<SyncEvent<T, N>>,
}

impl<T, N> EventQueue<T, N> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event.
    pub fn push(&mut self, event: SyncEvent<T, N>) {
        self.events.push(event);
    }

    /// Drains every pending event, in push order.
    ///
    /// Hosts call this once per settled update cycle and dispatch the result.
    #[must_use]
    pub fn take(&mut self) -> Vec<SyncEvent<T, N>> {
        mem::take(&mut self.events)
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` when nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{DragOutcome, SyncEvent};
    use alloc::vec;

    #[test]
    fn take_preserves_push_order_and_empties_the_queue() {
        let mut queue: EventQueue<u32, u32> = EventQueue::new();
        queue.push(SyncEvent::ModelUpdate(vec![1]));
        queue.push(SyncEvent::Added {
            new_index: 0,
            element: 1,
        });
        queue.push(SyncEvent::Change(DragOutcome::Added {
            new_index: 0,
            element: 1,
        }));
        assert_eq!(queue.len(), 3);

        let events = queue.take();
        assert!(matches!(events[0], SyncEvent::ModelUpdate(_)));
        assert!(matches!(events[1], SyncEvent::Added { .. }));
        assert!(matches!(events[2], SyncEvent::Change(_)));
        assert!(queue.is_empty());
    }

    #[test]
    fn take_on_empty_queue_yields_nothing() {
        let mut queue: EventQueue<u32, u32> = EventQueue::new();
        assert!(queue.take().is_empty());
    }
}
