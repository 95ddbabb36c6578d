// Copyright 2025 the Resort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=resort_session --heading-base-level=0

//! Resort Session: single-flight drag gesture state for sortable collections.
//!
//! A drag gesture is strictly serial: pointer input cannot start a second drag
//! before the first one ends. This crate owns the state that is shared across
//! the containers a single gesture can touch:
//!
//! - the *dragging node token*, identifying which node is being dragged so
//!   that move-validation in any container can recognize it, and
//! - the *stamped payload*, the cloned underlying item value attached to the
//!   dragged node at drag start and claimed exactly once by whichever
//!   container the node is dropped into.
//!
//! Hosts create one [`DragSession`] per drag "world" (one per process in
//! practice) and thread a reference through every drag callback, instead of
//! the bare module-level globals a dynamic-language adapter would use.
//!
//! Gesture lifecycle: `idle -> dragging -> idle`. [`DragSession::begin`]
//! discards any orphaned state from an interrupted gesture (for example a
//! container unmounted mid-drag); there is no further cleanup obligation.
//! Cancellation is just [`DragSession::end`] with no mutation having occurred.
//!
//! ## Minimal example
//!
//! ```rust
//! use resort_session::DragSession;
//!
//! let mut session: DragSession<String, u32> = DragSession::new();
//!
//! // Drag starts on node 7 carrying a cloned item value.
//! session.begin(7, "apple".to_owned());
//! assert!(session.is_active());
//! assert_eq!(session.dragging_node(), Some(&7));
//!
//! // Only the stamped node can claim the payload, and only once.
//! assert_eq!(session.take_payload(&9), None);
//! assert_eq!(session.take_payload(&7), Some("apple".to_owned()));
//! assert_eq!(session.take_payload(&7), None);
//!
//! session.end();
//! assert!(!session.is_active());
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

/// The logical item a gesture picked up: its index in the source collection
/// and the item value itself, captured at drag start.
///
/// Owned by the *source* container for the duration of one gesture and
/// consulted when the gesture settles (remove or same-container move).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragContext<T> {
    /// Logical index of the item in the source collection at drag start.
    pub index: usize,
    /// The item value at drag start.
    pub element: T,
}

/// How the source container released a dragged item.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PullKind {
    /// The item relocates: the source loses it.
    Move,
    /// The item duplicates: the source keeps it and the destination receives
    /// a clone.
    Clone,
}

/// Cross-container gesture state, shared by every container a drag can visit.
///
/// `T` is the item value type; `N` is the host's node identifier type.
/// Exactly one gesture is active at a time; the session enforces nothing
/// beyond that invariant, which pointer input already guarantees.
#[derive(Clone, Debug, Default)]
pub struct DragSession<T, N> {
    dragging: Option<N>,
    payload: Option<(N, T)>,
}

impl<T, N: PartialEq> DragSession<T, N> {
    /// Creates an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dragging: None,
            payload: None,
        }
    }

    /// Starts a gesture: records `node` as the dragging node token and stamps
    /// `payload` onto it.
    ///
    /// Any state left over from an interrupted previous gesture is discarded.
    pub fn begin(&mut self, node: N, payload: T)
    where
        N: Clone,
    {
        self.dragging = Some(node.clone());
        self.payload = Some((node, payload));
    }

    /// The node currently being dragged, if a gesture is active.
    ///
    /// Read-only between [`begin`](Self::begin) and [`end`](Self::end);
    /// consulted by future-index computation during move validation.
    #[must_use]
    pub fn dragging_node(&self) -> Option<&N> {
        self.dragging.as_ref()
    }

    /// Claims the stamped payload for `node`.
    ///
    /// Succeeds at most once per gesture, and only for the node that was
    /// stamped at [`begin`](Self::begin). The destination side of a
    /// cross-container drop uses this instead of re-deriving the value from
    /// the source collection, which may already have spliced or cloned it.
    #[must_use]
    pub fn take_payload(&mut self, node: &N) -> Option<T> {
        match &self.payload {
            Some((stamped, _)) if stamped == node => self.payload.take().map(|(_, value)| value),
            _ => None,
        }
    }

    /// Ends the gesture and returns to idle. Safe to call when already idle.
    pub fn end(&mut self) {
        self.dragging = None;
        self.payload = None;
    }

    /// Returns `true` while a gesture is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.dragging.is_some()
    }
}
