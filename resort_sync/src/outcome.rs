// Copyright 2025 the Resort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag outcomes, backend callback payloads, and the events the synchronizer
//! emits.

use alloc::string::String;
use alloc::vec::Vec;

use resort_session::PullKind;
use smallvec::SmallVec;

use crate::binding::Diagnostic;

/// What a settled drag gesture did to the collection.
///
/// Exactly one variant per gesture; a cancelled gesture produced no collection
/// mutation and carries nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DragOutcome<T> {
    /// An item arrived from another container.
    Added {
        /// Logical index the item was inserted at.
        new_index: usize,
        /// The inserted item value.
        element: T,
    },
    /// An item left for another container.
    Removed {
        /// Logical index the item was removed from.
        old_index: usize,
        /// The removed item value, captured before removal.
        element: T,
    },
    /// An item changed position within this container.
    Moved {
        /// Logical index before the move.
        old_index: usize,
        /// Logical index after the move.
        new_index: usize,
        /// The moved item value.
        element: T,
    },
    /// The gesture was cancelled; the collection is untouched.
    Cancelled,
}

/// Raw payload of a drag-library callback, expressed in host node IDs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragEvent<N> {
    /// Container the gesture originated in.
    pub from: N,
    /// Container the gesture currently targets.
    pub to: N,
    /// The dragged node.
    pub item: N,
    /// The transient clone node, present for clone-mode pulls.
    pub clone: Option<N>,
    /// DOM child index the node occupied before the gesture.
    pub old_index: Option<usize>,
    /// DOM child index the node occupies after the gesture.
    pub new_index: Option<usize>,
    /// How the source released the item, when the backend reports it.
    pub pull_kind: Option<PullKind>,
}

impl<N> DragEvent<N> {
    /// Creates a minimal event for a gesture within or between the given
    /// containers.
    #[must_use]
    pub fn new(from: N, to: N, item: N) -> Self {
        Self {
            from,
            to,
            item,
            clone: None,
            old_index: None,
            new_index: None,
            pull_kind: None,
        }
    }

    /// Sets the pre-gesture DOM child index.
    #[must_use]
    pub fn with_old_index(mut self, old_index: usize) -> Self {
        self.old_index = Some(old_index);
        self
    }

    /// Sets the post-gesture DOM child index.
    #[must_use]
    pub fn with_new_index(mut self, new_index: usize) -> Self {
        self.new_index = Some(new_index);
        self
    }

    /// Sets the clone node and marks the pull as clone-mode.
    #[must_use]
    pub fn with_clone(mut self, clone: N) -> Self {
        self.clone = Some(clone);
        self.pull_kind = Some(PullKind::Clone);
        self
    }

    /// Sets how the source released the item.
    #[must_use]
    pub fn with_pull_kind(mut self, pull_kind: PullKind) -> Self {
        self.pull_kind = Some(pull_kind);
        self
    }
}

/// The fixed set of backend events passed through to hosts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NativeKind {
    /// A gesture started.
    Start,
    /// A gesture ended.
    End,
    /// A node was dropped into this container.
    Add,
    /// A node left this container.
    Remove,
    /// A node changed position within this container.
    Update,
    /// Any change to this container's child order.
    Sort,
    /// A node was chosen (pressed) for dragging.
    Choose,
    /// A chosen node was released.
    Unchoose,
    /// A drag attempt was filtered out.
    Filter,
    /// A clone node was created for a clone-mode pull.
    Clone,
    /// Move validation was consulted.
    Move,
}

impl NativeKind {
    /// The lower-cased event name hosts re-emit under.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Update => "update",
            Self::Sort => "sort",
            Self::Choose => "choose",
            Self::Unchoose => "unchoose",
            Self::Filter => "filter",
            Self::Clone => "clone",
            Self::Move => "move",
        }
    }
}

/// A notification produced by the synchronizer, delivered deferred.
///
/// For one settled gesture the queue order is: [`ModelUpdate`] (two-way
/// bindings only), then the owner-specific notification ([`Added`],
/// [`Removed`] or [`Moved`]), then the unified [`Change`], then the native
/// pass-through. Observers may therefore assume the owner's collection
/// already reflects the change when `Change` is delivered.
///
/// [`ModelUpdate`]: SyncEvent::ModelUpdate
/// [`Added`]: SyncEvent::Added
/// [`Removed`]: SyncEvent::Removed
/// [`Moved`]: SyncEvent::Moved
/// [`Change`]: SyncEvent::Change
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncEvent<T, N> {
    /// Replacement collection for a two-way binding; the owner decides whether
    /// to accept it (via `set_model`).
    ModelUpdate(Vec<T>),
    /// An item was inserted at `new_index`.
    Added {
        /// Logical insertion index.
        new_index: usize,
        /// The inserted item value.
        element: T,
    },
    /// The item at `old_index` was removed.
    Removed {
        /// Logical index the item was removed from.
        old_index: usize,
        /// The removed item value.
        element: T,
    },
    /// The item moved from `old_index` to `new_index` in one published update.
    Moved {
        /// Logical index before the move.
        old_index: usize,
        /// Logical index after the move.
        new_index: usize,
        /// The moved item value.
        element: T,
    },
    /// Unified notification coalescing whichever outcome occurred.
    Change(DragOutcome<T>),
    /// Verbatim pass-through of a backend event.
    Native {
        /// Which backend event this is.
        kind: NativeKind,
        /// The raw callback payload.
        event: DragEvent<N>,
    },
    /// A configuration diagnostic (reported, never fatal).
    Diagnostic(Diagnostic),
}

/// A DOM correction the host must apply after a drag callback.
///
/// The drag library physically moves nodes; the framework then re-renders
/// from the mutated collection. These commands put the physically moved node
/// back where the framework expects it so the two reconciliations do not
/// fight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomFixup<N> {
    /// Detach this node from its parent.
    Remove {
        /// The node to detach.
        node: N,
    },
    /// Re-insert `node` into `container` at this child position.
    Restore {
        /// The container to insert into.
        container: N,
        /// The node to insert.
        node: N,
        /// Child position to insert at.
        dom_index: usize,
    },
}

/// Fixup list returned by a drag handler; at most two entries in practice.
pub type Fixups<N> = SmallVec<[DomFixup<N>; 2]>;

/// One pass-through option for the drag backend.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    /// A boolean option.
    Bool(bool),
    /// An integer option.
    Int(i64),
    /// A floating-point option.
    Float(f64),
    /// A string option.
    Str(String),
}
