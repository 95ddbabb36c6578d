// Copyright 2025 the Resort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Move validation across container boundaries.
//!
//! While a gesture hovers over a drop position, the backend asks whether the
//! prospective move is permitted *before* performing the DOM-level move. The
//! types here carry that question to a host-supplied predicate, including the
//! *future index*: the logical index the dragged item would land at if the
//! gesture settled here.

use crate::registry::{ContainerHandle, ItemRef};

/// The predicate's verdict on a prospective move.
///
/// A veto means the backend never performs the DOM-level move, so the index
/// mapper and mutation applier are not invoked at all for this position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveDecision {
    /// Permit the move as proposed.
    Allow,
    /// Veto the move.
    Deny,
    /// Permit, but insert before the related node regardless of orientation.
    InsertBefore,
    /// Permit, but insert after the related node regardless of orientation.
    InsertAfter,
}

/// What the backend reported about the hovered drop position.
///
/// `visible_children` are the destination container's children *as the user
/// sees them*: hosts exclude hidden children before building the query, and
/// the dragged-node containment check below is defined against that filtered
/// slice.
#[derive(Copy, Clone, Debug)]
pub struct MoveQuery<'a, N> {
    /// Source container node.
    pub from: &'a N,
    /// Destination container node.
    pub to: &'a N,
    /// The child the pointer is currently over.
    pub related: &'a N,
    /// The destination's visible children, in DOM order.
    pub visible_children: &'a [N],
    /// Whether the backend would insert after `related` rather than before.
    pub will_insert_after: bool,
}

/// The destination side of a move query, as far as it could be resolved.
#[derive(Copy, Clone, Debug)]
pub struct RelatedContext<'a, T> {
    /// The destination's logical collection.
    pub list: &'a [T],
    /// The logical item under the pointer, when `related` is a tracked item
    /// node rather than the container itself.
    pub item: Option<ItemRef<'a, T>>,
}

/// Everything a move predicate gets to decide on.
#[derive(Copy, Clone, Debug)]
pub struct MoveContext<'a, T, N> {
    /// Source container node.
    pub from: &'a N,
    /// Destination container node.
    pub to: &'a N,
    /// Logical index of the dragged item in its source collection.
    pub dragged_index: usize,
    /// The dragged item value.
    pub dragged_element: &'a T,
    /// Logical index the item would land at if the gesture settled here.
    pub future_index: usize,
    /// The destination side, when it could be resolved; `None` means the
    /// destination is not a registered container.
    pub related: Option<RelatedContext<'a, T>>,
    /// Whether insertion would happen after the related node.
    pub will_insert_after: bool,
    /// Whether source and destination are the same container.
    pub same_container: bool,
}

/// Computes the logical index the dragged item would land at.
///
/// Defined over the query's visible children: the related node's position is
/// resolved through the destination's index map, and one is added when the
/// backend would insert after a node while the dragged node is not already
/// among the destination's visible children (it already occupies a slot there
/// once it is). An empty destination always yields 0.
#[must_use]
pub fn future_index<T, N: PartialEq>(
    query: &MoveQuery<'_, N>,
    destination: &dyn ContainerHandle<T, N>,
    dragging: Option<&N>,
) -> usize {
    if query.visible_children.is_empty() {
        return 0;
    }
    let list_len = destination.logical_list().len();
    let current = match query
        .visible_children
        .iter()
        .position(|child| child == query.related)
    {
        Some(dom_index) => destination.visible_index(dom_index).index_for_len(list_len),
        // Related node not among the visible children: treat as an append.
        None => list_len,
    };
    let dragged_in_list =
        dragging.is_some_and(|node| query.visible_children.iter().any(|child| child == node));
    if dragged_in_list || !query.will_insert_after {
        current
    } else {
        current + 1
    }
}
