// Copyright 2025 the Resort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visible index map: one slot per DOM child, resolved on demand.

use alloc::vec::Vec;

/// Classification of a single DOM child with respect to the tracked collection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VisibleSlot {
    /// The child renders the collection item at this logical index.
    Item(usize),
    /// The child sits in the trailing non-collection region (footer); for
    /// insertion purposes it stands for "one past the last logical index".
    TrailingExtra,
    /// The child is not part of the tracked collection (leading extras and
    /// foreign nodes). Callers that need to distinguish untracked nodes must
    /// treat this as "no logical position available".
    Unmatched,
}

/// A resolved insertion intent within the logical collection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InsertPosition {
    /// Insert at this logical index.
    At(usize),
    /// Append after the last element.
    End,
}

impl InsertPosition {
    /// Collapses the position to a concrete index for a collection of the
    /// given length (`End` becomes `len`).
    #[must_use]
    #[inline]
    pub fn index_for_len(self, len: usize) -> usize {
        match self {
            Self::At(i) => i,
            Self::End => len,
        }
    }
}

/// Translation table from DOM child positions to logical collection positions.
///
/// Built by [`IndexMapper::recompute`](crate::IndexMapper::recompute) from an
/// observed child list; valid only until the container's children change.
///
/// Invariant: [`len`](Self::len) equals the DOM child count the map was
/// computed from, so any in-bounds DOM index has exactly one slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleIndexMap {
    slots: Vec<VisibleSlot>,
}

impl VisibleIndexMap {
    /// Creates a map from pre-classified slots.
    #[must_use]
    pub fn from_slots(slots: Vec<VisibleSlot>) -> Self {
        Self { slots }
    }

    /// Number of DOM children this map covers.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when the map covers no children.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slot for a DOM child position, or `None` when out of bounds.
    #[must_use]
    pub fn slot(&self, dom_index: usize) -> Option<VisibleSlot> {
        self.slots.get(dom_index).copied()
    }

    /// All slots, in DOM order.
    #[must_use]
    pub fn slots(&self) -> &[VisibleSlot] {
        &self.slots
    }

    /// Resolves a drag-reported DOM index to a logical insertion position.
    ///
    /// In-bounds [`VisibleSlot::Item`] slots resolve to their logical index;
    /// [`VisibleSlot::TrailingExtra`] and [`VisibleSlot::Unmatched`] resolve
    /// to [`InsertPosition::End`]. A `dom_index` at or past [`len`](Self::len)
    /// also resolves to `End`: drag libraries report an index one past the
    /// last child during an append gesture, and the clamp is deliberately
    /// asymmetric to accept that.
    #[must_use]
    pub fn resolve(&self, dom_index: usize) -> InsertPosition {
        match self.slots.get(dom_index) {
            Some(VisibleSlot::Item(i)) => InsertPosition::At(*i),
            Some(VisibleSlot::TrailingExtra) | Some(VisibleSlot::Unmatched) | None => {
                InsertPosition::End
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_map_resolves_everything_to_end() {
        let map = VisibleIndexMap::default();
        assert!(map.is_empty());
        assert_eq!(map.resolve(0), InsertPosition::End);
        assert_eq!(map.resolve(7), InsertPosition::End);
    }

    #[test]
    fn item_slots_resolve_to_their_logical_index() {
        let map = VisibleIndexMap::from_slots(vec![
            VisibleSlot::Item(0),
            VisibleSlot::Item(1),
            VisibleSlot::Item(2),
        ]);
        assert_eq!(map.resolve(0), InsertPosition::At(0));
        assert_eq!(map.resolve(1), InsertPosition::At(1));
        assert_eq!(map.resolve(2), InsertPosition::At(2));
    }

    #[test]
    fn one_past_the_end_is_an_append() {
        let map = VisibleIndexMap::from_slots(vec![VisibleSlot::Item(0), VisibleSlot::Item(1)]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.resolve(2), InsertPosition::End);
    }

    #[test]
    fn trailing_extra_resolves_to_end() {
        let map = VisibleIndexMap::from_slots(vec![
            VisibleSlot::Item(0),
            VisibleSlot::TrailingExtra,
        ]);
        assert_eq!(map.resolve(1), InsertPosition::End);
    }

    #[test]
    fn unmatched_resolves_to_end_but_slot_reports_it() {
        let map = VisibleIndexMap::from_slots(vec![VisibleSlot::Unmatched, VisibleSlot::Item(0)]);
        assert_eq!(map.resolve(0), InsertPosition::End);
        assert_eq!(map.slot(0), Some(VisibleSlot::Unmatched));
        assert_eq!(map.slot(2), None);
    }

    #[test]
    fn insert_position_collapses_for_length() {
        assert_eq!(InsertPosition::At(3).index_for_len(10), 3);
        assert_eq!(InsertPosition::End.index_for_len(10), 10);
        assert_eq!(InsertPosition::End.index_for_len(0), 0);
    }
}
