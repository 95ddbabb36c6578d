// Copyright 2025 the Resort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building the visible index map from an observed child list.

use alloc::vec::Vec;

use crate::map::{VisibleIndexMap, VisibleSlot};

/// Position of a node among the nodes rendered for the collection.
///
/// This is the drag-start question: "which logical item did the gesture pick
/// up?". Returns `None` when the node was not produced for the collection,
/// which callers must treat as "no context available" (for example a foreign
/// node queried during cross-container move validation).
#[must_use]
pub fn logical_index_of<N: PartialEq>(rendered: &[N], node: &N) -> Option<usize> {
    rendered.iter().position(|n| n == node)
}

/// Configuration for translating a container's child list into a
/// [`VisibleIndexMap`].
///
/// `leading_extra` and `trailing_extra` describe how many container children
/// are rendered before and after the collection (headers and footers). They
/// default to zero.
///
/// When the collection renders inside a single transition wrapper, the
/// wrapper's children are the tracked child list; hosts pass that flattened
/// slice as `dom_children`.
///
/// # Example
///
/// ```rust
/// use resort_index::{IndexMapper, VisibleSlot};
///
/// let mapper = IndexMapper::new().with_trailing_extra(1);
/// let map = mapper.recompute(&['a', 'b', 'f'], &['a', 'b']);
/// assert_eq!(
///     map.slots(),
///     &[VisibleSlot::Item(0), VisibleSlot::Item(1), VisibleSlot::TrailingExtra],
/// );
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexMapper {
    leading_extra: usize,
    trailing_extra: usize,
}

impl IndexMapper {
    /// Creates a mapper with no leading or trailing extras.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of non-collection children rendered before the
    /// collection.
    #[must_use]
    pub fn with_leading_extra(mut self, count: usize) -> Self {
        self.leading_extra = count;
        self
    }

    /// Sets the number of non-collection children rendered after the
    /// collection.
    #[must_use]
    pub fn with_trailing_extra(mut self, count: usize) -> Self {
        self.trailing_extra = count;
        self
    }

    /// Number of leading non-collection children.
    #[must_use]
    #[inline]
    pub fn leading_extra(&self) -> usize {
        self.leading_extra
    }

    /// Number of trailing non-collection children.
    #[must_use]
    #[inline]
    pub fn trailing_extra(&self) -> usize {
        self.trailing_extra
    }

    /// Builds the translation table for the observed child list.
    ///
    /// `dom_children` are the container's current children in DOM order;
    /// `rendered` are the nodes the framework produced for the collection, in
    /// collection order. Children in the trailing region classify as
    /// [`VisibleSlot::TrailingExtra`]; children in the leading region and
    /// children absent from `rendered` classify as [`VisibleSlot::Unmatched`].
    ///
    /// The returned map always has exactly `dom_children.len()` slots.
    #[must_use]
    pub fn recompute<N: PartialEq>(&self, dom_children: &[N], rendered: &[N]) -> VisibleIndexMap {
        let trailing_start = dom_children.len().saturating_sub(self.trailing_extra);
        let slots: Vec<VisibleSlot> = dom_children
            .iter()
            .enumerate()
            .map(|(dom_index, child)| {
                if dom_index >= trailing_start {
                    VisibleSlot::TrailingExtra
                } else if dom_index < self.leading_extra {
                    VisibleSlot::Unmatched
                } else {
                    match logical_index_of(rendered, child) {
                        Some(i) => VisibleSlot::Item(i),
                        None => VisibleSlot::Unmatched,
                    }
                }
            })
            .collect();
        VisibleIndexMap::from_slots(slots)
    }
}
