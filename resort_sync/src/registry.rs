// Copyright 2025 the Resort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The container registry and the cross-container query seam.
//!
//! A cross-container move needs to ask the *other* side three things: what is
//! your logical list, which item does this node render, and what logical
//! index does this DOM position map to. [`ContainerHandle`] is that query
//! surface; [`ContainerRegistry`] is the explicit, non-owning map from a
//! container's node identity to whatever key the host uses to reach the
//! owning synchronizer.
//!
//! The registry is populated at mount and erased at unmount. It is irrelevant
//! (and safely absent) for single-container use; a failed lookup simply means
//! "no context available" and dependent logic is skipped.

use hashbrown::HashMap;

use core::hash::Hash;

use resort_index::InsertPosition;

/// A borrowed view of one logical item: its index and value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ItemRef<'a, T> {
    /// Logical index within the owning collection.
    pub index: usize,
    /// The item value.
    pub element: &'a T,
}

/// Read-only queries a container answers during cross-container moves.
///
/// Implemented by [`ListSynchronizer`](crate::ListSynchronizer); hosts with
/// custom containers can implement it themselves.
pub trait ContainerHandle<T, N> {
    /// The container's current logical collection.
    fn logical_list(&self) -> &[T];

    /// The logical item a node renders, or `None` when the node is not part
    /// of the tracked collection.
    fn underlying_item(&self, node: &N) -> Option<ItemRef<'_, T>>;

    /// Resolves a DOM child position to a logical insertion position.
    fn visible_index(&self, dom_index: usize) -> InsertPosition;
}

/// Non-owning map from container node identity to a host lookup key.
///
/// `N` is the host's node identifier; `K` is whatever the host needs to find
/// the owning synchronizer (an arena index, a slot key, an entity ID).
///
/// # Example
///
/// ```rust
/// use resort_sync::ContainerRegistry;
///
/// let mut registry: ContainerRegistry<u32, &'static str> = ContainerRegistry::new();
/// registry.register(7, "left-column");
/// assert_eq!(registry.lookup(&7), Some(&"left-column"));
///
/// registry.unregister(&7);
/// assert_eq!(registry.lookup(&7), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ContainerRegistry<N, K> {
    containers: HashMap<N, K>,
}

impl<N: Eq + Hash, K> ContainerRegistry<N, K> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            containers: HashMap::new(),
        }
    }

    /// Associates a container node with a host key, returning any key it
    /// replaced.
    pub fn register(&mut self, container: N, key: K) -> Option<K> {
        self.containers.insert(container, key)
    }

    /// Erases a container's association, returning its key if it had one.
    pub fn unregister(&mut self, container: &N) -> Option<K> {
        self.containers.remove(container)
    }

    /// Looks up the host key for a container node.
    #[must_use]
    pub fn lookup(&self, container: &N) -> Option<&K> {
        self.containers.get(container)
    }

    /// Number of registered containers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Returns `true` when no container is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_lookup_unregister_roundtrip() {
        let mut registry: ContainerRegistry<u32, usize> = ContainerRegistry::new();
        assert!(registry.is_empty());

        assert_eq!(registry.register(1, 10), None);
        assert_eq!(registry.register(2, 20), None);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup(&1), Some(&10));

        assert_eq!(registry.unregister(&1), Some(10));
        assert_eq!(registry.lookup(&1), None);
        // Unregistering an unknown container is harmless.
        assert_eq!(registry.unregister(&1), None);
    }

    #[test]
    fn re_registering_replaces_the_key() {
        let mut registry: ContainerRegistry<u32, usize> = ContainerRegistry::new();
        registry.register(1, 10);
        assert_eq!(registry.register(1, 11), Some(10));
        assert_eq!(registry.lookup(&1), Some(&11));
    }
}
