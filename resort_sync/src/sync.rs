// Copyright 2025 the Resort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The list synchronizer: one instance per rendered sortable container.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use resort_index::{IndexMapper, InsertPosition, VisibleIndexMap, logical_index_of};
use resort_session::{DragContext, DragSession, PullKind};

use crate::backend::{self, DragBackend};
use crate::binding::{Alteration, Diagnostic, ListBinding};
use crate::bridge::{self, MoveContext, MoveDecision, MoveQuery, RelatedContext};
use crate::options::SyncOptions;
use crate::outcome::{DomFixup, DragEvent, DragOutcome, Fixups, NativeKind, SyncEvent};
use crate::queue::EventQueue;
use crate::registry::{ContainerHandle, ContainerRegistry, ItemRef};

/// Keeps one rendered container's child order and its owned collection in
/// agreement while a drag backend physically moves nodes.
///
/// The synchronizer is driven entirely by the host: backend callbacks arrive
/// through the `on_drag_*` entry points, render settling arrives through
/// [`refresh_indexes`](Self::refresh_indexes), and emissions leave through
/// [`take_events`](Self::take_events) after the host's update cycle. It never
/// touches a real DOM; handlers return [`DomFixup`] commands for the host to
/// apply.
///
/// # Example
///
/// A same-container reorder, start to finish:
///
/// ```rust
/// use resort_sync::{DragEvent, DragSession, ListSynchronizer, SyncOptions};
///
/// let mut list: ListSynchronizer<&str, u32> =
///     ListSynchronizer::one_way(SyncOptions::new(), vec!["a", "b", "c"]);
/// let mut session = DragSession::new();
///
/// // Container 1 rendered nodes 10, 11, 12 for items 0, 1, 2.
/// list.refresh_indexes(&[10, 11, 12], &[10, 11, 12]);
///
/// list.on_drag_start(&DragEvent::new(1, 1, 10).with_old_index(0), &mut session);
/// let _fixups = list.on_drag_update(&DragEvent::new(1, 1, 10).with_old_index(0).with_new_index(2));
/// list.on_drag_end(&DragEvent::new(1, 1, 10), &mut session);
///
/// assert_eq!(list.list(), &["b", "c", "a"]);
/// ```
pub struct ListSynchronizer<T, N> {
    options: SyncOptions<T, N>,
    binding: ListBinding<T>,
    mapper: IndexMapper,
    map: VisibleIndexMap,
    rendered: Vec<N>,
    context: Option<DragContext<T>>,
    queue: EventQueue<T, N>,
    refresh_requested: bool,
    conflict: Option<Diagnostic>,
}

impl<T, N> ListSynchronizer<T, N> {
    /// Builds a synchronizer from the two mutually exclusive collection
    /// sources. Supplying both is a reported (not fatal) usage error; the
    /// one-way list wins and a diagnostic is queued at every mount.
    #[must_use]
    pub fn from_sources(
        options: SyncOptions<T, N>,
        list: Option<Vec<T>>,
        model: Option<Vec<T>>,
    ) -> Self {
        let (binding, conflict) = ListBinding::from_sources(list, model);
        let mapper = options.mapper();
        Self {
            options,
            binding,
            mapper,
            map: VisibleIndexMap::default(),
            rendered: Vec::new(),
            context: None,
            queue: EventQueue::new(),
            refresh_requested: false,
            conflict,
        }
    }

    /// A synchronizer over an externally owned one-way list.
    #[must_use]
    pub fn one_way(options: SyncOptions<T, N>, list: Vec<T>) -> Self {
        Self::from_sources(options, Some(list), None)
    }

    /// A synchronizer over a two-way bound model.
    #[must_use]
    pub fn two_way(options: SyncOptions<T, N>, model: Vec<T>) -> Self {
        Self::from_sources(options, None, Some(model))
    }

    /// A synchronizer with no collection source; every mutation silently
    /// degrades to a no-op.
    #[must_use]
    pub fn unbound(options: SyncOptions<T, N>) -> Self {
        Self::from_sources(options, None, None)
    }

    /// The current logical collection.
    #[must_use]
    pub fn list(&self) -> &[T] {
        self.binding.list()
    }

    /// Returns `true` when a collection source is configured.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding.is_bound()
    }

    /// The configuration this instance was built with.
    #[must_use]
    pub fn options(&self) -> &SyncOptions<T, N> {
        &self.options
    }

    /// Replaces the configuration (the host's reactive options changed).
    /// Follow with [`sync_backend`](Self::sync_backend) to push the changed
    /// values to a live backend.
    pub fn set_options(&mut self, options: SyncOptions<T, N>) {
        self.mapper = options.mapper();
        self.options = options;
        self.refresh_requested = true;
    }

    /// The drag context captured at drag start, while a gesture is live.
    #[must_use]
    pub fn drag_context(&self) -> Option<&DragContext<T>> {
        self.context.as_ref()
    }

    /// The most recently computed visible index map.
    ///
    /// Stale between a collection mutation and the next
    /// [`refresh_indexes`](Self::refresh_indexes); check
    /// [`refresh_requested`](Self::refresh_requested) before trusting it.
    #[must_use]
    pub fn visible_map(&self) -> &VisibleIndexMap {
        &self.map
    }

    /// Whether a mutation has invalidated the index map since the last
    /// refresh.
    #[must_use]
    pub fn refresh_requested(&self) -> bool {
        self.refresh_requested
    }

    /// Asks for the map to be recomputed after the next render pass.
    pub fn request_index_refresh(&mut self) {
        self.refresh_requested = true;
    }

    /// Drains every pending notification, in emission order.
    ///
    /// Hosts call this after their update cycle has applied, which is what
    /// makes every emission "deferred one update cycle".
    #[must_use]
    pub fn take_events(&mut self) -> Vec<SyncEvent<T, N>> {
        self.queue.take()
    }
}

impl<T, N: PartialEq> ListSynchronizer<T, N> {
    /// Recomputes the visible index map from a settled render.
    ///
    /// `dom_children` are the tracked container children in DOM order (the
    /// transition wrapper's children when
    /// [`transition_wrapper`](SyncOptions::with_transition_wrapper) is set);
    /// `rendered` are the nodes produced for the collection, in collection
    /// order.
    pub fn refresh_indexes(&mut self, dom_children: &[N], rendered: &[N])
    where
        N: Clone,
    {
        self.map = self.mapper.recompute(dom_children, rendered);
        self.rendered = rendered.to_vec();
        self.refresh_requested = false;
    }

    /// Replaces the one-way working list (the host's list changed outside a
    /// drag). Invalidates the index map.
    pub fn set_list(&mut self, list: Vec<T>) {
        self.binding.set_list(list);
        self.refresh_requested = true;
    }

    /// Accepts a published two-way model. Invalidates the index map.
    pub fn set_model(&mut self, model: Vec<T>) {
        self.binding.set_model(model);
        self.refresh_requested = true;
    }

    /// Attaches this instance to a backend and registers its container for
    /// cross-container lookups.
    ///
    /// Queues the conflicting-sources diagnostic (exactly once per mount)
    /// when both collection sources were supplied.
    pub fn mount<B: DragBackend, K>(
        &mut self,
        backend: &mut B,
        registry: &mut ContainerRegistry<N, K>,
        container: N,
        key: K,
    ) -> Result<(), B::Error>
    where
        N: Eq + Hash,
    {
        if let Some(diagnostic) = self.conflict {
            self.queue.push(SyncEvent::Diagnostic(diagnostic));
        }
        backend::apply_options(backend, &self.options.backend_options(), self.options.group())?;
        registry.register(container, key);
        self.refresh_requested = true;
        Ok(())
    }

    /// Detaches from the backend and erases the container registration.
    ///
    /// Best-effort: backend release failures are swallowed and an already
    /// absent backend is fine; unmount never fails the host's teardown.
    pub fn unmount<B: DragBackend, K>(
        &mut self,
        backend: Option<&mut B>,
        registry: &mut ContainerRegistry<N, K>,
        container: &N,
    ) where
        N: Eq + Hash,
    {
        registry.unregister(container);
        backend::release(backend);
    }

    /// Re-pushes the current option values to a live backend, skipping the
    /// reserved callback slots.
    pub fn sync_backend<B: DragBackend>(&self, backend: &mut B) -> Result<(), B::Error> {
        backend::update_options(backend, &self.options.backend_options())
    }
}

impl<T: Clone, N: PartialEq> ListSynchronizer<T, N> {
    /// Inserts `element` at the resolved position in a copy of the
    /// collection, publishes it, and queues `Added` then `Change`.
    pub fn apply_add(&mut self, position: InsertPosition, element: T) {
        let new_index = position.index_for_len(self.binding.list().len());
        let alteration = self.binding.alter(|list| {
            let at = new_index.min(list.len());
            list.insert(at, element.clone());
            true
        });
        match alteration {
            Alteration::Unbound => return,
            Alteration::Applied => {}
            Alteration::Publish(copy) => self.queue.push(SyncEvent::ModelUpdate(copy)),
        }
        self.queue.push(SyncEvent::Added {
            new_index,
            element: element.clone(),
        });
        self.queue
            .push(SyncEvent::Change(DragOutcome::Added { new_index, element }));
    }

    /// Removes the element at `old_index` from a copy of the collection,
    /// publishes it, and queues `Removed` then `Change`. Out-of-range
    /// indices are no-ops.
    pub fn apply_remove(&mut self, old_index: usize) {
        let mut removed: Option<T> = None;
        let alteration = self.binding.alter(|list| {
            if old_index < list.len() {
                removed = Some(list.remove(old_index));
                true
            } else {
                false
            }
        });
        let Some(element) = removed else { return };
        if let Alteration::Publish(copy) = alteration {
            self.queue.push(SyncEvent::ModelUpdate(copy));
        }
        self.queue.push(SyncEvent::Removed {
            old_index,
            element: element.clone(),
        });
        self.queue
            .push(SyncEvent::Change(DragOutcome::Removed { old_index, element }));
    }

    /// Moves the element at `old_index` to `new_index` in a single copy and a
    /// single publish, so no intermediate state is observable, and queues
    /// `Moved` then `Change`. An out-of-range `old_index` is a no-op;
    /// `new_index` is interpreted after removal and clamped to the shortened
    /// list.
    pub fn apply_move(&mut self, old_index: usize, new_index: usize) {
        let mut moved: Option<T> = None;
        let alteration = self.binding.alter(|list| {
            if old_index < list.len() {
                let element = list.remove(old_index);
                let at = new_index.min(list.len());
                list.insert(at, element.clone());
                moved = Some(element);
                true
            } else {
                false
            }
        });
        let Some(element) = moved else { return };
        if let Alteration::Publish(copy) = alteration {
            self.queue.push(SyncEvent::ModelUpdate(copy));
        }
        self.queue.push(SyncEvent::Moved {
            old_index,
            new_index,
            element: element.clone(),
        });
        self.queue.push(SyncEvent::Change(DragOutcome::Moved {
            old_index,
            new_index,
            element,
        }));
    }
}

impl<T: Clone, N: Clone + PartialEq> ListSynchronizer<T, N> {
    /// A gesture picked up one of this container's nodes.
    ///
    /// Captures the drag context, stamps the cloned underlying value into the
    /// session, and invalidates the index map. A node that is not part of
    /// the tracked collection leaves no context and stamps nothing.
    pub fn on_drag_start(&mut self, evt: &DragEvent<N>, session: &mut DragSession<T, N>) {
        if self.binding.is_bound() {
            self.refresh_requested = true;
            let context = self.underlying_item(&evt.item).map(|item| DragContext {
                index: item.index,
                element: item.element.clone(),
            });
            self.context = context;
            if let Some(context) = &self.context {
                session.begin(evt.item.clone(), self.options.clone_of(&context.element));
            }
        }
        self.queue.push(SyncEvent::Native {
            kind: NativeKind::Start,
            event: evt.clone(),
        });
    }

    /// A dragged node was dropped into this container from another one.
    ///
    /// Claims the stamped payload (a missing stamp means the gesture did not
    /// originate in a tracked collection and is ignored), inserts it at the
    /// resolved logical index, and asks the host to detach the physically
    /// inserted node so the re-render owns the DOM.
    pub fn on_drag_add(&mut self, evt: &DragEvent<N>, session: &mut DragSession<T, N>) -> Fixups<N> {
        let mut fixups = Fixups::new();
        if self.binding.is_bound() {
            if let Some(element) = session.take_payload(&evt.item) {
                fixups.push(DomFixup::Remove {
                    node: evt.item.clone(),
                });
                let position = match evt.new_index {
                    Some(dom_index) => self.map.resolve(dom_index),
                    None => InsertPosition::End,
                };
                self.apply_add(position, element);
                self.refresh_requested = true;
            }
        }
        self.queue.push(SyncEvent::Native {
            kind: NativeKind::Add,
            event: evt.clone(),
        });
        fixups
    }

    /// A node dragged out of this container settled elsewhere.
    ///
    /// Restores the node to its old DOM position for the re-render to
    /// reconcile. A clone-mode pull only discards the transient clone node
    /// and leaves the collection untouched; otherwise the element at the
    /// captured context index is removed.
    pub fn on_drag_remove(&mut self, evt: &DragEvent<N>) -> Fixups<N> {
        let mut fixups = Fixups::new();
        if self.binding.is_bound() {
            fixups.push(DomFixup::Restore {
                container: evt.from.clone(),
                node: evt.item.clone(),
                dom_index: evt.old_index.unwrap_or(0),
            });
            if evt.pull_kind == Some(PullKind::Clone) {
                if let Some(clone) = &evt.clone {
                    fixups.push(DomFixup::Remove {
                        node: clone.clone(),
                    });
                }
            } else {
                let old_index = self.context.as_ref().map(|context| context.index);
                if let Some(old_index) = old_index {
                    self.apply_remove(old_index);
                }
            }
        }
        self.queue.push(SyncEvent::Native {
            kind: NativeKind::Remove,
            event: evt.clone(),
        });
        fixups
    }

    /// A node changed position within this container.
    ///
    /// Puts the node back where the framework expects it, then moves the
    /// element from the captured context index to the resolved new index in
    /// one published update.
    pub fn on_drag_update(&mut self, evt: &DragEvent<N>) -> Fixups<N> {
        let mut fixups = Fixups::new();
        if self.binding.is_bound() {
            fixups.push(DomFixup::Remove {
                node: evt.item.clone(),
            });
            fixups.push(DomFixup::Restore {
                container: evt.from.clone(),
                node: evt.item.clone(),
                dom_index: evt.old_index.unwrap_or(0),
            });
            let old_index = self.context.as_ref().map(|context| context.index);
            if let Some(old_index) = old_index {
                let position = match evt.new_index {
                    Some(dom_index) => self.map.resolve(dom_index),
                    None => InsertPosition::End,
                };
                let new_index = position.index_for_len(self.binding.list().len());
                self.apply_move(old_index, new_index);
                self.refresh_requested = true;
            }
        }
        self.queue.push(SyncEvent::Native {
            kind: NativeKind::Update,
            event: evt.clone(),
        });
        fixups
    }

    /// The gesture ended (settled or cancelled). Resets the session and the
    /// captured context; a cancelled gesture mutated nothing, so nothing
    /// needs compensating.
    pub fn on_drag_end(&mut self, evt: &DragEvent<N>, session: &mut DragSession<T, N>) {
        self.refresh_requested = true;
        self.context = None;
        session.end();
        self.queue.push(SyncEvent::Native {
            kind: NativeKind::End,
            event: evt.clone(),
        });
    }

    /// Queues a verbatim pass-through of any other backend event
    /// (`choose`, `unchoose`, `sort`, `filter`, `clone`, `move`).
    ///
    /// [`on_drag_move`](Self::on_drag_move) only returns the gate's decision;
    /// hosts that also surface the validation callback as an event queue it
    /// here with [`NativeKind::Move`].
    pub fn on_native(&mut self, kind: NativeKind, evt: &DragEvent<N>) {
        self.queue.push(SyncEvent::Native {
            kind,
            event: evt.clone(),
        });
    }

    /// Gates a prospective move before the backend performs it.
    ///
    /// Without a configured predicate (or without a bound list, or without a
    /// live drag context) every move is allowed. `destination` is the other
    /// side's handle as resolved by the host through the registry; `None`
    /// with a same-container query falls back to `self`, and `None`
    /// otherwise means no context is available, so the predicate sees
    /// `related: None` and a zero future index.
    pub fn on_drag_move(
        &self,
        query: &MoveQuery<'_, N>,
        destination: Option<&dyn ContainerHandle<T, N>>,
        session: &DragSession<T, N>,
    ) -> MoveDecision {
        let Some(predicate) = self.options.move_predicate() else {
            return MoveDecision::Allow;
        };
        if !self.binding.is_bound() {
            return MoveDecision::Allow;
        }
        let Some(context) = &self.context else {
            return MoveDecision::Allow;
        };

        let same_container = query.to == query.from;
        let destination = match destination {
            Some(destination) => Some(destination),
            None if same_container => Some(self as &dyn ContainerHandle<T, N>),
            None => None,
        };
        let (future_index, related) = match destination {
            Some(destination) => {
                let future_index = bridge::future_index(query, destination, session.dragging_node());
                let item = if query.related == query.to {
                    None
                } else {
                    destination.underlying_item(query.related)
                };
                (
                    future_index,
                    Some(RelatedContext {
                        list: destination.logical_list(),
                        item,
                    }),
                )
            }
            None => (0, None),
        };
        predicate(&MoveContext {
            from: query.from,
            to: query.to,
            dragged_index: context.index,
            dragged_element: &context.element,
            future_index,
            related,
            will_insert_after: query.will_insert_after,
            same_container,
        })
    }
}

impl<T, N: PartialEq> ContainerHandle<T, N> for ListSynchronizer<T, N> {
    fn logical_list(&self) -> &[T] {
        self.binding.list()
    }

    fn underlying_item(&self, node: &N) -> Option<ItemRef<'_, T>> {
        let index = logical_index_of(&self.rendered, node)?;
        let element = self.binding.list().get(index)?;
        Some(ItemRef { index, element })
    }

    fn visible_index(&self, dom_index: usize) -> InsertPosition {
        self.map.resolve(dom_index)
    }
}

impl<T: fmt::Debug, N: fmt::Debug> fmt::Debug for ListSynchronizer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListSynchronizer")
            .field("binding", &self.binding)
            .field("map", &self.map)
            .field("context", &self.context)
            .field("refresh_requested", &self.refresh_requested)
            .field("pending_events", &self.queue.len())
            .finish_non_exhaustive()
    }
}
