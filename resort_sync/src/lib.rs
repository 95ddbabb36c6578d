// Copyright 2025 the Resort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=resort_sync --heading-base-level=0

//! Resort Sync: drag-sort list synchronization for reactive hosts.
//!
//! A drag library physically reorders the children of a rendered container; a
//! reactive framework re-renders that container from an application-owned
//! ordered collection. This crate sits between the two and keeps them in
//! agreement: it translates the DOM indices the drag library reports into
//! logical collection indices, applies exactly one add/remove/move edit per
//! settled gesture to a copy of the collection, and publishes the result to
//! the collection's owner.
//!
//! The core pieces:
//!
//! - [`ListSynchronizer`]: one per rendered container. Receives backend
//!   callbacks (`on_drag_start`, `on_drag_add`, `on_drag_remove`,
//!   `on_drag_update`, `on_drag_end`, `on_drag_move`), owns the collection
//!   binding, and queues deferred [`SyncEvent`]s for the host to drain after
//!   its update cycle.
//! - [`SyncOptions`]: the recognized configuration surface (tag, group,
//!   clone function, move predicate, selectors, scroll tuning) plus verbatim
//!   camel-cased pass-through to the backend.
//! - [`DragSession`]: process-wide single-flight gesture state, threaded
//!   through every callback (re-exported from `resort_session`).
//! - [`ContainerRegistry`] and [`ContainerHandle`]: the explicit seam that
//!   lets a cross-container move query the *other* side's collection without
//!   either owner knowing the other's internals.
//! - [`DragBackend`]: the drag-library seam — options in, callbacks out,
//!   best-effort teardown.
//!
//! Everything is renderer-agnostic: nodes are caller-chosen IDs, there is no
//! DOM type anywhere, and handlers return [`DomFixup`] commands instead of
//! touching a document. Index translation lives in [`resort_index`] and is
//! re-exported here.
//!
//! ## Minimal example
//!
//! A cross-container drop, as the host glue would drive it:
//!
//! ```rust
//! use resort_sync::{
//!     DragEvent, DragSession, ListSynchronizer, SyncEvent, SyncOptions,
//! };
//!
//! let mut left: ListSynchronizer<&str, u32> =
//!     ListSynchronizer::one_way(SyncOptions::new(), vec!["apple", "pear"]);
//! let mut right: ListSynchronizer<&str, u32> =
//!     ListSynchronizer::one_way(SyncOptions::new(), vec!["plum"]);
//! let mut session = DragSession::new();
//!
//! // Containers 1 and 2; the left one rendered nodes 10 and 11.
//! left.refresh_indexes(&[10, 11], &[10, 11]);
//! right.refresh_indexes(&[20], &[20]);
//!
//! // Drag node 10 out of the left container and drop it at the end of the
//! // right one.
//! left.on_drag_start(&DragEvent::new(1, 1, 10).with_old_index(0), &mut session);
//! let _ = right.on_drag_add(&DragEvent::new(1, 2, 10).with_new_index(1), &mut session);
//! let _ = left.on_drag_remove(&DragEvent::new(1, 2, 10).with_old_index(0));
//! left.on_drag_end(&DragEvent::new(1, 2, 10), &mut session);
//!
//! assert_eq!(left.list(), &["pear"]);
//! assert_eq!(right.list(), &["plum", "apple"]);
//!
//! // Notifications are drained after the update cycle, owner-specific
//! // before the unified change.
//! let events = right.take_events();
//! assert!(matches!(events[0], SyncEvent::Added { new_index: 1, element: "apple" }));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod backend;
mod binding;
mod bridge;
mod group;
mod options;
mod outcome;
mod queue;
mod registry;
mod sync;

pub use backend::{DragBackend, NoopBackend, apply_options, release, update_options};
pub use binding::{Diagnostic, ListBinding};
pub use bridge::{MoveContext, MoveDecision, MoveQuery, RelatedContext, future_index};
pub use group::{Group, GroupQuery, Pull, PullDecision, Put};
pub use options::{RESERVED_CALLBACKS, SyncOptions, camelize, is_reserved};
pub use outcome::{
    DomFixup, DragEvent, DragOutcome, Fixups, NativeKind, OptionValue, SyncEvent,
};
pub use queue::EventQueue;
pub use registry::{ContainerHandle, ContainerRegistry, ItemRef};
pub use sync::ListSynchronizer;

pub use resort_index::{IndexMapper, InsertPosition, VisibleIndexMap, VisibleSlot};
pub use resort_session::{DragContext, DragSession, PullKind};
