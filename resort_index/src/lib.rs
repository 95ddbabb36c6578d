// Copyright 2025 the Resort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=resort_index --heading-base-level=0

//! Resort Index: DOM-index ↔ logical-index translation for sortable collections.
//!
//! When a drag library physically reorders the children of a rendered container,
//! the indices it reports are *DOM child positions*. The application, however,
//! owns an ordered collection and thinks in *logical positions* within that
//! collection. The two disagree whenever the container holds children that are
//! not part of the collection (headers, footers, placeholder nodes) or when a
//! node the library touched was never produced for the collection at all.
//!
//! This crate provides the translation table between the two index spaces:
//!
//! - [`IndexMapper`]: configuration for how many leading/trailing container
//!   children are *not* part of the tracked collection, plus
//!   [`IndexMapper::recompute`] to build the table from an observed child list.
//! - [`VisibleIndexMap`]: the table itself, one [`VisibleSlot`] per DOM child,
//!   with [`VisibleIndexMap::resolve`] to turn a drag-reported DOM index into
//!   an [`InsertPosition`] in the logical collection.
//! - [`logical_index_of`]: locate a single node among the nodes rendered for
//!   the collection, used to identify which logical item a drag started on.
//!
//! Nodes are identified by a caller-chosen ID type `N: PartialEq`; this crate
//! knows nothing about any particular renderer or DOM representation.
//!
//! ## Refresh contract
//!
//! The map is a snapshot: it is only valid for the child list it was computed
//! from. Hosts must recompute it after every render pass that may have changed
//! the container's children, and must not consult a stale map between applying
//! a collection mutation and the next settled render. Crates building on this
//! one (such as `resort_sync`) expose an explicit "refresh requested" handshake
//! for exactly this reason.
//!
//! ## Minimal example
//!
//! ```rust
//! use resort_index::{IndexMapper, InsertPosition};
//!
//! // Container children: a header, three collection nodes, a footer.
//! // Nodes are identified here by plain integers.
//! let dom_children = [100, 1, 2, 3, 200];
//! let rendered = [1, 2, 3]; // nodes produced for the collection, in order
//!
//! let mapper = IndexMapper::new().with_leading_extra(1).with_trailing_extra(1);
//! let map = mapper.recompute(&dom_children, &rendered);
//!
//! assert_eq!(map.len(), 5);
//! // DOM child 2 is the collection's second item.
//! assert_eq!(map.resolve(2), InsertPosition::At(1));
//! // Dropping onto the footer appends.
//! assert_eq!(map.resolve(4), InsertPosition::End);
//! // The drag library may report one past the end during an append gesture.
//! assert_eq!(map.resolve(5), InsertPosition::End);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod map;
mod mapper;

pub use map::{InsertPosition, VisibleIndexMap, VisibleSlot};
pub use mapper::{IndexMapper, logical_index_of};
