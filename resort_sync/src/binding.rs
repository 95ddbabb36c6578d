// Copyright 2025 the Resort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The collection binding: who owns the ordered collection and how edits
//! reach the owner.

use alloc::vec::Vec;

/// A configuration problem, reported as a value rather than a failure.
///
/// Diagnostics surface through the event queue exactly once per mount;
/// execution always continues with the documented precedence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// Both a one-way list and a two-way model were supplied. They are
    /// mutually exclusive; the one-way list wins.
    ConflictingSources,
}

/// Result of applying an edit through [`ListBinding::alter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Alteration<T> {
    /// No collection source is configured; the edit was a silent no-op.
    Unbound,
    /// The edit was applied to the one-way working list in place (or the
    /// closure reported no change).
    Applied,
    /// Two-way mode: a mutated shallow copy to publish to the owner.
    Publish(Vec<T>),
}

/// Exactly one collection source per synchronizer instance.
///
/// - One-way: an externally owned list mirrored into a working copy that is
///   edited in place; the host reads it back after each gesture.
/// - Two-way: a bound model; every edit produces a mutated shallow copy that
///   is *published* (never applied to the mirror directly). The mirror is
///   replaced only when the owner accepts via [`set_model`](Self::set_model).
/// - Unbound: mutations silently degrade to no-ops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListBinding<T> {
    /// Neither source configured.
    Unbound,
    /// Externally owned one-way list.
    OneWay(Vec<T>),
    /// Two-way bound model.
    TwoWay(Vec<T>),
}

impl<T> ListBinding<T> {
    /// Builds a binding from the two mutually exclusive sources.
    ///
    /// Supplying both records [`Diagnostic::ConflictingSources`] and lets the
    /// one-way list win.
    pub fn from_sources(
        list: Option<Vec<T>>,
        model: Option<Vec<T>>,
    ) -> (Self, Option<Diagnostic>) {
        match (list, model) {
            (Some(list), Some(_)) => (Self::OneWay(list), Some(Diagnostic::ConflictingSources)),
            (Some(list), None) => (Self::OneWay(list), None),
            (None, Some(model)) => (Self::TwoWay(model), None),
            (None, None) => (Self::Unbound, None),
        }
    }

    /// The current logical collection, regardless of mode.
    #[must_use]
    pub fn list(&self) -> &[T] {
        match self {
            Self::Unbound => &[],
            Self::OneWay(list) | Self::TwoWay(list) => list,
        }
    }

    /// Returns `true` when a collection source is configured.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        !matches!(self, Self::Unbound)
    }

    /// Replaces the one-way working list (the host's reactive list changed).
    /// No-op in other modes.
    pub fn set_list(&mut self, list: Vec<T>) {
        if let Self::OneWay(current) = self {
            *current = list;
        }
    }

    /// Accepts a published model (the owner confirmed a
    /// [`SyncEvent::ModelUpdate`](crate::SyncEvent::ModelUpdate)). No-op in
    /// other modes.
    pub fn set_model(&mut self, model: Vec<T>) {
        if let Self::TwoWay(current) = self {
            *current = model;
        }
    }

    /// Runs an edit against the collection.
    ///
    /// The closure returns whether it changed anything; an unchanged two-way
    /// copy is discarded rather than published.
    pub(crate) fn alter(&mut self, edit: impl FnOnce(&mut Vec<T>) -> bool) -> Alteration<T>
    where
        T: Clone,
    {
        match self {
            Self::Unbound => Alteration::Unbound,
            Self::OneWay(list) => {
                edit(list);
                Alteration::Applied
            }
            Self::TwoWay(model) => {
                let mut copy = model.clone();
                if edit(&mut copy) {
                    Alteration::Publish(copy)
                } else {
                    Alteration::Applied
                }
            }
        }
    }
}
