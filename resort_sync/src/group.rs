// Copyright 2025 the Resort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag groups: the named affinity that lets items move between
//! independently-owned containers.
//!
//! The drag backend evaluates these policies when a gesture crosses container
//! boundaries; this crate only carries the configuration (and, for native
//! backends, the predicates) across the seam.

use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// The two containers a cross-group query is about.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GroupQuery<'a> {
    /// Group name of the source container, when it has one.
    pub from_group: Option<&'a str>,
    /// Group name of the destination container, when it has one.
    pub to_group: Option<&'a str>,
}

/// What a pull predicate decided.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PullDecision {
    /// The item may not leave the source.
    Deny,
    /// The item relocates.
    Move,
    /// The item duplicates; the source keeps it.
    Clone,
}

/// Whether items may leave a container, and how.
pub enum Pull {
    /// Items may always be pulled out (relocating).
    Always,
    /// Items never leave this container.
    Never,
    /// Items are cloned out; the source keeps the original.
    Clone,
    /// Items may be pulled only into containers in these groups.
    Groups(Vec<String>),
    /// Host-supplied predicate, consulted per query.
    Custom(Box<dyn Fn(&GroupQuery<'_>) -> PullDecision>),
}

impl fmt::Debug for Pull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str("Pull::Always"),
            Self::Never => f.write_str("Pull::Never"),
            Self::Clone => f.write_str("Pull::Clone"),
            Self::Groups(groups) => f.debug_tuple("Pull::Groups").field(groups).finish(),
            Self::Custom(_) => f.write_str("Pull::Custom(..)"),
        }
    }
}

/// Whether a container accepts items from other containers.
pub enum Put {
    /// Accept from any container sharing the drag world.
    Always,
    /// Accept nothing.
    Never,
    /// Accept only from containers in these groups.
    Groups(Vec<String>),
    /// Host-supplied predicate, consulted per query.
    Custom(Box<dyn Fn(&GroupQuery<'_>) -> bool>),
}

impl fmt::Debug for Put {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str("Put::Always"),
            Self::Never => f.write_str("Put::Never"),
            Self::Groups(groups) => f.debug_tuple("Put::Groups").field(groups).finish(),
            Self::Custom(_) => f.write_str("Put::Custom(..)"),
        }
    }
}

/// A container's drag group: a name plus pull/put policies.
///
/// # Example
///
/// ```rust
/// use resort_sync::{Group, Pull, Put};
///
/// // A read-only catalog: items are cloned out, nothing comes in.
/// let catalog = Group::named("products").with_pull(Pull::Clone).with_put(Put::Never);
/// assert_eq!(catalog.name(), "products");
/// ```
pub struct Group {
    name: String,
    pull: Pull,
    put: Put,
    revert_clone: bool,
}

impl Group {
    /// A group with the given name and default policies (pull and put both
    /// allowed).
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            pull: Pull::Always,
            put: Put::Always,
            revert_clone: false,
        }
    }

    /// Sets the pull policy.
    #[must_use]
    pub fn with_pull(mut self, pull: Pull) -> Self {
        self.pull = pull;
        self
    }

    /// Sets the put policy.
    #[must_use]
    pub fn with_put(mut self, put: Put) -> Self {
        self.put = put;
        self
    }

    /// When set, a clone pulled out of this container animates back if the
    /// drop is rejected.
    #[must_use]
    pub fn with_revert_clone(mut self, revert_clone: bool) -> Self {
        self.revert_clone = revert_clone;
        self
    }

    /// The group name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pull policy.
    #[must_use]
    #[inline]
    pub fn pull(&self) -> &Pull {
        &self.pull
    }

    /// The put policy.
    #[must_use]
    #[inline]
    pub fn put(&self) -> &Put {
        &self.put
    }

    /// Whether rejected clones revert.
    #[must_use]
    #[inline]
    pub fn revert_clone(&self) -> bool {
        self.revert_clone
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("name", &self.name)
            .field("pull", &self.pull)
            .field("put", &self.put)
            .field("revert_clone", &self.revert_clone)
            .finish()
    }
}
