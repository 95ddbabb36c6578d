// Copyright 2025 the Resort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recognized configuration surface plus verbatim backend pass-through.

use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use resort_index::IndexMapper;

use crate::bridge::{MoveContext, MoveDecision};
use crate::group::Group;
use crate::outcome::OptionValue;

/// Callback slots owned by the synchronizer; hosts may not overwrite them
/// through the pass-through path.
pub const RESERVED_CALLBACKS: &[&str] = &[
    "onMove", "onStart", "onAdd", "onRemove", "onUpdate", "onEnd", "onChoose", "onUnchoose",
    "onSort", "onFilter", "onClone",
];

/// Converts a kebab-cased attribute name to the camel-cased form drag
/// backends recognize (`ghost-class` → `ghostClass`).
#[must_use]
pub fn camelize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Returns `true` when a pass-through option name would collide with a
/// reserved callback slot.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED_CALLBACKS.contains(&name)
}

/// Configuration for one synchronizer instance.
///
/// `T` is the item type; `N` is the host node identifier. Everything has a
/// default; setters are builder-style. Options the synchronizer does not
/// recognize go through [`push_extra`](Self::push_extra) and reach the
/// backend verbatim with camel-cased names.
pub struct SyncOptions<T, N> {
    tag: String,
    component: Option<String>,
    component_data: Vec<(String, OptionValue)>,
    item_key: Option<String>,
    disabled: bool,
    sort: bool,
    animation: Option<u32>,
    handle: Option<String>,
    filter: Option<String>,
    draggable: String,
    group: Option<Group>,
    scroll: Option<bool>,
    scroll_sensitivity: Option<f64>,
    scroll_speed: Option<f64>,
    transition_wrapper: bool,
    leading_extra: usize,
    trailing_extra: usize,
    clone_fn: Option<Box<dyn Fn(&T) -> T>>,
    move_predicate: Option<Box<dyn Fn(&MoveContext<'_, T, N>) -> MoveDecision>>,
    extra: Vec<(String, OptionValue)>,
}

impl<T, N> Default for SyncOptions<T, N> {
    fn default() -> Self {
        Self {
            tag: "div".to_owned(),
            component: None,
            component_data: Vec::new(),
            item_key: None,
            disabled: false,
            sort: true,
            animation: None,
            handle: None,
            filter: None,
            draggable: ">*".to_owned(),
            group: None,
            scroll: None,
            scroll_sensitivity: None,
            scroll_speed: None,
            transition_wrapper: false,
            leading_extra: 0,
            trailing_extra: 0,
            clone_fn: None,
            move_predicate: None,
            extra: Vec::new(),
        }
    }
}

impl<T, N> SyncOptions<T, N> {
    /// Default options: a `div` container, sorting enabled, every child
    /// draggable.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Element name the host renders the container as.
    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = tag.to_owned();
        self
    }

    /// Custom wrapper component name, overriding the tag.
    #[must_use]
    pub fn with_component(mut self, component: &str) -> Self {
        self.component = Some(component.to_owned());
        self
    }

    /// Adds a prop/attr the host renderer passes to the wrapper component.
    /// Renderer-only; never forwarded to the drag backend.
    #[must_use]
    pub fn push_component_data(mut self, name: &str, value: OptionValue) -> Self {
        self.component_data.push((name.to_owned(), value));
        self
    }

    /// Key the host derives per-item render identity from. Rendering only;
    /// reconciliation never consults it.
    #[must_use]
    pub fn with_item_key(mut self, item_key: &str) -> Self {
        self.item_key = Some(item_key.to_owned());
        self
    }

    /// Disables dragging entirely.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether sorting within the container is allowed.
    #[must_use]
    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Animation duration in milliseconds.
    #[must_use]
    pub fn with_animation(mut self, animation: u32) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Selector for the drag handle within an item.
    #[must_use]
    pub fn with_handle(mut self, handle: &str) -> Self {
        self.handle = Some(handle.to_owned());
        self
    }

    /// Selector for children that must not start a drag.
    #[must_use]
    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter = Some(filter.to_owned());
        self
    }

    /// Selector for which children are draggable at all.
    #[must_use]
    pub fn with_draggable(mut self, draggable: &str) -> Self {
        self.draggable = draggable.to_owned();
        self
    }

    /// The drag group this container belongs to.
    #[must_use]
    pub fn with_group(mut self, group: Group) -> Self {
        self.group = Some(group);
        self
    }

    /// Auto-scroll toggle.
    #[must_use]
    pub fn with_scroll(mut self, scroll: bool) -> Self {
        self.scroll = Some(scroll);
        self
    }

    /// Distance from the container edge, in pixels, at which auto-scroll
    /// engages.
    #[must_use]
    pub fn with_scroll_sensitivity(mut self, sensitivity: f64) -> Self {
        self.scroll_sensitivity = Some(sensitivity);
        self
    }

    /// Auto-scroll speed in pixels per frame.
    #[must_use]
    pub fn with_scroll_speed(mut self, speed: f64) -> Self {
        self.scroll_speed = Some(speed);
        self
    }

    /// Declares that the collection renders inside a single transition
    /// wrapper; the host then feeds the wrapper's children to
    /// `refresh_indexes`.
    #[must_use]
    pub fn with_transition_wrapper(mut self, transition_wrapper: bool) -> Self {
        self.transition_wrapper = transition_wrapper;
        self
    }

    /// Number of non-collection children rendered before the collection.
    #[must_use]
    pub fn with_leading_extra(mut self, count: usize) -> Self {
        self.leading_extra = count;
        self
    }

    /// Number of non-collection children rendered after the collection.
    #[must_use]
    pub fn with_trailing_extra(mut self, count: usize) -> Self {
        self.trailing_extra = count;
        self
    }

    /// Side-effect-free transform applied to an item when a gesture picks it
    /// up; the transformed value is what a clone-mode pull deposits in the
    /// destination. Defaults to `Clone::clone`.
    #[must_use]
    pub fn with_clone_fn(mut self, clone_fn: impl Fn(&T) -> T + 'static) -> Self {
        self.clone_fn = Some(Box::new(clone_fn));
        self
    }

    /// Predicate consulted before the backend performs a DOM-level move.
    #[must_use]
    pub fn with_move_predicate(
        mut self,
        predicate: impl Fn(&MoveContext<'_, T, N>) -> MoveDecision + 'static,
    ) -> Self {
        self.move_predicate = Some(Box::new(predicate));
        self
    }

    /// Adds a pass-through option delivered to the backend verbatim (name is
    /// camel-cased on delivery).
    #[must_use]
    pub fn push_extra(mut self, name: &str, value: OptionValue) -> Self {
        self.extra.push((name.to_owned(), value));
        self
    }

    /// Element name for the host renderer.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Wrapper component name, when one overrides the tag.
    #[must_use]
    pub fn component(&self) -> Option<&str> {
        self.component.as_deref()
    }

    /// Props/attrs for the wrapper component, in insertion order.
    #[must_use]
    pub fn component_data(&self) -> &[(String, OptionValue)] {
        &self.component_data
    }

    /// Render identity key, when configured.
    #[must_use]
    pub fn item_key(&self) -> Option<&str> {
        self.item_key.as_deref()
    }

    /// Whether dragging is disabled.
    #[must_use]
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// The configured drag group.
    #[must_use]
    pub fn group(&self) -> Option<&Group> {
        self.group.as_ref()
    }

    /// Whether the collection renders inside a transition wrapper.
    #[must_use]
    pub fn transition_wrapper(&self) -> bool {
        self.transition_wrapper
    }

    /// The index mapper configured from the leading/trailing extras.
    #[must_use]
    pub fn mapper(&self) -> IndexMapper {
        IndexMapper::new()
            .with_leading_extra(self.leading_extra)
            .with_trailing_extra(self.trailing_extra)
    }

    /// The move predicate, when configured.
    #[must_use]
    pub(crate) fn move_predicate(
        &self,
    ) -> Option<&(dyn Fn(&MoveContext<'_, T, N>) -> MoveDecision)> {
        self.move_predicate.as_deref()
    }

    /// Applies the clone transform (identity-by-`Clone` when none is
    /// configured).
    #[must_use]
    pub fn clone_of(&self, element: &T) -> T
    where
        T: Clone,
    {
        match &self.clone_fn {
            Some(clone_fn) => clone_fn(element),
            None => element.clone(),
        }
    }

    /// The full option list to push to a backend: recognized options first,
    /// then camel-cased pass-through pairs (reserved callback names are
    /// dropped).
    #[must_use]
    pub fn backend_options(&self) -> Vec<(String, OptionValue)> {
        let mut pairs: Vec<(String, OptionValue)> = Vec::new();
        pairs.push(("draggable".to_owned(), OptionValue::Str(self.draggable.clone())));
        pairs.push(("disabled".to_owned(), OptionValue::Bool(self.disabled)));
        pairs.push(("sort".to_owned(), OptionValue::Bool(self.sort)));
        if let Some(animation) = self.animation {
            pairs.push(("animation".to_owned(), OptionValue::Int(i64::from(animation))));
        }
        if let Some(handle) = &self.handle {
            pairs.push(("handle".to_owned(), OptionValue::Str(handle.clone())));
        }
        if let Some(filter) = &self.filter {
            pairs.push(("filter".to_owned(), OptionValue::Str(filter.clone())));
        }
        if let Some(scroll) = self.scroll {
            pairs.push(("scroll".to_owned(), OptionValue::Bool(scroll)));
        }
        if let Some(sensitivity) = self.scroll_sensitivity {
            pairs.push((
                "scrollSensitivity".to_owned(),
                OptionValue::Float(sensitivity),
            ));
        }
        if let Some(speed) = self.scroll_speed {
            pairs.push(("scrollSpeed".to_owned(), OptionValue::Float(speed)));
        }
        for (name, value) in &self.extra {
            let name = camelize(name);
            if !is_reserved(&name) {
                pairs.push((name, value.clone()));
            }
        }
        pairs
    }
}

impl<T, N> fmt::Debug for SyncOptions<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncOptions")
            .field("tag", &self.tag)
            .field("component", &self.component)
            .field("component_data", &self.component_data)
            .field("item_key", &self.item_key)
            .field("disabled", &self.disabled)
            .field("sort", &self.sort)
            .field("animation", &self.animation)
            .field("handle", &self.handle)
            .field("filter", &self.filter)
            .field("draggable", &self.draggable)
            .field("group", &self.group)
            .field("scroll", &self.scroll)
            .field("scroll_sensitivity", &self.scroll_sensitivity)
            .field("scroll_speed", &self.scroll_speed)
            .field("transition_wrapper", &self.transition_wrapper)
            .field("leading_extra", &self.leading_extra)
            .field("trailing_extra", &self.trailing_extra)
            .field("extra", &self.extra)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camelize_converts_kebab_case() {
        assert_eq!(camelize("ghost-class"), "ghostClass");
        assert_eq!(camelize("fallback-on-body"), "fallbackOnBody");
        assert_eq!(camelize("animation"), "animation");
        assert_eq!(camelize(""), "");
    }

    #[test]
    fn reserved_callback_names_are_recognized() {
        assert!(is_reserved("onStart"));
        assert!(is_reserved("onMove"));
        assert!(!is_reserved("ghostClass"));
    }

    #[test]
    fn defaults_match_the_documented_surface() {
        let options: SyncOptions<u32, u32> = SyncOptions::new();
        assert_eq!(options.tag(), "div");
        assert!(!options.disabled());
        let pairs = options.backend_options();
        let draggable = pairs.iter().find(|(name, _)| name == "draggable");
        assert_eq!(
            draggable,
            Some(&("draggable".to_owned(), OptionValue::Str(">*".to_owned())))
        );
    }

    #[test]
    fn pass_through_options_are_camelized_and_filtered() {
        let options: SyncOptions<u32, u32> = SyncOptions::new()
            .push_extra("ghost-class", OptionValue::Str("ghost".to_owned()))
            .push_extra("on-start", OptionValue::Bool(true));
        let pairs = options.backend_options();
        assert!(
            pairs.contains(&("ghostClass".to_owned(), OptionValue::Str("ghost".to_owned()))),
            "camel-cased pass-through should survive"
        );
        assert!(
            !pairs.iter().any(|(name, _)| name == "onStart"),
            "reserved callback slots must be dropped"
        );
    }

    #[test]
    fn component_data_reaches_the_renderer_not_the_backend() {
        let options: SyncOptions<u32, u32> = SyncOptions::new()
            .with_component("item-card")
            .push_component_data("elevation", OptionValue::Int(2));
        assert_eq!(options.component(), Some("item-card"));
        assert_eq!(
            options.component_data(),
            &[("elevation".to_owned(), OptionValue::Int(2))]
        );
        assert!(
            !options.backend_options().iter().any(|(name, _)| name == "elevation"),
            "renderer data must not leak into backend options"
        );
    }

    #[test]
    fn clone_of_defaults_to_clone() {
        let options: SyncOptions<u32, u32> = SyncOptions::new();
        assert_eq!(options.clone_of(&7), 7);
    }

    #[test]
    fn clone_of_uses_the_configured_transform() {
        let options: SyncOptions<u32, u32> = SyncOptions::new().with_clone_fn(|n| n + 100);
        assert_eq!(options.clone_of(&7), 107);
    }

    #[test]
    fn mapper_reflects_the_extras() {
        let options: SyncOptions<u32, u32> =
            SyncOptions::new().with_leading_extra(1).with_trailing_extra(2);
        let mapper = options.mapper();
        assert_eq!(mapper.leading_extra(), 1);
        assert_eq!(mapper.trailing_extra(), 2);
    }
}
