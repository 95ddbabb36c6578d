// Copyright 2025 the Resort Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cross-container drag scenarios for the `resort_sync` crate.
//!
//! Two synchronizers share a drag session and a container registry, the way a
//! host's glue code wires them. Containers are numbered, nodes are plain
//! integers, and "rendering" is simulated by feeding each synchronizer a 1:1
//! child list for its current collection.

use resort_sync::{
    ContainerRegistry, Diagnostic, DomFixup, DragEvent, DragOutcome, DragSession, Group,
    ListSynchronizer, MoveDecision, MoveQuery, NativeKind, Pull, SyncEvent, SyncOptions,
};

const LEFT: u32 = 1;
const RIGHT: u32 = 2;

/// Nodes for container `c`: node `c * 100 + i` renders item `i`.
fn settle(sync: &mut ListSynchronizer<&'static str, u32>, container: u32) {
    let nodes: Vec<u32> = (0..sync.list().len())
        .map(|i| container * 100 + u32::try_from(i).unwrap())
        .collect();
    sync.refresh_indexes(&nodes, &nodes);
}

fn pair(
    left_items: Vec<&'static str>,
    right_items: Vec<&'static str>,
) -> (
    ListSynchronizer<&'static str, u32>,
    ListSynchronizer<&'static str, u32>,
    DragSession<&'static str, u32>,
) {
    let mut left = ListSynchronizer::one_way(SyncOptions::new(), left_items);
    let mut right = ListSynchronizer::one_way(SyncOptions::new(), right_items);
    settle(&mut left, LEFT);
    settle(&mut right, RIGHT);
    (left, right, DragSession::new())
}

#[test]
fn move_between_containers_transfers_the_item() {
    let (mut left, mut right, mut session) = pair(vec!["apple", "pear"], vec!["plum"]);

    // Pick up "pear" (node 101) and drop it before "plum".
    left.on_drag_start(&DragEvent::new(LEFT, LEFT, 101).with_old_index(1), &mut session);
    let add_fixups = right.on_drag_add(&DragEvent::new(LEFT, RIGHT, 101).with_new_index(0), &mut session);
    let remove_fixups = left.on_drag_remove(&DragEvent::new(LEFT, RIGHT, 101).with_old_index(1));
    left.on_drag_end(&DragEvent::new(LEFT, RIGHT, 101), &mut session);

    assert_eq!(left.list(), &["apple"]);
    assert_eq!(right.list(), &["pear", "plum"]);

    // The destination detaches the physically dropped node; the source
    // restores its node for the re-render to reconcile.
    assert_eq!(add_fixups.as_slice(), &[DomFixup::Remove { node: 101 }]);
    assert_eq!(
        remove_fixups.as_slice(),
        &[DomFixup::Restore {
            container: LEFT,
            node: 101,
            dom_index: 1,
        }]
    );
    assert!(!session.is_active());
}

#[test]
fn gesture_events_keep_owner_specific_before_change() {
    let (mut left, mut right, mut session) = pair(vec!["apple"], vec![]);

    left.on_drag_start(&DragEvent::new(LEFT, LEFT, 100).with_old_index(0), &mut session);
    let _ = right.on_drag_add(&DragEvent::new(LEFT, RIGHT, 100).with_new_index(0), &mut session);
    let _ = left.on_drag_remove(&DragEvent::new(LEFT, RIGHT, 100).with_old_index(0));
    left.on_drag_end(&DragEvent::new(LEFT, RIGHT, 100), &mut session);

    let right_events = right.take_events();
    assert_eq!(
        right_events,
        vec![
            SyncEvent::Added {
                new_index: 0,
                element: "apple",
            },
            SyncEvent::Change(DragOutcome::Added {
                new_index: 0,
                element: "apple",
            }),
            SyncEvent::Native {
                kind: NativeKind::Add,
                event: DragEvent::new(LEFT, RIGHT, 100).with_new_index(0),
            },
        ]
    );

    let left_events = left.take_events();
    assert!(matches!(
        left_events[0],
        SyncEvent::Native {
            kind: NativeKind::Start,
            ..
        }
    ));
    assert!(matches!(left_events[1], SyncEvent::Removed { old_index: 0, .. }));
    assert!(matches!(
        left_events[2],
        SyncEvent::Change(DragOutcome::Removed { .. })
    ));
}

#[test]
fn clone_pull_leaves_the_source_untouched() {
    let options = SyncOptions::new().with_group(Group::named("products").with_pull(Pull::Clone));
    let mut source: ListSynchronizer<&'static str, u32> =
        ListSynchronizer::one_way(options, vec!["P"]);
    let mut cart: ListSynchronizer<&'static str, u32> =
        ListSynchronizer::one_way(SyncOptions::new().with_group(Group::named("products")), vec![]);
    settle(&mut source, LEFT);
    settle(&mut cart, RIGHT);
    let mut session = DragSession::new();

    source.on_drag_start(&DragEvent::new(LEFT, LEFT, 100).with_old_index(0), &mut session);
    let _ = cart.on_drag_add(&DragEvent::new(LEFT, RIGHT, 100).with_new_index(0), &mut session);
    // The source side sees a clone pull: node 150 is the transient clone the
    // backend left behind.
    let fixups = source.on_drag_remove(
        &DragEvent::new(LEFT, RIGHT, 100).with_old_index(0).with_clone(150),
    );
    source.on_drag_end(&DragEvent::new(LEFT, RIGHT, 100), &mut session);

    assert_eq!(source.list(), &["P"], "clone pulls never mutate the source");
    assert_eq!(cart.list(), &["P"], "the default clone function is identity");
    assert!(
        fixups.contains(&DomFixup::Remove { node: 150 }),
        "the transient clone node is discarded"
    );
    // No removal notification on the source side, only the native event.
    let source_events = source.take_events();
    assert!(
        source_events
            .iter()
            .all(|event| !matches!(event, SyncEvent::Removed { .. })),
    );
}

#[test]
fn custom_clone_function_transforms_the_deposited_value() {
    let options: SyncOptions<&'static str, u32> =
        SyncOptions::new().with_clone_fn(|_original| "copy");
    let mut source = ListSynchronizer::one_way(options, vec!["original"]);
    let mut destination: ListSynchronizer<&'static str, u32> =
        ListSynchronizer::one_way(SyncOptions::new(), vec![]);
    settle(&mut source, LEFT);
    settle(&mut destination, RIGHT);
    let mut session = DragSession::new();

    source.on_drag_start(&DragEvent::new(LEFT, LEFT, 100), &mut session);
    let _ = destination.on_drag_add(&DragEvent::new(LEFT, RIGHT, 100).with_new_index(0), &mut session);

    assert_eq!(destination.list(), &["copy"]);
}

#[test]
fn registry_resolves_the_destination_for_move_validation() {
    let options = SyncOptions::new().with_move_predicate(
        |context: &resort_sync::MoveContext<'_, &'static str, u32>| {
            // Dropping into the middle of the right container: after "plum"
            // with the dragged node not among its children.
            assert!(!context.same_container);
            assert_eq!(context.future_index, 1);
            let related = context.related.expect("destination is registered");
            assert_eq!(related.list, &["plum", "fig"]);
            let item = related.item.expect("pointer is over a tracked node");
            assert_eq!((item.index, *item.element), (0, "plum"));
            MoveDecision::Allow
        },
    );
    let mut left: ListSynchronizer<&'static str, u32> =
        ListSynchronizer::one_way(options, vec!["apple"]);
    let mut right: ListSynchronizer<&'static str, u32> =
        ListSynchronizer::one_way(SyncOptions::new(), vec!["plum", "fig"]);
    settle(&mut left, LEFT);
    settle(&mut right, RIGHT);

    let mut registry: ContainerRegistry<u32, &'static str> = ContainerRegistry::new();
    registry.register(LEFT, "left");
    registry.register(RIGHT, "right");

    let mut session = DragSession::new();
    left.on_drag_start(&DragEvent::new(LEFT, LEFT, 100).with_old_index(0), &mut session);

    // Host glue: look up which synchronizer owns the `to` container and pass
    // its handle through.
    let to = RIGHT;
    assert_eq!(registry.lookup(&to), Some(&"right"));
    let children = [200, 201];
    let query = MoveQuery {
        from: &LEFT,
        to: &to,
        related: &200,
        visible_children: &children,
        will_insert_after: true,
    };
    let decision = left.on_drag_move(
        &query,
        Some(&right as &dyn resort_sync::ContainerHandle<&'static str, u32>),
        &session,
    );
    assert_eq!(decision, MoveDecision::Allow);
}

#[test]
fn unregistered_destination_gives_the_predicate_no_context() {
    let options = SyncOptions::new().with_move_predicate(
        |context: &resort_sync::MoveContext<'_, &'static str, u32>| {
            assert!(context.related.is_none());
            assert_eq!(context.future_index, 0);
            MoveDecision::Deny
        },
    );
    let mut left: ListSynchronizer<&'static str, u32> =
        ListSynchronizer::one_way(options, vec!["apple"]);
    settle(&mut left, LEFT);
    let mut session = DragSession::new();
    left.on_drag_start(&DragEvent::new(LEFT, LEFT, 100), &mut session);

    let children = [900];
    let query = MoveQuery {
        from: &LEFT,
        to: &99, // never registered
        related: &900,
        visible_children: &children,
        will_insert_after: false,
    };
    assert_eq!(left.on_drag_move(&query, None, &session), MoveDecision::Deny);
}

#[test]
fn interrupted_gesture_is_discarded_by_the_next_start() {
    let (mut left, mut right, mut session) = pair(vec!["apple"], vec!["plum"]);

    // A gesture starts on the left and is orphaned (say the container
    // unmounted mid-drag; no end callback ever fires).
    left.on_drag_start(&DragEvent::new(LEFT, LEFT, 100), &mut session);

    // The next gesture starts on the right; the orphaned stamp is gone.
    right.on_drag_start(&DragEvent::new(RIGHT, RIGHT, 200), &mut session);
    assert_eq!(session.dragging_node(), Some(&200));
    let _ = left.on_drag_add(&DragEvent::new(RIGHT, LEFT, 100).with_new_index(0), &mut session);
    assert_eq!(left.list(), &["apple"], "stale stamp must not deposit anything");
}

#[test]
fn conflicting_sources_still_operate_with_list_precedence() {
    let mut sync: ListSynchronizer<&'static str, u32> = ListSynchronizer::from_sources(
        SyncOptions::new(),
        Some(vec!["from-list"]),
        Some(vec!["from-model"]),
    );
    let mut backend = resort_sync::NoopBackend;
    let mut registry: ContainerRegistry<u32, ()> = ContainerRegistry::new();
    sync.mount(&mut backend, &mut registry, LEFT, ()).unwrap();
    settle(&mut sync, LEFT);

    assert_eq!(sync.list(), &["from-list"]);
    let diagnostics = sync
        .take_events()
        .into_iter()
        .filter(|event| matches!(event, SyncEvent::Diagnostic(Diagnostic::ConflictingSources)))
        .count();
    assert_eq!(diagnostics, 1);

    // And the instance still reorders normally.
    sync.apply_move(0, 0);
    assert_eq!(sync.list(), &["from-list"]);
}
