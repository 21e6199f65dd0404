use crate::domain::{
    CardDroppedOnZone, GestureOutcome, GestureTracker, InputAdapter, Modality, Point,
    PointerAdapter, PointerEvent, Rect, Size, TouchAdapter, TouchEvent, Zone, ZoneLayout,
};
use crate::errors::domain::DomainError;

/// Three 100x100 zones side by side along the bottom of the viewport.
fn layout() -> ZoneLayout {
    ZoneLayout::new(vec![
        (Zone::Green, Rect::new(0.0, 400.0, 100.0, 100.0)),
        (Zone::Yellow, Rect::new(100.0, 400.0, 100.0, 100.0)),
        (Zone::Red, Rect::new(200.0, 400.0, 100.0, 100.0)),
    ])
    .unwrap()
}

fn touch() -> TouchAdapter {
    TouchAdapter::new(layout(), Size::new(80.0, 40.0))
}

#[test]
fn pointer_drag_and_drop_emits_event() {
    let mut tracker = GestureTracker::new(3);
    let mut pointer = PointerAdapter::new();

    assert_eq!(
        pointer.handle(&mut tracker, PointerEvent::DragStart { card: 1 }),
        GestureOutcome::Started {
            card: 1,
            replaced: None
        }
    );
    assert_eq!(tracker.in_motion(), Some((1, Modality::Pointer)));
    assert_eq!(
        pointer.handle(&mut tracker, PointerEvent::DragOver { zone: Zone::Red }),
        GestureOutcome::Hover {
            zone: Some(Zone::Red)
        }
    );
    assert_eq!(
        pointer.handle(&mut tracker, PointerEvent::Drop { zone: Zone::Red }),
        GestureOutcome::Dropped(CardDroppedOnZone {
            card_index: 1,
            zone: Zone::Red
        })
    );
    // dragend follows every drop; it must not emit anything further.
    assert_eq!(
        pointer.handle(&mut tracker, PointerEvent::DragEnd),
        GestureOutcome::Ignored
    );
    assert!(tracker.in_motion().is_none());
    assert!(tracker.is_placed(1));
}

#[test]
fn pointer_drag_end_without_drop_returns_card() {
    let mut tracker = GestureTracker::new(2);
    let mut pointer = PointerAdapter::new();
    pointer.handle(&mut tracker, PointerEvent::DragStart { card: 0 });
    pointer.handle(&mut tracker, PointerEvent::DragOver { zone: Zone::Green });
    assert_eq!(
        pointer.handle(&mut tracker, PointerEvent::DragLeave { zone: Zone::Green }),
        GestureOutcome::Hover { zone: None }
    );
    assert_eq!(
        pointer.handle(&mut tracker, PointerEvent::DragEnd),
        GestureOutcome::Returned { card: 0 }
    );
    assert!(!tracker.is_placed(0));
}

#[test]
fn drop_without_drag_is_ignored() {
    let mut tracker = GestureTracker::new(2);
    let mut pointer = PointerAdapter::new();
    assert_eq!(
        pointer.handle(&mut tracker, PointerEvent::Drop { zone: Zone::Yellow }),
        GestureOutcome::Ignored
    );
    assert_eq!(
        pointer.handle(&mut tracker, PointerEvent::DragOver { zone: Zone::Yellow }),
        GestureOutcome::Ignored
    );
}

#[test]
fn touch_follows_finger_and_highlights_zone() {
    let mut tracker = GestureTracker::new(2);
    let mut touch = touch();
    touch.handle(
        &mut tracker,
        TouchEvent::Start {
            card: 0,
            at: Point::new(10.0, 10.0),
        },
    );
    let outcome = touch.handle(
        &mut tracker,
        TouchEvent::Move {
            at: Point::new(150.0, 450.0),
        },
    );
    assert_eq!(
        outcome,
        GestureOutcome::Moved {
            card: 0,
            origin: Point::new(110.0, 430.0),
            hovered: Some(Zone::Yellow)
        }
    );
    assert_eq!(touch.hovered(), Some(Zone::Yellow));
    assert_eq!(tracker.position(), Some(Point::new(150.0, 450.0)));
}

#[test]
fn touch_release_inside_zone_drops() {
    let mut tracker = GestureTracker::new(2);
    let mut touch = touch();
    touch.handle(
        &mut tracker,
        TouchEvent::Start {
            card: 1,
            at: Point::new(10.0, 10.0),
        },
    );
    let outcome = touch.handle(
        &mut tracker,
        TouchEvent::End {
            at: Point::new(250.0, 499.0),
        },
    );
    assert_eq!(
        outcome,
        GestureOutcome::Dropped(CardDroppedOnZone {
            card_index: 1,
            zone: Zone::Red
        })
    );
}

#[test]
fn touch_release_outside_returns_card() {
    let mut tracker = GestureTracker::new(2);
    let mut touch = touch();
    touch.handle(
        &mut tracker,
        TouchEvent::Start {
            card: 1,
            at: Point::new(10.0, 10.0),
        },
    );
    let outcome = touch.handle(
        &mut tracker,
        TouchEvent::End {
            at: Point::new(150.0, 200.0),
        },
    );
    assert_eq!(outcome, GestureOutcome::Returned { card: 1 });
    assert!(!tracker.is_placed(1));
    // The card can be picked up again.
    assert!(matches!(
        touch.handle(
            &mut tracker,
            TouchEvent::Start {
                card: 1,
                at: Point::new(10.0, 10.0)
            }
        ),
        GestureOutcome::Started { card: 1, .. }
    ));
}

#[test]
fn placed_card_never_drags_again() {
    let mut tracker = GestureTracker::new(2);
    let mut pointer = PointerAdapter::new();
    pointer.handle(&mut tracker, PointerEvent::DragStart { card: 0 });
    pointer.handle(&mut tracker, PointerEvent::Drop { zone: Zone::Green });

    assert_eq!(
        pointer.handle(&mut tracker, PointerEvent::DragStart { card: 0 }),
        GestureOutcome::Ignored
    );
    let mut touch = touch();
    assert_eq!(
        touch.handle(
            &mut tracker,
            TouchEvent::Start {
                card: 0,
                at: Point::new(0.0, 0.0)
            }
        ),
        GestureOutcome::Ignored
    );
    assert!(tracker.in_motion().is_none());
}

#[test]
fn marking_the_moving_card_placed_ends_its_drag() {
    let mut tracker = GestureTracker::new(3);
    let mut pointer = PointerAdapter::new();
    pointer.handle(&mut tracker, PointerEvent::DragStart { card: 1 });

    tracker.mark_placed(1);
    assert!(tracker.is_placed(1));
    assert!(tracker.in_motion().is_none());
    assert_eq!(
        pointer.handle(&mut tracker, PointerEvent::Drop { zone: Zone::Red }),
        GestureOutcome::Ignored
    );
    assert_eq!(
        tracker.begin(1, Modality::Touch, Some(Point::new(0.0, 0.0))),
        GestureOutcome::Ignored
    );
}

#[test]
fn marking_another_card_keeps_the_drag() {
    let mut tracker = GestureTracker::new(3);
    tracker.begin(0, Modality::Pointer, None);
    tracker.mark_placed(2);
    tracker.mark_placed(7);
    assert_eq!(tracker.in_motion(), Some((0, Modality::Pointer)));
    assert!(tracker.is_placed(2));
}

#[test]
fn reset_hover_clears_touch_highlight() {
    let mut tracker = GestureTracker::new(1);
    let mut touch = touch();
    touch.handle(
        &mut tracker,
        TouchEvent::Start {
            card: 0,
            at: Point::new(10.0, 10.0),
        },
    );
    touch.handle(
        &mut tracker,
        TouchEvent::Move {
            at: Point::new(50.0, 450.0),
        },
    );
    assert_eq!(touch.hovered(), Some(Zone::Green));
    touch.reset_hover();
    assert_eq!(touch.hovered(), None);
}

#[test]
fn unknown_card_is_ignored() {
    let mut tracker = GestureTracker::new(2);
    assert_eq!(
        tracker.begin(9, Modality::Pointer, None),
        GestureOutcome::Ignored
    );
}

#[test]
fn new_drag_clears_previous_card() {
    let mut tracker = GestureTracker::new(3);
    let mut pointer = PointerAdapter::new();
    let mut touch = touch();
    pointer.handle(&mut tracker, PointerEvent::DragStart { card: 0 });
    let outcome = touch.handle(
        &mut tracker,
        TouchEvent::Start {
            card: 2,
            at: Point::new(5.0, 5.0),
        },
    );
    assert_eq!(
        outcome,
        GestureOutcome::Started {
            card: 2,
            replaced: Some(0)
        }
    );
    // The stale pointer drag can no longer drop anything.
    assert_eq!(
        pointer.handle(&mut tracker, PointerEvent::Drop { zone: Zone::Red }),
        GestureOutcome::Ignored
    );
    assert_eq!(tracker.in_motion(), Some((2, Modality::Touch)));
}

#[test]
fn touch_cancel_returns_card() {
    let mut tracker = GestureTracker::new(1);
    let mut touch = touch();
    touch.handle(
        &mut tracker,
        TouchEvent::Start {
            card: 0,
            at: Point::new(0.0, 0.0),
        },
    );
    assert_eq!(
        touch.handle(&mut tracker, TouchEvent::Cancel),
        GestureOutcome::Returned { card: 0 }
    );
}

#[test]
fn reset_forgets_placements() {
    let mut tracker = GestureTracker::new(1);
    tracker.begin(0, Modality::Touch, None);
    tracker.release(Some(Zone::Green));
    assert!(tracker.is_placed(0));
    tracker.reset(5);
    assert!(!tracker.is_placed(0));
    assert!(matches!(
        tracker.begin(4, Modality::Pointer, None),
        GestureOutcome::Started { card: 4, .. }
    ));
}

#[test]
fn overlapping_layout_is_rejected() {
    let err = ZoneLayout::new(vec![
        (Zone::Green, Rect::new(0.0, 0.0, 100.0, 100.0)),
        (Zone::Red, Rect::new(50.0, 50.0, 100.0, 100.0)),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        DomainError::OverlappingDropZones {
            first: Zone::Green,
            second: Zone::Red
        }
    );
}

#[test]
fn duplicate_zone_is_rejected() {
    let result = ZoneLayout::new(vec![
        (Zone::Green, Rect::new(0.0, 0.0, 10.0, 10.0)),
        (Zone::Green, Rect::new(20.0, 0.0, 10.0, 10.0)),
    ]);
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[test]
fn shared_edge_resolves_to_first_zone() {
    let layout = layout();
    assert_eq!(layout.hit_test(Point::new(100.0, 450.0)), Some(Zone::Green));
    assert_eq!(layout.hit_test(Point::new(100.1, 450.0)), Some(Zone::Yellow));
    assert_eq!(layout.hit_test(Point::new(301.0, 450.0)), None);
}
