//! Pointer-driven divider drags.

use std::rc::Rc;

use tickpane_core::geometry::Pos;
use tickpane_test_utils::MockSplitSurface;
use tickpane_ui::{
    Axis, NodeId, Orientation, PointerEvent, Quantum, SplitContainer, SplitSurface, Theme,
};

fn grid(orientation: Orientation, tick: i32) -> SplitContainer {
    let mut split = SplitContainer::with_children(orientation, NodeId(1), NodeId(2), tick, tick);
    split.set_bounds(600, 400);
    split.set_divider_position(200);
    split
}

#[test]
fn test_preview_follows_pointer_release_snaps() {
    let mut split = grid(Orientation::Horizontal, 25);

    assert!(split.handle_event(PointerEvent::Pressed(Pos::new(205, 100))));
    assert!(split.is_dragging());

    assert!(split.handle_event(PointerEvent::Moved(Pos::new(268, 40))));
    assert_eq!(split.drag_preview_location(), Some(263));
    assert_eq!(split.divider_position(), 200, "not committed mid drag");

    assert!(split.handle_event(PointerEvent::Released(Pos::new(268, 40))));
    assert!(!split.is_dragging());
    assert_eq!(split.drag_preview_location(), None);
    assert_eq!(split.divider_position(), 250);
}

#[test]
fn test_vertical_drag_uses_y() {
    let mut split = grid(Orientation::Vertical, 16);
    assert_eq!(split.divider_position(), 192);

    split.handle_event(PointerEvent::Pressed(Pos::new(500, 195)));
    split.handle_event(PointerEvent::Moved(Pos::new(10, 300)));
    split.handle_event(PointerEvent::Released(Pos::new(10, 300)));

    // 300 - 3 = 297, snapped down to 288
    assert_eq!(split.divider_position(), 288);
}

#[test]
fn test_cancel_restores_origin() {
    let mut split = grid(Orientation::Horizontal, 10);
    split.set_continuous_layout(true);

    split.handle_event(PointerEvent::Pressed(Pos::new(203, 0)));
    split.handle_event(PointerEvent::Moved(Pos::new(351, 0)));
    assert_eq!(split.divider_position(), 340);

    assert!(split.handle_event(PointerEvent::Cancelled));
    assert_eq!(split.divider_position(), 200);
    assert!(!split.is_dragging());
}

#[test]
fn test_continuous_layout_snaps_every_step() {
    let x = Quantum::new(Axis::X, 8).unwrap();
    let mut surface = MockSplitSurface::new(Orientation::Horizontal);
    surface.set_continuous_layout(true);
    let mut split = SplitContainer::from_surface(surface, x, Quantum::ONE, Rc::new(Theme::dark()));
    split.set_bounds(400, 100);
    split.set_divider_position(80);
    split.surface().clear_calls();

    split.handle_event(PointerEvent::Pressed(Pos::new(82, 50)));
    for pointer in [90, 95, 101, 117] {
        split.handle_event(PointerEvent::Moved(Pos::new(pointer, 50)));
    }
    split.handle_event(PointerEvent::Released(Pos::new(117, 50)));

    assert_eq!(split.surface().locations_set(), vec![88, 88, 96, 112, 112]);
}

#[test]
fn test_continuous_layout_is_opt_in() {
    let split = SplitContainer::with_orientation(Orientation::Vertical);
    assert!(!split.is_continuous_layout());
    assert!(!SplitContainer::new().is_continuous_layout());

    let mut split = grid(Orientation::Horizontal, 10);
    assert!(!split.is_continuous_layout());
    split.handle_event(PointerEvent::Pressed(Pos::new(204, 0)));
    split.handle_event(PointerEvent::Moved(Pos::new(337, 0)));
    assert_eq!(split.divider_position(), 200);

    split.set_continuous_layout(true);
    split.handle_event(PointerEvent::Moved(Pos::new(337, 0)));
    assert_eq!(split.divider_position(), 330);
    assert_eq!(split.drag_preview_location(), Some(333));
}

#[test]
fn test_events_without_drag_are_not_consumed() {
    let mut split = grid(Orientation::Horizontal, 1);

    assert!(!split.handle_event(PointerEvent::Moved(Pos::new(300, 10))));
    assert!(!split.handle_event(PointerEvent::Released(Pos::new(300, 10))));
    assert!(!split.handle_event(PointerEvent::Cancelled));
    assert_eq!(split.divider_position(), 200);
}

#[test]
fn test_second_press_during_drag_is_ignored() {
    let mut split = grid(Orientation::Horizontal, 1);

    assert!(split.handle_event(PointerEvent::Pressed(Pos::new(201, 5))));
    assert!(!split.handle_event(PointerEvent::Pressed(Pos::new(202, 5))));
    split.handle_event(PointerEvent::Released(Pos::new(221, 5)));
    assert_eq!(split.divider_position(), 220);
}
