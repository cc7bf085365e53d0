//! Integration tests for DragSnapController
//!
//! These tests drive full gestures through the public API:
//! - Drag start / end transitions and hook delivery
//! - Snapping across the nine zones as the pointer travels
//! - Host failures during a drag
//! - Cancel handling

use std::cell::RefCell;
use std::rc::Rc;

use zos_overlay::{
    AxisAnchor, DragSnapController, InputResult, LayoutApplyError, OverlayConfig, OverlayHost,
    Point, PointerEvent, PositionParams, Rect, Size, SnapZone, Vec2,
};

// =============================================================================
// Test Host
// =============================================================================

/// Host that records every applied position and can be told to fail
struct RecordingHost {
    frame: Rect,
    extent: Size,
    applied: Vec<PositionParams>,
    fail_with: Option<LayoutApplyError>,
}

impl RecordingHost {
    fn phone() -> Self {
        Self {
            frame: Rect::new(0, 0, 1000, 2000),
            extent: Size::new(100, 200),
            applied: Vec::new(),
            fail_with: None,
        }
    }
}

impl OverlayHost for RecordingHost {
    fn visible_frame(&self) -> Rect {
        self.frame
    }

    fn window_extent(&self) -> Size {
        self.extent
    }

    fn apply_position(&mut self, params: &PositionParams) -> Result<(), LayoutApplyError> {
        if let Some(err) = self.fail_with.clone() {
            return Err(err);
        }
        self.applied.push(*params);
        Ok(())
    }
}

/// Shared log of hook invocations
fn hook_log() -> Rc<RefCell<Vec<&'static str>>> {
    Rc::new(RefCell::new(Vec::new()))
}

fn install_hooks(
    controller: &mut DragSnapController<RecordingHost>,
    log: &Rc<RefCell<Vec<&'static str>>>,
) {
    let start_log = log.clone();
    controller.on_drag_start(move || start_log.borrow_mut().push("start"));
    let end_log = log.clone();
    controller.on_drag_end(move || end_log.borrow_mut().push("end"));
}

fn move_to(x: f32, y: f32) -> PointerEvent {
    PointerEvent::moved(Vec2::ZERO, Vec2::new(x, y))
}

// =============================================================================
// Gesture Lifecycle Tests
// =============================================================================

#[test]
fn test_full_gesture_lifecycle() {
    let mut controller = DragSnapController::new(RecordingHost::phone());
    let log = hook_log();
    install_hooks(&mut controller, &log);

    // Grab the window 10px in from its corner
    let result = controller.handle_pointer_event(&PointerEvent::down(
        Vec2::new(10.0, 10.0),
        Vec2::new(10.0, 10.0),
    ));
    assert_eq!(result, InputResult::Handled);
    assert_eq!(*log.borrow(), vec!["start"]);

    // Move a few times
    for (x, y) in [(30.0, 30.0), (50.0, 50.0)] {
        assert!(controller.handle_pointer_event(&move_to(x, y)).is_handled());
    }
    assert_eq!(controller.host().applied.len(), 2);
    let last = controller.position();
    assert_eq!((last.x, last.y), (40, 40));
    assert_eq!(last.zone(), SnapZone::TopLeft);

    // Release
    let result = controller.handle_pointer_event(&PointerEvent::up(
        Vec2::new(10.0, 10.0),
        Vec2::new(50.0, 50.0),
    ));
    assert_eq!(result, InputResult::Handled);
    assert!(!controller.is_dragging());
    assert_eq!(controller.grab_offset(), None);
    assert_eq!(*log.borrow(), vec!["start", "end"]);
}

#[test]
fn test_gesture_starting_with_move() {
    let mut controller = DragSnapController::new(RecordingHost::phone());
    let log = hook_log();
    install_hooks(&mut controller, &log);

    let result = controller.handle_pointer_event(&PointerEvent::moved(
        Vec2::new(25.0, 35.0),
        Vec2::new(900.0, 900.0),
    ));

    assert!(result.is_handled());
    assert_eq!(controller.grab_offset(), Some(Point::new(25, 35)));
    assert!(controller.host().applied.is_empty());
    assert_eq!(*log.borrow(), vec!["start"]);
}

#[test]
fn test_consecutive_gestures_recapture_grab_offset() {
    let mut controller = DragSnapController::new(RecordingHost::phone());
    let log = hook_log();
    install_hooks(&mut controller, &log);

    controller.handle_pointer_event(&PointerEvent::down(Vec2::new(10.0, 10.0), Vec2::ZERO));
    controller.handle_pointer_event(&PointerEvent::up(Vec2::ZERO, Vec2::ZERO));

    controller.handle_pointer_event(&PointerEvent::down(Vec2::new(60.0, 80.0), Vec2::ZERO));
    assert_eq!(controller.grab_offset(), Some(Point::new(60, 80)));

    controller.handle_pointer_event(&PointerEvent::up(Vec2::ZERO, Vec2::ZERO));
    assert_eq!(*log.borrow(), vec!["start", "end", "start", "end"]);
}

#[test]
fn test_release_without_drag_propagates() {
    let mut controller = DragSnapController::new(RecordingHost::phone());
    let log = hook_log();
    install_hooks(&mut controller, &log);

    assert_eq!(
        controller.handle_pointer_event(&PointerEvent::up(Vec2::ZERO, Vec2::ZERO)),
        InputResult::Unhandled
    );
    assert_eq!(
        controller.handle_pointer_event(&PointerEvent::cancel()),
        InputResult::Unhandled
    );
    assert!(log.borrow().is_empty());
    assert!(!controller.is_dragging());
}

// =============================================================================
// Cancel Tests
// =============================================================================

#[test]
fn test_cancel_mid_gesture_ends_drag() {
    let mut controller = DragSnapController::new(RecordingHost::phone());
    let log = hook_log();
    install_hooks(&mut controller, &log);

    controller.handle_pointer_event(&PointerEvent::down(Vec2::new(10.0, 10.0), Vec2::ZERO));
    controller.handle_pointer_event(&move_to(400.0, 400.0));

    let result = controller.handle_pointer_event(&PointerEvent::cancel());
    assert_eq!(result, InputResult::Handled);
    assert!(!controller.is_dragging());
    assert_eq!(*log.borrow(), vec!["start", "end"]);

    // A second cancel is not consumed
    assert_eq!(
        controller.handle_pointer_event(&PointerEvent::cancel()),
        InputResult::Unhandled
    );
    assert_eq!(log.borrow().len(), 2);
}

// =============================================================================
// Snapping Tests
// =============================================================================

#[test]
fn test_snap_sweep_across_zones() {
    let mut controller = DragSnapController::new(RecordingHost::phone());
    controller.handle_pointer_event(&PointerEvent::down(Vec2::new(50.0, 100.0), Vec2::ZERO));

    // Pointer positions at the window's center for each of the nine zones
    let cases = [
        ((60.0, 120.0), SnapZone::TopLeft),
        ((500.0, 120.0), SnapZone::Top),
        ((940.0, 120.0), SnapZone::TopRight),
        ((60.0, 1000.0), SnapZone::Left),
        ((500.0, 1000.0), SnapZone::Center),
        ((940.0, 1000.0), SnapZone::Right),
        ((60.0, 1880.0), SnapZone::BottomLeft),
        ((500.0, 1880.0), SnapZone::Bottom),
        ((940.0, 1880.0), SnapZone::BottomRight),
    ];

    for ((x, y), zone) in cases {
        assert!(controller.handle_pointer_event(&move_to(x, y)).is_handled());
        assert_eq!(controller.position().zone(), zone, "pointer at ({x}, {y})");
    }

    assert_eq!(controller.host().applied.len(), cases.len());
}

#[test]
fn test_center_zone_offsets() {
    let mut controller = DragSnapController::new(RecordingHost::phone());
    controller.handle_pointer_event(&PointerEvent::down(Vec2::new(50.0, 100.0), Vec2::ZERO));
    controller.handle_pointer_event(&move_to(500.0, 1000.0));

    let position = controller.position();
    assert_eq!(position.anchor.horizontal, AxisAnchor::Center);
    assert_eq!(position.anchor.vertical, AxisAnchor::Center);
    assert_eq!((position.x, position.y), (0, 0));
}

#[test]
fn test_dragged_off_screen_clamps_to_edges() {
    let mut controller = DragSnapController::new(RecordingHost::phone());
    controller.handle_pointer_event(&PointerEvent::down(Vec2::new(10.0, 10.0), Vec2::ZERO));
    controller.handle_pointer_event(&move_to(-500.0, 5000.0));

    let position = controller.position();
    assert_eq!(position.zone(), SnapZone::BottomLeft);
    assert_eq!((position.x, position.y), (0, 0));
}

#[test]
fn test_frame_changes_between_moves() {
    let mut controller = DragSnapController::new(RecordingHost::phone());
    controller.handle_pointer_event(&PointerEvent::down(Vec2::new(10.0, 10.0), Vec2::ZERO));

    controller.handle_pointer_event(&move_to(890.0, 50.0));
    assert_eq!(controller.position().zone(), SnapZone::TopRight);

    // Rotate to landscape: the same pointer now sits left of center
    controller.host_mut().frame = Rect::new(0, 0, 2000, 1000);
    controller.handle_pointer_event(&move_to(890.0, 50.0));
    assert_eq!(controller.position().zone(), SnapZone::Top);
}

// =============================================================================
// Host Failure Tests
// =============================================================================

#[test]
fn test_host_failure_then_recovery() {
    let mut controller = DragSnapController::new(RecordingHost::phone());
    let log = hook_log();
    install_hooks(&mut controller, &log);

    controller.handle_pointer_event(&PointerEvent::down(Vec2::new(10.0, 10.0), Vec2::ZERO));
    controller.handle_pointer_event(&move_to(50.0, 50.0));
    let before = controller.position();

    controller.host_mut().fail_with = Some(LayoutApplyError::Detached);
    let result = controller.handle_pointer_event(&move_to(500.0, 500.0));
    assert_eq!(result, InputResult::Unhandled);
    assert!(controller.is_dragging());
    assert_eq!(controller.grab_offset(), Some(Point::new(10, 10)));
    assert_eq!(controller.position(), before);
    assert_eq!(*log.borrow(), vec!["start"]);

    // Next move retries and succeeds
    controller.host_mut().fail_with = None;
    let result = controller.handle_pointer_event(&move_to(500.0, 500.0));
    assert_eq!(result, InputResult::Handled);
    assert_ne!(controller.position(), before);

    // Release still ends the drag normally
    controller.handle_pointer_event(&PointerEvent::up(Vec2::ZERO, Vec2::ZERO));
    assert_eq!(*log.borrow(), vec!["start", "end"]);
}

#[test]
fn test_invalid_params_failure_reported_unhandled() {
    let mut controller = DragSnapController::new(RecordingHost::phone());
    controller.handle_pointer_event(&PointerEvent::down(Vec2::ZERO, Vec2::ZERO));

    controller.host_mut().fail_with =
        Some(LayoutApplyError::InvalidParams("gravity".to_string()));
    assert!(!controller.handle_pointer_event(&move_to(10.0, 10.0)).is_handled());
    assert!(controller.host().applied.is_empty());
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_config_initial_position_until_first_move() {
    let config = OverlayConfig::from_json(
        r#"{"initial_position":{"x":8,"y":8,"anchor":{"horizontal":"end","vertical":"start"}}}"#,
    )
    .unwrap();
    let mut controller = DragSnapController::with_config(RecordingHost::phone(), config);
    assert_eq!(controller.position().zone(), SnapZone::TopRight);

    controller.handle_pointer_event(&PointerEvent::down(Vec2::new(10.0, 10.0), Vec2::ZERO));
    assert_eq!(controller.position().zone(), SnapZone::TopRight);

    controller.handle_pointer_event(&move_to(50.0, 50.0));
    assert_eq!(controller.position().zone(), SnapZone::TopLeft);
}

#[test]
fn test_controller_over_borrowed_host() {
    let mut host = RecordingHost::phone();
    {
        let mut controller = DragSnapController::new(&mut host);
        controller.handle_pointer_event(&PointerEvent::down(Vec2::new(10.0, 10.0), Vec2::ZERO));
        controller.handle_pointer_event(&move_to(50.0, 50.0));
    }
    assert_eq!(host.applied.len(), 1);
    assert_eq!(host.applied[0].gravity(), zos_overlay::gravity::LEFT | zos_overlay::gravity::TOP);
}
