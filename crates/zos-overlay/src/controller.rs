//! Drag-and-snap controller
//!
//! Turns a stream of pointer events into anchored window positions. The first
//! press or motion of a gesture records where inside the window it was
//! grabbed; each following motion snaps the window to the nearest edge,
//! corner or center zone and hands the result to the host. Release or cancel
//! ends the gesture.

use tracing::{debug, error};

use crate::config::OverlayConfig;
use crate::input::{DragTracker, InputResult, PointerEvent};
use crate::layout::{OverlayHost, PositionParams};
use crate::math::Point;
use crate::snap::snap_position;

type DragHook = Box<dyn FnMut()>;

/// Drag controller for a single overlay window
pub struct DragSnapController<H> {
    host: H,
    tracker: DragTracker,
    /// Last position the host accepted
    position: PositionParams,
    on_drag_start: Option<DragHook>,
    on_drag_end: Option<DragHook>,
}

impl<H: OverlayHost> DragSnapController<H> {
    /// Create a controller for a window at the default position
    pub fn new(host: H) -> Self {
        Self::with_config(host, OverlayConfig::default())
    }

    /// Create a controller from configuration
    pub fn with_config(host: H, config: OverlayConfig) -> Self {
        Self {
            host,
            tracker: DragTracker::new(),
            position: config.initial_position,
            on_drag_start: None,
            on_drag_end: None,
        }
    }

    /// Register the drag-start hook, replacing any previous one
    pub fn on_drag_start(&mut self, hook: impl FnMut() + 'static) {
        self.on_drag_start = Some(Box::new(hook));
    }

    /// Register the drag-end hook, replacing any previous one
    pub fn on_drag_end(&mut self, hook: impl FnMut() + 'static) {
        self.on_drag_end = Some(Box::new(hook));
    }

    /// Remove the drag-start hook
    pub fn clear_drag_start_hook(&mut self) {
        self.on_drag_start = None;
    }

    /// Remove the drag-end hook
    pub fn clear_drag_end_hook(&mut self) {
        self.on_drag_end = None;
    }

    /// Check if a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Grab offset of the current drag
    #[inline]
    pub fn grab_offset(&self) -> Option<Point> {
        self.tracker.grab_offset()
    }

    /// Last position the host accepted
    #[inline]
    pub fn position(&self) -> PositionParams {
        self.position
    }

    /// Host the controller applies positions through
    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host
    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consume the controller, returning the host
    pub fn into_host(self) -> H {
        self.host
    }

    /// Handle one pointer event
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> InputResult {
        if event.action.is_motion() {
            match self.tracker.grab_offset() {
                None => {
                    self.begin_drag(event.local.truncate());
                    InputResult::Handled
                }
                Some(grab) => self.drag_to(event.raw.truncate(), grab),
            }
        } else if event.action.is_release() && self.end_drag() {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    fn begin_drag(&mut self, grab: Point) {
        self.tracker.begin(grab);
        debug!(grab_x = grab.x, grab_y = grab.y, "overlay drag started");
        if let Some(hook) = self.on_drag_start.as_mut() {
            hook();
        }
    }

    fn drag_to(&mut self, raw: Point, grab: Point) -> InputResult {
        let frame = self.host.visible_frame();
        let extent = self.host.window_extent();
        let params = snap_position(raw, grab, frame, extent);

        match self.host.apply_position(&params) {
            Ok(()) => {
                debug!(
                    x = params.x,
                    y = params.y,
                    zone = ?params.zone(),
                    "overlay snapped"
                );
                self.position = params;
                InputResult::Handled
            }
            Err(e) => {
                error!(error = %e, x = params.x, y = params.y, "Error updating overlay layout");
                InputResult::Unhandled
            }
        }
    }

    /// Returns `false` if no drag was in progress
    fn end_drag(&mut self) -> bool {
        let Some(session) = self.tracker.end() else {
            return false;
        };
        let grab = session.grab_offset();
        debug!(grab_x = grab.x, grab_y = grab.y, "overlay drag ended");
        if let Some(hook) = self.on_drag_end.as_mut() {
            hook();
        }
        true
    }
}
