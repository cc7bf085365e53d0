//! Drag state machine

use crate::math::Point;
use super::DragSession;

/// Tracks whether a drag is in progress
///
/// Idle when no session is held, dragging otherwise.
#[derive(Clone, Debug, Default)]
pub struct DragTracker {
    session: Option<DragSession>,
}

impl DragTracker {
    /// Create an idle tracker
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Grab offset of the current session
    #[inline]
    pub fn grab_offset(&self) -> Option<Point> {
        self.session.map(|s| s.grab_offset())
    }

    /// Begin a drag grabbed at `grab_offset`
    ///
    /// An existing session is left untouched.
    pub fn begin(&mut self, grab_offset: Point) {
        self.session.get_or_insert(DragSession::new(grab_offset));
    }

    /// End the current drag, returning the finished session
    pub fn end(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}
