//! Drag session for an in-progress gesture

use serde::Serialize;
use crate::math::Point;

/// State of an in-progress drag
///
/// Exists only while a gesture is active. The grab offset is captured once
/// when the gesture starts and stays fixed until it ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DragSession {
    grab_offset: Point,
}

impl DragSession {
    /// Start a session grabbed at `grab_offset` (window-local coordinates)
    #[inline]
    pub fn new(grab_offset: Point) -> Self {
        Self { grab_offset }
    }

    /// Pointer position inside the window when the drag began
    #[inline]
    pub fn grab_offset(&self) -> Point {
        self.grab_offset
    }
}
