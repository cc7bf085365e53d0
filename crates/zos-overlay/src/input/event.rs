//! Pointer events delivered by the host

use serde::{Deserialize, Serialize};
use crate::math::Vec2;

/// Kind of pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerAction {
    /// Pointer pressed
    Down,
    /// Pointer moved
    Move,
    /// Pointer released
    Up,
    /// Gesture aborted by the host
    Cancel,
    /// Anything else the host forwards (hover, scroll, ...)
    Other,
}

impl PointerAction {
    /// Parse the action names used by web and native hosts
    pub fn from_name(name: &str) -> Self {
        match name {
            "down" | "pointerdown" | "touchstart" | "mousedown" => PointerAction::Down,
            "move" | "pointermove" | "touchmove" | "mousemove" => PointerAction::Move,
            "up" | "pointerup" | "touchend" | "mouseup" => PointerAction::Up,
            "cancel" | "pointercancel" | "touchcancel" => PointerAction::Cancel,
            _ => PointerAction::Other,
        }
    }

    /// Check if this press or motion can start or continue a drag
    #[inline]
    pub fn is_motion(&self) -> bool {
        matches!(self, PointerAction::Down | PointerAction::Move)
    }

    /// Check if this ends a gesture
    #[inline]
    pub fn is_release(&self) -> bool {
        matches!(self, PointerAction::Up | PointerAction::Cancel)
    }
}

/// A single pointer event
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub action: PointerAction,
    /// Position relative to the dragged window's origin
    pub local: Vec2,
    /// Position in screen coordinates
    pub raw: Vec2,
}

impl PointerEvent {
    /// Create a new pointer event
    #[inline]
    pub const fn new(action: PointerAction, local: Vec2, raw: Vec2) -> Self {
        Self { action, local, raw }
    }

    #[inline]
    pub fn down(local: Vec2, raw: Vec2) -> Self {
        Self::new(PointerAction::Down, local, raw)
    }

    #[inline]
    pub fn moved(local: Vec2, raw: Vec2) -> Self {
        Self::new(PointerAction::Move, local, raw)
    }

    #[inline]
    pub fn up(local: Vec2, raw: Vec2) -> Self {
        Self::new(PointerAction::Up, local, raw)
    }

    #[inline]
    pub fn cancel() -> Self {
        Self::new(PointerAction::Cancel, Vec2::ZERO, Vec2::ZERO)
    }
}
