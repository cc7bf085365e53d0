//! Layout parameters and the host capability that applies them

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::anchor::{Anchor, SnapZone};
use crate::math::{Rect, Size};

/// Position of an overlay window relative to its anchor
///
/// `x` and `y` are offsets from the anchored edge (or from the centered
/// position for a center anchor), as window managers with gravity-based
/// layout expect them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionParams {
    pub x: i32,
    pub y: i32,
    pub anchor: Anchor,
}

impl PositionParams {
    /// Create new position parameters
    #[inline]
    pub const fn new(x: i32, y: i32, anchor: Anchor) -> Self {
        Self { x, y, anchor }
    }

    /// Gravity bits for the anchor
    #[inline]
    pub fn gravity(&self) -> u32 {
        self.anchor.bits()
    }

    /// Snap zone the window sits in
    #[inline]
    pub fn zone(&self) -> SnapZone {
        self.anchor.zone()
    }
}

/// Failure reported by the host when a new layout cannot be applied
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutApplyError {
    /// The window is no longer attached to the window manager
    #[error("window is not attached to the window manager")]
    Detached,
    /// The host refused the parameters themselves
    #[error("invalid layout parameters: {0}")]
    InvalidParams(String),
    /// Any other refusal from the host
    #[error("layout update rejected: {0}")]
    Rejected(String),
}

/// Window-manager capability the drag controller talks to
///
/// The host owns the window. The controller only reads its current geometry
/// and asks for new positions to be applied.
pub trait OverlayHost {
    /// Visible display frame the window may be positioned within
    fn visible_frame(&self) -> Rect;

    /// Current size of the dragged window
    fn window_extent(&self) -> Size;

    /// Apply a new position to the window
    fn apply_position(&mut self, params: &PositionParams) -> Result<(), LayoutApplyError>;
}

impl<H: OverlayHost + ?Sized> OverlayHost for &mut H {
    fn visible_frame(&self) -> Rect {
        (**self).visible_frame()
    }

    fn window_extent(&self) -> Size {
        (**self).window_extent()
    }

    fn apply_position(&mut self, params: &PositionParams) -> Result<(), LayoutApplyError> {
        (**self).apply_position(params)
    }
}
