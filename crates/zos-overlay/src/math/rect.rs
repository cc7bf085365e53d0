//! Edge-described rectangle used for the visible display frame

use serde::{Deserialize, Serialize};

/// Rectangle described by its four edges
///
/// `right` and `bottom` are exclusive, matching how window managers report
/// the visible display frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Empty rectangle at origin
    pub const ZERO: Rect = Rect {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    /// Create a new rectangle from its edges
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Horizontal center, rounded toward negative infinity
    #[inline]
    pub fn center_x(&self) -> i32 {
        self.left.wrapping_add(self.right) >> 1
    }

    /// Vertical center, rounded toward negative infinity
    #[inline]
    pub fn center_y(&self) -> i32 {
        self.top.wrapping_add(self.bottom) >> 1
    }
}
