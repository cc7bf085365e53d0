//! 2D vector type for pointer coordinates

use serde::{Deserialize, Serialize};
use super::Point;

/// 2D vector for pointer positions as reported by the input layer
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Truncate toward zero onto the pixel grid
    ///
    /// NaN maps to 0 and out-of-range values saturate.
    #[inline]
    pub fn truncate(self) -> Point {
        Point::new(self.x as i32, self.y as i32)
    }
}
