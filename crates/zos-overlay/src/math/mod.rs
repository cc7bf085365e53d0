//! Core geometry types for overlay placement
//!
//! Pointer coordinates arrive as floating point ([`Vec2`]) and are truncated
//! to the integer pixel grid ([`Point`]) the window manager works in.

mod point;
mod vec2;
mod rect;
mod size;

pub use point::Point;
pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
