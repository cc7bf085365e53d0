//! Anchors (gravity) describing which screen region a position is relative to
//!
//! A window is anchored along each axis independently: to the leading edge,
//! the trailing edge, or the center line. The pair of axis anchors yields the
//! nine snap zones (four edges, four corners, center).

use serde::{Deserialize, Serialize};

/// Gravity bit values, compatible with the Android `Gravity` constants
pub mod gravity {
    /// Center horizontally
    pub const CENTER_HORIZONTAL: u32 = 0x01;
    /// Push to the left edge
    pub const LEFT: u32 = 0x03;
    /// Push to the right edge
    pub const RIGHT: u32 = 0x05;
    /// Center vertically
    pub const CENTER_VERTICAL: u32 = 0x10;
    /// Push to the top edge
    pub const TOP: u32 = 0x30;
    /// Push to the bottom edge
    pub const BOTTOM: u32 = 0x50;

    /// Bits that carry the horizontal component
    pub const HORIZONTAL_MASK: u32 = 0x07;
    /// Bits that carry the vertical component
    pub const VERTICAL_MASK: u32 = 0x70;
}

/// Placement along a single axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisAnchor {
    /// Left or top edge
    Start,
    /// Center line
    Center,
    /// Right or bottom edge
    End,
}

/// Combined horizontal and vertical anchor
///
/// Exactly one component per axis, so an anchor can never carry both or
/// neither of a pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Anchor {
    pub horizontal: AxisAnchor,
    pub vertical: AxisAnchor,
}

impl Default for Anchor {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}

impl Anchor {
    /// Top-left corner
    pub const TOP_LEFT: Anchor = Anchor::new(AxisAnchor::Start, AxisAnchor::Start);

    /// Center of the frame
    pub const CENTER: Anchor = Anchor::new(AxisAnchor::Center, AxisAnchor::Center);

    /// Create from axis anchors
    #[inline]
    pub const fn new(horizontal: AxisAnchor, vertical: AxisAnchor) -> Self {
        Self { horizontal, vertical }
    }

    /// Bitwise union of the horizontal and vertical gravity flags
    pub fn bits(&self) -> u32 {
        let h = match self.horizontal {
            AxisAnchor::Start => gravity::LEFT,
            AxisAnchor::Center => gravity::CENTER_HORIZONTAL,
            AxisAnchor::End => gravity::RIGHT,
        };
        let v = match self.vertical {
            AxisAnchor::Start => gravity::TOP,
            AxisAnchor::Center => gravity::CENTER_VERTICAL,
            AxisAnchor::End => gravity::BOTTOM,
        };
        h | v
    }

    /// Decode a gravity union
    ///
    /// Returns `None` unless the value carries exactly one recognized
    /// component per axis. Bits outside the two axis masks are ignored.
    pub fn from_bits(bits: u32) -> Option<Self> {
        let horizontal = match bits & gravity::HORIZONTAL_MASK {
            gravity::LEFT => AxisAnchor::Start,
            gravity::CENTER_HORIZONTAL => AxisAnchor::Center,
            gravity::RIGHT => AxisAnchor::End,
            _ => return None,
        };
        let vertical = match bits & gravity::VERTICAL_MASK {
            gravity::TOP => AxisAnchor::Start,
            gravity::CENTER_VERTICAL => AxisAnchor::Center,
            gravity::BOTTOM => AxisAnchor::End,
            _ => return None,
        };
        Some(Self::new(horizontal, vertical))
    }

    /// Named snap zone for this anchor
    pub fn zone(&self) -> SnapZone {
        use AxisAnchor::*;
        match (self.horizontal, self.vertical) {
            (Start, Start) => SnapZone::TopLeft,
            (Center, Start) => SnapZone::Top,
            (End, Start) => SnapZone::TopRight,
            (Start, Center) => SnapZone::Left,
            (Center, Center) => SnapZone::Center,
            (End, Center) => SnapZone::Right,
            (Start, End) => SnapZone::BottomLeft,
            (Center, End) => SnapZone::Bottom,
            (End, End) => SnapZone::BottomRight,
        }
    }
}

/// One of the nine logical placements a window can snap to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapZone {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl SnapZone {
    /// All zones in row-major order
    pub const ALL: [SnapZone; 9] = [
        SnapZone::TopLeft,
        SnapZone::Top,
        SnapZone::TopRight,
        SnapZone::Left,
        SnapZone::Center,
        SnapZone::Right,
        SnapZone::BottomLeft,
        SnapZone::Bottom,
        SnapZone::BottomRight,
    ];

    /// Anchor that places a window in this zone
    pub fn anchor(&self) -> Anchor {
        use AxisAnchor::*;
        let (h, v) = match self {
            SnapZone::TopLeft => (Start, Start),
            SnapZone::Top => (Center, Start),
            SnapZone::TopRight => (End, Start),
            SnapZone::Left => (Start, Center),
            SnapZone::Center => (Center, Center),
            SnapZone::Right => (End, Center),
            SnapZone::BottomLeft => (Start, End),
            SnapZone::Bottom => (Center, End),
            SnapZone::BottomRight => (End, End),
        };
        Anchor::new(h, v)
    }
}
