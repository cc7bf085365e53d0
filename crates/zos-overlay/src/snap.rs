//! Snap geometry
//!
//! Each axis is decided independently. For a pointer position and grab
//! offset, three candidate placements are computed along the axis:
//!
//! - **start**: offset of the window's leading edge from the frame's leading edge
//! - **center**: offset from the position that would center the window in the frame
//! - **end**: offset of the window's trailing edge from the frame's trailing edge
//!
//! The leading edge wins ties, then the trailing edge, then the center line.
//! Edge distances are compared signed while the center distance is compared
//! by magnitude. Edge offsets are floored at zero; the center offset is kept
//! as-is and may be negative.
//!
//! All arithmetic wraps on overflow so every integer input has a defined result.

use crate::anchor::{Anchor, AxisAnchor};
use crate::layout::PositionParams;
use crate::math::{Point, Rect, Size};

/// Chosen anchor and offset along one axis
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisPlacement {
    pub anchor: AxisAnchor,
    pub offset: i32,
}

/// Candidate offsets along one axis, before selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisCandidates {
    pub start: i32,
    pub center: i32,
    pub end: i32,
}

impl AxisCandidates {
    /// Candidates for a window whose origin would sit at `origin`
    ///
    /// `lo`/`hi` are the frame edges along the axis, `mid` its center and
    /// `extent` the window's length along the axis. The centered position uses
    /// half the extent truncated toward zero. `end` is derived from the
    /// window's trailing edge, `origin + extent`.
    pub fn compute(origin: i32, lo: i32, mid: i32, hi: i32, extent: i32) -> Self {
        Self {
            start: origin.wrapping_sub(lo),
            center: origin.wrapping_sub(mid.wrapping_sub(extent / 2)),
            end: hi.wrapping_sub(origin).wrapping_sub(extent),
        }
    }

    /// Pick the placement for these candidates
    #[inline]
    pub fn choose(self) -> AxisPlacement {
        choose_axis(self.start, self.center, self.end)
    }
}

/// Select an axis placement from the three candidate offsets
pub fn choose_axis(start: i32, center: i32, end: i32) -> AxisPlacement {
    let center_dist = center.wrapping_abs();

    if start <= center_dist && start <= end {
        AxisPlacement {
            anchor: AxisAnchor::Start,
            offset: start.max(0),
        }
    } else if end <= center_dist && end <= start {
        AxisPlacement {
            anchor: AxisAnchor::End,
            offset: end.max(0),
        }
    } else {
        AxisPlacement {
            anchor: AxisAnchor::Center,
            offset: center,
        }
    }
}

/// Compute the anchored position of a window being dragged
///
/// `raw` is the pointer in screen coordinates and `grab` the pointer's offset
/// inside the window captured when the drag began.
pub fn snap_position(raw: Point, grab: Point, frame: Rect, extent: Size) -> PositionParams {
    let origin = raw - grab;

    let horizontal = AxisCandidates::compute(
        origin.x,
        frame.left,
        frame.center_x(),
        frame.right,
        extent.width,
    )
    .choose();
    let vertical = AxisCandidates::compute(
        origin.y,
        frame.top,
        frame.center_y(),
        frame.bottom,
        extent.height,
    )
    .choose();

    PositionParams::new(
        horizontal.offset,
        vertical.offset,
        Anchor::new(horizontal.anchor, vertical.anchor),
    )
}
