//! Input module
//!
//! Pointer events as delivered by the host, the drag session state machine
//! and the result reported back for each event.

mod event;
mod drag;
mod tracker;
mod result;

pub use event::{PointerAction, PointerEvent};
pub use drag::DragSession;
pub use tracker::DragTracker;
pub use result::InputResult;
