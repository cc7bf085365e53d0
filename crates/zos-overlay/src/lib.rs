//! Floating overlay windows for Zero OS
//!
//! This crate provides drag-to-reposition for small floating windows that
//! snap to the nearest screen edge, corner or center as they are dragged:
//! - Drag state machine driven by raw pointer events
//! - Per-axis snap geometry producing one of nine anchor zones
//! - A host capability for applying positions, with failure tolerance
//!
//! ## Architecture
//!
//! - [`math`]: Pixel geometry types (`Point`, `Vec2`, `Rect`, `Size`)
//! - [`anchor`]: Gravity flags and snap zones
//! - [`snap`]: Pure snap geometry
//! - [`layout`]: Position parameters and the [`OverlayHost`] trait
//! - [`input`]: Pointer events and the drag session
//! - [`controller`]: [`DragSnapController`], the event entry point
//!
//! ## Example
//!
//! ```rust
//! use zos_overlay::{
//!     DragSnapController, LayoutApplyError, OverlayHost, PointerEvent, PositionParams,
//!     Rect, Size, SnapZone, Vec2,
//! };
//!
//! struct Host(Vec<PositionParams>);
//!
//! impl OverlayHost for Host {
//!     fn visible_frame(&self) -> Rect {
//!         Rect::new(0, 0, 1000, 2000)
//!     }
//!     fn window_extent(&self) -> Size {
//!         Size::new(100, 200)
//!     }
//!     fn apply_position(&mut self, params: &PositionParams) -> Result<(), LayoutApplyError> {
//!         self.0.push(*params);
//!         Ok(())
//!     }
//! }
//!
//! let mut controller = DragSnapController::new(Host(Vec::new()));
//! controller.handle_pointer_event(&PointerEvent::down(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0)));
//! controller.handle_pointer_event(&PointerEvent::moved(Vec2::new(10.0, 10.0), Vec2::new(50.0, 50.0)));
//!
//! let position = controller.position();
//! assert_eq!((position.x, position.y), (40, 40));
//! assert_eq!(position.zone(), SnapZone::TopLeft);
//! ```

pub mod math;
pub mod anchor;
pub mod snap;
pub mod layout;
pub mod input;
pub mod controller;

mod config;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Point, Rect, Size, Vec2};
pub use anchor::{gravity, Anchor, AxisAnchor, SnapZone};
pub use snap::{choose_axis, snap_position, AxisCandidates, AxisPlacement};
pub use layout::{LayoutApplyError, OverlayHost, PositionParams};
pub use input::{DragSession, DragTracker, InputResult, PointerAction, PointerEvent};
pub use controller::DragSnapController;
pub use config::OverlayConfig;
