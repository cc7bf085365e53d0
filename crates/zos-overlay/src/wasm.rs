//! WASM exports for the overlay drag controller
//!
//! The browser shell owns the overlay element. It reports the visible frame
//! and element size, forwards pointer events, and applies positions through a
//! JS callback `apply(x, y, gravity)`. A callback that throws is treated as a
//! rejected layout update.

use std::fmt::Debug;

use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::controller::DragSnapController;
use crate::input::{PointerAction, PointerEvent};
use crate::layout::{LayoutApplyError, OverlayHost, PositionParams};
use crate::math::{Rect, Size, Vec2};

/// Log a drag hook that threw; returns whether the hook completed
fn report_hook_result<T, E: Debug>(hook: &'static str, result: Result<T, E>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            warn!(hook, error = ?e, "overlay drag hook threw");
            false
        }
    }
}

/// Host backed by JS state and callbacks
struct JsOverlayHost {
    frame: Rect,
    extent: Size,
    apply: js_sys::Function,
}

impl OverlayHost for JsOverlayHost {
    fn visible_frame(&self) -> Rect {
        self.frame
    }

    fn window_extent(&self) -> Size {
        self.extent
    }

    fn apply_position(&mut self, params: &PositionParams) -> Result<(), LayoutApplyError> {
        self.apply
            .call3(
                &JsValue::NULL,
                &JsValue::from(params.x),
                &JsValue::from(params.y),
                &JsValue::from(params.gravity()),
            )
            .map(|_| ())
            .map_err(|e| {
                LayoutApplyError::Rejected(
                    e.as_string().unwrap_or_else(|| "apply callback threw".to_string()),
                )
            })
    }
}

/// Overlay drag controller for WASM - wraps DragSnapController with a JS-friendly API
#[wasm_bindgen]
pub struct OverlayDragController {
    inner: DragSnapController<JsOverlayHost>,
}

#[wasm_bindgen]
impl OverlayDragController {
    /// Create a controller that applies positions through `apply(x, y, gravity)`
    #[wasm_bindgen(constructor)]
    pub fn new(apply: js_sys::Function) -> Self {
        let host = JsOverlayHost {
            frame: Rect::ZERO,
            extent: Size::ZERO,
            apply,
        };
        Self {
            inner: DragSnapController::new(host),
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Update the visible display frame
    #[wasm_bindgen]
    pub fn set_frame(&mut self, left: i32, top: i32, right: i32, bottom: i32) {
        self.inner.host_mut().frame = Rect::new(left, top, right, bottom);
    }

    /// Update the overlay element size
    #[wasm_bindgen]
    pub fn set_extent(&mut self, width: i32, height: i32) {
        self.inner.host_mut().extent = Size::new(width, height);
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a pointer event, returning whether it was consumed
    ///
    /// `action` accepts DOM event names (`pointerdown`, `touchmove`, ...) or
    /// the short forms `down`, `move`, `up`, `cancel`.
    #[wasm_bindgen]
    pub fn handle_pointer(
        &mut self,
        action: &str,
        local_x: f32,
        local_y: f32,
        raw_x: f32,
        raw_y: f32,
    ) -> bool {
        let event = PointerEvent::new(
            PointerAction::from_name(action),
            Vec2::new(local_x, local_y),
            Vec2::new(raw_x, raw_y),
        );
        self.inner.handle_pointer_event(&event).is_handled()
    }

    #[wasm_bindgen]
    pub fn is_dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    // =========================================================================
    // Hooks
    // =========================================================================

    /// Register the drag-start callback, replacing any previous one
    #[wasm_bindgen]
    pub fn set_drag_start_hook(&mut self, hook: js_sys::Function) {
        self.inner.on_drag_start(move || {
            report_hook_result("drag_start", hook.call0(&JsValue::NULL));
        });
    }

    /// Register the drag-end callback, replacing any previous one
    #[wasm_bindgen]
    pub fn set_drag_end_hook(&mut self, hook: js_sys::Function) {
        self.inner.on_drag_end(move || {
            report_hook_result("drag_end", hook.call0(&JsValue::NULL));
        });
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Get the last applied position as JSON
    #[wasm_bindgen]
    pub fn get_position_json(&self) -> String {
        let position = self.inner.position();
        serde_json::to_string(&serde_json::json!({
            "x": position.x,
            "y": position.y,
            "gravity": position.gravity(),
            "zone": position.zone(),
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }
}
