//! Input result type

use serde::Serialize;

/// Result of handling a pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Event was consumed by the drag controller
    Handled,
    /// Event was not consumed (let it propagate)
    Unhandled,
}

impl InputResult {
    /// Check if the event was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled)
    }
}

impl From<InputResult> for bool {
    fn from(result: InputResult) -> bool {
        result.is_handled()
    }
}
