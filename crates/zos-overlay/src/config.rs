//! Controller configuration

use serde::{Deserialize, Serialize};

use crate::layout::PositionParams;

/// Configuration for a drag controller
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Position the window was created at, reported until the first drag
    /// update is applied
    pub initial_position: PositionParams,
}

impl OverlayConfig {
    /// Parse a configuration from JSON
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
