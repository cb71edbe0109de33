//! Game settings and preferences
//!
//! The host decides where these live (a file, an env var, nothing at
//! all); the crate only defines the shape and the JSON round-trip.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Outline sprite hitboxes while rendering
    pub debug_hitboxes: bool,
    /// Fixed RNG seed; `None` lets the host pick one
    pub seed: Option<u64>,
}

impl Settings {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
