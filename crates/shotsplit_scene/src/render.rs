// SPDX-License-Identifier: MIT OR Apache-2.0
//! Render-settings records.

use crate::time::Time;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque handle to a render-settings record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderSettingsId(pub Uuid);

impl RenderSettingsId {
    /// Create a new random render-settings ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RenderSettingsId {
    fn default() -> Self {
        Self::new()
    }
}

/// Which frames a render-settings record covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FrameSequenceMode {
    /// Explicit start/end range
    ManualRange,
    /// Only the current frame
    CurrentFrame,
    /// Every frame of the document
    #[default]
    AllFrames,
    /// The document's preview range
    PreviewRange,
}

/// A bundle of render parameters a take can reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Unique record ID
    pub id: RenderSettingsId,
    /// Record name
    pub name: String,
    /// Frame sequence mode
    pub frame_sequence: FrameSequenceMode,
    /// Range start (used in manual mode)
    pub frame_start: Time,
    /// Range end (used in manual mode)
    pub frame_end: Time,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Frame-rate override, falls back to the document rate when `None`
    pub fps_override: Option<f64>,
}

impl RenderSettings {
    /// Create a new record with default output parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: RenderSettingsId::new(),
            name: name.into(),
            frame_sequence: FrameSequenceMode::default(),
            frame_start: Time::ZERO,
            frame_end: Time::ZERO,
            width: 1920,
            height: 1080,
            fps_override: None,
        }
    }

    /// Clone this record under a fresh ID, template style
    pub fn duplicate(&self) -> Self {
        Self {
            id: RenderSettingsId::new(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_gets_fresh_id() {
        let template = RenderSettings::new("Default");
        let copy = template.duplicate();

        assert_ne!(copy.id, template.id);
        assert_eq!(copy.name, template.name);
        assert_eq!(copy.width, template.width);
    }
}
