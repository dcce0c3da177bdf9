//! Export options.

use serde::{Deserialize, Serialize};
use slidekit_core::{Result, SlideKitError};
use std::path::Path;

/// What the player does when a slide's narration finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OnAudioEnd {
    /// Move to the next slide; stop after the last one.
    #[default]
    Advance,
    /// Stay on the slide and pause.
    Stop,
}

impl OnAudioEnd {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Advance => "advance",
            Self::Stop => "stop",
        }
    }
}

/// Options controlling bundle generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportOptions {
    /// Strip indentation, blank lines and comment lines from generated text.
    pub minify: bool,
    /// Fetch and stage narration audio.
    pub include_audio: bool,
    /// Document title; falls back to the presentation title.
    pub title: Option<String>,
    /// `localStorage` key holding playback progress.
    pub storage_key: String,
    pub on_audio_end: OnAudioEnd,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            minify: false,
            include_audio: true,
            title: None,
            storage_key: "slidekit-progress".to_string(),
            on_audio_end: OnAudioEnd::default(),
        }
    }
}

impl ExportOptions {
    /// Load options from a JSON file. Missing fields take their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        serde_json::from_slice(&data).map_err(|e| {
            SlideKitError::Serialization(format!(
                "Invalid export options in {}: {}",
                path.display(),
                e
            ))
        })
    }
}
