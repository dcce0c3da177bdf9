//! Presentation files with versioning and migration.
//!
//! Files are JSON with a schema version field. A bare presentation object
//! (no wrapper) is the version 0 shape and is migrated on load.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SlideKitError};
use crate::presentation::PresentationConfig;

/// Current schema version.
pub const CURRENT_VERSION: u32 = 1;

/// Versioned presentation file wrapper.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationFile {
    pub version: u32,
    pub presentation: PresentationConfig,
    /// Application version that wrote this file.
    pub app_version: String,
}

impl PresentationFile {
    pub fn new(presentation: PresentationConfig) -> Self {
        Self {
            version: CURRENT_VERSION,
            presentation,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Serialize to pretty JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| {
            SlideKitError::Serialization(format!("Failed to serialize presentation: {}", e))
        })
    }

    /// Deserialize from JSON bytes, applying migrations if needed.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let raw: serde_json::Value = serde_json::from_slice(data)
            .map_err(|e| SlideKitError::Serialization(format!("Invalid JSON: {}", e)))?;

        let version = raw.get("version").and_then(|v| v.as_u64()).unwrap_or(0) as u32;

        if version > CURRENT_VERSION {
            return Err(SlideKitError::Serialization(format!(
                "Presentation file version {} is newer than supported version {}",
                version, CURRENT_VERSION
            )));
        }

        let migrated = migrate(raw, version)?;

        serde_json::from_value(migrated).map_err(|e| {
            SlideKitError::Serialization(format!("Failed to parse presentation: {}", e))
        })
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let data = self.to_json()?;
        std::fs::write(path, data)?;
        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SlideKitError::NotFound(path.display().to_string()),
            _ => SlideKitError::Io(e),
        })?;
        Self::from_json(&data)
    }
}

/// Apply sequential migrations from `from_version` to CURRENT_VERSION.
fn migrate(mut data: serde_json::Value, from_version: u32) -> Result<serde_json::Value> {
    let mut version = from_version;

    while version < CURRENT_VERSION {
        match version {
            0 => {
                // v0 → v1: the whole document is the presentation
                data = serde_json::json!({
                    "version": 1,
                    "presentation": data,
                    "appVersion": "0.0.0",
                });
                version = 1;
            }
            _ => {
                return Err(SlideKitError::Serialization(format!(
                    "No migration path from version {}",
                    version
                )));
            }
        }
    }

    Ok(data)
}
