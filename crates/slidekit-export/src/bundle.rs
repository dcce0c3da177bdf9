//! Bundle types: output files and the manifest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use slidekit_core::PresentationConfig;

/// Manifest schema version.
pub const MANIFEST_VERSION: &str = "1.0.0";

/// Declared type of a bundle file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Html,
    Css,
    JavaScript,
    Audio,
}

impl FileKind {
    /// MIME type for serving the file.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Css => "text/css",
            Self::JavaScript => "application/javascript",
            Self::Audio => "audio/mpeg",
        }
    }
}

/// File payload.
#[derive(Debug, Clone, PartialEq)]
pub enum FileContent {
    Text(String),
    Binary(Vec<u8>),
}

impl FileContent {
    /// Byte length of the payload.
    pub fn len(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Binary(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Binary(_) => None,
        }
    }
}

/// One file of an exported bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleFile {
    /// Path relative to the bundle root, `/`-separated.
    pub path: String,
    pub content: FileContent,
    pub kind: FileKind,
}

impl BundleFile {
    pub fn text(path: impl Into<String>, kind: FileKind, text: String) -> Self {
        Self {
            path: path.into(),
            content: FileContent::Text(text),
            kind,
        }
    }

    pub fn binary(path: impl Into<String>, kind: FileKind, bytes: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            content: FileContent::Binary(bytes),
            kind,
        }
    }
}

/// Bundle metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleManifest {
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub total_slides: usize,
    /// Sum of declared slide durations, in seconds.
    pub duration: f64,
    /// Paths of every bundle file, in generation order.
    pub files: Vec<String>,
}

impl BundleManifest {
    pub fn new(
        config: &PresentationConfig,
        files: &[BundleFile],
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            version: MANIFEST_VERSION.to_string(),
            created_at,
            total_slides: config.slide_count(),
            duration: config.total_duration(),
            files: files.iter().map(|f| f.path.clone()).collect(),
        }
    }
}

/// A complete exported presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportBundle {
    pub files: Vec<BundleFile>,
    pub manifest: BundleManifest,
    /// Total payload size in bytes.
    pub size: u64,
}

impl ExportBundle {
    pub fn new(files: Vec<BundleFile>, manifest: BundleManifest) -> Self {
        let size = files.iter().map(|f| f.content.len() as u64).sum();
        Self {
            files,
            manifest,
            size,
        }
    }

    pub fn file(&self, path: &str) -> Option<&BundleFile> {
        self.files.iter().find(|f| f.path == path)
    }

    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.path.as_str()).collect()
    }
}
