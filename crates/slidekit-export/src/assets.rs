//! Asset sources for narration audio.

use async_trait::async_trait;
use slidekit_core::{PresentationConfig, Result, SlideKitError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Somewhere audio bytes can be fetched from by their `src` string.
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn fetch(&self, src: &str) -> Result<Vec<u8>>;
}

fn is_remote(src: &str) -> bool {
    let lower = src.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Reads assets from disk. Relative sources resolve against `root`.
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, src: &str) -> PathBuf {
        let path = Path::new(src);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[async_trait]
impl AssetSource for FsAssetSource {
    async fn fetch(&self, src: &str) -> Result<Vec<u8>> {
        if is_remote(src) {
            return Err(SlideKitError::Asset {
                src: src.to_string(),
                reason: "remote sources are not supported".to_string(),
            });
        }
        let path = self.resolve(src);
        tokio::fs::read(&path).await.map_err(|e| SlideKitError::Asset {
            src: src.to_string(),
            reason: format!("{}: {}", path.display(), e),
        })
    }
}

/// Fetches `http://` and `https://` sources.
#[derive(Debug, Clone, Default)]
pub struct HttpAssetSource {
    client: reqwest::Client,
}

impl HttpAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AssetSource for HttpAssetSource {
    async fn fetch(&self, src: &str) -> Result<Vec<u8>> {
        let asset_error = |e: reqwest::Error| SlideKitError::Asset {
            src: src.to_string(),
            reason: e.to_string(),
        };
        let response = self
            .client
            .get(src)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(asset_error)?;
        let bytes = response.bytes().await.map_err(asset_error)?;
        Ok(bytes.to_vec())
    }
}

/// Sends URL sources over HTTP and everything else to the filesystem.
#[derive(Debug, Clone)]
pub struct DefaultAssetSource {
    fs: FsAssetSource,
    http: HttpAssetSource,
}

impl DefaultAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            fs: FsAssetSource::new(root),
            http: HttpAssetSource::new(),
        }
    }

    pub fn with_http(mut self, http: HttpAssetSource) -> Self {
        self.http = http;
        self
    }
}

#[async_trait]
impl AssetSource for DefaultAssetSource {
    async fn fetch(&self, src: &str) -> Result<Vec<u8>> {
        if is_remote(src) {
            self.http.fetch(src).await
        } else {
            self.fs.fetch(src).await
        }
    }
}

/// In-memory assets keyed by `src`.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    assets: HashMap<String, Vec<u8>>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, src: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(src, bytes);
        self
    }

    pub fn insert(&mut self, src: impl Into<String>, bytes: Vec<u8>) {
        self.assets.insert(src.into(), bytes);
    }
}

#[async_trait]
impl AssetSource for MemoryAssetSource {
    async fn fetch(&self, src: &str) -> Result<Vec<u8>> {
        self.assets
            .get(src)
            .cloned()
            .ok_or_else(|| SlideKitError::Asset {
                src: src.to_string(),
                reason: "not found".to_string(),
            })
    }
}

/// Audio staged for one slide.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedAudio {
    pub slide_id: u32,
    /// Bundle path, `audio/slide-<id>.mp3`.
    pub path: String,
    pub bytes: Vec<u8>,
}

/// Fetch the audio of every slide that declares a source, in slide order.
///
/// Stops at the first failure.
pub async fn collect_audio(
    config: &PresentationConfig,
    source: &dyn AssetSource,
) -> Result<Vec<CollectedAudio>> {
    let mut collected = Vec::with_capacity(config.audio_slide_count());
    for slide in &config.slides {
        let Some(src) = slide.audio.src.as_deref() else {
            continue;
        };
        let bytes = source.fetch(src).await?;
        tracing::debug!(slide = slide.id, src, bytes = bytes.len(), "Fetched slide audio");
        collected.push(CollectedAudio {
            slide_id: slide.id,
            path: slide.audio_asset_path(),
            bytes,
        });
    }
    Ok(collected)
}
