//! Writing a bundle to disk.

use slidekit_core::{Result, SlideKitError};
use std::path::{Component, Path, PathBuf};

use crate::bundle::ExportBundle;

pub const MANIFEST_FILE: &str = "manifest.json";

/// Writes bundle files plus `manifest.json` under one output directory.
#[derive(Debug, Clone)]
pub struct BundleWriter {
    out_dir: PathBuf,
}

impl BundleWriter {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    fn target(&self, relative: &str) -> Result<PathBuf> {
        let path = Path::new(relative);
        let safe = path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if !safe || relative.is_empty() {
            return Err(SlideKitError::Export(format!(
                "bundle path escapes the output directory: {}",
                relative
            )));
        }
        Ok(self.out_dir.join(path))
    }

    /// Write every file and the manifest. Returns the paths written.
    pub async fn write(&self, bundle: &ExportBundle) -> Result<Vec<PathBuf>> {
        // validate everything before touching the disk
        let targets = bundle
            .files
            .iter()
            .map(|f| self.target(&f.path))
            .collect::<Result<Vec<_>>>()?;

        tokio::fs::create_dir_all(&self.out_dir).await?;
        let mut written = Vec::with_capacity(targets.len() + 1);
        for (file, target) in bundle.files.iter().zip(targets) {
            if let Some(parent) = target.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&target, file.content.as_bytes()).await?;
            tracing::debug!(path = %target.display(), "Wrote bundle file");
            written.push(target);
        }

        let manifest_path = self.out_dir.join(MANIFEST_FILE);
        let manifest = serde_json::to_vec_pretty(&bundle.manifest)?;
        tokio::fs::write(&manifest_path, manifest).await?;
        written.push(manifest_path);

        tracing::info!(dir = %self.out_dir.display(), files = written.len(), "Bundle written");
        Ok(written)
    }
}
