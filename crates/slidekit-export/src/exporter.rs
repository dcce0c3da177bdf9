//! The export pipeline.

use chrono::Utc;
use slidekit_core::{PresentationConfig, Result, SlideKitError};
use std::collections::HashSet;
use std::sync::Arc;

use crate::assets::{collect_audio, AssetSource};
use crate::bundle::{BundleFile, BundleManifest, ExportBundle, FileKind};
use crate::css::generate_css;
use crate::html::generate_html;
use crate::minify::{minify_css, minify_html, minify_js};
use crate::options::ExportOptions;
use crate::runtime::generate_runtime;

const FALLBACK_TITLE: &str = "Presentation";

/// Slide ids name the audio files, so two slides may not share one.
fn check_unique_slide_ids(config: &PresentationConfig) -> Result<()> {
    let mut seen = HashSet::with_capacity(config.slide_count());
    for slide in &config.slides {
        if !seen.insert(slide.id) {
            return Err(SlideKitError::Export(format!("duplicate slide id {}", slide.id)));
        }
    }
    Ok(())
}

/// Turns a presentation into an [`ExportBundle`].
pub struct Exporter {
    options: ExportOptions,
    source: Arc<dyn AssetSource>,
}

impl Exporter {
    pub fn new(options: ExportOptions, source: Arc<dyn AssetSource>) -> Self {
        Self { options, source }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Document title: the option override, then the presentation title.
    pub fn document_title<'a>(&'a self, config: &'a PresentationConfig) -> &'a str {
        self.options
            .title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| Some(config.title.as_str()).filter(|t| !t.trim().is_empty()))
            .unwrap_or(FALLBACK_TITLE)
    }

    /// Build the bundle. Any failed audio fetch fails the whole export.
    pub async fn export(&self, config: &PresentationConfig) -> Result<ExportBundle> {
        tracing::info!(
            title = %config.title,
            slides = config.slide_count(),
            minify = self.options.minify,
            "Exporting presentation"
        );
        check_unique_slide_ids(config)?;

        let mut html = generate_html(config, self.document_title(config))?;
        let mut css = generate_css();
        let mut js = generate_runtime(&self.options)?;
        if self.options.minify {
            html = minify_html(&html);
            css = minify_css(&css);
            js = minify_js(&js);
        }

        let mut files = vec![
            BundleFile::text("index.html", FileKind::Html, html),
            BundleFile::text("styles.css", FileKind::Css, css),
            BundleFile::text("app.js", FileKind::JavaScript, js),
        ];

        if self.options.include_audio {
            for audio in collect_audio(config, self.source.as_ref()).await? {
                files.push(BundleFile::binary(audio.path, FileKind::Audio, audio.bytes));
            }
        }

        for file in &files {
            tracing::debug!(path = %file.path, bytes = file.content.len(), "Staged bundle file");
        }

        let manifest = BundleManifest::new(config, &files, Utc::now());
        let bundle = ExportBundle::new(files, manifest);
        tracing::info!(files = bundle.files.len(), bytes = bundle.size, "Export complete");
        Ok(bundle)
    }
}
