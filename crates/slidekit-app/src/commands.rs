//! `export` and `inspect`.

use anyhow::{Context, Result};
use slidekit_core::{PresentationConfig, PresentationFile};
use slidekit_export::{BundleWriter, DefaultAssetSource, ExportOptions, Exporter};
use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::cli::ExportArgs;

pub fn load_presentation(path: &Path) -> Result<PresentationConfig> {
    let file = PresentationFile::load_from_file(path)
        .with_context(|| format!("Failed to load presentation {}", path.display()))?;
    Ok(file.presentation)
}

/// Options file first, then flags on top.
pub fn resolve_options(args: &ExportArgs) -> Result<ExportOptions> {
    let mut options = match &args.config {
        Some(path) => ExportOptions::load_from_file(path)
            .with_context(|| format!("Failed to load export options {}", path.display()))?,
        None => ExportOptions::default(),
    };
    if args.minify {
        options.minify = true;
    }
    if args.no_audio {
        options.include_audio = false;
    }
    if let Some(title) = &args.title {
        options.title = Some(title.clone());
    }
    Ok(options)
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let config = load_presentation(&args.presentation)?;
    let options = resolve_options(args)?;
    let assets_root = match &args.assets {
        Some(dir) => dir.clone(),
        None => args
            .presentation
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let exporter = Exporter::new(options, Arc::new(DefaultAssetSource::new(assets_root)));
    let writer = BundleWriter::new(&args.out);
    let written = runtime.block_on(async {
        let bundle = exporter.export(&config).await?;
        println!(
            "Exported {} slides ({} files, {} bytes)",
            bundle.manifest.total_slides,
            bundle.files.len(),
            bundle.size
        );
        writer.write(&bundle).await
    })?;

    info!(dir = %args.out.display(), files = written.len(), "Export finished");
    println!("Wrote bundle to {}", args.out.display());
    Ok(())
}

/// Slide count, total duration and the layout segments of every slide.
pub fn inspect_report(config: &PresentationConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", config.title);
    let _ = writeln!(
        out,
        "{} slides, {:.1}s total, {} with audio",
        config.slide_count(),
        config.total_duration(),
        config.audio_slide_count()
    );
    for (index, slide) in config.slides.iter().enumerate() {
        let _ = writeln!(
            out,
            "[{}] slide {} \"{}\" {:.1}s, vocabulary {}/{}, concepts {}/{}",
            index,
            slide.id,
            slide.content.title,
            slide.duration(),
            slide.content.vocabulary.visible_items().len(),
            slide.content.vocabulary.items.len(),
            slide.content.concepts.visible_items().len(),
            slide.content.concepts.items.len(),
        );
        for segment in &slide.layout {
            let animation = segment.animation.map(|a| a.as_str()).unwrap_or("none");
            let _ = writeln!(
                out,
                "    {:>6.1}s - {:>6.1}s  {} ({})",
                segment.start_time,
                segment.end_time(),
                segment.layout,
                animation
            );
        }
    }
    out
}

pub fn run_inspect(path: &Path) -> Result<()> {
    let config = load_presentation(path)?;
    print!("{}", inspect_report(&config));
    Ok(())
}
