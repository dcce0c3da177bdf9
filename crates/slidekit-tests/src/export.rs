//! Integration tests for bundle export.

use slidekit_core::{LayoutSegment, PresentationConfig, PresentationFile, PresetName, Slide};
use slidekit_export::{
    BundleManifest, BundleWriter, ExportOptions, Exporter, FileKind, FsAssetSource,
    MemoryAssetSource, MANIFEST_FILE,
};
use std::sync::Arc;

pub(crate) fn embedded_presentation(html: &str) -> PresentationConfig {
    let open = r#"<script type="application/json" id="presentation-data">"#;
    let start = html.find(open).expect("data element") + open.len();
    let end = start + html[start..].find("</script>").expect("closing tag");
    serde_json::from_str(&html[start..end]).expect("embedded JSON")
}

fn narrated_deck() -> PresentationConfig {
    let mut config = PresentationConfig::new("Narrated");
    config.push_slide(Slide::new(1).with_audio("a.mp3", 10.0));
    config.push_slide(Slide::new(2).with_audio("b.mp3", 15.0));
    config.push_slide(Slide::new(3).with_audio("c.mp3", 7.0));
    config
}

fn memory_source() -> MemoryAssetSource {
    MemoryAssetSource::new()
        .with_asset("a.mp3", vec![1; 10])
        .with_asset("b.mp3", vec![2; 15])
        .with_asset("c.mp3", vec![3; 7])
        .with_asset("intro.mp3", vec![9; 20])
}

#[tokio::test]
async fn two_slide_bundle_has_four_files() {
    let mut config = PresentationConfig::new("Intro");
    config.push_slide(
        Slide::new(1)
            .with_audio("intro.mp3", 20.0)
            .with_segment(LayoutSegment::new(0.0, 20.0, "default")),
    );
    config.push_slide(Slide::new(2));

    let exporter = Exporter::new(ExportOptions::default(), Arc::new(memory_source()));
    let bundle = exporter.export(&config).await.unwrap();

    assert_eq!(bundle.files.len(), 4);
    assert_eq!(bundle.manifest.total_slides, 2);
    assert_eq!(bundle.manifest.duration, 20.0);

    let html = bundle.file("index.html").unwrap().content.as_text().unwrap();
    assert_eq!(embedded_presentation(html), config);
}

#[tokio::test]
async fn manifest_lists_one_audio_file_per_narrated_slide() {
    let exporter = Exporter::new(ExportOptions::default(), Arc::new(memory_source()));
    let bundle = exporter.export(&narrated_deck()).await.unwrap();

    assert_eq!(bundle.manifest.duration, 32.0);
    assert_eq!(
        bundle.manifest.files,
        vec![
            "index.html",
            "styles.css",
            "app.js",
            "audio/slide-1.mp3",
            "audio/slide-2.mp3",
            "audio/slide-3.mp3",
        ]
    );
    let audio = bundle.files.iter().filter(|f| f.kind == FileKind::Audio).count();
    assert_eq!(audio, 3);
}

#[tokio::test]
async fn failed_fetch_returns_no_bundle() {
    let source = MemoryAssetSource::new().with_asset("a.mp3", vec![1]);
    let exporter = Exporter::new(ExportOptions::default(), Arc::new(source));
    assert!(exporter.export(&narrated_deck()).await.is_err());
}

#[tokio::test]
async fn slide_text_cannot_break_out_of_data_element() {
    let mut config = PresentationConfig::new("</title><script>alert(1)</script>");
    config.push_slide(Slide::new(1));
    config.slides[0].content.title = "</script><b>bold</b>".into();

    let exporter = Exporter::new(ExportOptions::default(), Arc::new(MemoryAssetSource::new()));
    let bundle = exporter.export(&config).await.unwrap();
    let html = bundle.file("index.html").unwrap().content.as_text().unwrap();

    assert_eq!(html.matches("</script>").count(), 2);
    assert!(html.contains("<title>&lt;/title&gt;"));
    assert_eq!(embedded_presentation(html), config);
}

#[tokio::test]
async fn export_from_disk_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("voice")).unwrap();
    std::fs::write(dir.path().join("voice/one.mp3"), vec![7u8; 32]).unwrap();

    // bare presentation object, the unversioned shape
    let mut config = PresentationConfig::new("Disk");
    config.push_slide(
        Slide::new(1)
            .with_audio("voice/one.mp3", 8.0)
            .with_segment(
                LayoutSegment::new(0.0, 8.0, "split").with_animation(PresetName::Stagger),
            ),
    );
    let deck = dir.path().join("deck.json");
    std::fs::write(&deck, serde_json::to_vec(&config).unwrap()).unwrap();
    let loaded = PresentationFile::load_from_file(&deck).unwrap().presentation;
    assert_eq!(loaded, config);

    let options = ExportOptions {
        minify: true,
        ..Default::default()
    };
    let exporter = Exporter::new(options, Arc::new(FsAssetSource::new(dir.path())));
    let bundle = exporter.export(&loaded).await.unwrap();

    let out = dir.path().join("dist");
    BundleWriter::new(&out).write(&bundle).await.unwrap();

    assert_eq!(std::fs::read(out.join("audio/slide-1.mp3")).unwrap(), vec![7u8; 32]);
    let manifest: BundleManifest =
        serde_json::from_slice(&std::fs::read(out.join(MANIFEST_FILE)).unwrap()).unwrap();
    assert_eq!(manifest, bundle.manifest);
    assert!(!manifest.files.iter().any(|f| f == MANIFEST_FILE));

    let html = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert_eq!(embedded_presentation(&html), config);
}
