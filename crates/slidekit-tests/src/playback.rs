//! Integration tests: the playback model over exported data.

use slidekit_anim::preset;
use slidekit_core::{active_segment, LayoutSegment, PresentationConfig, PresetName, Slide};
use slidekit_export::{
    ExportOptions, Exporter, Key, MemoryAssetSource, MemoryProgressStore, PlaybackController,
    ProgressStore,
};
use std::sync::Arc;

use crate::export::embedded_presentation;

fn segmented() -> PresentationConfig {
    let mut config = PresentationConfig::new("Segments");
    config.push_slide(
        Slide::new(1)
            .with_audio("s1.mp3", 9.0)
            .with_segment(LayoutSegment::new(0.0, 3.0, "focus").with_animation(PresetName::FadeIn))
            .with_segment(LayoutSegment::new(3.0, 3.0, "split").with_animation(PresetName::Stagger))
            .with_segment(LayoutSegment::new(6.0, 3.0, "sidebar")),
    );
    config.push_slide(Slide::new(2).with_audio("s2.mp3", 4.0));
    config
}

#[test]
fn segment_boundaries_hand_over() {
    let slide = &segmented().slides[0];
    assert_eq!(active_segment(&slide.layout, 3.0).unwrap().layout, "split");
    assert_eq!(active_segment(&slide.layout, 2.999).unwrap().layout, "focus");
    assert!(active_segment(&slide.layout, 9.0).is_none());
}

#[tokio::test]
async fn exported_data_drives_the_player() {
    let source = MemoryAssetSource::new()
        .with_asset("s1.mp3", vec![1])
        .with_asset("s2.mp3", vec![2]);
    let options = ExportOptions::default();
    let exporter = Exporter::new(options.clone(), Arc::new(source));
    let bundle = exporter.export(&segmented()).await.unwrap();
    let html = bundle.file("index.html").unwrap().content.as_text().unwrap();
    let config = embedded_presentation(html);

    let mut player = PlaybackController::new(config, &options, MemoryProgressStore::new());
    player.start();
    player.handle_key(Key::Space);

    let mut layouts = vec![player.active_layout().to_string()];
    for _ in 0..3 {
        let tick = player.tick(3.0);
        if tick.segment_changed {
            layouts.push(player.active_layout().to_string());
        }
    }
    assert_eq!(layouts, vec!["focus", "split", "sidebar", "default"]);

    // every played audio path is one the bundle ships
    let path = player.audio().unwrap().path.clone();
    assert!(bundle.file(&path).is_some());

    player.on_audio_ended();
    assert_eq!(player.slide_index(), 1);
    assert!(bundle.file(&player.audio().unwrap().path).is_some());
}

#[test]
fn progress_survives_a_reload() {
    let options = ExportOptions {
        storage_key: "lesson".into(),
        ..Default::default()
    };
    let mut first = PlaybackController::new(segmented(), &options, MemoryProgressStore::new());
    first.start();
    first.handle_key(Key::ArrowRight);
    let raw = first.store().load("lesson").unwrap();

    let store = MemoryProgressStore::new().with_entry("lesson", raw);
    let mut second = PlaybackController::new(segmented(), &options, store);
    second.start();
    assert_eq!(second.slide_index(), 1);
    assert_eq!(second.counter(), "2 / 2");
}

#[test]
fn stagger_timing_matches_preset() {
    let stagger = preset(PresetName::Stagger);
    assert_eq!(stagger.container.delay, 0.2);
    assert!(stagger.item_delay(2) > stagger.item_delay(1));
}
