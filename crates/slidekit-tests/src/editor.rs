//! Integration tests: editing a slide and exporting the result.

use slidekit_core::{
    ConceptItem, ContentSection, PresentationConfig, Slide, SlideContent, VocabularyItem,
};
use slidekit_editor::{
    EditorPanel, ItemPatch, PanelControl, PanelTab, SectionKind, SidebarEditor, VocabularyPatch,
};
use slidekit_export::{ExportOptions, Exporter, MemoryAssetSource};
use std::sync::Arc;

use crate::export::embedded_presentation;

fn lesson() -> PresentationConfig {
    let mut config = PresentationConfig::new("Chemistry");
    config.push_slide(Slide::new(1).with_content(SlideContent {
        title: "Atoms".into(),
        vocabulary: ContentSection::new(vec![
            VocabularyItem::new("v-1", "Proton", "Positive particle"),
            VocabularyItem::new("v-2", "Neutron", "Neutral particle"),
        ]),
        concepts: ContentSection::new(vec![ConceptItem::new("c-1", "Nucleus", "Dense core")]),
    }));
    config.push_slide(Slide::new(2).with_content(SlideContent {
        title: "Bonds".into(),
        ..Default::default()
    }));
    config
}

#[tokio::test]
async fn edited_sidebar_reaches_the_bundle() {
    let original = lesson();
    let mut editor = SidebarEditor::new(original.clone(), 0).unwrap();
    editor.set_max_items(SectionKind::Vocabulary, 12);
    editor.set_font_size(SectionKind::Concepts, 0.1);
    editor.update_item(
        "v-2",
        ItemPatch::Vocabulary(VocabularyPatch {
            definition: Some("No charge".into()),
            ..Default::default()
        }),
    );

    let exporter = Exporter::new(ExportOptions::default(), Arc::new(MemoryAssetSource::new()));
    let bundle = exporter.export(editor.modified_config()).await.unwrap();
    let html = bundle.file("index.html").unwrap().content.as_text().unwrap();
    let exported = embedded_presentation(html);

    let sidebar = &exported.slides[0].content;
    assert_eq!(sidebar.vocabulary.max_items, 5);
    assert_eq!(sidebar.concepts.font_size, 0.5);
    assert_eq!(sidebar.vocabulary.items[1].definition, "No charge");
    assert_eq!(exported.slides[1], original.slides[1]);

    // the editor never writes back into its input
    assert_eq!(editor.original(), &original);
}

#[test]
fn panel_round_trip_through_editor() {
    let mut editor = SidebarEditor::new(lesson(), 0).unwrap();
    let mut panel = EditorPanel::new();

    panel.apply(&mut editor, PanelControl::SelectTab(PanelTab::Concepts));
    panel.apply(&mut editor, PanelControl::AddItem);
    panel.apply(&mut editor, PanelControl::RemoveItem("missing".into()));
    assert_eq!(editor.state().item_count(SectionKind::Concepts), 2);
    assert_eq!(editor.state().item_count(SectionKind::Vocabulary), 2);

    let view = panel.view(&editor).unwrap();
    let ids = view.items.ids();
    assert_eq!(ids[0], "c-1");
    assert_ne!(ids[1], "c-1");

    panel.apply(&mut editor, PanelControl::Reset);
    assert!(!editor.is_dirty());
    assert_eq!(editor.modified_config(), &lesson());
}

#[test]
fn switching_slides_targets_the_new_slide() {
    let mut editor = SidebarEditor::new(lesson(), 0).unwrap();
    editor.set_max_items(SectionKind::Vocabulary, 1);
    editor.select_slide(1).unwrap();

    let id = editor.add_item(SectionKind::Vocabulary);
    let slides = &editor.modified_config().slides;
    assert_eq!(slides[1].content.vocabulary.items.len(), 1);
    assert_eq!(slides[1].content.vocabulary.items[0].id, id);
    // edits on the previous slide were discarded on switch
    assert_eq!(slides[0], lesson().slides[0]);

    assert!(editor.select_slide(5).is_err());
}
