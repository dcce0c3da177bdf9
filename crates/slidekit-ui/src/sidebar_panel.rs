//! The sidebar settings panel.
//!
//! Drawing only reads the editor. Interactions are collected as
//! [`PanelEvent`]s during the frame and applied afterwards.

use egui::{self, RichText};
use slidekit_core::{
    ConceptItem, ItemStyle, VocabularyItem, MAX_FONT_SIZE, MAX_ITEMS, MIN_FONT_SIZE, MIN_ITEMS,
};
use slidekit_editor::{
    ConceptPatch, EditorPanel, ItemPatch, PanelControl, PanelTab, SectionItems, SidebarEditor,
    VocabularyPatch,
};

use crate::theme::Theme;
use crate::widgets::{small_button, text_field, themed_slider};

/// Something the user did in the panel this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    Control(PanelControl),
    Undo,
    Redo,
}

/// Apply collected events in order.
pub fn apply_events(panel: &mut EditorPanel, editor: &mut SidebarEditor, events: Vec<PanelEvent>) {
    for event in events {
        match event {
            PanelEvent::Control(control) => panel.apply(editor, control),
            PanelEvent::Undo => {
                editor.undo();
            }
            PanelEvent::Redo => {
                editor.redo();
            }
        }
    }
}

/// Draw the panel and apply whatever the user changed.
pub fn show_sidebar_panel(ui: &mut egui::Ui, panel: &mut EditorPanel, editor: &mut SidebarEditor) {
    let events = draw_panel(ui, panel, editor);
    apply_events(panel, editor, events);
}

fn edit(id: &str, patch: ItemPatch) -> PanelEvent {
    PanelEvent::Control(PanelControl::EditItem {
        id: id.to_string(),
        patch,
    })
}

fn draw_panel(ui: &mut egui::Ui, panel: &EditorPanel, editor: &SidebarEditor) -> Vec<PanelEvent> {
    let mut events = Vec::new();

    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Sidebar settings")
                .size(Theme::FONT_MD)
                .color(Theme::t1())
                .strong(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if panel.is_visible() { "Hide" } else { "Show" };
            if small_button(ui, label, true) {
                events.push(PanelEvent::Control(PanelControl::ToggleVisibility));
            }
        });
    });

    let Some(view) = panel.view(editor) else {
        return events;
    };

    ui.separator();
    ui.horizontal(|ui| {
        for tab in PanelTab::ALL {
            if ui.selectable_label(view.tab == tab, tab.label()).clicked() && view.tab != tab {
                events.push(PanelEvent::Control(PanelControl::SelectTab(tab)));
            }
        }
    });
    ui.add_space(Theme::SPACE_XS);

    if let Some(count) = themed_slider(
        ui,
        "Max items",
        f64::from(view.max_items),
        f64::from(MIN_ITEMS)..=f64::from(MAX_ITEMS),
        0,
    ) {
        let count = count.round() as i64;
        if count != i64::from(view.max_items) {
            events.push(PanelEvent::Control(PanelControl::MaxItems(count)));
        }
    }
    if let Some(size) = themed_slider(
        ui,
        "Font size",
        view.font_size,
        MIN_FONT_SIZE..=MAX_FONT_SIZE,
        2,
    ) {
        events.push(PanelEvent::Control(PanelControl::FontSize(size)));
    }

    let total = view.items.len();
    let shown = total.min(view.max_items as usize);
    ui.label(
        RichText::new(format!("{} of {} shown", shown, total))
            .size(Theme::FONT_XS)
            .color(Theme::t3()),
    );
    ui.add_space(Theme::SPACE_XS);

    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .max_height(ui.available_height() - 40.0)
        .show(ui, |ui| match view.items {
            SectionItems::Vocabulary(items) => {
                for (i, item) in items.iter().enumerate() {
                    vocabulary_card(ui, item, i < shown, &mut events);
                }
            }
            SectionItems::Concepts(items) => {
                for (i, item) in items.iter().enumerate() {
                    concept_card(ui, item, i < shown, &mut events);
                }
            }
        });

    ui.separator();
    ui.horizontal(|ui| {
        if small_button(ui, "+ Add", true) {
            events.push(PanelEvent::Control(PanelControl::AddItem));
        }
        if small_button(ui, "Reset", true) {
            events.push(PanelEvent::Control(PanelControl::Reset));
        }
        if small_button(ui, "Undo", view.can_undo) {
            events.push(PanelEvent::Undo);
        }
        if small_button(ui, "Redo", view.can_redo) {
            events.push(PanelEvent::Redo);
        }
    });

    events
}

fn card_header(
    ui: &mut egui::Ui,
    id: &str,
    shown: bool,
    events: &mut Vec<PanelEvent>,
    remove: PanelControl,
) {
    ui.horizontal(|ui| {
        let color = if shown { Theme::t3() } else { Theme::with_alpha(Theme::t3(), 120) };
        ui.label(RichText::new(id).size(Theme::FONT_XS).color(color).monospace());
        if !shown {
            ui.label(RichText::new("not shown").size(Theme::FONT_XS).color(Theme::t3()).italics());
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add(egui::Button::new(RichText::new("\u{2715}").color(Theme::red())).frame(false))
                .on_hover_text("Remove")
                .clicked()
            {
                events.push(PanelEvent::Control(remove));
            }
        });
    });
}

fn emphasis_toggle(ui: &mut egui::Ui, style: Option<&ItemStyle>) -> Option<ItemStyle> {
    let current = style.cloned().unwrap_or_default();
    let mut emphasis = current.emphasis;
    ui.checkbox(&mut emphasis, RichText::new("Emphasis").size(Theme::FONT_XS))
        .changed()
        .then(|| ItemStyle { emphasis, ..current })
}

fn vocabulary_card(
    ui: &mut egui::Ui,
    item: &VocabularyItem,
    shown: bool,
    events: &mut Vec<PanelEvent>,
) {
    ui.push_id(&item.id, |ui| {
        Theme::card_frame().show(ui, |ui| {
            card_header(
                ui,
                &item.id,
                shown,
                events,
                PanelControl::RemoveItem(item.id.clone()),
            );
            if let Some(term) = text_field(ui, "Term", &item.term) {
                let patch = VocabularyPatch {
                    term: Some(term),
                    ..Default::default()
                };
                events.push(edit(&item.id, ItemPatch::Vocabulary(patch)));
            }
            if let Some(definition) = text_field(ui, "Definition", &item.definition) {
                let patch = VocabularyPatch {
                    definition: Some(definition),
                    ..Default::default()
                };
                events.push(edit(&item.id, ItemPatch::Vocabulary(patch)));
            }
            if let Some(style) = emphasis_toggle(ui, item.style.as_ref()) {
                let patch = VocabularyPatch {
                    style: Some(style),
                    ..Default::default()
                };
                events.push(edit(&item.id, ItemPatch::Vocabulary(patch)));
            }
        });
    });
    ui.add_space(Theme::SPACE_XS);
}

fn concept_card(ui: &mut egui::Ui, item: &ConceptItem, shown: bool, events: &mut Vec<PanelEvent>) {
    ui.push_id(&item.id, |ui| {
        Theme::card_frame().show(ui, |ui| {
            card_header(
                ui,
                &item.id,
                shown,
                events,
                PanelControl::RemoveItem(item.id.clone()),
            );
            if let Some(title) = text_field(ui, "Title", &item.title) {
                let patch = ConceptPatch {
                    title: Some(title),
                    ..Default::default()
                };
                events.push(edit(&item.id, ItemPatch::Concept(patch)));
            }
            if let Some(description) = text_field(ui, "Description", &item.description) {
                let patch = ConceptPatch {
                    description: Some(description),
                    ..Default::default()
                };
                events.push(edit(&item.id, ItemPatch::Concept(patch)));
            }
            if let Some(style) = emphasis_toggle(ui, item.style.as_ref()) {
                let patch = ConceptPatch {
                    style: Some(style),
                    ..Default::default()
                };
                events.push(edit(&item.id, ItemPatch::Concept(patch)));
            }
        });
    });
    ui.add_space(Theme::SPACE_XS);
}
