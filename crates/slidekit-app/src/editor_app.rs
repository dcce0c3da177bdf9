//! The `edit` window: slide preview in the middle, settings on the right.

use eframe::egui;
use slidekit_core::{PresentationFile, Slide};
use slidekit_editor::{EditorPanel, SidebarEditor};
use slidekit_ui::{show_sidebar_panel, Theme};
use std::path::PathBuf;
use tracing::{info, warn};

pub struct EditorApp {
    editor: SidebarEditor,
    panel: EditorPanel,
    output: PathBuf,
    status: Option<String>,
    /// Edits folded into the original when switching slides.
    carried_edits: bool,
}

impl EditorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, editor: SidebarEditor, output: PathBuf) -> Self {
        Theme::apply(&cc.egui_ctx);
        Self {
            editor,
            panel: EditorPanel::new(),
            output,
            status: None,
            carried_edits: false,
        }
    }

    fn save(&mut self) {
        let config = self.editor.modified_config().clone();
        match PresentationFile::new(config.clone()).save_to_file(&self.output) {
            Ok(()) => {
                info!(path = %self.output.display(), "Saved presentation");
                if let Err(e) = self.editor.set_original(config) {
                    warn!(error = %e, "Could not rebase editor after save");
                }
                self.carried_edits = false;
                self.status = Some(format!("Saved {}", self.output.display()));
            }
            Err(e) => {
                warn!(error = %e, "Save failed");
                self.status = Some(format!("Save failed: {}", e));
            }
        }
    }

    fn select_slide(&mut self, index: usize) {
        if self.editor.is_dirty() {
            let edited = self.editor.modified_config().clone();
            if let Err(e) = self.editor.set_original(edited) {
                warn!(error = %e, "Could not keep edits");
                return;
            }
            self.carried_edits = true;
        }
        if let Err(e) = self.editor.select_slide(index) {
            warn!(error = %e, "Could not select slide");
        }
    }
}

fn preview(ui: &mut egui::Ui, slide: &Slide) {
    ui.heading(egui::RichText::new(&slide.content.title).size(28.0).color(Theme::t1()));
    ui.add_space(Theme::SPACE_MD);

    let vocabulary = &slide.content.vocabulary;
    let size = Theme::FONT_SM * 1.2 * vocabulary.font_size as f32;
    if !vocabulary.items.is_empty() {
        ui.label(egui::RichText::new("VOCABULARY").size(Theme::FONT_XS).color(Theme::accent()));
        for item in vocabulary.visible_items() {
            let color = if item.style.as_ref().is_some_and(|s| s.emphasis) {
                Theme::accent()
            } else {
                Theme::t1()
            };
            ui.label(egui::RichText::new(&item.term).size(size).color(color).strong());
            ui.label(egui::RichText::new(&item.definition).size(size * 0.9).color(Theme::t2()));
        }
        ui.add_space(Theme::SPACE_SM);
    }

    let concepts = &slide.content.concepts;
    let size = Theme::FONT_SM * 1.2 * concepts.font_size as f32;
    if !concepts.items.is_empty() {
        ui.label(egui::RichText::new("CONCEPTS").size(Theme::FONT_XS).color(Theme::accent()));
        for item in concepts.visible_items() {
            let color = if item.style.as_ref().is_some_and(|s| s.emphasis) {
                Theme::accent()
            } else {
                Theme::t1()
            };
            ui.label(egui::RichText::new(&item.title).size(size).color(color).strong());
            ui.label(egui::RichText::new(&item.description).size(size * 0.9).color(Theme::t2()));
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // redo first: the plain undo shortcut also matches with shift held
        let (save, redo, undo) = ctx.input_mut(|i| {
            (
                i.consume_key(egui::Modifiers::COMMAND, egui::Key::S),
                i.consume_key(egui::Modifiers::COMMAND | egui::Modifiers::SHIFT, egui::Key::Z),
                i.consume_key(egui::Modifiers::COMMAND, egui::Key::Z),
            )
        });
        if save {
            self.save();
        }
        if redo {
            self.editor.redo();
        } else if undo {
            self.editor.undo();
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Save").clicked() {
                        self.save();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Edit", |ui| {
                    if ui.add_enabled(self.editor.can_undo(), egui::Button::new("Undo")).clicked() {
                        self.editor.undo();
                        ui.close_menu();
                    }
                    if ui.add_enabled(self.editor.can_redo(), egui::Button::new("Redo")).clicked() {
                        self.editor.redo();
                        ui.close_menu();
                    }
                });

                let count = self.editor.original().slide_count();
                let current = self.editor.slide_index();
                let mut selected = current;
                egui::ComboBox::from_id_salt("slide_picker")
                    .selected_text(format!("Slide {} / {}", current + 1, count))
                    .show_ui(ui, |ui| {
                        for (i, slide) in self.editor.original().slides.iter().enumerate() {
                            let label = format!("{}. {}", i + 1, slide.content.title);
                            ui.selectable_value(&mut selected, i, label);
                        }
                    });
                if selected != current {
                    self.select_slide(selected);
                }

                if self.editor.is_dirty() || self.carried_edits {
                    ui.label(egui::RichText::new("\u{25CF} modified").color(Theme::accent()));
                }
                if let Some(status) = &self.status {
                    ui.label(egui::RichText::new(status).size(Theme::FONT_XS).color(Theme::t3()));
                }
            });
        });

        egui::SidePanel::right("sidebar_settings")
            .resizable(true)
            .default_width(320.0)
            .frame(Theme::panel_frame())
            .show(ctx, |ui| {
                show_sidebar_panel(ui, &mut self.panel, &mut self.editor);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let index = self.editor.slide_index();
            if let Some(slide) = self.editor.modified_config().slides.get(index) {
                preview(ui, slide);
            }
        });
    }
}
