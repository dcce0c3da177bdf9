//! Shared widgets.

use crate::theme::Theme;
use egui::{self, Color32, Pos2, Rounding, Stroke, Vec2};

/// Painted slider over `range`. Returns the new value while the track is
/// being dragged or clicked.
pub fn themed_slider(
    ui: &mut egui::Ui,
    label: &str,
    value: f64,
    range: std::ops::RangeInclusive<f64>,
    decimals: usize,
) -> Option<f64> {
    let accent = Theme::accent();
    let mut changed = None;
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing = Vec2::new(6.0, 0.0);

        ui.allocate_ui(Vec2::new(72.0, 26.0), |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(label).size(Theme::FONT_XS).color(Theme::t3()));
            });
        });

        let track_width = (ui.available_width() - 48.0).max(40.0);
        let (track_resp, painter) =
            ui.allocate_painter(Vec2::new(track_width, 26.0), egui::Sense::click_and_drag());
        let bar_rect = egui::Rect::from_center_size(
            track_resp.rect.center(),
            Vec2::new(track_width, 4.0),
        );
        painter.rect_filled(bar_rect, Rounding::same(2.0), Theme::with_alpha(Color32::WHITE, 15));

        let (min, max) = (*range.start(), *range.end());
        let frac = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0) as f32
        } else {
            0.0
        };
        let fill = egui::Rect::from_min_size(bar_rect.min, Vec2::new(bar_rect.width() * frac, 4.0));
        painter.rect_filled(fill, Rounding::same(2.0), accent);

        let thumb = Pos2::new(fill.right(), bar_rect.center().y);
        painter.circle_filled(thumb, 5.0, Color32::WHITE);
        painter.circle_stroke(thumb, 7.0, Stroke::new(1.0, Theme::with_alpha(accent, 40)));

        if track_resp.dragged() || track_resp.clicked() {
            if let Some(pos) = track_resp.interact_pointer_pos() {
                let rel = ((pos.x - bar_rect.left()) / bar_rect.width()).clamp(0.0, 1.0) as f64;
                let next = min + rel * (max - min);
                if next != value {
                    changed = Some(next);
                }
            }
        }

        ui.label(
            egui::RichText::new(format!("{:.*}", decimals, value))
                .size(Theme::FONT_XS)
                .color(Theme::t2())
                .family(egui::FontFamily::Monospace),
        );
    });
    changed
}

/// Single-line text field. Returns the edited text when it changed.
pub fn text_field(ui: &mut egui::Ui, hint: &str, text: &str) -> Option<String> {
    let mut buffer = text.to_string();
    let response = ui.add(
        egui::TextEdit::singleline(&mut buffer)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    );
    (response.changed() && buffer != text).then_some(buffer)
}

pub fn small_button(ui: &mut egui::Ui, text: &str, enabled: bool) -> bool {
    ui.add_enabled(
        enabled,
        egui::Button::new(egui::RichText::new(text).size(Theme::FONT_XS)),
    )
    .clicked()
}
