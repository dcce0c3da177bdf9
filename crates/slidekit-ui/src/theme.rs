//! Dark glass palette for the editor window.

use egui::{Color32, Rounding, Stroke, Vec2};

pub struct Theme;

impl Theme {
    pub const FONT_XS: f32 = 11.0;
    pub const FONT_SM: f32 = 13.0;
    pub const FONT_MD: f32 = 15.0;

    pub const SPACE_XS: f32 = 4.0;
    pub const SPACE_SM: f32 = 8.0;
    pub const SPACE_MD: f32 = 16.0;

    pub const RADIUS: f32 = 6.0;
    pub const RADIUS_LG: f32 = 12.0;

    // ── Backgrounds ────────────────────────────────────────────
    pub const fn bg() -> Color32 {
        Color32::from_rgb(15, 23, 42)
    }
    pub const fn bg1() -> Color32 {
        Color32::from_rgb(22, 31, 52)
    }
    pub const fn bg2() -> Color32 {
        Color32::from_rgb(30, 41, 59)
    }
    pub const fn input_bg() -> Color32 {
        Color32::from_rgb(17, 24, 39)
    }

    // ── Text ───────────────────────────────────────────────────
    pub const fn t1() -> Color32 {
        Color32::from_rgb(248, 250, 252)
    }
    pub const fn t2() -> Color32 {
        Color32::from_rgb(148, 163, 184)
    }
    pub const fn t3() -> Color32 {
        Color32::from_rgb(100, 116, 139)
    }

    /// Same sky blue as the exported stylesheet.
    pub const fn accent() -> Color32 {
        Color32::from_rgb(56, 189, 248)
    }
    pub const fn red() -> Color32 {
        Color32::from_rgb(248, 113, 113)
    }

    pub const fn with_alpha(c: Color32, a: u8) -> Color32 {
        Color32::from_rgba_premultiplied(
            (c.r() as u16 * a as u16 / 255) as u8,
            (c.g() as u16 * a as u16 / 255) as u8,
            (c.b() as u16 * a as u16 / 255) as u8,
            a,
        )
    }

    /// Translucent card used for each sidebar item.
    pub fn card_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(Self::with_alpha(Color32::WHITE, 10))
            .stroke(Stroke::new(0.5, Self::with_alpha(Color32::WHITE, 30)))
            .rounding(Rounding::same(Self::RADIUS_LG))
            .inner_margin(egui::Margin::same(Self::SPACE_SM))
    }

    pub fn panel_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(Self::bg1())
            .inner_margin(egui::Margin::same(Self::SPACE_MD))
    }

    pub fn apply(ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        let visuals = &mut style.visuals;
        *visuals = egui::Visuals::dark();

        visuals.panel_fill = Self::bg1();
        visuals.window_fill = Self::bg2();
        visuals.extreme_bg_color = Self::input_bg();
        visuals.faint_bg_color = Self::bg2();

        visuals.widgets.inactive.bg_fill = Self::bg2();
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, Self::t2());
        visuals.widgets.inactive.rounding = Rounding::same(Self::RADIUS);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Self::t1());
        visuals.widgets.hovered.rounding = Rounding::same(Self::RADIUS);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, Self::accent());
        visuals.widgets.active.rounding = Rounding::same(Self::RADIUS);

        visuals.selection.bg_fill = Self::with_alpha(Self::accent(), 60);
        visuals.selection.stroke = Stroke::new(1.0, Self::accent());
        visuals.window_rounding = Rounding::same(Self::RADIUS_LG);

        style.spacing.item_spacing = Vec2::new(Self::SPACE_SM, Self::SPACE_XS + 2.0);
        ctx.set_style(style);
    }
}
