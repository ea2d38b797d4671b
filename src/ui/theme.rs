//! Colours and widget styling for the reservation window.

use egui::{Color32, Stroke, Style, Visuals};

/// Named colour roles used by the reservation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Panel and notification background.
    pub backdrop: Color32,
    /// Text fields and combo boxes at rest.
    pub field: Color32,
    pub field_hovered: Color32,
    /// Alternate row fill of the reservations table.
    pub stripe: Color32,
    /// Window heading and pressed widgets.
    pub marquee: Color32,
    pub text: Color32,
    pub muted: Color32,
    /// Notification text after a reservation is added.
    pub confirmed: Color32,
    /// Notification text after a rejected add.
    pub rejected: Color32,
}

/// Dark burgundy and gold, after a theatre lobby.
pub const LOBBY: Palette = Palette {
    backdrop: Color32::from_rgb(28, 18, 24),
    field: Color32::from_rgb(52, 30, 40),
    field_hovered: Color32::from_rgb(78, 40, 54),
    stripe: Color32::from_rgb(38, 24, 32),
    marquee: Color32::from_rgb(232, 184, 76),
    text: Color32::from_rgb(236, 226, 214),
    muted: Color32::from_rgb(150, 132, 128),
    confirmed: Color32::from_rgb(140, 206, 150),
    rejected: Color32::from_rgb(240, 120, 104),
};

impl Palette {
    /// Derive the form style from `base`, overriding only what the window uses.
    pub fn style(&self, base: &Style) -> Style {
        let mut style = base.clone();
        style.visuals = Visuals::dark();

        let visuals = &mut style.visuals;
        visuals.panel_fill = self.backdrop;
        visuals.window_fill = self.backdrop;
        visuals.faint_bg_color = self.stripe;
        visuals.window_stroke = Stroke::new(1.0, self.marquee);

        visuals.widgets.inactive.bg_fill = self.field;
        visuals.widgets.inactive.weak_bg_fill = self.field;
        visuals.widgets.hovered.bg_fill = self.field_hovered;
        visuals.widgets.hovered.weak_bg_fill = self.field_hovered;
        visuals.widgets.active.bg_fill = self.marquee;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text);

        visuals.selection.bg_fill = self.marquee.gamma_multiply(0.35);
        visuals.selection.stroke = Stroke::new(1.0, self.marquee);

        style.spacing.button_padding = egui::vec2(10.0, 5.0);
        style
    }

    pub fn install(&self, ctx: &egui::Context) {
        let style = self.style(&ctx.style());
        ctx.set_style(style);
    }
}
