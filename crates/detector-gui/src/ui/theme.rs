//! Dark blue theme with green/orange/red risk accents.

use eframe::egui::{self, Color32, Visuals};

use detector_core::risk::RiskTier;

pub const COLOR_SUCCESS: Color32 = Color32::from_rgb(92, 184, 92);
pub const COLOR_WARNING: Color32 = Color32::from_rgb(240, 173, 78);
pub const COLOR_DANGER: Color32 = Color32::from_rgb(217, 83, 79);
/// Neutral style for rows with no result yet.
pub const COLOR_SECONDARY: Color32 = Color32::from_rgb(120, 130, 145);

const BACKGROUND: Color32 = Color32::from_rgb(43, 62, 80);
const SURFACE: Color32 = Color32::from_rgb(52, 73, 94);

pub fn tier_color(tier: RiskTier) -> Color32 {
    match tier {
        RiskTier::Low => COLOR_SUCCESS,
        RiskTier::Moderate => COLOR_WARNING,
        RiskTier::High => COLOR_DANGER,
    }
}

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();
    visuals.override_text_color = Some(Color32::from_rgb(235, 235, 235));
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = BACKGROUND;
    visuals.extreme_bg_color = SURFACE;
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    ctx.set_style(style);
}
