//! Bottom status line.

use eframe::egui;

use crate::app::DetectorApp;

pub fn draw_status_bar(ctx: &egui::Context, app: &DetectorApp) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.add_space(2.0);
        ui.label(&app.status);
        ui.add_space(2.0);
    });
}
