//! Central panel: text input, action buttons, and one result row per model.

use eframe::egui::{self, Color32, RichText};

use detector_core::predict::{BILSTM_NAME, CNN_NAME, ModelScore};
use detector_core::report::{placeholder_line, result_line};

use crate::app::{AppState, DetectorApp};
use crate::ui::theme;

const BUTTON_SIZE: [f32; 2] = [120.0, 28.0];

pub fn draw_main_view(ctx: &egui::Context, app: &mut DetectorApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(6.0);
        draw_input(ui, app);
        ui.add_space(10.0);
        draw_buttons(ui, app);
        ui.add_space(10.0);
        draw_results(ui, app);
    });
}

fn draw_input(ui: &mut egui::Ui, app: &mut DetectorApp) {
    ui.group(|ui| {
        ui.label(RichText::new("Enter Text to Analyze").strong());
        egui::ScrollArea::vertical()
            .max_height(200.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut app.input_text)
                        .desired_rows(10)
                        .desired_width(f32::INFINITY),
                );
            });
    });
}

fn draw_buttons(ui: &mut egui::Ui, app: &mut DetectorApp) {
    let busy = app.state == AppState::Predicting;

    ui.horizontal(|ui| {
        ui.add_enabled_ui(!busy, |ui| {
            if ui.add_sized(BUTTON_SIZE, egui::Button::new("Predict")).clicked() {
                app.start_prediction();
            }
        });

        if ui.add_sized(BUTTON_SIZE, egui::Button::new("Clear")).clicked() {
            app.clear();
        }

        if ui.add_sized(BUTTON_SIZE, egui::Button::new("Open Text...")).clicked() {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Text", &["txt"])
                .pick_file()
            {
                if let Err(e) = app.load_text(&path) {
                    app.report_error(&e);
                }
            }
        }

        ui.add_enabled_ui(app.result.is_some(), |ui| {
            if ui.add_sized(BUTTON_SIZE, egui::Button::new("Save Results...")).clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .set_file_name("results.json")
                    .save_file()
                {
                    if let Err(e) = app.save_results(&path) {
                        app.report_error(&e);
                    }
                }
            }
        });
    });
}

fn draw_results(ui: &mut egui::Ui, app: &DetectorApp) {
    ui.group(|ui| {
        ui.label(RichText::new("Results").strong());
        ui.add_space(4.0);

        let (cnn, bilstm) = match &app.result {
            Some(r) => (Some(&r.prediction.cnn), Some(&r.prediction.bilstm)),
            None => (None, None),
        };
        draw_model_row(ui, CNN_NAME, cnn);
        ui.add_space(8.0);
        draw_model_row(ui, BILSTM_NAME, bilstm);
    });
}

fn draw_model_row(ui: &mut egui::Ui, model: &str, score: Option<&ModelScore>) {
    let (text, color, fraction) = row_content(model, score);

    ui.label(RichText::new(text).size(16.0).strong().color(color));
    ui.add(
        egui::ProgressBar::new(fraction)
            .fill(color)
            .desired_width(ui.available_width()),
    );
}

fn row_content(model: &str, score: Option<&ModelScore>) -> (String, Color32, f32) {
    match score {
        Some(s) => (
            result_line(s),
            theme::tier_color(s.risk.tier),
            s.score.clamp(0.0, 1.0),
        ),
        None => (placeholder_line(model), theme::COLOR_SECONDARY, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_row_is_secondary() {
        let (text, color, fraction) = row_content(CNN_NAME, None);
        assert_eq!(text, "CNN Prediction: -");
        assert_eq!(color, theme::COLOR_SECONDARY);
        assert_eq!(fraction, 0.0);
    }

    #[test]
    fn scored_row_uses_tier_style() {
        let score = ModelScore::new(BILSTM_NAME, 0.5);
        let (text, color, fraction) = row_content(BILSTM_NAME, Some(&score));
        assert_eq!(text, "Bi-LSTM Prediction: 50.00% (Moderate Risk)");
        assert_eq!(color, theme::COLOR_WARNING);
        assert_eq!(fraction, 0.5);
    }
}
