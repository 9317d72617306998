//! Risk Detector GUI: eframe/egui desktop application.
//!
//! Assets are read from `$RISK_DETECTOR_ASSETS`, or the working directory.

mod app;
mod ui;

use std::sync::Arc;

use app::DetectorApp;
use detector_core::config::AssetPaths;
use detector_core::predict::Detector;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let paths = AssetPaths::from_env();
    log::info!("loading trained models and preprocessing info");
    let detector = match Detector::load(&paths) {
        Ok(detector) => Arc::new(detector),
        Err(e) => {
            log::error!("error loading files: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Risk Detector")
            .with_inner_size([600.0, 520.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Risk Detector",
        options,
        Box::new(|cc| {
            ui::theme::apply_theme(&cc.egui_ctx);
            Ok(Box::new(DetectorApp::new(detector)))
        }),
    )
}
