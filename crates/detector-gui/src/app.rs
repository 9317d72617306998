//! Application state and prediction management.

use std::fs;
use std::path::Path;
use std::sync::mpsc;
use std::sync::Arc;

use anyhow::{Context, Result, bail};

use detector_core::predict::{Detector, Prediction};
use detector_core::text::prepare_input;

pub const STATUS_READY: &str = "Status: Ready";
pub const STATUS_PREDICTING: &str = "Status: Predicting...";
pub const STATUS_EMPTY: &str = "Status: Please enter some text.";

/// A prediction and the exact text it was computed from.
#[derive(Debug, Clone)]
pub struct ScoredText {
    pub text: String,
    pub prediction: Prediction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Ready,
    Predicting,
}

pub struct DetectorApp {
    detector: Arc<Detector>,

    pub input_text: String,
    pub state: AppState,
    pub result: Option<ScoredText>,
    pub status: String,

    result_rx: Option<mpsc::Receiver<Result<ScoredText, String>>>,
}

impl DetectorApp {
    pub fn new(detector: Arc<Detector>) -> Self {
        Self {
            detector,
            input_text: String::new(),
            state: AppState::Ready,
            result: None,
            status: STATUS_READY.to_string(),
            result_rx: None,
        }
    }

    pub fn start_prediction(&mut self) {
        if self.state == AppState::Predicting {
            return;
        }
        let Some(text) = prepare_input(&self.input_text) else {
            self.status = STATUS_EMPTY.to_string();
            return;
        };
        let text = text.to_string();

        self.state = AppState::Predicting;
        self.status = STATUS_PREDICTING.to_string();

        let detector = Arc::clone(&self.detector);
        let (tx, rx) = mpsc::channel();
        self.result_rx = Some(rx);

        std::thread::spawn(move || {
            let outcome = detector
                .predict_message(&text)
                .map(|prediction| ScoredText { text, prediction })
                .map_err(|e| format!("{e:#}"));
            let _ = tx.send(outcome);
        });
    }

    /// Poll for a finished prediction. Called each frame.
    pub fn poll(&mut self) {
        let Some(rx) = &self.result_rx else {
            return;
        };
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(mpsc::TryRecvError::Empty) => return,
            Err(mpsc::TryRecvError::Disconnected) => Err("prediction worker exited".to_string()),
        };

        match outcome {
            Ok(scored) => {
                self.result = Some(scored);
                self.status = STATUS_READY.to_string();
            }
            Err(msg) => {
                log::error!("prediction failed: {msg}");
                self.result = None;
                self.status = format!("Status: Error: {msg}");
            }
        }
        self.state = AppState::Ready;
        self.result_rx = None;
    }

    /// Drop the shown result and any prediction still in flight.
    fn reset_result(&mut self) {
        self.result_rx = None;
        self.state = AppState::Ready;
        self.result = None;
        self.status = STATUS_READY.to_string();
    }

    pub fn clear(&mut self) {
        self.reset_result();
        self.input_text.clear();
    }

    pub fn load_text(&mut self, path: &Path) -> Result<()> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        log::info!("loaded {} bytes from {}", text.len(), path.display());
        self.reset_result();
        self.input_text = text;
        Ok(())
    }

    pub fn save_results(&self, path: &Path) -> Result<()> {
        let Some(scored) = &self.result else {
            bail!("nothing to save yet");
        };
        let output = serde_json::json!({
            "text": scored.text,
            "prediction": scored.prediction,
        });
        let data = serde_json::to_string_pretty(&output)?;
        fs::write(path, data).with_context(|| format!("writing {}", path.display()))?;
        log::info!("saved results to {}", path.display());
        Ok(())
    }

    pub fn report_error(&mut self, err: &anyhow::Error) {
        log::error!("{err:#}");
        self.status = format!("Status: Error: {err:#}");
    }
}

impl eframe::App for DetectorApp {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        self.poll();

        if self.state == AppState::Predicting {
            ctx.request_repaint();
        }

        crate::ui::status_bar::draw_status_bar(ctx, self);
        crate::ui::main_view::draw_main_view(ctx, self);
    }
}
