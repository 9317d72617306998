//! Prediction orchestration: normalize, tokenize, pad, run both models, bucket.

use anyhow::{Context, Result, bail};
use serde::Serialize;

use crate::config::{AssetPaths, load_model_config};
use crate::inference::{OnnxModel, TextModel};
use crate::risk::{RiskAssessment, classify};
use crate::sequence::to_model_input;
use crate::text::normalize;
use crate::tokenizer::Tokenizer;

pub const CNN_NAME: &str = "CNN";
pub const BILSTM_NAME: &str = "Bi-LSTM";

/// One model's verdict on one message.
#[derive(Debug, Clone, Serialize)]
pub struct ModelScore {
    pub model: String,
    pub score: f32,
    pub risk: RiskAssessment,
}

impl ModelScore {
    pub fn new(model: &str, score: f32) -> Self {
        Self {
            model: model.to_string(),
            score,
            risk: classify(score),
        }
    }

    pub fn percent(&self) -> f32 {
        self.score * 100.0
    }
}

/// Both verdicts. They are never combined.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub cnn: ModelScore,
    pub bilstm: ModelScore,
}

/// Everything a prediction needs, loaded once and read-only afterwards.
pub struct Detector {
    tokenizer: Tokenizer,
    max_len: usize,
    cnn: Box<dyn TextModel>,
    bilstm: Box<dyn TextModel>,
}

impl Detector {
    pub fn new(
        tokenizer: Tokenizer,
        max_len: usize,
        cnn: Box<dyn TextModel>,
        bilstm: Box<dyn TextModel>,
    ) -> Self {
        Self {
            tokenizer,
            max_len,
            cnn,
            bilstm,
        }
    }

    pub fn load(paths: &AssetPaths) -> Result<Self> {
        let missing = paths.missing();
        if !missing.is_empty() {
            let list: Vec<String> = missing.iter().map(|p| p.display().to_string()).collect();
            bail!(
                "missing assets: {}. Place {}, {}, {} and {} in the same folder",
                list.join(", "),
                crate::config::CNN_MODEL_FILE,
                crate::config::BILSTM_MODEL_FILE,
                crate::config::TOKENIZER_FILE,
                crate::config::CONFIG_FILE,
            );
        }

        let config = load_model_config(&paths.config)?;
        let tokenizer = Tokenizer::load(&paths.tokenizer)?;
        let cnn = OnnxModel::load(CNN_NAME, &paths.cnn_model)?;
        let bilstm = OnnxModel::load(BILSTM_NAME, &paths.bilstm_model)?;

        log::info!(
            "detector ready: max_len={}, vocabulary={} words",
            config.max_len,
            tokenizer.vocab_size()
        );

        Ok(Self::new(tokenizer, config.max_len, Box::new(cnn), Box::new(bilstm)))
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Score one message. `text` should already be trimmed.
    pub fn predict_message(&self, text: &str) -> Result<Prediction> {
        let cleaned = normalize(text);
        let sequence = self.tokenizer.texts_to_sequence(&cleaned);
        log::debug!("{} tokens (max_len {})", sequence.len(), self.max_len);
        let input = to_model_input(&sequence, self.max_len);

        let (cnn, bilstm) = rayon::join(
            || self.cnn.predict(&input),
            || self.bilstm.predict(&input),
        );
        let cnn = cnn.with_context(|| format!("{} inference failed", self.cnn.name()))?;
        let bilstm = bilstm.with_context(|| format!("{} inference failed", self.bilstm.name()))?;

        Ok(Prediction {
            cnn: ModelScore::new(self.cnn.name(), cnn),
            bilstm: ModelScore::new(self.bilstm.name(), bilstm),
        })
    }
}
