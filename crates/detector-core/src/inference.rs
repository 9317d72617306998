//! ONNX model loading and inference via the `ort` crate.

use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use ort::session::Session;
use ort::value::TensorRef;

use crate::sequence::ModelInput;

/// A binary text classifier over a padded token batch.
pub trait TextModel: Send + Sync {
    fn name(&self) -> &str;

    /// Input shape `(1, max_len)`. Returns the positive-class probability.
    fn predict(&self, input: &ModelInput) -> Result<f32>;
}

pub struct OnnxModel {
    name: String,
    input_name: String,
    session: Mutex<Session>,
}

impl OnnxModel {
    /// Load an ONNX model from the given path.
    pub fn load(name: &str, model_path: &Path) -> Result<Self> {
        let session = Session::builder()?
            .with_intra_threads(1)?
            .commit_from_file(model_path)
            .with_context(|| format!("loading {name} model from {}", model_path.display()))?;

        let input_name = session
            .inputs
            .first()
            .map(|input| input.name.clone())
            .ok_or_else(|| anyhow!("{name} model declares no inputs"))?;

        log::info!(
            "loaded {name} model from {} (input '{input_name}')",
            model_path.display()
        );

        Ok(Self {
            name: name.to_string(),
            input_name,
            session: Mutex::new(session),
        })
    }
}

impl TextModel for OnnxModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, input: &ModelInput) -> Result<f32> {
        let input_tensor = TensorRef::from_array_view(input)?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| anyhow!("lock error: {e}"))?;
        let outputs = session.run(ort::inputs![self.input_name.as_str() => input_tensor])?;

        // Sigmoid head: output shape (1, 1).
        let output_array = outputs[0].try_extract_array::<f32>()?;
        let score = output_array
            .iter()
            .next()
            .copied()
            .ok_or_else(|| anyhow!("{} model returned an empty output", self.name))?;

        Ok(score)
    }
}
