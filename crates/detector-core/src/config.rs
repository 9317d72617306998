//! Asset locations and the exported `config.json`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// Environment variable the GUI reads the asset directory from.
pub const ASSETS_ENV: &str = "RISK_DETECTOR_ASSETS";

pub const CNN_MODEL_FILE: &str = "cnn_model.onnx";
pub const BILSTM_MODEL_FILE: &str = "bilstm_model.onnx";
pub const TOKENIZER_FILE: &str = "tokenizer.json";
pub const CONFIG_FILE: &str = "config.json";

/// Preprocessing settings saved alongside the models.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub max_len: usize,
}

pub fn load_model_config(path: &Path) -> Result<ModelConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading model config {}", path.display()))?;
    let config: ModelConfig = serde_json::from_str(&data)
        .with_context(|| format!("parsing model config {}", path.display()))?;
    if config.max_len == 0 {
        bail!("{}: max_len must be positive", path.display());
    }
    Ok(config)
}

/// The four artifacts loaded at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub cnn_model: PathBuf,
    pub bilstm_model: PathBuf,
    pub tokenizer: PathBuf,
    pub config: PathBuf,
}

impl AssetPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            cnn_model: dir.join(CNN_MODEL_FILE),
            bilstm_model: dir.join(BILSTM_MODEL_FILE),
            tokenizer: dir.join(TOKENIZER_FILE),
            config: dir.join(CONFIG_FILE),
        }
    }

    /// `$RISK_DETECTOR_ASSETS` if set, else the working directory.
    pub fn from_env() -> Self {
        match std::env::var_os(ASSETS_ENV) {
            Some(dir) if !dir.is_empty() => Self::in_dir(PathBuf::from(dir)),
            _ => Self::in_dir("."),
        }
    }

    /// Paths that do not exist on disk.
    pub fn missing(&self) -> Vec<&Path> {
        [&self.cnn_model, &self.bilstm_model, &self.tokenizer, &self.config]
            .into_iter()
            .map(PathBuf::as_path)
            .filter(|p| !p.exists())
            .collect()
    }
}
