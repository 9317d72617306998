//! Risk Detector CLI - scores text with the CNN and Bi-LSTM ONNX models.
//!
//! Usage:
//!   risk-detector "some text to check" --assets ./models
//!   risk-detector --file journal/ --file note.txt --format json
//!   cat message.txt | risk-detector --assets ./models

use std::io::Read;
use std::path::PathBuf;
use std::sync::atomic::Ordering;

use anyhow::{Context, Result};
use clap::Parser;

use detector_core::batch::{BatchProgress, Sample, collect_text_files, read_samples, score_samples};
use detector_core::config::AssetPaths;
use detector_core::predict::Detector;
use detector_core::report::{OutputFormat, print_results};

#[derive(Parser)]
#[command(name = "risk-detector")]
#[command(about = "Score text with pretrained CNN and Bi-LSTM classifiers")]
struct Cli {
    /// Text to score; each argument is scored separately
    texts: Vec<String>,

    /// Text file or directory of .txt files to score (repeatable)
    #[arg(short, long = "file")]
    files: Vec<PathBuf>,

    /// Directory holding cnn_model.onnx, bilstm_model.onnx, tokenizer.json and config.json
    #[arg(short, long, default_value = ".")]
    assets: PathBuf,

    /// Override the CNN model path
    #[arg(long)]
    cnn_model: Option<PathBuf>,

    /// Override the Bi-LSTM model path
    #[arg(long)]
    bilstm_model: Option<PathBuf>,

    /// Override the tokenizer path
    #[arg(long)]
    tokenizer: Option<PathBuf>,

    /// Override the config.json path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

impl Cli {
    fn asset_paths(&self) -> AssetPaths {
        let mut paths = AssetPaths::in_dir(&self.assets);
        if let Some(p) = &self.cnn_model {
            paths.cnn_model = p.clone();
        }
        if let Some(p) = &self.bilstm_model {
            paths.bilstm_model = p.clone();
        }
        if let Some(p) = &self.tokenizer {
            paths.tokenizer = p.clone();
        }
        if let Some(p) = &self.config {
            paths.config = p.clone();
        }
        paths
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let paths = cli.asset_paths();

    eprintln!("[*] Loading models from {}...", cli.assets.display());
    let detector = Detector::load(&paths)?;

    let mut samples: Vec<Sample> = cli
        .texts
        .iter()
        .enumerate()
        .map(|(i, text)| Sample::new(format!("arg #{}", i + 1), text.clone()))
        .collect();

    let files = collect_text_files(&cli.files);
    samples.extend(read_samples(&files));

    if cli.texts.is_empty() && cli.files.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        samples.push(Sample::new("stdin".into(), text));
    }

    if samples.is_empty() {
        eprintln!("[*] No text to score.");
        return Ok(());
    }

    eprintln!("[*] Scoring {} input(s)...", samples.len());
    let progress = BatchProgress::default();
    let records = score_samples(&detector, &samples, &progress);

    eprintln!(
        "[*] Scored {} input(s), {} error(s)",
        progress.scored.load(Ordering::Relaxed),
        progress.errors.load(Ordering::Relaxed)
    );

    print_results(&records, cli.format);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_overrides_replace_single_paths() {
        let cli = Cli::parse_from([
            "risk-detector",
            "--assets",
            "/models",
            "--tokenizer",
            "/elsewhere/tok.json",
            "hello",
        ]);
        let paths = cli.asset_paths();
        assert_eq!(paths.tokenizer, PathBuf::from("/elsewhere/tok.json"));
        assert_eq!(paths.cnn_model, PathBuf::from("/models/cnn_model.onnx"));
        assert_eq!(cli.texts, ["hello"]);
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn format_and_files_parse() {
        let cli = Cli::parse_from(["risk-detector", "-f", "a.txt", "--file", "dir", "--format", "json"]);
        assert_eq!(cli.files, [PathBuf::from("a.txt"), PathBuf::from("dir")]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.texts.is_empty());
    }
}
