//! Batch scoring of many inputs for the CLI.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::predict::Detector;
use crate::report::PredictionRecord;
use crate::text::prepare_input;

/// One piece of text and where it came from. `Err` holds why it could not be read.
#[derive(Debug, Clone)]
pub struct Sample {
    pub source: String,
    pub text: Result<String, String>,
}

impl Sample {
    pub fn new(source: String, text: String) -> Self {
        Self {
            source,
            text: Ok(text),
        }
    }

    pub fn unreadable(source: String, error: String) -> Self {
        Self {
            source,
            text: Err(error),
        }
    }
}

/// Atomic counters, readable while a batch is running.
#[derive(Debug, Default)]
pub struct BatchProgress {
    pub scored: AtomicUsize,
    pub errors: AtomicUsize,
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

/// Expand the given paths: directories contribute their `.txt` files, anything
/// else is kept as-is so a bad path surfaces as a read error in its slot.
pub fn collect_text_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
                .flatten()
            {
                let p = entry.into_path();
                if p.is_file() && is_text_file(&p) {
                    files.push(p);
                }
            }
        } else {
            if !path.is_file() {
                log::warn!("{}: not a file or directory", path.display());
            }
            files.push(path.clone());
        }
    }

    files
}

/// Read files into samples, one per file, in order.
pub fn read_samples(files: &[PathBuf]) -> Vec<Sample> {
    files
        .iter()
        .map(|path| {
            let source = path.display().to_string();
            match fs::read_to_string(path) {
                Ok(text) => Sample::new(source, text),
                Err(e) => Sample::unreadable(source, format!("read error: {e}")),
            }
        })
        .collect()
}

/// Score every sample in parallel. Output order follows input order.
pub fn score_samples(
    detector: &Detector,
    samples: &[Sample],
    progress: &BatchProgress,
) -> Vec<PredictionRecord> {
    samples
        .par_iter()
        .map(|sample| {
            let source = sample.source.clone();
            let record = match sample.text.as_deref().map(prepare_input) {
                Err(e) => PredictionRecord::failed(source, e.to_string()),
                Ok(None) => PredictionRecord::failed(source, "empty input".into()),
                Ok(Some(text)) => match detector.predict_message(text) {
                    Ok(prediction) => PredictionRecord::scored(source, prediction),
                    Err(e) => PredictionRecord::failed(source, format!("{e:#}")),
                },
            };
            if record.error.is_some() {
                progress.errors.fetch_add(1, Ordering::Relaxed);
            }
            progress.scored.fetch_add(1, Ordering::Relaxed);
            record
        })
        .collect()
}
