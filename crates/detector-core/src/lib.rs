//! detector-core: shared library for the CNN / Bi-LSTM text risk detector.
//!
//! Provides text normalization, tokenization, ONNX inference, risk
//! bucketing and result reporting used by both the CLI and GUI frontends.

pub mod batch;
pub mod config;
pub mod inference;
pub mod predict;
pub mod report;
pub mod risk;
pub mod sequence;
pub mod text;
pub mod tokenizer;
