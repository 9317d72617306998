//! Output formatting for predictions.

use serde::Serialize;

use crate::predict::{ModelScore, Prediction};
use crate::risk::RiskTier;

/// `"CNN Prediction: 87.50% (High Risk)"`.
pub fn result_line(score: &ModelScore) -> String {
    format!(
        "{} Prediction: {:.2}% ({})",
        score.model,
        score.percent(),
        score.risk.label
    )
}

/// Shown before anything has been scored.
pub fn placeholder_line(model: &str) -> String {
    format!("{model} Prediction: -")
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionRecord {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<Prediction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionRecord {
    pub fn scored(source: String, prediction: Prediction) -> Self {
        Self {
            source,
            prediction: Some(prediction),
            error: None,
        }
    }

    pub fn failed(source: String, error: String) -> Self {
        Self {
            source,
            prediction: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {s}. Use 'text' or 'json'.")),
        }
    }
}

/// Per-tier counts for one model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub low: usize,
    pub moderate: usize,
    pub high: usize,
}

impl TierCounts {
    fn add(&mut self, tier: RiskTier) {
        match tier {
            RiskTier::Low => self.low += 1,
            RiskTier::Moderate => self.moderate += 1,
            RiskTier::High => self.high += 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub errors: usize,
    pub cnn: TierCounts,
    pub bilstm: TierCounts,
}

pub fn summarize(records: &[PredictionRecord]) -> Summary {
    let mut summary = Summary {
        total: records.len(),
        ..Default::default()
    };
    for r in records {
        match &r.prediction {
            Some(p) => {
                summary.cnn.add(p.cnn.risk.tier);
                summary.bilstm.add(p.bilstm.risk.tier);
            }
            None => summary.errors += 1,
        }
    }
    summary
}

pub fn render(records: &[PredictionRecord], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(records),
        OutputFormat::Json => render_json(records),
    }
}

pub fn print_results(records: &[PredictionRecord], format: OutputFormat) {
    println!("{}", render(records, format));
}

fn render_text(records: &[PredictionRecord]) -> String {
    let rule = "=".repeat(70);
    let mut out = Vec::new();

    out.push(rule.clone());
    out.push("PREDICTIONS".to_string());
    out.push(rule.clone());

    for r in records {
        out.push(String::new());
        out.push(r.source.clone());
        match (&r.prediction, &r.error) {
            (Some(p), _) => {
                out.push(format!("  {}", result_line(&p.cnn)));
                out.push(format!("  {}", result_line(&p.bilstm)));
            }
            (None, err) => {
                out.push(format!("  [ERR ] {}", err.as_deref().unwrap_or("unknown")));
            }
        }
    }

    let summary = summarize(records);
    out.push(String::new());
    out.push("SUMMARY:".to_string());
    out.push(format!("  Inputs:   {}", summary.total));
    out.push(format!("  Errors:   {}", summary.errors));
    for (name, counts) in [("CNN", summary.cnn), ("Bi-LSTM", summary.bilstm)] {
        out.push(format!(
            "  {:<8}  low {}, moderate {}, high {}",
            format!("{name}:"),
            counts.low,
            counts.moderate,
            counts.high
        ));
    }
    out.push(rule);

    out.join("\n")
}

fn render_json(records: &[PredictionRecord]) -> String {
    let output = serde_json::json!({
        "results": records,
        "summary": summarize(records),
    });
    serde_json::to_string_pretty(&output).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prediction(cnn: f32, bilstm: f32) -> Prediction {
        Prediction {
            cnn: ModelScore::new("CNN", cnn),
            bilstm: ModelScore::new("Bi-LSTM", bilstm),
        }
    }

    #[test]
    fn formats_result_lines() {
        assert_eq!(
            result_line(&ModelScore::new("CNN", 0.875)),
            "CNN Prediction: 87.50% (High Risk)"
        );
        assert_eq!(
            result_line(&ModelScore::new("Bi-LSTM", 0.0)),
            "Bi-LSTM Prediction: 0.00% (Low Risk)"
        );
        assert_eq!(placeholder_line("CNN"), "CNN Prediction: -");
    }

    #[test]
    fn parses_output_format() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn summary_counts_tiers_per_model() {
        let records = vec![
            PredictionRecord::scored("a".into(), prediction(0.1, 0.9)),
            PredictionRecord::scored("b".into(), prediction(0.5, 0.95)),
            PredictionRecord::failed("c".into(), "empty input".into()),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.cnn, TierCounts { low: 1, moderate: 1, high: 0 });
        assert_eq!(summary.bilstm, TierCounts { low: 0, moderate: 0, high: 2 });
    }

    #[test]
    fn text_report_lists_each_input() {
        let records = vec![
            PredictionRecord::scored("note.txt".into(), prediction(0.25, 0.6)),
            PredictionRecord::failed("blank.txt".into(), "empty input".into()),
        ];
        let text = render(&records, OutputFormat::Text);
        assert!(text.contains("note.txt\n  CNN Prediction: 25.00% (Low Risk)"));
        assert!(text.contains("  Bi-LSTM Prediction: 60.00% (Moderate Risk)"));
        assert!(text.contains("blank.txt\n  [ERR ] empty input"));
    }

    #[test]
    fn json_report_has_results_and_summary() {
        let records = vec![PredictionRecord::scored("stdin".into(), prediction(0.75, 0.3))];
        let value: serde_json::Value =
            serde_json::from_str(&render(&records, OutputFormat::Json)).unwrap();

        let cnn = &value["results"][0]["prediction"]["cnn"];
        assert_eq!(cnn["risk"]["label"], "High Risk");
        assert_eq!(cnn["risk"]["tier"], "high");
        assert_eq!(value["summary"]["bilstm"]["low"], 1);
        assert!(value["results"][0].get("error").is_none());
    }
}
