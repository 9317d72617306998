//! Probability → risk tier bucketing, shared by both models.

use std::fmt;

use serde::Serialize;

/// Scores below this are Low.
pub const MODERATE_THRESHOLD: f32 = 0.4;
/// Scores at or above this are High.
pub const HIGH_THRESHOLD: f32 = 0.7;

/// Severity tier, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub const ALL: [RiskTier; 3] = [RiskTier::Low, RiskTier::Moderate, RiskTier::High];

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low Risk",
            RiskTier::Moderate => "Moderate Risk",
            RiskTier::High => "High Risk",
        }
    }

    /// Presentation style tag (green / orange / red).
    pub fn style(self) -> &'static str {
        match self {
            RiskTier::Low => "success",
            RiskTier::Moderate => "warning",
            RiskTier::High => "danger",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub label: &'static str,
    pub tier: RiskTier,
}

/// Bucket a model score. Defined for every `f32`: out-of-range values land in
/// whichever bucket their comparison selects, and NaN falls through to High.
pub fn classify(score: f32) -> RiskAssessment {
    let tier = if score < MODERATE_THRESHOLD {
        RiskTier::Low
    } else if score < HIGH_THRESHOLD {
        RiskTier::Moderate
    } else {
        RiskTier::High
    };
    RiskAssessment {
        label: tier.label(),
        tier,
    }
}
