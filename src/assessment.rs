//! assessment.rs: per-listing risk result with explainability.
//!
//! The shape is what the demo binary prints and what embedding code is
//! expected to serialize. Reasons carry a rough kind so UIs and tests can
//! group them.

use serde::{Deserialize, Serialize};

use crate::analyze::{GapScore, RiskComponents, RiskLevel};

/// One human-readable explanation line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reason {
    /// e.g. "Price gap 3.20× reference → severity 0.51".
    pub message: String,
    /// Optional contribution in <0.0, 1.0>.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ReasonKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonKind {
    PriceGap,
    FakeProbability,
    Legal,
    Planning,
    Threshold,
    MissingData,
}

/// Full assessment of one listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// Short anonymized id of the listing text (never the text itself).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_id: Option<String>,
    /// Price gap used (explicit or derived from unit/reference price).
    pub gap: Option<f64>,
    pub gap_score: GapScore,
    pub fake_prob: Option<f64>,
    /// Blend of fake probability and gap score.
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub components: RiskComponents,
    pub composite_score: f64,
    pub composite_level: RiskLevel,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<Reason>,
}

impl Reason {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            weight: None,
            kind: None,
        }
    }

    pub fn weighted(mut self, w: f64) -> Self {
        self.weight = Some(clamp01(w));
        self
    }

    pub fn kind(mut self, kind: ReasonKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

fn clamp01(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}
