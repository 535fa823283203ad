//! # Risk Engine
//! Pure, testable per-listing pipeline: `ListingInput` → `RiskAssessment`.
//! No I/O beyond tracing; the config is fixed at construction.
//!
//! Order:
//! 1) price gap (explicit, or unit price / reference price)
//! 2) log-normalized gap score against `gap_cap`
//! 3) fake probability scaled to [0,1]
//! 4) blend → risk score → level
//! 5) listing-text signals → four-component composite → level

use serde::Deserialize;
use tracing::debug;

use crate::analyze::{
    analyze_text, blend, classify, composite_score, fake_prob_from_raw, listing_gap,
    normalize_gap, GapScore, RiskComponents, RiskLevel, TextSignals, HIGH_THRESHOLD,
    MEDIUM_THRESHOLD,
};
use crate::assessment::{Reason, ReasonKind, RiskAssessment};
use crate::config::{load_config_default, RiskConfig};

/// Raw per-listing inputs, as they come out of a listings table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListingInput {
    /// Free-text description of the listing.
    #[serde(default)]
    pub text: Option<String>,
    /// Precomputed price gap. Takes precedence over the price pair below.
    #[serde(default)]
    pub gap: Option<f64>,
    /// Listing unit price (million VND/m²).
    #[serde(default)]
    pub unit_price: Option<f64>,
    /// Official reference unit price (million VND/m²).
    #[serde(default)]
    pub gov_price: Option<f64>,
    /// Fake-listing confidence, fraction or percent.
    #[serde(default)]
    pub fake_prob: Option<f64>,
}

impl ListingInput {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = Some(gap);
        self
    }

    pub fn with_prices(mut self, unit_price: f64, gov_price: f64) -> Self {
        self.unit_price = Some(unit_price);
        self.gov_price = Some(gov_price);
        self
    }

    pub fn with_fake_prob(mut self, fake_prob: f64) -> Self {
        self.fake_prob = Some(fake_prob);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: RiskConfig,
}

impl RiskEngine {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    /// Engine with `load_config_default()` (env path → config/ → defaults).
    pub fn from_default_config() -> anyhow::Result<Self> {
        Ok(Self::new(load_config_default()?))
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    /// Assess one listing.
    pub fn assess(&self, input: &ListingInput) -> RiskAssessment {
        let cfg = &self.config;

        // (1)-(2) gap
        let gap = input
            .gap
            .filter(|g| !g.is_nan())
            .or_else(|| listing_gap(input.unit_price, input.gov_price));
        let gap_score = normalize_gap(gap, cfg.gap_cap);

        // (3) fake probability
        let fake_prob = fake_prob_from_raw(input.fake_prob);

        // (4) blend + level
        let risk_score = blend(fake_prob, Some(gap_score), cfg.blend_weight);
        let risk_level = classify(Some(risk_score));

        // (5) text + composite
        let text = input.text.as_deref().map(analyze_text);
        let components = RiskComponents {
            legal: text.as_ref().map(|t| t.legal),
            fake: fake_prob,
            // non-positive ratio stays neutral here
            price: gap.filter(|g| *g > 0.0).and(gap_score.as_option()),
            planning: text.as_ref().map(|t| t.planning),
        };
        let composite = composite_score(&components, &cfg.components);
        let composite_level = classify(Some(composite));

        let text_id = input.text.as_deref().map(anon_hash);
        debug!(
            text_id = text_id.as_deref().unwrap_or("-"),
            risk_score,
            %risk_level,
            composite,
            %composite_level,
            "listing assessed"
        );

        let reasons = build_reasons(
            gap,
            gap_score,
            fake_prob,
            text.as_ref(),
            risk_score,
            risk_level,
        );
        let flags: Vec<String> = text
            .map(|t| t.flags.into_iter().map(str::to_string).collect())
            .unwrap_or_default();

        RiskAssessment {
            text_id,
            gap,
            gap_score,
            fake_prob,
            risk_score,
            risk_level,
            components,
            composite_score: composite,
            composite_level,
            flags,
            reasons,
        }
    }
}

fn build_reasons(
    gap: Option<f64>,
    gap_score: GapScore,
    fake_prob: Option<f64>,
    text: Option<&TextSignals>,
    risk_score: f64,
    risk_level: RiskLevel,
) -> Vec<Reason> {
    let mut reasons = Vec::new();

    match (gap, gap_score) {
        (Some(g), GapScore::Score(s)) => reasons.push(
            Reason::new(format!("Price gap {g:.2}x reference -> severity {s:.2}"))
                .kind(ReasonKind::PriceGap)
                .weighted(s),
        ),
        _ => reasons.push(
            Reason::new("Price gap unavailable; counted as 0 in the blend")
                .kind(ReasonKind::MissingData),
        ),
    }

    match fake_prob {
        Some(p) => reasons.push(
            Reason::new(format!("Fake-listing probability {p:.2}"))
                .kind(ReasonKind::FakeProbability)
                .weighted(p),
        ),
        None => reasons.push(
            Reason::new("Fake-listing probability unavailable; counted as 0 in the blend")
                .kind(ReasonKind::MissingData),
        ),
    }

    if let Some(t) = text {
        if t.legal >= 1.0 {
            reasons.push(
                Reason::new("Legal red flag in listing text")
                    .kind(ReasonKind::Legal)
                    .weighted(t.legal),
            );
        }
        if t.planning >= 1.0 {
            reasons.push(
                Reason::new("Planning or dispute red flag in listing text")
                    .kind(ReasonKind::Planning)
                    .weighted(t.planning),
            );
        }
    }

    // ASCII for stable console output
    reasons.push(
        Reason::new(format!(
            "Risk score {risk_score:.2} -> {risk_level} (Medium >= {MEDIUM_THRESHOLD:.2}, High >= {HIGH_THRESHOLD:.2})"
        ))
        .kind(ReasonKind::Threshold)
        .weighted(risk_score),
    );

    reasons
}

/// Short, stable id for a listing text: first 6 bytes of SHA-256, hex.
pub(crate) fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
