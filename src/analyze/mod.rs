// src/analyze/mod.rs
//! Scoring primitives: gap normalization, fake/gap blend, level buckets,
//! listing-text signals and the four-component composite.
//!
//! Everything here is pure and per-item; the engine composes it.

pub mod blend;
pub mod gap;
pub mod level;
pub mod rules;
pub mod scoring;
pub mod weights;

// Re-export convenient types.
pub use crate::analyze::blend::{blend, sanitize_weight, DEFAULT_BLEND_WEIGHT};
pub use crate::analyze::gap::{listing_gap, normalize_gap, GapScore, DEFAULT_GAP_CAP};
pub use crate::analyze::level::{classify, RiskLevel, HIGH_THRESHOLD, MEDIUM_THRESHOLD};
pub use crate::analyze::rules::{
    analyze_text, legal_risk_score, matched_flags, planning_risk_score, TextSignals,
};
pub use crate::analyze::scoring::{composite_score, RiskComponents};
pub use crate::analyze::weights::ComponentWeights;

/// Scale a raw fake-listing confidence into [0,1].
///
/// Sources report either a fraction or a percent; anything above 1.0 is read
/// as a percent. The decision is made per value, so a raw 1.0 is read as a
/// fraction (100%) even when it came from a percent column. Missing or
/// NaN → `None`.
pub fn fake_prob_from_raw(raw: Option<f64>) -> Option<f64> {
    let v = raw.filter(|v| !v.is_nan())?;
    let v = if v > 1.0 { v / 100.0 } else { v };
    Some(v.clamp(0.0, 1.0))
}

/// The three-step pipeline for a single item with default parameters:
/// normalize gap → blend with fake probability → classify.
pub fn score_and_classify(fake_prob: Option<f64>, gap: Option<f64>) -> (f64, RiskLevel) {
    let g = normalize_gap(gap, DEFAULT_GAP_CAP);
    let score = blend(fake_prob, Some(g), DEFAULT_BLEND_WEIGHT);
    (score, classify(Some(score)))
}
