//! Fake-probability × gap-score blend.
//!
//! risk = w * fake_prob + (1 - w) * gap_score
//!
//! Missing inputs are substituted with 0.0; nothing here fails.

use super::gap::GapScore;

/// Default share of the fake probability in the blend.
pub const DEFAULT_BLEND_WEIGHT: f64 = 0.5;

/// Clamp a blend weight into [0,1]. NaN falls back to the default.
pub fn sanitize_weight(weight: f64) -> f64 {
    if weight.is_nan() {
        DEFAULT_BLEND_WEIGHT
    } else {
        weight.clamp(0.0, 1.0)
    }
}

/// Weighted linear interpolation of fake probability and gap score.
///
/// Absent `fake_prob` counts as 0.0, as does an absent, `Undefined` or NaN
/// gap score. A present-but-NaN `fake_prob` is not substituted and yields NaN.
pub fn blend(fake_prob: Option<f64>, gap_score: Option<GapScore>, weight: f64) -> f64 {
    let w = sanitize_weight(weight);
    let p = fake_prob.unwrap_or(0.0);
    let g = gap_score
        .and_then(GapScore::as_option)
        .filter(|g| !g.is_nan())
        .unwrap_or(0.0);
    w * p + (1.0 - w) * g
}
