//! Four-component composite risk.
//!
//! `RiskComponents` holds per-listing signals, each nominally in [0,1]:
//! - `legal`    : legal-title red flags from the listing text
//! - `fake`     : fake-listing probability
//! - `price`    : log-normalized price gap
//! - `planning` : planning/dispute red flags from the listing text
//!
//! composite = Σ w·S / Σ w, clamped to [0,1]. Missing signals count as 0.5
//! (neutral) so a listing with little information lands mid-scale rather
//! than looking safe.

use serde::Serialize;

use super::rules::NEUTRAL_SIGNAL;
use super::ComponentWeights;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct RiskComponents {
    pub legal: Option<f64>,
    pub fake: Option<f64>,
    pub price: Option<f64>,
    pub planning: Option<f64>,
}

impl RiskComponents {
    /// Values with missing/NaN replaced by the neutral 0.5.
    pub fn filled(&self) -> [f64; 4] {
        fn f(x: Option<f64>) -> f64 {
            match x {
                Some(v) if !v.is_nan() => v,
                _ => NEUTRAL_SIGNAL,
            }
        }
        [f(self.legal), f(self.fake), f(self.price), f(self.planning)]
    }
}

/// Weighted composite in [0,1].
pub fn composite_score(components: &RiskComponents, weights: &ComponentWeights) -> f64 {
    let w = weights.sanitized();
    let [legal, fake, price, planning] = components.filled();

    let raw = legal * w.legal + fake * w.fake + price * w.price + planning * w.planning;

    let denom = w.total().max(1e-6);
    (raw / denom).clamp(0.0, 1.0)
}
