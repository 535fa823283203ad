//! Price gap → bounded severity.
//!
//! A listing's price gap is the ratio of its unit price to the official
//! reference price. Severity grows on a log scale against a cap:
//!
//! `score = ln(gap) / ln(cap)`, clamped to [0,1]
//!
//! so a gap of 1.0 (priced at the reference) maps to 0.0 and a gap equal to
//! the cap maps to 1.0.

use serde::Serialize;

/// Default cap: a listing priced at 10× the reference is maximally severe.
pub const DEFAULT_GAP_CAP: f64 = 10.0;

/// Non-positive gaps are floored here before taking the log.
pub const GAP_FLOOR: f64 = 1e-6;

/// Normalized gap severity.
///
/// `Undefined` is the "not a number" outcome of normalization; it is distinct
/// from an absent input, which callers express as `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "Option<f64>")]
pub enum GapScore {
    Score(f64),
    Undefined,
}

impl GapScore {
    /// Raw value; `f64::NAN` for `Undefined`.
    pub fn value(self) -> f64 {
        match self {
            GapScore::Score(s) => s,
            GapScore::Undefined => f64::NAN,
        }
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, GapScore::Undefined)
    }

    pub fn as_option(self) -> Option<f64> {
        match self {
            GapScore::Score(s) => Some(s),
            GapScore::Undefined => None,
        }
    }
}

impl From<GapScore> for Option<f64> {
    fn from(g: GapScore) -> Self {
        g.as_option()
    }
}

/// Map a raw price gap to [0,1] on a log scale against `cap`.
///
/// - `None` (missing gap) → `Undefined`.
/// - `Some(NaN)` → `Undefined`.
/// - Gaps ≤ 0 are floored at [`GAP_FLOOR`] and therefore score 0.0.
/// - A cap that is not finite or not > 1.0 has no monotone log scale → `Undefined`.
pub fn normalize_gap(gap: Option<f64>, cap: f64) -> GapScore {
    let Some(raw) = gap else {
        return GapScore::Undefined;
    };
    if raw.is_nan() || !cap.is_finite() || cap <= 1.0 {
        return GapScore::Undefined;
    }

    let g = raw.max(GAP_FLOOR);
    let score = g.ln() / cap.ln();
    GapScore::Score(score.clamp(0.0, 1.0))
}

/// Listing gap: unit price over the official reference price.
///
/// `None` when either side is missing or not finite, or when the reference is zero.
pub fn listing_gap(unit_price: Option<f64>, gov_price: Option<f64>) -> Option<f64> {
    let unit = unit_price.filter(|v| v.is_finite())?;
    let gov = gov_price.filter(|v| v.is_finite() && *v != 0.0)?;
    Some(unit / gov)
}
