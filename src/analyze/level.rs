//! Risk score → ordinal level.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores at or above this are at least `Medium`.
pub const MEDIUM_THRESHOLD: f64 = 0.3;
/// Scores at or above this are `High`.
pub const HIGH_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    /// Score missing or NaN.
    Unknown,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Unknown => "Unknown",
        }
    }

    pub fn is_known(self) -> bool {
        self != RiskLevel::Unknown
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket a score. Lower bounds are inclusive: 0.3 is `Medium`, 0.6 is `High`.
pub fn classify(score: Option<f64>) -> RiskLevel {
    match score {
        None => RiskLevel::Unknown,
        Some(s) if s.is_nan() => RiskLevel::Unknown,
        Some(s) if s < MEDIUM_THRESHOLD => RiskLevel::Low,
        Some(s) if s < HIGH_THRESHOLD => RiskLevel::Medium,
        Some(_) => RiskLevel::High,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_and_boundaries() {
        assert_eq!(classify(Some(0.0)), RiskLevel::Low);
        assert_eq!(classify(Some(0.29)), RiskLevel::Low);
        assert_eq!(classify(Some(0.3)), RiskLevel::Medium);
        assert_eq!(classify(Some(0.59)), RiskLevel::Medium);
        assert_eq!(classify(Some(0.6)), RiskLevel::High);
        assert_eq!(classify(Some(1.0)), RiskLevel::High);
    }

    #[test]
    fn missing_or_nan_is_unknown() {
        assert_eq!(classify(None), RiskLevel::Unknown);
        assert_eq!(classify(Some(f64::NAN)), RiskLevel::Unknown);
        assert!(!RiskLevel::Unknown.is_known());
    }

    #[test]
    fn display_matches_serde() {
        for lvl in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High, RiskLevel::Unknown] {
            let json = serde_json::to_string(&lvl).unwrap();
            assert_eq!(json, format!("\"{lvl}\""));
        }
    }
}
