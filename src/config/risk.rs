// src/config/risk.rs
use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::analyze::{sanitize_weight, ComponentWeights, DEFAULT_BLEND_WEIGHT, DEFAULT_GAP_CAP};

pub const ENV_RISK_CONFIG_PATH: &str = "RISK_CONFIG_PATH";
pub const ENV_GAP_CAP: &str = "RISK_GAP_CAP";
pub const ENV_BLEND_WEIGHT: &str = "RISK_BLEND_WEIGHT";

pub const DEFAULT_RISK_CONFIG_TOML: &str = "config/risk.toml";
pub const DEFAULT_RISK_CONFIG_JSON: &str = "config/risk.json";

fn default_gap_cap() -> f64 {
    DEFAULT_GAP_CAP
}
fn default_blend_weight() -> f64 {
    DEFAULT_BLEND_WEIGHT
}

/// Scoring parameters.
///
/// ```toml
/// gap_cap = 10.0
/// blend_weight = 0.5
///
/// [components]
/// legal = 0.25
/// fake = 0.25
/// price = 0.25
/// planning = 0.25
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Gap at which severity saturates to 1.0. Must be finite and > 1.0.
    #[serde(default = "default_gap_cap")]
    pub gap_cap: f64,
    /// Share of the fake probability in the blend; clamped to [0,1].
    #[serde(default = "default_blend_weight")]
    pub blend_weight: f64,
    #[serde(default)]
    pub components: ComponentWeights,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            gap_cap: default_gap_cap(),
            blend_weight: default_blend_weight(),
            components: ComponentWeights::default(),
        }
    }
}

impl RiskConfig {
    /// Reject a cap without a usable log scale; clamp the soft parameters.
    pub fn validated(mut self) -> Result<Self> {
        if !self.gap_cap.is_finite() || self.gap_cap <= 1.0 {
            bail!("gap_cap must be a finite number > 1.0 (got {})", self.gap_cap);
        }
        let w = sanitize_weight(self.blend_weight);
        if w != self.blend_weight {
            warn!(raw = self.blend_weight, clamped = w, "blend_weight out of range");
        }
        self.blend_weight = w;
        self.components = self.components.sanitized();
        Ok(self)
    }
}

/// Load config from an explicit path. Supports TOML or JSON formats.
pub fn load_config_from(path: &Path) -> Result<RiskConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading risk config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let cfg = parse_config(&content, ext.as_str())
        .with_context(|| format!("parsing risk config {}", path.display()))?;
    debug!(path = %path.display(), "risk config loaded");
    cfg.validated()
}

/// Load config using env var + fallbacks:
/// 1) $RISK_CONFIG_PATH
/// 2) config/risk.toml
/// 3) config/risk.json
/// 4) built-in defaults
///
/// `RISK_GAP_CAP` / `RISK_BLEND_WEIGHT` then override the file values.
pub fn load_config_default() -> Result<RiskConfig> {
    let base = if let Ok(p) = std::env::var(ENV_RISK_CONFIG_PATH) {
        let pb = PathBuf::from(p);
        if !pb.exists() {
            return Err(anyhow!("RISK_CONFIG_PATH points to non-existent path"));
        }
        load_config_from(&pb)?
    } else {
        let toml_p = PathBuf::from(DEFAULT_RISK_CONFIG_TOML);
        let json_p = PathBuf::from(DEFAULT_RISK_CONFIG_JSON);
        if toml_p.exists() {
            load_config_from(&toml_p)?
        } else if json_p.exists() {
            load_config_from(&json_p)?
        } else {
            debug!("no risk config file, using defaults");
            RiskConfig::default()
        }
    };
    apply_env_overrides(base).validated()
}

fn apply_env_overrides(mut cfg: RiskConfig) -> RiskConfig {
    if let Some(v) = parse_f64_env(ENV_GAP_CAP) {
        cfg.gap_cap = v;
    }
    if let Some(v) = parse_f64_env(ENV_BLEND_WEIGHT) {
        cfg.blend_weight = v;
    }
    cfg
}

// Unparseable values are ignored with a warning.
fn parse_f64_env(name: &str) -> Option<f64> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<f64>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(var = name, value = %raw, "ignoring non-numeric env override");
            None
        }
    }
}

fn parse_config(s: &str, hint_ext: &str) -> Result<RiskConfig> {
    let looks_json = s.trim_start().starts_with('{');
    let try_toml = hint_ext == "toml" || !looks_json;
    if try_toml {
        if let Ok(v) = toml::from_str::<RiskConfig>(s) {
            return Ok(v);
        }
    }
    if let Ok(v) = serde_json::from_str::<RiskConfig>(s) {
        return Ok(v);
    }
    if !try_toml {
        if let Ok(v) = toml::from_str::<RiskConfig>(s) {
            return Ok(v);
        }
    }
    Err(anyhow!("unsupported risk config format"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{env, fs};

    #[test]
    fn toml_and_json_shapes() {
        let toml = "gap_cap = 5.0\n[components]\nlegal = 0.4\n";
        let t = parse_config(toml, "toml").unwrap();
        assert_eq!(t.gap_cap, 5.0);
        assert_eq!(t.blend_weight, DEFAULT_BLEND_WEIGHT);
        assert_eq!(t.components.legal, 0.4);
        assert_eq!(t.components.fake, 0.25);

        let json = r#"{"blend_weight": 0.7}"#;
        let j = parse_config(json, "json").unwrap();
        assert_eq!(j.gap_cap, DEFAULT_GAP_CAP);
        assert_eq!(j.blend_weight, 0.7);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_config("{ not json", "").is_err());
        assert!(parse_config("gap_cap = [", "toml").is_err());
    }

    #[test]
    fn validation_rejects_flat_cap_and_clamps_weight() {
        let bad = RiskConfig {
            gap_cap: 1.0,
            ..RiskConfig::default()
        };
        assert!(bad.validated().is_err());

        let wide = RiskConfig {
            blend_weight: 1.7,
            ..RiskConfig::default()
        }
        .validated()
        .unwrap();
        assert_eq!(wide.blend_weight, 1.0);
    }

    #[serial_test::serial]
    #[test]
    fn default_uses_env_then_fallbacks() {
        // Isolate CWD so the repo's own config/ is not read
        let old = env::current_dir().unwrap();
        let tmp = tempfile::tempdir().unwrap();
        env::set_current_dir(tmp.path()).unwrap();

        env::remove_var(ENV_RISK_CONFIG_PATH);
        env::remove_var(ENV_GAP_CAP);
        env::remove_var(ENV_BLEND_WEIGHT);

        // No files → defaults
        assert_eq!(load_config_default().unwrap(), RiskConfig::default());

        // Env path wins
        let p_json = tmp.path().join("risk.json");
        fs::write(&p_json, r#"{"gap_cap": 20.0}"#).unwrap();
        env::set_var(ENV_RISK_CONFIG_PATH, p_json.display().to_string());
        assert_eq!(load_config_default().unwrap().gap_cap, 20.0);
        env::remove_var(ENV_RISK_CONFIG_PATH);

        env::set_current_dir(&old).unwrap();
    }
}
