// src/config/mod.rs
pub mod risk;

pub use risk::{
    load_config_default, load_config_from, RiskConfig, ENV_BLEND_WEIGHT, ENV_GAP_CAP,
    ENV_RISK_CONFIG_PATH,
};
