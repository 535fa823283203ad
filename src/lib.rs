// src/lib.rs
// Public library surface for integration tests and embedding code.

pub mod analyze;
pub mod assessment;
pub mod config;
pub mod engine;
pub mod fees;

// ---- Re-exports for stable public API ----
pub use crate::analyze::{
    blend, classify, normalize_gap, GapScore, RiskLevel, DEFAULT_BLEND_WEIGHT, DEFAULT_GAP_CAP,
};
pub use crate::assessment::{Reason, ReasonKind, RiskAssessment};
pub use crate::config::RiskConfig;
pub use crate::engine::{ListingInput, RiskEngine};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a compact tracing subscriber for binaries and local runs.
///
/// Filter comes from `RUST_LOG`, falling back to `listing_risk=info,warn`.
/// `RISK_LOG_JSON=1` switches to JSON lines. Safe to call more than once.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("listing_risk=info,warn"));

    let json = std::env::var("RISK_LOG_JSON")
        .ok()
        .is_some_and(|v| v == "1");

    let registry = tracing_subscriber::registry().with(filter);
    let _ = if json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer().compact()).try_init()
    };
}
