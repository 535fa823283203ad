//! Component weights for the four-part composite risk score.
//!
//! TOML shape (inside `config/risk.toml`):
//! ```toml
//! [components]
//! legal = 0.25
//! fake = 0.25
//! price = 0.25
//! planning = 0.25
//! ```
//! Missing keys fall back to the equal-weight default.

use serde::{Deserialize, Serialize};

fn default_component_weight() -> f64 {
    0.25
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentWeights {
    #[serde(default = "default_component_weight")]
    pub legal: f64,
    #[serde(default = "default_component_weight")]
    pub fake: f64,
    #[serde(default = "default_component_weight")]
    pub price: f64,
    #[serde(default = "default_component_weight")]
    pub planning: f64,
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self::equal()
    }
}

impl ComponentWeights {
    pub fn equal() -> Self {
        Self {
            legal: default_component_weight(),
            fake: default_component_weight(),
            price: default_component_weight(),
            planning: default_component_weight(),
        }
    }

    /// Negative or NaN weights become 0.0.
    pub fn sanitized(self) -> Self {
        fn c(x: f64) -> f64 {
            if x.is_nan() {
                0.0
            } else {
                x.max(0.0)
            }
        }
        Self {
            legal: c(self.legal),
            fake: c(self.fake),
            price: c(self.price),
            planning: c(self.planning),
        }
    }

    pub fn total(&self) -> f64 {
        self.legal + self.fake + self.price + self.planning
    }
}
