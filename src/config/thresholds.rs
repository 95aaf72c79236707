use serde::{Deserialize, Serialize};

use crate::formulas::{KtvTarget, DEFAULT_TOTAL_KTV_TARGET};

/// Display thresholds.
///
/// ```toml
/// [thresholds]
/// total_ktv = 1.7   # weekly total Kt/V at or above which the target is met
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    /// Total weekly Kt/V target (default: 1.7). Inclusive.
    #[serde(default = "default_total_ktv")]
    pub total_ktv: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            total_ktv: default_total_ktv(),
        }
    }
}

impl ThresholdsConfig {
    pub fn validate(&self) -> Result<(), String> {
        KtvTarget::new(self.total_ktv)
            .map(|_| ())
            .ok_or_else(|| format!("total_ktv must be a positive number, got {}", self.total_ktv))
    }

    pub fn ktv_target(&self) -> KtvTarget {
        KtvTarget::new(self.total_ktv).unwrap_or_default()
    }
}

fn default_total_ktv() -> f64 {
    DEFAULT_TOTAL_KTV_TARGET
}
