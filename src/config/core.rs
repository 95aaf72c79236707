use serde::{Deserialize, Serialize};

use super::thresholds::ThresholdsConfig;

/// Root configuration structure for renalcalc
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RenalcalcConfig {
    /// Display thresholds
    #[serde(default)]
    pub thresholds: Option<ThresholdsConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// One of `terminal`, `json`, `markdown`
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}
