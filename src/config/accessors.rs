use super::core::RenalcalcConfig;
use crate::formulas::KtvTarget;
use crate::io::output::OutputFormat;

impl RenalcalcConfig {
    /// Total Kt/V target (default: 1.7)
    pub fn ktv_target(&self) -> KtvTarget {
        self.thresholds
            .as_ref()
            .map(|t| t.ktv_target())
            .unwrap_or_default()
    }

    /// Configured default output format, if it names a known format
    pub fn default_format(&self) -> Option<OutputFormat> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
            .and_then(OutputFormat::parse)
    }

    /// Explicit color preference, if configured
    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }
}
