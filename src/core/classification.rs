//! Clinician-selected labels.
//!
//! Neither label is derived from the numbers: the transporter category is
//! picked by the clinician after reading the D/P ratio, and the adequacy
//! assessment is toggled independently of the Kt/V target.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Peritoneal transport category from a PET.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransporterCategory {
    High,
    HighAverage,
    LowAverage,
    Low,
}

impl TransporterCategory {
    pub const ALL: [TransporterCategory; 4] = [
        TransporterCategory::High,
        TransporterCategory::HighAverage,
        TransporterCategory::LowAverage,
        TransporterCategory::Low,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransporterCategory::High => "High Transporter",
            TransporterCategory::HighAverage => "High-Average Transporter",
            TransporterCategory::LowAverage => "Low-Average Transporter",
            TransporterCategory::Low => "Low Transporter",
        }
    }
}

impl fmt::Display for TransporterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transporter category `{0}`")]
pub struct UnknownTransporterCategory(pub String);

impl FromStr for TransporterCategory {
    type Err = UnknownTransporterCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', ' '], "-");
        let category = normalized
            .strip_suffix("-transporter")
            .unwrap_or(normalized.as_str());
        match category {
            "high" => Ok(Self::High),
            "high-average" => Ok(Self::HighAverage),
            "low-average" => Ok(Self::LowAverage),
            "low" => Ok(Self::Low),
            _ => Err(UnknownTransporterCategory(s.to_string())),
        }
    }
}

/// Clinician judgement on whether dialysis is adequate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdequacyAssessment {
    Adequate,
    Inadequate,
    #[default]
    Unset,
}

impl AdequacyAssessment {
    /// Tri-state as the `isAdequate` flag the forms send.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            AdequacyAssessment::Adequate => Some(true),
            AdequacyAssessment::Inadequate => Some(false),
            AdequacyAssessment::Unset => None,
        }
    }

    pub fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => AdequacyAssessment::Adequate,
            Some(false) => AdequacyAssessment::Inadequate,
            None => AdequacyAssessment::Unset,
        }
    }
}

impl fmt::Display for AdequacyAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AdequacyAssessment::Adequate => "Adequate",
            AdequacyAssessment::Inadequate => "Inadequate",
            AdequacyAssessment::Unset => "Not assessed",
        })
    }
}
