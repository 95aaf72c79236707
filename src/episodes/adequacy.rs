use serde::Serialize;

use super::{EpisodeKind, EpisodeOrdinal};
use crate::core::{AdequacyAssessment, Measurement, MeasurementSet};
use crate::formulas::{compute_adequacy, AdequacyResults, KtvTarget, ThresholdStatus};

/// An adequacy episode: measurements, the clinician's assessment and the
/// last calculated Kt/V figures.
///
/// The assessment is never set from the Kt/V target.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdequacyEpisode {
    ordinal: EpisodeOrdinal,
    measurements: MeasurementSet,
    assessment: AdequacyAssessment,
    results: Option<AdequacyResults>,
}

impl AdequacyEpisode {
    pub fn open(ordinal: EpisodeOrdinal) -> Self {
        Self {
            ordinal,
            measurements: MeasurementSet::new(),
            assessment: AdequacyAssessment::Unset,
            results: None,
        }
    }

    pub fn kind(&self) -> EpisodeKind {
        EpisodeKind::Adequacy
    }

    pub fn ordinal(&self) -> EpisodeOrdinal {
        self.ordinal
    }

    pub fn measurements(&self) -> &MeasurementSet {
        &self.measurements
    }

    pub fn assessment(&self) -> AdequacyAssessment {
        self.assessment
    }

    pub fn results(&self) -> Option<&AdequacyResults> {
        self.results.as_ref()
    }

    /// Target flag for the last calculated total, if calculated.
    pub fn threshold_status(&self, target: KtvTarget) -> Option<ThresholdStatus> {
        self.results.map(|r| r.threshold_status(target))
    }

    pub fn with_measurement(&self, key: Measurement, value: Option<f64>) -> Self {
        self.with_measurements(|set| set.with(key, value))
    }

    pub fn with_raw_measurement(&self, key: Measurement, text: &str) -> Self {
        self.with_measurements(|set| set.with_raw(key, text))
    }

    pub fn with_measurements(&self, update: impl FnOnce(&MeasurementSet) -> MeasurementSet) -> Self {
        Self {
            measurements: update(&self.measurements),
            ..self.clone()
        }
    }

    pub fn with_assessment(&self, assessment: AdequacyAssessment) -> Self {
        Self {
            assessment,
            ..self.clone()
        }
    }

    pub fn calculate(&self) -> Self {
        tracing::debug!(ordinal = %self.ordinal, "calculating adequacy episode");
        Self {
            results: Some(compute_adequacy(&self.measurements)),
            ..self.clone()
        }
    }
}
