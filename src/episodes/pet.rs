use serde::Serialize;

use super::{EpisodeKind, EpisodeOrdinal};
use crate::core::{Measurement, MeasurementSet, TransporterCategory};
use crate::formulas::{compute_pet, PetResults};

/// A PET episode: measurements, the clinician's transporter category and
/// the last calculated ratios.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetEpisode {
    ordinal: EpisodeOrdinal,
    measurements: MeasurementSet,
    transporter: Option<TransporterCategory>,
    results: Option<PetResults>,
}

impl PetEpisode {
    /// Open an episode with no measurements and nothing calculated.
    pub fn open(ordinal: EpisodeOrdinal) -> Self {
        Self {
            ordinal,
            measurements: MeasurementSet::new(),
            transporter: None,
            results: None,
        }
    }

    pub fn kind(&self) -> EpisodeKind {
        EpisodeKind::Pet
    }

    pub fn ordinal(&self) -> EpisodeOrdinal {
        self.ordinal
    }

    pub fn measurements(&self) -> &MeasurementSet {
        &self.measurements
    }

    pub fn transporter(&self) -> Option<TransporterCategory> {
        self.transporter
    }

    /// Results of the last [`calculate`](Self::calculate), if any.
    pub fn results(&self) -> Option<&PetResults> {
        self.results.as_ref()
    }

    pub fn with_measurement(&self, key: Measurement, value: Option<f64>) -> Self {
        self.with_measurements(|set| set.with(key, value))
    }

    pub fn with_raw_measurement(&self, key: Measurement, text: &str) -> Self {
        self.with_measurements(|set| set.with_raw(key, text))
    }

    /// Apply a typed update to the measurement set.
    pub fn with_measurements(&self, update: impl FnOnce(&MeasurementSet) -> MeasurementSet) -> Self {
        Self {
            measurements: update(&self.measurements),
            ..self.clone()
        }
    }

    pub fn with_transporter(&self, transporter: Option<TransporterCategory>) -> Self {
        Self {
            transporter,
            ..self.clone()
        }
    }

    /// Recompute the ratios from the current measurements.
    pub fn calculate(&self) -> Self {
        tracing::debug!(ordinal = %self.ordinal, "calculating PET episode");
        Self {
            results: Some(compute_pet(&self.measurements)),
            ..self.clone()
        }
    }
}
