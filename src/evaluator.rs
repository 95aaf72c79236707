//! Evaluation of a measurement set into a report.
//!
//! [`Evaluator`] is the single entry point the CLI and any other consumer
//! use: it runs the requested formulas over one [`MeasurementSet`] and
//! bundles the results with the Kt/V target flag and report metadata. It
//! holds only the configured target, so one evaluator can be shared freely.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::RenalcalcConfig;
use crate::core::{DerivedResult, MeasurementSet};
use crate::formulas::{
    compute_adequacy, compute_bmi_from, compute_pet, compute_weight_gain_from, AdequacyResults,
    KtvTarget, PetResults, ThresholdStatus,
};

/// Which formulas to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationScope {
    Pet,
    Adequacy,
    Bmi,
    WeightGain,
    All,
}

impl EvaluationScope {
    fn includes(self, other: EvaluationScope) -> bool {
        self == EvaluationScope::All || self == other
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub renalcalc_version: String,
    pub generated_at: DateTime<Utc>,
}

impl ReportMetadata {
    pub fn at(generated_at: DateTime<Utc>) -> Self {
        Self {
            renalcalc_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at,
        }
    }
}

/// Adequacy results with the target they were flagged against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdequacySection {
    #[serde(flatten)]
    pub results: AdequacyResults,
    pub target: KtvTarget,
    pub threshold_status: ThresholdStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub metadata: ReportMetadata,
    pub measurements: MeasurementSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pet: Option<PetResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adequacy: Option<AdequacySection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<DerivedResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_gain: Option<DerivedResult>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    target: KtvTarget,
}

impl Evaluator {
    pub fn new(target: KtvTarget) -> Self {
        Self { target }
    }

    pub fn from_config(config: &RenalcalcConfig) -> Self {
        Self::new(config.ktv_target())
    }

    pub fn target(&self) -> KtvTarget {
        self.target
    }

    pub fn evaluate(&self, measurements: &MeasurementSet, scope: EvaluationScope) -> EvaluationReport {
        self.evaluate_at(measurements, scope, Utc::now())
    }

    /// Evaluate with a fixed report timestamp.
    pub fn evaluate_at(
        &self,
        measurements: &MeasurementSet,
        scope: EvaluationScope,
        generated_at: DateTime<Utc>,
    ) -> EvaluationReport {
        tracing::debug!(?scope, provided = measurements.len(), "evaluating measurements");

        let adequacy = scope.includes(EvaluationScope::Adequacy).then(|| {
            let results = compute_adequacy(measurements);
            AdequacySection {
                results,
                target: self.target,
                threshold_status: results.threshold_status(self.target),
            }
        });

        EvaluationReport {
            metadata: ReportMetadata::at(generated_at),
            measurements: measurements.clone(),
            pet: scope
                .includes(EvaluationScope::Pet)
                .then(|| compute_pet(measurements)),
            adequacy,
            bmi: scope
                .includes(EvaluationScope::Bmi)
                .then(|| compute_bmi_from(measurements)),
            weight_gain: scope
                .includes(EvaluationScope::WeightGain)
                .then(|| compute_weight_gain_from(measurements)),
        }
    }
}
