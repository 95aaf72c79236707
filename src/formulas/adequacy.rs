//! Weekly Kt/V adequacy.
//!
//! The peritoneal and renal terms use the same volume both as the ratio
//! numerator and as the multiplied volume:
//!
//! ```text
//! V            = body weight * 0.58                     (2 dp)
//! peritoneal   = (dialysate volume / blood urea) * dialysate volume * 7 / V
//! renal        = (urine volume / blood urea) * urine volume * 7 / V
//! total        = peritoneal + renal                      (3 dp)
//! ```
//!
//! This is the formula as used on the ward forms; it has not been
//! reconciled with the concentration-based clinical definition and is kept
//! literally until a clinician confirms the intended inputs.

use serde::Serialize;
use std::fmt;

use super::{non_zero, positive};
use crate::core::{DerivedResult, Measurement, MeasurementSet};

/// Fraction of body weight taken as the urea volume of distribution.
pub const VOLUME_OF_DISTRIBUTION_FACTOR: f64 = 0.58;

/// Daily clearance is scaled to a weekly figure.
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Total weekly Kt/V at or above which dialysis meets the usual target.
pub const DEFAULT_TOTAL_KTV_TARGET: f64 = 1.7;

/// Results of an adequacy calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdequacyResults {
    pub v_value: DerivedResult,
    #[serde(rename = "peritonealKtV")]
    pub peritoneal_ktv: DerivedResult,
    #[serde(rename = "renalKtV")]
    pub renal_ktv: DerivedResult,
    #[serde(rename = "totalKtV")]
    pub total_ktv: DerivedResult,
}

impl AdequacyResults {
    pub fn threshold_status(&self, target: KtvTarget) -> ThresholdStatus {
        target.status(self.total_ktv)
    }
}

/// Compute V and the weekly Kt/V terms for a measurement set.
///
/// ```rust
/// use renalcalc::core::{Measurement, MeasurementSet};
/// use renalcalc::formulas::compute_adequacy;
///
/// let set = MeasurementSet::new().with(Measurement::BodyWeightKg, Some(70.0));
/// let adequacy = compute_adequacy(&set);
/// assert_eq!(adequacy.v_value.value(), Some(40.6));
/// assert!(!adequacy.total_ktv.is_calculated());
/// ```
pub fn compute_adequacy(measurements: &MeasurementSet) -> AdequacyResults {
    let v_value = match positive(measurements.get(Measurement::BodyWeightKg)) {
        Some(weight) => DerivedResult::rounded(weight * VOLUME_OF_DISTRIBUTION_FACTOR, 2),
        None => DerivedResult::NotCalculated,
    };
    let blood_urea = measurements.get(Measurement::BloodUreaMgDl);

    let peritoneal_ktv = weekly_ktv(
        measurements.get(Measurement::DialysateUreaVolumeL),
        blood_urea,
        v_value,
    );
    let renal_ktv = weekly_ktv(
        measurements.get(Measurement::UrineUreaVolumeL),
        blood_urea,
        v_value,
    );
    let total_ktv = if peritoneal_ktv.is_calculated() || renal_ktv.is_calculated() {
        DerivedResult::rounded(peritoneal_ktv.or_zero() + renal_ktv.or_zero(), 3)
    } else {
        DerivedResult::NotCalculated
    };

    let results = AdequacyResults {
        v_value,
        peritoneal_ktv,
        renal_ktv,
        total_ktv,
    };
    tracing::trace!(
        v_value = %results.v_value,
        peritoneal_ktv = %results.peritoneal_ktv,
        renal_ktv = %results.renal_ktv,
        total_ktv = %results.total_ktv,
        "computed adequacy"
    );
    results
}

// V is used at its displayed (2 dp) precision.
fn weekly_ktv(volume: Option<f64>, blood_urea: Option<f64>, v_value: DerivedResult) -> DerivedResult {
    match (non_zero(volume), non_zero(blood_urea), non_zero(v_value.value())) {
        (Some(volume), Some(urea), Some(v)) => {
            DerivedResult::rounded((volume / urea) * volume * DAYS_PER_WEEK / v, 3)
        }
        _ => DerivedResult::NotCalculated,
    }
}

/// Total Kt/V target used to flag results for display.
///
/// The flag is advisory; it never sets the clinician's
/// [`AdequacyAssessment`](crate::core::AdequacyAssessment).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct KtvTarget(f64);

impl KtvTarget {
    /// Create a target; only positive finite values are accepted.
    pub fn new(value: f64) -> Option<Self> {
        (value.is_finite() && value > 0.0).then_some(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Compare a total Kt/V against the target (inclusive).
    pub fn status(self, total_ktv: DerivedResult) -> ThresholdStatus {
        match total_ktv.value() {
            Some(total) if total >= self.0 => ThresholdStatus::Met,
            Some(_) => ThresholdStatus::BelowTarget,
            None => ThresholdStatus::NotCalculated,
        }
    }
}

impl Default for KtvTarget {
    fn default() -> Self {
        Self(DEFAULT_TOTAL_KTV_TARGET)
    }
}

// Whole numbers keep one decimal; anything finer is printed exactly.
impl fmt::Display for KtvTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Display flag for a total Kt/V relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThresholdStatus {
    Met,
    /// Shown with a visual warning.
    BelowTarget,
    NotCalculated,
}

impl ThresholdStatus {
    pub fn needs_warning(&self) -> bool {
        matches!(self, ThresholdStatus::BelowTarget)
    }
}

impl fmt::Display for ThresholdStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThresholdStatus::Met => "Meets target",
            ThresholdStatus::BelowTarget => "Below target",
            ThresholdStatus::NotCalculated => "Not calculated",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adequacy_set(weight: &str, dialysate: &str, urine: &str, urea: &str) -> MeasurementSet {
        MeasurementSet::new()
            .with_raw(Measurement::BodyWeightKg, weight)
            .with_raw(Measurement::DialysateUreaVolumeL, dialysate)
            .with_raw(Measurement::UrineUreaVolumeL, urine)
            .with_raw(Measurement::BloodUreaMgDl, urea)
    }

    #[test]
    fn weight_only_gives_v_and_nothing_else() {
        let results = compute_adequacy(&adequacy_set("70", "", "", ""));
        assert_eq!(results.v_value.value(), Some(40.6));
        assert_eq!(results.peritoneal_ktv, DerivedResult::NotCalculated);
        assert_eq!(results.renal_ktv, DerivedResult::NotCalculated);
        assert_eq!(results.total_ktv, DerivedResult::NotCalculated);
    }

    #[test]
    fn full_inputs_compute_every_term() {
        let results = compute_adequacy(&adequacy_set("50", "5", "2", "5"));
        assert_eq!(results.v_value.value(), Some(29.0));
        assert_eq!(results.peritoneal_ktv.value(), Some(1.207));
        assert_eq!(results.renal_ktv.value(), Some(0.193));
        assert_eq!(results.total_ktv.value(), Some(1.4));
        assert_eq!(results.total_ktv.to_string(), "1.400");
    }

    #[test]
    fn missing_renal_term_counts_as_zero_in_total() {
        let results = compute_adequacy(&adequacy_set("50", "5", "", "5"));
        assert_eq!(results.renal_ktv, DerivedResult::NotCalculated);
        assert_eq!(results.total_ktv, results.peritoneal_ktv);
    }

    #[test]
    fn missing_weight_blocks_every_ktv() {
        let results = compute_adequacy(&adequacy_set("", "5", "2", "5"));
        assert_eq!(results, AdequacyResults::default());
    }

    #[test]
    fn zero_or_negative_weight_is_not_calculated() {
        assert!(!compute_adequacy(&adequacy_set("0", "", "", "")).v_value.is_calculated());
        assert!(!compute_adequacy(&adequacy_set("-70", "", "", "")).v_value.is_calculated());
    }

    #[test]
    fn zero_blood_urea_is_not_calculated() {
        let results = compute_adequacy(&adequacy_set("50", "5", "2", "0"));
        assert!(results.v_value.is_calculated());
        assert_eq!(results.total_ktv, DerivedResult::NotCalculated);
    }

    #[test]
    fn target_is_inclusive() {
        let target = KtvTarget::default();
        assert_eq!(target.status(DerivedResult::rounded(1.7, 3)), ThresholdStatus::Met);
        assert_eq!(
            target.status(DerivedResult::rounded(1.699, 3)),
            ThresholdStatus::BelowTarget
        );
        assert_eq!(
            target.status(DerivedResult::NotCalculated),
            ThresholdStatus::NotCalculated
        );
    }

    #[test]
    fn total_rounding_to_target_meets_it() {
        // peritoneal raw value is 1.69991, shown as 1.700
        let results = compute_adequacy(&adequacy_set("50", "5.934", "", "5"));
        assert_eq!(results.total_ktv.to_string(), "1.700");
        assert_eq!(results.threshold_status(KtvTarget::default()), ThresholdStatus::Met);
    }

    #[test]
    fn only_below_target_needs_warning() {
        assert!(ThresholdStatus::BelowTarget.needs_warning());
        assert!(!ThresholdStatus::Met.needs_warning());
        assert!(!ThresholdStatus::NotCalculated.needs_warning());
    }

    #[test]
    fn target_rejects_non_positive_values() {
        assert!(KtvTarget::new(0.0).is_none());
        assert!(KtvTarget::new(-1.7).is_none());
        assert!(KtvTarget::new(f64::NAN).is_none());
        assert_eq!(KtvTarget::new(2.0).map(KtvTarget::value), Some(2.0));
    }

    #[test]
    fn target_displays_the_value_it_compares_against() {
        assert_eq!(KtvTarget::default().to_string(), "1.7");
        assert_eq!(KtvTarget::new(2.0).map(|t| t.to_string()), Some("2.0".into()));
        assert_eq!(KtvTarget::new(1.75).map(|t| t.to_string()), Some("1.75".into()));
        assert_eq!(KtvTarget::new(1.72).map(|t| t.to_string()), Some("1.72".into()));
    }
}
