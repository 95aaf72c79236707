//! Inter-dialytic weight gain.
//!
//! Unlike the other formulas this one backs a live field: see
//! [`DialysisWeights`](crate::session::DialysisWeights), which recomputes it
//! on every change instead of waiting for an explicit calculation.

use crate::core::{DerivedResult, Measurement, MeasurementSet};

/// `pre-dialysis weight - dry weight`, two decimal places.
///
/// A negative gain (the patient is below dry weight) is reported as is.
///
/// ```rust
/// use renalcalc::formulas::compute_weight_gain;
///
/// assert_eq!(compute_weight_gain(Some(60.0), Some(62.5)).to_string(), "2.50");
/// assert!(!compute_weight_gain(None, Some(62.5)).is_calculated());
/// ```
pub fn compute_weight_gain(dry_weight_kg: Option<f64>, pre_dialysis_weight_kg: Option<f64>) -> DerivedResult {
    match (dry_weight_kg, pre_dialysis_weight_kg) {
        (Some(dry), Some(pre)) => DerivedResult::rounded(pre - dry, 2),
        _ => DerivedResult::NotCalculated,
    }
}

/// Weight gain from the dry and pre-dialysis weights of a measurement set.
pub fn compute_weight_gain_from(measurements: &MeasurementSet) -> DerivedResult {
    compute_weight_gain(
        measurements.get(Measurement::DryWeightKg),
        measurements.get(Measurement::PreDialysisWeightKg),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gain_is_pre_minus_dry() {
        assert_eq!(compute_weight_gain(Some(60.0), Some(62.5)).value(), Some(2.5));
    }

    #[test]
    fn loss_is_negative() {
        assert_eq!(compute_weight_gain(Some(60.0), Some(59.25)).value(), Some(-0.75));
    }

    #[test]
    fn either_missing_is_not_calculated() {
        assert_eq!(compute_weight_gain(Some(60.0), None), DerivedResult::NotCalculated);
        assert_eq!(compute_weight_gain(None, Some(62.5)), DerivedResult::NotCalculated);
    }

    #[test]
    fn reads_weights_from_set() {
        let set = MeasurementSet::new()
            .with_raw(Measurement::DryWeightKg, "58.4")
            .with_raw(Measurement::PreDialysisWeightKg, "60.1");
        assert_eq!(compute_weight_gain_from(&set).to_string(), "1.70");
    }
}
