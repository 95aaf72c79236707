//! Peritoneal Equilibration Test ratios.

use serde::Serialize;

use super::positive;
use crate::core::{DerivedResult, Measurement, MeasurementSet};

/// Ratios derived from a PET episode.
///
/// No transporter category is derived here; the clinician selects it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetResults {
    /// Dialysate creatinine at 4 h over serum creatinine at 0 h.
    pub dp_creatinine: DerivedResult,
    /// Dialysate glucose at 4 h over dialysate glucose at 0 h.
    #[serde(rename = "dd0Glucose")]
    pub dd0_glucose: DerivedResult,
}

/// Compute the PET ratios for a measurement set.
///
/// A ratio is not calculated when either operand is missing or not
/// positive.
///
/// ```rust
/// use renalcalc::core::{Measurement, MeasurementSet};
/// use renalcalc::formulas::compute_pet;
///
/// let set = MeasurementSet::new()
///     .with(Measurement::SerumCreatinine0, Some(8.0))
///     .with(Measurement::DialysateCreatinine4, Some(5.2));
/// let pet = compute_pet(&set);
/// assert_eq!(pet.dp_creatinine.value(), Some(0.65));
/// assert!(!pet.dd0_glucose.is_calculated());
/// ```
pub fn compute_pet(measurements: &MeasurementSet) -> PetResults {
    let results = PetResults {
        dp_creatinine: ratio(
            measurements.get(Measurement::DialysateCreatinine4),
            measurements.get(Measurement::SerumCreatinine0),
        ),
        dd0_glucose: ratio(
            measurements.get(Measurement::DialysateGlucose4),
            measurements.get(Measurement::DialysateGlucose0),
        ),
    };
    tracing::trace!(
        dp_creatinine = %results.dp_creatinine,
        dd0_glucose = %results.dd0_glucose,
        "computed PET ratios"
    );
    results
}

fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> DerivedResult {
    match (positive(numerator), positive(denominator)) {
        (Some(n), Some(d)) => DerivedResult::rounded(n / d, 3),
        _ => DerivedResult::NotCalculated,
    }
}
