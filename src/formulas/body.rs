//! Body mass index.

use super::positive;
use crate::core::{DerivedResult, Measurement, MeasurementSet};

/// `weight / (height in metres)^2`, one decimal place.
///
/// Not calculated when either input is missing, zero or negative.
///
/// ```rust
/// use renalcalc::formulas::compute_bmi;
///
/// assert_eq!(compute_bmi(Some(170.0), Some(70.0)).to_string(), "24.2");
/// assert_eq!(compute_bmi(Some(0.0), Some(70.0)).to_string(), "Not calculated");
/// ```
pub fn compute_bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> DerivedResult {
    match (positive(height_cm), positive(weight_kg)) {
        (Some(height_cm), Some(weight_kg)) => {
            let height_m = height_cm / 100.0;
            DerivedResult::rounded(weight_kg / (height_m * height_m), 1)
        }
        _ => DerivedResult::NotCalculated,
    }
}

/// BMI from the height and body weight of a measurement set.
pub fn compute_bmi_from(measurements: &MeasurementSet) -> DerivedResult {
    compute_bmi(
        measurements.get(Measurement::HeightCm),
        measurements.get(Measurement::BodyWeightKg),
    )
}
