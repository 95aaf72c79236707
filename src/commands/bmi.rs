use anyhow::Result;

use super::ReportContext;
use crate::core::{Measurement, MeasurementSet};
use crate::evaluator::EvaluationScope;

/// Report BMI from raw height and weight text.
///
/// Text that does not parse as a number is treated as not provided, so the
/// report shows "Not calculated" rather than failing.
pub fn handle_bmi(height_cm: &str, weight_kg: &str, context: &ReportContext) -> Result<()> {
    let measurements = MeasurementSet::new()
        .with_raw(Measurement::HeightCm, height_cm)
        .with_raw(Measurement::BodyWeightKg, weight_kg);

    let report = context.evaluator.evaluate(&measurements, EvaluationScope::Bmi);
    context.emit(&report)
}
