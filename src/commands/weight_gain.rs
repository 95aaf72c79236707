use anyhow::Result;

use super::ReportContext;
use crate::core::{Measurement, MeasurementSet};
use crate::evaluator::EvaluationScope;
use crate::session::DialysisWeights;

/// Report interdialytic weight gain from raw weight text.
pub fn handle_weight_gain(
    dry_weight_kg: &str,
    pre_dialysis_weight_kg: &str,
    context: &ReportContext,
) -> Result<()> {
    let weights = DialysisWeights::default()
        .with_dry_weight_text(dry_weight_kg)
        .with_pre_dialysis_weight_text(pre_dialysis_weight_kg);
    tracing::debug!(weight_gain = %weights.weight_gain(), "session weights entered");

    let measurements = MeasurementSet::new()
        .with(Measurement::DryWeightKg, weights.dry_weight_kg())
        .with(
            Measurement::PreDialysisWeightKg,
            weights.pre_dialysis_weight_kg(),
        );

    let report = context
        .evaluator
        .evaluate(&measurements, EvaluationScope::WeightGain);
    context.emit(&report)
}
