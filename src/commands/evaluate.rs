use anyhow::{Context, Result};
use std::path::Path;

use super::ReportContext;
use crate::evaluator::EvaluationScope;
use crate::io;

/// Read a measurement file and report the formulas in `scope`.
pub fn handle_evaluate(input: &Path, scope: EvaluationScope, context: &ReportContext) -> Result<()> {
    let measurements = io::read_measurements(input)
        .with_context(|| format!("Cannot evaluate {}", input.display()))?;
    tracing::info!(
        input = %input.display(),
        provided = measurements.len(),
        ?scope,
        "loaded measurements"
    );

    let report = context.evaluator.evaluate(&measurements, scope);
    context.emit(&report)
}
