use crate::core::DerivedResult;
use crate::evaluator::{AdequacySection, EvaluationReport};
use crate::formulas::PetResults;
use crate::io::output::OutputWriter;
use std::io::Write;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &EvaluationReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_measurements(report)?;
        if let Some(pet) = &report.pet {
            self.write_pet(pet)?;
        }
        if let Some(adequacy) = &report.adequacy {
            self.write_adequacy(adequacy)?;
        }
        if report.bmi.is_some() || report.weight_gain.is_some() {
            self.write_body(report)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &EvaluationReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Renal Formula Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", report.metadata.renalcalc_version)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_measurements(&mut self, report: &EvaluationReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Measurements")?;
        writeln!(self.writer)?;
        if report.measurements.is_empty() {
            writeln!(self.writer, "_No measurements provided._")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(self.writer, "| Measurement | Value |")?;
        writeln!(self.writer, "|-------------|-------|")?;
        for (measurement, value) in report.measurements.iter() {
            writeln!(self.writer, "| {} | {} |", measurement.label(), value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_pet(&mut self, pet: &PetResults) -> anyhow::Result<()> {
        writeln!(self.writer, "## Peritoneal Equilibration Test")?;
        writeln!(self.writer)?;
        self.write_table_header()?;
        self.write_row("D/P creatinine", &pet.dp_creatinine)?;
        self.write_row("D/D0 glucose", &pet.dd0_glucose)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_adequacy(&mut self, adequacy: &AdequacySection) -> anyhow::Result<()> {
        writeln!(self.writer, "## Dialysis Adequacy")?;
        writeln!(self.writer)?;
        self.write_table_header()?;
        self.write_row("V (L)", &adequacy.results.v_value)?;
        self.write_row("Peritoneal Kt/V", &adequacy.results.peritoneal_ktv)?;
        self.write_row("Renal Kt/V", &adequacy.results.renal_ktv)?;
        self.write_row("Total Kt/V", &adequacy.results.total_ktv)?;
        writeln!(self.writer)?;

        let line = format!(
            "Target total Kt/V >= {}: {}",
            adequacy.target, adequacy.threshold_status
        );
        if adequacy.threshold_status.needs_warning() {
            writeln!(self.writer, "> **Warning:** {line}")?;
        } else {
            writeln!(self.writer, "{line}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_body(&mut self, report: &EvaluationReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Body Measurements")?;
        writeln!(self.writer)?;
        self.write_table_header()?;
        if let Some(bmi) = &report.bmi {
            self.write_row("BMI (kg/m²)", bmi)?;
        }
        if let Some(gain) = &report.weight_gain {
            self.write_row("Interdialytic weight gain (kg)", gain)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_table_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "| Result | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        Ok(())
    }

    fn write_row(&mut self, name: &str, result: &DerivedResult) -> anyhow::Result<()> {
        writeln!(self.writer, "| {name} | {result} |")?;
        Ok(())
    }
}
