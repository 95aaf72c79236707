use crate::core::DerivedResult;
use crate::evaluator::{AdequacySection, EvaluationReport};
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use crate::formulas::PetResults;
use crate::io::output::OutputWriter;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::Table;
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
    unicode: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        let unicode = formatting.color.should_use_color();
        Self {
            writer,
            formatter: formatter_for(formatting),
            unicode,
        }
    }

    fn results_table(&self, rows: &[(&str, String)]) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.unicode { UTF8_FULL } else { ASCII_FULL })
            .set_header(vec!["Result", "Value"]);
        for (name, value) in rows {
            table.add_row(vec![name.to_string(), value.clone()]);
        }
        table
    }

    // Table cells stay unstyled so column widths are measured correctly.
    fn row(name: &'static str, result: &DerivedResult) -> (&'static str, String) {
        (name, result.to_string())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &EvaluationReport) -> anyhow::Result<()> {
        self.print_header(report)?;
        if let Some(pet) = &report.pet {
            self.print_pet(pet)?;
        }
        if let Some(adequacy) = &report.adequacy {
            self.print_adequacy(adequacy)?;
        }
        if report.bmi.is_some() || report.weight_gain.is_some() {
            self.print_body(report)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_header(&mut self, report: &EvaluationReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header(RULE))?;
        writeln!(
            self.writer,
            "{}",
            self.formatter.header("        RENAL FORMULA REPORT")
        )?;
        writeln!(self.writer, "{}", self.formatter.header(RULE))?;
        writeln!(
            self.writer,
            "{}",
            self.formatter.dim(&format!(
                "renalcalc {} | {}",
                report.metadata.renalcalc_version,
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
            ))
        )?;
        writeln!(
            self.writer,
            "Measurements provided: {}",
            report.measurements.len()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_pet(&mut self, pet: &PetResults) -> anyhow::Result<()> {
        let table = self.results_table(&[
            Self::row("D/P creatinine", &pet.dp_creatinine),
            Self::row("D/D0 glucose", &pet.dd0_glucose),
        ]);
        writeln!(self.writer, "{}", self.formatter.bold("Peritoneal Equilibration Test"))?;
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_adequacy(&mut self, adequacy: &AdequacySection) -> anyhow::Result<()> {
        let results = &adequacy.results;
        let table = self.results_table(&[
            Self::row("V (L)", &results.v_value),
            Self::row("Peritoneal Kt/V", &results.peritoneal_ktv),
            Self::row("Renal Kt/V", &results.renal_ktv),
            Self::row("Total Kt/V", &results.total_ktv),
        ]);
        writeln!(self.writer, "{}", self.formatter.bold("Dialysis Adequacy"))?;
        writeln!(self.writer, "{table}")?;

        let status = self.formatter.status(adequacy.threshold_status);
        if adequacy.threshold_status.needs_warning() {
            writeln!(
                self.writer,
                "{} total Kt/V {} is below the target of {}",
                self.formatter.warning("WARNING:"),
                self.formatter.result(&results.total_ktv),
                adequacy.target
            )?;
        } else {
            writeln!(self.writer, "Target {}: {status}", adequacy.target)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_body(&mut self, report: &EvaluationReport) -> anyhow::Result<()> {
        let mut rows = Vec::new();
        if let Some(bmi) = &report.bmi {
            rows.push(Self::row("BMI (kg/m²)", bmi));
        }
        if let Some(gain) = &report.weight_gain {
            rows.push(Self::row("Interdialytic weight gain (kg)", gain));
        }
        let table = self.results_table(&rows);
        writeln!(self.writer, "{}", self.formatter.bold("Body Measurements"))?;
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MeasurementSet;
    use crate::evaluator::{EvaluationScope, Evaluator};
    use crate::formulas::KtvTarget;
    use chrono::{TimeZone, Utc};

    fn render(set: &MeasurementSet, scope: EvaluationScope) -> String {
        render_with(Evaluator::default(), set, scope)
    }

    fn render_with(evaluator: Evaluator, set: &MeasurementSet, scope: EvaluationScope) -> String {
        let report = evaluator.evaluate_at(
            set,
            scope,
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap(),
        );
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, FormattingConfig::plain())
            .write_report(&report)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let set = MeasurementSet::from_form([("heightCm", "170"), ("bodyWeightKg", "70")]);
        let output = render(&set, EvaluationScope::Bmi);
        assert!(!output.contains('\u{1b}'));
        assert!(output.contains("24.2"));
        assert!(!output.contains("Dialysis Adequacy"));
    }

    #[test]
    fn below_target_prints_warning() {
        let set = MeasurementSet::from_form([
            ("bodyWeightKg", "50"),
            ("dialysateUreaVolumeL", "5"),
            ("bloodUreaMgDl", "5"),
        ]);
        let output = render(&set, EvaluationScope::Adequacy);
        assert!(output.contains("WARNING: total Kt/V 1.207 is below the target of 1.7"));
    }

    #[test]
    fn missing_results_show_sentinel() {
        let output = render(&MeasurementSet::new(), EvaluationScope::All);
        assert!(output.contains("Not calculated"));
        assert!(output.contains("Target 1.7: Not calculated"));
    }

    // peritoneal term 6 * 6 * 7 / (5 * 29) = 1.738
    fn total_ktv_1_738() -> MeasurementSet {
        MeasurementSet::from_form([
            ("bodyWeightKg", "50"),
            ("dialysateUreaVolumeL", "6"),
            ("bloodUreaMgDl", "5"),
        ])
    }

    #[test]
    fn configured_target_is_printed_exactly() {
        let set = total_ktv_1_738();

        let below = KtvTarget::new(1.75).map(Evaluator::new).unwrap();
        let output = render_with(below, &set, EvaluationScope::Adequacy);
        assert!(output.contains("WARNING: total Kt/V 1.738 is below the target of 1.75"));

        let met = KtvTarget::new(1.72).map(Evaluator::new).unwrap();
        let output = render_with(met, &set, EvaluationScope::Adequacy);
        assert!(output.contains("Target 1.72: Meets target"));
    }
}
