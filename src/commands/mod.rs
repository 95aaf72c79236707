//! CLI command implementations.
//!
//! Available commands:
//! - **pet**, **adequacy**, **evaluate**: run formulas over a measurement file
//! - **bmi**: body mass index from two values
//! - **weight-gain**: interdialytic weight gain from two values
//! - **init**: write a default configuration file
//!
//! Report-producing commands share a [`ReportContext`] that resolves the
//! configuration, output format and color mode once.

pub mod bmi;
pub mod evaluate;
pub mod init;
pub mod weight_gain;

pub use bmi::handle_bmi;
pub use evaluate::handle_evaluate;
pub use init::init_config;
pub use weight_gain::handle_weight_gain;

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::cli::OutputArgs;
use crate::config::{load_config, load_config_from_path, RenalcalcConfig};
use crate::evaluator::{EvaluationReport, Evaluator};
use crate::formatting::{ColorMode, FormattingConfig};
use crate::formulas::KtvTarget;
use crate::io::output::{create_writer, OutputFormat};

/// Everything a command needs to evaluate and write a report.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub evaluator: Evaluator,
    pub format: OutputFormat,
    pub destination: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

impl ReportContext {
    pub fn from_args(args: &OutputArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => load_config_from_path(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => load_config(),
        };
        Self::resolve(args, &config)
    }

    /// Combine CLI flags with a loaded config. Flags win.
    pub fn resolve(args: &OutputArgs, config: &RenalcalcConfig) -> Result<Self> {
        let target = match args.ktv_target {
            Some(value) => KtvTarget::new(value).with_context(|| {
                format!("Invalid --ktv-target {value}: must be a positive number")
            })?,
            None => config.ktv_target(),
        };

        let format = args
            .format
            .map(OutputFormat::from)
            .or_else(|| config.default_format())
            .unwrap_or(OutputFormat::Terminal);

        let mut formatting = if args.plain {
            FormattingConfig::plain()
        } else {
            FormattingConfig::from_env_and_config(config.use_color())
        };
        // Auto-detection looks at stdout, which is not where a file report goes.
        if args.output.is_some() && formatting.color == ColorMode::Auto {
            formatting.color = ColorMode::Never;
        }

        Ok(Self {
            evaluator: Evaluator::new(target),
            format,
            destination: args.output.clone(),
            formatting,
        })
    }

    pub fn emit(&self, report: &EvaluationReport) -> Result<()> {
        let destination: Box<dyn Write> = match &self.destination {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file {}", path.display())
            })?)),
            None => Box::new(std::io::stdout().lock()),
        };

        let mut writer = create_writer(self.format, destination, self.formatting);
        writer.write_report(report)?;

        if let Some(path) = &self.destination {
            tracing::info!(path = %path.display(), "report written");
        }
        Ok(())
    }
}
