use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "renalcalc")]
#[command(about = "Clinical formula evaluator for renal care", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

/// Flags shared by every report-producing command.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format (defaults to the config file, then terminal)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to the nearest .renalcalc.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Total Kt/V target, overriding the config file
    #[arg(long = "ktv-target", global = true)]
    pub ktv_target: Option<f64>,

    /// Plain output: no colors, ASCII tables
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute PET ratios (D/P creatinine, D/D0 glucose)
    Pet {
        /// JSON file of measurements, or - for stdin
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Compute V and weekly Kt/V adequacy
    Adequacy {
        /// JSON file of measurements, or - for stdin
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Run every formula over one measurement file
    Evaluate {
        /// JSON file of measurements, or - for stdin
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Compute body mass index
    Bmi {
        /// Height in centimetres
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        height_cm: String,

        /// Body weight in kilograms
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        weight_kg: String,
    },

    /// Compute interdialytic weight gain
    WeightGain {
        /// Dry (target) weight in kilograms
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        dry_weight_kg: String,

        /// Weight measured before dialysis in kilograms
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        pre_dialysis_weight_kg: String,
    },

    /// Write a default .renalcalc.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
