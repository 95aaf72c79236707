use anyhow::Result;
use renalcalc::cli::{self, Commands};
use renalcalc::commands::{self, ReportContext};
use renalcalc::evaluator::EvaluationScope;
use renalcalc::observability::{init_logging, install_panic_hook};

fn main() -> Result<()> {
    install_panic_hook();
    let cli = cli::parse_args();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Init { force } => commands::init_config(force),
        command => {
            let context = ReportContext::from_args(&cli.output)?;
            run_report_command(command, &context)
        }
    }
}

fn run_report_command(command: Commands, context: &ReportContext) -> Result<()> {
    match command {
        Commands::Pet { input } => commands::handle_evaluate(&input, EvaluationScope::Pet, context),
        Commands::Adequacy { input } => {
            commands::handle_evaluate(&input, EvaluationScope::Adequacy, context)
        }
        Commands::Evaluate { input } => {
            commands::handle_evaluate(&input, EvaluationScope::All, context)
        }
        Commands::Bmi {
            height_cm,
            weight_kg,
        } => commands::handle_bmi(&height_cm, &weight_kg, context),
        Commands::WeightGain {
            dry_weight_kg,
            pre_dialysis_weight_kg,
        } => commands::handle_weight_gain(&dry_weight_kg, &pre_dialysis_weight_kg, context),
        Commands::Init { force } => commands::init_config(force),
    }
}
