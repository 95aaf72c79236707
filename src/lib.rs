//! Clinical formula evaluation for renal care.
//!
//! `renalcalc` turns the measurements entered on peritoneal dialysis and
//! hemodialysis forms into derived values:
//!
//! - PET ratios (D/P creatinine, D/D0 glucose)
//! - urea volume of distribution and weekly Kt/V
//! - body mass index
//! - interdialytic weight gain
//!
//! Every formula is a pure function of a [`MeasurementSet`]. Missing or
//! unusable inputs never raise an error; they yield
//! [`DerivedResult::NotCalculated`], shown as "Not calculated".
//!
//! ```rust
//! use renalcalc::{EvaluationScope, Evaluator, MeasurementSet};
//!
//! let set = MeasurementSet::from_form([("heightCm", "170"), ("bodyWeightKg", "70")]);
//! let report = Evaluator::default().evaluate(&set, EvaluationScope::Bmi);
//! assert_eq!(report.bmi.map(|bmi| bmi.to_string()), Some("24.2".to_string()));
//! ```

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod episodes;
pub mod evaluator;
pub mod formatting;
pub mod formulas;
pub mod io;
pub mod observability;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    AdequacyAssessment, DerivedResult, Error, Measurement, MeasurementSet, Result,
    TransporterCategory,
};

pub use crate::formulas::{
    compute_adequacy, compute_bmi, compute_pet, compute_weight_gain, AdequacyResults, KtvTarget,
    PetResults, ThresholdStatus,
};

pub use crate::episodes::{AdequacyEpisode, EpisodeKind, EpisodeOrdinal, PetEpisode};

pub use crate::evaluator::{EvaluationReport, EvaluationScope, Evaluator};

pub use crate::session::DialysisWeights;

pub use crate::config::RenalcalcConfig;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
