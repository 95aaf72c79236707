//! Core value types shared by the formulas, episodes and report writers.

pub mod classification;
pub mod derived;
pub mod errors;
pub mod measurements;

pub use classification::{AdequacyAssessment, TransporterCategory, UnknownTransporterCategory};
pub use derived::{round_to, DerivedResult, NOT_CALCULATED_LABEL};
pub use errors::{Error, Result, ResultExt};
pub use measurements::{parse_measurement, Measurement, MeasurementSet, UnknownMeasurement};
