//! Measurement sets for a single test episode.
//!
//! A [`MeasurementSet`] maps a named clinical quantity to the decimal the
//! clinician entered. It is an immutable value: every update returns a new
//! set and leaves the original untouched, which keeps the formula layer free
//! of shared mutable state. The map is an `im::OrdMap`, so updates share
//! structure with the previous set instead of copying it.
//!
//! Values arrive as form text. Empty strings, non-numeric text and
//! non-finite numbers are treated as "not provided" and simply never stored;
//! they are not zero.
//!
//! # Examples
//!
//! ```rust
//! use renalcalc::core::{Measurement, MeasurementSet};
//!
//! let empty = MeasurementSet::new();
//! let filled = empty
//!     .with_raw(Measurement::SerumCreatinine0, "8.2")
//!     .with_raw(Measurement::DialysateCreatinine4, "");
//!
//! assert!(empty.is_empty());
//! assert_eq!(filled.get(Measurement::SerumCreatinine0), Some(8.2));
//! assert_eq!(filled.get(Measurement::DialysateCreatinine4), None);
//! ```

use im::OrdMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::errors::{Error, Result};

/// Named clinical quantities understood by the formulas.
///
/// The serialized names are the keys the data-entry forms send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Measurement {
    #[serde(rename = "serumCreatinine@T0")]
    SerumCreatinine0,
    #[serde(rename = "dialysateCreatinine@T4")]
    DialysateCreatinine4,
    #[serde(rename = "dialysateGlucose@T0")]
    DialysateGlucose0,
    #[serde(rename = "dialysateGlucose@T4")]
    DialysateGlucose4,
    #[serde(rename = "bodyWeightKg")]
    BodyWeightKg,
    #[serde(rename = "dialysateUreaVolumeL")]
    DialysateUreaVolumeL,
    #[serde(rename = "urineUreaVolumeL")]
    UrineUreaVolumeL,
    #[serde(rename = "bloodUreaMgDl")]
    BloodUreaMgDl,
    #[serde(rename = "heightCm")]
    HeightCm,
    #[serde(rename = "dryWeightKg")]
    DryWeightKg,
    #[serde(rename = "preDialysisWeightKg")]
    PreDialysisWeightKg,
}

impl Measurement {
    pub const ALL: [Measurement; 11] = [
        Measurement::SerumCreatinine0,
        Measurement::DialysateCreatinine4,
        Measurement::DialysateGlucose0,
        Measurement::DialysateGlucose4,
        Measurement::BodyWeightKg,
        Measurement::DialysateUreaVolumeL,
        Measurement::UrineUreaVolumeL,
        Measurement::BloodUreaMgDl,
        Measurement::HeightCm,
        Measurement::DryWeightKg,
        Measurement::PreDialysisWeightKg,
    ];

    /// Wire key used by the data-entry forms.
    pub fn key(&self) -> &'static str {
        match self {
            Measurement::SerumCreatinine0 => "serumCreatinine@T0",
            Measurement::DialysateCreatinine4 => "dialysateCreatinine@T4",
            Measurement::DialysateGlucose0 => "dialysateGlucose@T0",
            Measurement::DialysateGlucose4 => "dialysateGlucose@T4",
            Measurement::BodyWeightKg => "bodyWeightKg",
            Measurement::DialysateUreaVolumeL => "dialysateUreaVolumeL",
            Measurement::UrineUreaVolumeL => "urineUreaVolumeL",
            Measurement::BloodUreaMgDl => "bloodUreaMgDl",
            Measurement::HeightCm => "heightCm",
            Measurement::DryWeightKg => "dryWeightKg",
            Measurement::PreDialysisWeightKg => "preDialysisWeightKg",
        }
    }

    /// Human-readable label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Measurement::SerumCreatinine0 => "Serum creatinine (0 h)",
            Measurement::DialysateCreatinine4 => "Dialysate creatinine (4 h)",
            Measurement::DialysateGlucose0 => "Dialysate glucose (0 h)",
            Measurement::DialysateGlucose4 => "Dialysate glucose (4 h)",
            Measurement::BodyWeightKg => "Body weight (kg)",
            Measurement::DialysateUreaVolumeL => "Dialysate urea volume (L)",
            Measurement::UrineUreaVolumeL => "Urine urea volume (L)",
            Measurement::BloodUreaMgDl => "Blood urea (mg/dL)",
            Measurement::HeightCm => "Height (cm)",
            Measurement::DryWeightKg => "Dry weight (kg)",
            Measurement::PreDialysisWeightKg => "Pre-dialysis weight (kg)",
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown measurement key `{0}`")]
pub struct UnknownMeasurement(pub String);

impl FromStr for Measurement {
    type Err = UnknownMeasurement;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Measurement::ALL
            .into_iter()
            .find(|m| m.key() == s)
            .ok_or_else(|| UnknownMeasurement(s.to_string()))
    }
}

/// Parse user-entered text into a measurement value.
///
/// Returns `None` for empty, non-numeric or non-finite input.
pub fn parse_measurement(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Immutable set of measurements for one test episode.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct MeasurementSet {
    values: OrdMap<Measurement, f64>,
}

impl MeasurementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: Measurement) -> Option<f64> {
        self.values.get(&key).copied()
    }

    /// Return a new set with `key` set to `value`, or cleared when the value
    /// is absent or not finite.
    pub fn with(&self, key: Measurement, value: Option<f64>) -> Self {
        let values = match value.filter(|v| v.is_finite()) {
            Some(v) => self.values.update(key, v),
            None => self.values.without(&key),
        };
        Self { values }
    }

    /// Return a new set with `key` parsed from form text.
    pub fn with_raw(&self, key: Measurement, text: &str) -> Self {
        self.with(key, parse_measurement(text))
    }

    pub fn without(&self, key: Measurement) -> Self {
        self.with(key, None)
    }

    /// Build a set from form-style key/text pairs. Unknown keys are skipped.
    pub fn from_form<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .fold(Self::new(), |set, (key, text)| match key.parse() {
                Ok(measurement) => set.with_raw(measurement, text),
                Err(UnknownMeasurement(key)) => {
                    tracing::warn!(%key, "skipping unknown measurement");
                    set
                }
            })
    }

    /// Build a set from a flat JSON object of key to string, number or null.
    ///
    /// Unknown keys are skipped with a warning. Values of any other JSON type
    /// are treated as not provided.
    pub fn from_json(payload: &serde_json::Value) -> Result<Self> {
        let object = payload.as_object().ok_or_else(|| {
            Error::InvalidPayload(format!(
                "expected a JSON object of measurements, found {}",
                json_type_name(payload)
            ))
        })?;

        Ok(object
            .iter()
            .fold(Self::new(), |set, (key, value)| match key.parse() {
                Ok(measurement) => set.with(measurement, json_measurement(value)),
                Err(UnknownMeasurement(key)) => {
                    tracing::warn!(%key, "skipping unknown measurement");
                    set
                }
            }))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Measurement, f64)> + '_ {
        self.values.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn json_measurement(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        serde_json::Value::String(s) => parse_measurement(s),
        _ => None,
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
