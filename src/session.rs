//! Hemodialysis session weights.
//!
//! The weight gain on a session form is a live field: it is recomputed every
//! time the dry or pre-dialysis weight changes, with no explicit calculate
//! step. [`DialysisWeights`] holds that invariant by recomputing the gain in
//! every setter.

use serde::Serialize;

use crate::core::{parse_measurement, DerivedResult};
use crate::formulas::compute_weight_gain;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialysisWeights {
    dry_weight_kg: Option<f64>,
    pre_dialysis_weight_kg: Option<f64>,
    weight_gain: DerivedResult,
}

impl DialysisWeights {
    pub fn new(dry_weight_kg: Option<f64>, pre_dialysis_weight_kg: Option<f64>) -> Self {
        let dry_weight_kg = dry_weight_kg.filter(|v| v.is_finite());
        let pre_dialysis_weight_kg = pre_dialysis_weight_kg.filter(|v| v.is_finite());
        Self {
            dry_weight_kg,
            pre_dialysis_weight_kg,
            weight_gain: compute_weight_gain(dry_weight_kg, pre_dialysis_weight_kg),
        }
    }

    pub fn dry_weight_kg(&self) -> Option<f64> {
        self.dry_weight_kg
    }

    pub fn pre_dialysis_weight_kg(&self) -> Option<f64> {
        self.pre_dialysis_weight_kg
    }

    /// Always reflects the current weights.
    pub fn weight_gain(&self) -> DerivedResult {
        self.weight_gain
    }

    pub fn with_dry_weight(&self, dry_weight_kg: Option<f64>) -> Self {
        Self::new(dry_weight_kg, self.pre_dialysis_weight_kg)
    }

    pub fn with_pre_dialysis_weight(&self, pre_dialysis_weight_kg: Option<f64>) -> Self {
        Self::new(self.dry_weight_kg, pre_dialysis_weight_kg)
    }

    /// Update the dry weight from form text.
    pub fn with_dry_weight_text(&self, text: &str) -> Self {
        self.with_dry_weight(parse_measurement(text))
    }

    /// Update the pre-dialysis weight from form text.
    pub fn with_pre_dialysis_weight_text(&self, text: &str) -> Self {
        self.with_pre_dialysis_weight(parse_measurement(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gain_appears_once_both_weights_are_entered() {
        let empty = DialysisWeights::default();
        let dry = empty.with_dry_weight_text("60");
        let both = dry.with_pre_dialysis_weight_text("62.5");

        assert_eq!(empty.weight_gain(), DerivedResult::NotCalculated);
        assert_eq!(dry.weight_gain(), DerivedResult::NotCalculated);
        assert_eq!(both.weight_gain().to_string(), "2.50");
    }

    #[test]
    fn gain_follows_every_edit() {
        let weights = DialysisWeights::new(Some(60.0), Some(62.5));
        let edited = weights.with_pre_dialysis_weight(Some(63.0));
        assert_eq!(edited.weight_gain().value(), Some(3.0));

        let cleared = edited.with_dry_weight_text("");
        assert_eq!(cleared.weight_gain(), DerivedResult::NotCalculated);
        assert_eq!(cleared.pre_dialysis_weight_kg(), Some(63.0));
    }

    #[test]
    fn non_finite_weights_are_dropped() {
        let weights = DialysisWeights::new(Some(f64::INFINITY), Some(62.5));
        assert_eq!(weights.dry_weight_kg(), None);
        assert!(!weights.weight_gain().is_calculated());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn gain_matches_formula_after_any_edit_order(
            dry in 30.0..150.0f64,
            pre in 30.0..150.0f64,
            dry_first in any::<bool>(),
        ) {
            let start = DialysisWeights::default();
            let weights = if dry_first {
                start.with_dry_weight(Some(dry)).with_pre_dialysis_weight(Some(pre))
            } else {
                start.with_pre_dialysis_weight(Some(pre)).with_dry_weight(Some(dry))
            };
            prop_assert_eq!(weights.weight_gain(), compute_weight_gain(Some(dry), Some(pre)));
        }
    }
}
