//! Clinical formula evaluation.
//!
//! Every function in this module is pure: it reads a [`MeasurementSet`] (or a
//! pair of optional values), never mutates it, and returns fresh
//! [`DerivedResult`]s. Missing, zero or unparseable inputs never raise an
//! error; the affected result is [`DerivedResult::NotCalculated`] instead.
//!
//! | Formula | Result | Precision |
//! |---|---|---|
//! | [`compute_pet`] | D/P creatinine, D/D0 glucose | 3 dp |
//! | [`compute_adequacy`] | V, peritoneal/renal/total weekly Kt/V | 2 dp / 3 dp |
//! | [`compute_bmi`] | body mass index | 1 dp |
//! | [`compute_weight_gain`] | inter-dialytic weight gain | 2 dp |
//!
//! [`MeasurementSet`]: crate::core::MeasurementSet
//! [`DerivedResult`]: crate::core::DerivedResult
//! [`DerivedResult::NotCalculated`]: crate::core::DerivedResult::NotCalculated

pub mod adequacy;
pub mod body;
pub mod pet;
pub mod weight;

pub use adequacy::{
    compute_adequacy, AdequacyResults, KtvTarget, ThresholdStatus, DAYS_PER_WEEK,
    DEFAULT_TOTAL_KTV_TARGET, VOLUME_OF_DISTRIBUTION_FACTOR,
};
pub use body::{compute_bmi, compute_bmi_from};
pub use pet::{compute_pet, PetResults};
pub use weight::{compute_weight_gain, compute_weight_gain_from};

/// Keep a value only if it is strictly positive.
pub(crate) fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// Keep a value only if it is not zero.
pub(crate) fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_rejects_zero_and_negatives() {
        assert_eq!(positive(Some(0.0)), None);
        assert_eq!(positive(Some(-3.0)), None);
        assert_eq!(positive(Some(0.1)), Some(0.1));
        assert_eq!(positive(None), None);
    }

    #[test]
    fn non_zero_keeps_negatives() {
        assert_eq!(non_zero(Some(0.0)), None);
        assert_eq!(non_zero(Some(-3.0)), Some(-3.0));
    }
}
