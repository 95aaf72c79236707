//! Derived clinical results.
//!
//! Every formula in [`crate::formulas`] produces a [`DerivedResult`]: either a
//! value rounded to the precision the result is displayed with, or the
//! explicit "not calculated" sentinel when the inputs were insufficient.
//! The sentinel is distinct from zero and never carries `NaN` or infinity.
//!
//! # Examples
//!
//! ```rust
//! use renalcalc::core::DerivedResult;
//!
//! let ratio = DerivedResult::rounded(0.654_321, 3);
//! assert_eq!(ratio.value(), Some(0.654));
//! assert_eq!(ratio.to_string(), "0.654");
//!
//! let missing = DerivedResult::rounded(f64::INFINITY, 3);
//! assert!(!missing.is_calculated());
//! assert_eq!(missing.to_string(), "Not calculated");
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// Label rendered for a result whose inputs were insufficient.
pub const NOT_CALCULATED_LABEL: &str = "Not calculated";

/// A derived ratio or score, present or explicitly absent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DerivedResult {
    /// A finite value already rounded to `decimals` places.
    Calculated { value: f64, decimals: u8 },
    /// Required inputs were missing, zero or otherwise unusable.
    #[default]
    NotCalculated,
}

impl DerivedResult {
    /// Round `raw` to `decimals` places, degrading to `NotCalculated` when the
    /// raw value (or the rounded one) is not finite.
    pub fn rounded(raw: f64, decimals: u8) -> Self {
        if !raw.is_finite() {
            return Self::NotCalculated;
        }
        let value = round_to(raw, decimals);
        if value.is_finite() {
            Self::Calculated { value, decimals }
        } else {
            Self::NotCalculated
        }
    }

    /// Get the rounded value, if calculated.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Calculated { value, .. } => Some(*value),
            Self::NotCalculated => None,
        }
    }

    pub fn is_calculated(&self) -> bool {
        matches!(self, Self::Calculated { .. })
    }

    /// Value used when a missing term must count as nothing in a sum.
    pub fn or_zero(&self) -> f64 {
        self.value().unwrap_or(0.0)
    }
}

/// Round half away from zero to a fixed number of decimal places.
///
/// Negative zero is normalised to `0.0` so that displays never show `-0.00`.
pub fn round_to(value: f64, decimals: u8) -> f64 {
    let factor = 10f64.powi(i32::from(decimals));
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl fmt::Display for DerivedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Calculated { value, decimals } => {
                write!(f, "{:.*}", usize::from(*decimals), value)
            }
            Self::NotCalculated => f.write_str(NOT_CALCULATED_LABEL),
        }
    }
}

// JSON consumers get a number or `null`.
impl Serialize for DerivedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Calculated { value, .. } => serializer.serialize_f64(*value),
            Self::NotCalculated => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(2.345, 1), 2.3);
        assert_eq!(round_to(0.0005, 3), 0.001);
        assert_eq!(round_to(-1.25, 1), -1.3);
    }

    #[test]
    fn negative_zero_is_normalised() {
        let result = DerivedResult::rounded(-0.0001, 2);
        assert_eq!(result.to_string(), "0.00");
    }

    #[test]
    fn display_pads_to_precision() {
        assert_eq!(DerivedResult::rounded(2.5, 2).to_string(), "2.50");
        assert_eq!(DerivedResult::rounded(40.6, 2).to_string(), "40.60");
        assert_eq!(DerivedResult::rounded(24.0, 1).to_string(), "24.0");
    }

    #[test]
    fn non_finite_is_not_calculated() {
        assert_eq!(DerivedResult::rounded(f64::NAN, 3), DerivedResult::NotCalculated);
        assert_eq!(
            DerivedResult::rounded(f64::NEG_INFINITY, 3),
            DerivedResult::NotCalculated
        );
    }

    #[test]
    fn not_calculated_differs_from_zero() {
        let zero = DerivedResult::rounded(0.0, 3);
        assert!(zero.is_calculated());
        assert_ne!(zero, DerivedResult::NotCalculated);
        assert_eq!(DerivedResult::NotCalculated.or_zero(), 0.0);
    }

    #[test]
    fn serializes_as_number_or_null() {
        let json = serde_json::to_string(&[
            DerivedResult::rounded(1.7, 3),
            DerivedResult::NotCalculated,
        ])
        .unwrap();
        assert_eq!(json, "[1.7,null]");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rounding_is_idempotent(value in -1.0e6..1.0e6f64, decimals in 0u8..4) {
            let once = round_to(value, decimals);
            let twice = round_to(once, decimals);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn rounding_stays_within_half_a_step(value in -1.0e4..1.0e4f64, decimals in 0u8..4) {
            let step = 10f64.powi(-i32::from(decimals));
            prop_assert!((round_to(value, decimals) - value).abs() <= step / 2.0 + 1e-9);
        }

        #[test]
        fn calculated_results_are_always_finite(value in proptest::num::f64::ANY) {
            if let Some(v) = DerivedResult::rounded(value, 3).value() {
                prop_assert!(v.is_finite());
            }
        }
    }
}
