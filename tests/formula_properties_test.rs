//! Reference values and cross-formula properties of the public API.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use renalcalc::core::round_to;
use renalcalc::formulas::{compute_bmi_from, compute_weight_gain_from};
use renalcalc::{
    compute_adequacy, compute_bmi, compute_pet, compute_weight_gain, DerivedResult, KtvTarget,
    Measurement, MeasurementSet, ThresholdStatus,
};

#[test]
fn bmi_reference_values() {
    assert_eq!(compute_bmi(Some(170.0), Some(70.0)).value(), Some(24.2));
    assert_eq!(compute_bmi(Some(0.0), Some(70.0)), DerivedResult::NotCalculated);
}

#[test]
fn weight_gain_reference_value() {
    assert_eq!(compute_weight_gain(Some(60.0), Some(62.5)).value(), Some(2.5));
}

#[test]
fn adequacy_with_only_body_weight() {
    let set = MeasurementSet::new().with(Measurement::BodyWeightKg, Some(70.0));
    let results = compute_adequacy(&set);

    assert_eq!(results.v_value.value(), Some(40.6));
    assert_eq!(results.peritoneal_ktv, DerivedResult::NotCalculated);
    assert_eq!(results.renal_ktv, DerivedResult::NotCalculated);
    assert_eq!(results.total_ktv, DerivedResult::NotCalculated);
}

#[test]
fn total_ktv_of_exactly_target_meets_it() {
    let target = KtvTarget::default();
    assert_eq!(target.status(DerivedResult::rounded(1.700, 3)), ThresholdStatus::Met);
    assert_eq!(
        target.status(DerivedResult::rounded(1.699, 3)),
        ThresholdStatus::BelowTarget
    );
}

#[test]
fn form_text_flows_through_every_formula() {
    let set = MeasurementSet::from_form([
        ("serumCreatinine@T0", " 8.0 "),
        ("dialysateCreatinine@T4", "5.2"),
        ("dialysateGlucose@T0", "2000"),
        ("dialysateGlucose@T4", "1200"),
        ("bodyWeightKg", "50"),
        ("dialysateUreaVolumeL", "5"),
        ("urineUreaVolumeL", "2"),
        ("bloodUreaMgDl", "5"),
        ("heightCm", "160"),
        ("dryWeightKg", "49.2"),
        ("preDialysisWeightKg", "50"),
    ]);

    let pet = compute_pet(&set);
    assert_eq!(pet.dp_creatinine.to_string(), "0.650");
    assert_eq!(pet.dd0_glucose.to_string(), "0.600");

    let adequacy = compute_adequacy(&set);
    assert_eq!(adequacy.v_value.to_string(), "29.00");
    assert_eq!(adequacy.total_ktv.to_string(), "1.400");

    assert_eq!(compute_bmi_from(&set).to_string(), "19.5");
    assert_eq!(compute_weight_gain_from(&set).to_string(), "0.80");
}

#[test]
fn garbage_text_is_never_a_number() {
    let set = MeasurementSet::from_form([
        ("serumCreatinine@T0", "NaN"),
        ("dialysateCreatinine@T4", "5.2"),
        ("heightCm", "inf"),
        ("bodyWeightKg", "70kg"),
    ]);
    assert_eq!(compute_pet(&set).dp_creatinine, DerivedResult::NotCalculated);
    assert_eq!(compute_bmi_from(&set), DerivedResult::NotCalculated);
    assert_eq!(set.len(), 1);
}

fn arbitrary_set() -> impl Strategy<Value = MeasurementSet> {
    proptest::collection::vec(
        (
            proptest::sample::select(Measurement::ALL.to_vec()),
            proptest::option::of(-500.0..500.0f64),
        ),
        0..12,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .fold(MeasurementSet::new(), |set, (key, value)| set.with(key, value))
    })
}

proptest! {
    #[test]
    fn every_formula_is_idempotent(set in arbitrary_set()) {
        prop_assert_eq!(compute_pet(&set), compute_pet(&set));
        prop_assert_eq!(compute_adequacy(&set), compute_adequacy(&set));
        prop_assert_eq!(compute_bmi_from(&set), compute_bmi_from(&set));
        prop_assert_eq!(compute_weight_gain_from(&set), compute_weight_gain_from(&set));
    }

    #[test]
    fn formulas_never_mutate_their_input(set in arbitrary_set()) {
        let before = set.clone();
        let _ = compute_pet(&set);
        let _ = compute_adequacy(&set);
        prop_assert_eq!(before, set);
    }

    #[test]
    fn dp_creatinine_is_rounded_ratio(a in 0.1..50.0f64, b in 0.1..50.0f64) {
        let set = MeasurementSet::new()
            .with(Measurement::SerumCreatinine0, Some(a))
            .with(Measurement::DialysateCreatinine4, Some(b));
        prop_assert_eq!(compute_pet(&set).dp_creatinine.value(), Some(round_to(b / a, 3)));
    }

    #[test]
    fn missing_serum_creatinine_is_never_calculated(set in arbitrary_set()) {
        let set = set.without(Measurement::SerumCreatinine0);
        prop_assert_eq!(compute_pet(&set).dp_creatinine, DerivedResult::NotCalculated);
    }
}
