//! Benchmarks for formula evaluation over form-sized measurement sets.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use renalcalc::{compute_adequacy, compute_pet, EvaluationScope, Evaluator, MeasurementSet};
use std::hint::black_box;

fn ward_set() -> MeasurementSet {
    MeasurementSet::from_form([
        ("serumCreatinine@T0", "8.0"),
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
    ])
}

fn bench_formulas(c: &mut Criterion) {
    let set = ward_set();
    let mut group = c.benchmark_group("formulas");

    group.bench_function("pet", |b| b.iter(|| compute_pet(black_box(&set))));
    group.bench_function("adequacy", |b| b.iter(|| compute_adequacy(black_box(&set))));

    group.finish();
}

fn bench_evaluator(c: &mut Criterion) {
    let set = ward_set();
    let evaluator = Evaluator::default();
    let mut group = c.benchmark_group("evaluator");

    for scope in [EvaluationScope::Pet, EvaluationScope::Adequacy, EvaluationScope::All] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{scope:?}")),
            &scope,
            |b, scope| b.iter(|| evaluator.evaluate(black_box(&set), *scope)),
        );
    }

    group.finish();
}

fn bench_form_parsing(c: &mut Criterion) {
    c.bench_function("from_form", |b| b.iter(|| black_box(ward_set())));
}

criterion_group!(benches, bench_formulas, bench_evaluator, bench_form_parsing);
criterion_main!(benches);
