//! Estimator and report rendering benchmarks.
//!
//! Run with: `cargo bench --package hostelplan-bench`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hostelplan_bench::scenarios;
use hostelplan_lib::prelude::*;
use std::hint::black_box;

fn compute_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute");

    for (name, inputs) in scenarios() {
        group.bench_with_input(BenchmarkId::from_parameter(name), &inputs, |b, inputs| {
            b.iter(|| Estimator::compute(black_box(inputs)));
        });
    }

    group.finish();
}

fn report_benchmark(c: &mut Criterion) {
    let inputs = CampusInputs::default();
    let results = Estimator::compute(&inputs);
    let mut group = c.benchmark_group("report");

    group.bench_function("text", |b| {
        let formatter = TextFormatter::new();
        b.iter(|| {
            let mut out = Vec::with_capacity(2048);
            formatter
                .write_report(black_box(&inputs), black_box(&results), &mut out)
                .unwrap();
            out
        });
    });

    group.bench_function("json", |b| {
        let formatter = JsonFormatter::new();
        b.iter(|| {
            let mut out = Vec::with_capacity(2048);
            formatter
                .write_report(black_box(&inputs), black_box(&results), &mut out)
                .unwrap();
            out
        });
    });

    group.finish();
}

criterion_group!(benches, compute_benchmark, report_benchmark);
criterion_main!(benches);
