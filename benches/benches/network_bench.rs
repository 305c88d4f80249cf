//! # Network Benchmarks
//!
//! Activation, forward evaluation and full learning steps (backward error
//! propagation plus forward correction, timed together) across network
//! shapes.
//!
//! Run: `cargo bench --bench network_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mvn_core::prelude::*;

const SHAPES: [&[usize]; 3] = [&[4, 8, 1], &[16, 32, 16, 4], &[64, 128, 128, 64, 10]];

fn input(n: usize) -> CVector {
    (0..n).map(|i| Cmplx::from_polar(1.0, 0.37 * i as f64)).collect()
}

fn network(sizes: &[usize], k: usize) -> Network {
    Network::seeded(sizes, &vec![k; sizes.len() - 1], 17).unwrap()
}

/// Benchmark activation modes
fn bench_activation(c: &mut Criterion) {
    let mut group = c.benchmark_group("activation");
    let z = Cmplx::new(0.3, -1.7);

    group.bench_function("continuous", |b| b.iter(|| black_box(activation(0, black_box(z)))));

    for k in [2usize, 16, 256] {
        group.bench_with_input(BenchmarkId::new("discrete", k), &k, |b, &k| {
            b.iter(|| black_box(activation(k, black_box(z))))
        });
    }

    group.finish();
}

/// Benchmark forward evaluation
fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");

    for sizes in SHAPES {
        let net = network(sizes, 0);
        let x = input(sizes[0]);
        let name = format!("{sizes:?}");

        group.bench_with_input(BenchmarkId::new("fresh_evaluator", &name), &x, |b, x| {
            b.iter(|| black_box(net.output(x).unwrap()))
        });

        let mut evaluator = ForwardEvaluator::new();
        let mut out = vec![Cmplx::new(0.0, 0.0); net.output_size()];
        group.bench_with_input(BenchmarkId::new("reused_evaluator", &name), &x, |b, x| {
            b.iter(|| {
                evaluator.output_into(&net, x, &mut out).unwrap();
                black_box(&out);
            })
        });
    }

    group.finish();
}

/// Benchmark one learning step
fn bench_learn(c: &mut Criterion) {
    let mut group = c.benchmark_group("learn");

    for sizes in SHAPES {
        let mut net = network(sizes, 0);
        let x = input(sizes[0]);
        let desired = input(*sizes.last().unwrap());

        group.bench_with_input(BenchmarkId::from_parameter(format!("{sizes:?}")), &x, |b, x| {
            b.iter(|| {
                let actual = net.output(x).unwrap();
                let errors: CVector = desired.iter().zip(&actual).map(|(d, a)| d - a).collect();
                net.learn(x, &errors, 1.0).unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_activation, bench_output, bench_learn);
criterion_main!(benches);
